//! Run configuration

use std::path::PathBuf;

use crate::hash::HashAlgo;
use crate::output::ReportFormat;

/// Everything one scan needs, fixed for the duration of the run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory the walk starts from.
    pub root: PathBuf,
    /// Content hash applied to every file, if any.
    pub hash: Option<HashAlgo>,
    /// Report destination.
    pub report: PathBuf,
    /// Serializer selected from the report extension.
    pub format: ReportFormat,
}
