//! CLI entry point for census

use std::path::PathBuf;
use std::process;

use census::{Error, HashAlgo, ReportFormat, ScanConfig, TreeWalker, write_report};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "census")]
#[command(about = "Recursive directory inventory reports in XML or JSON")]
#[command(version)]
struct Args {
    /// Directory to inventory
    directory: PathBuf,

    /// Hash every file's content with this algorithm
    #[arg(long = "hash", value_name = "ALGORITHM", value_enum)]
    hash: Option<HashAlgo>,

    /// Report destination; the extension picks the format (.xml or .json)
    report_name: PathBuf,
}

fn main() {
    let args = Args::parse();

    // The subscriber is scoped to this run rather than installed as
    // process-global state; RUST_LOG controls verbosity.
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || run(&args));

    if let Err(e) = result {
        eprintln!("census: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    // Both boundary checks come before any traversal: a bad report
    // name or root must fail without scanning anything.
    let format = ReportFormat::from_path(&args.report_name)?;

    if !args.directory.is_dir() {
        return Err(Error::NotADirectory {
            path: args.directory.clone(),
        });
    }

    let root = args.directory.canonicalize().unwrap_or_else(|_| {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.directory)
    });

    let config = ScanConfig {
        root,
        hash: args.hash,
        report: args.report_name.clone(),
        format,
    };

    let tree = TreeWalker::new(&config).walk(&config.root)?;
    write_report(&tree, &config.report, config.format)
}
