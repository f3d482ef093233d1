//! Content hash algorithms
//!
//! The supported set is fixed: md5, sha1, sha224, sha256, sha384 and
//! sha512. Digests are always rendered as lowercase hexadecimal.

use std::fmt::Display;

use clap::ValueEnum;
use data_encoding::HEXLOWER;
use sha2::Digest;

use crate::error::Error;

/// Hash algorithms a scan can apply to file contents.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum HashAlgo {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

/// Identifiers accepted on the boundary, kept in sync with [HashAlgo].
pub const SUPPORTED_ALGOS: [&str; 6] = ["md5", "sha1", "sha224", "sha256", "sha384", "sha512"];

impl Display for HashAlgo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashAlgo::Md5 => write!(f, "md5"),
            HashAlgo::Sha1 => write!(f, "sha1"),
            HashAlgo::Sha224 => write!(f, "sha224"),
            HashAlgo::Sha256 => write!(f, "sha256"),
            HashAlgo::Sha384 => write!(f, "sha384"),
            HashAlgo::Sha512 => write!(f, "sha512"),
        }
    }
}

impl TryFrom<&str> for HashAlgo {
    type Error = Error;

    fn try_from(algo_str: &str) -> Result<Self, Self::Error> {
        match algo_str {
            "md5" => Ok(Self::Md5),
            "sha1" => Ok(Self::Sha1),
            "sha224" => Ok(Self::Sha224),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            _ => Err(Error::UnsupportedHash(algo_str.to_string())),
        }
    }
}

impl HashAlgo {
    /// Attribute key the digest is stored under, e.g. `sha256-hash`.
    pub fn stat_key(&self) -> String {
        format!("{}-hash", self)
    }

    /// Digest of `bytes`, lowercase hex encoded.
    pub fn digest(&self, bytes: &[u8]) -> String {
        fn hash<D: Digest>(bytes: &[u8]) -> String {
            HEXLOWER.encode(D::digest(bytes).as_slice())
        }

        match self {
            HashAlgo::Md5 => hash::<md5::Md5>(bytes),
            HashAlgo::Sha1 => hash::<sha1::Sha1>(bytes),
            HashAlgo::Sha224 => hash::<sha2::Sha224>(bytes),
            HashAlgo::Sha256 => hash::<sha2::Sha256>(bytes),
            HashAlgo::Sha384 => hash::<sha2::Sha384>(bytes),
            HashAlgo::Sha512 => hash::<sha2::Sha512>(bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_round_trip() {
        for name in SUPPORTED_ALGOS {
            let algo = HashAlgo::try_from(name).expect("supported identifier");
            assert_eq!(algo.to_string(), name);
        }
    }

    #[test]
    fn test_unknown_identifier_rejected() {
        for bad in ["sha3", "crc32", "SHA256", ""] {
            let err = HashAlgo::try_from(bad).unwrap_err();
            assert!(matches!(err, Error::UnsupportedHash(_)), "{bad}");
        }
    }

    #[test]
    fn test_stat_key() {
        assert_eq!(HashAlgo::Md5.stat_key(), "md5-hash");
        assert_eq!(HashAlgo::Sha512.stat_key(), "sha512-hash");
    }

    #[test]
    fn test_sha256_empty_input() {
        assert_eq!(
            HashAlgo::Sha256.digest(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_known_digests() {
        // Reference vectors for "abc"
        assert_eq!(
            HashAlgo::Md5.digest(b"abc"),
            "900150983cd24fb0d6963f7d28e17f72"
        );
        assert_eq!(
            HashAlgo::Sha1.digest(b"abc"),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            HashAlgo::Sha224.digest(b"abc"),
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
        );
        assert_eq!(
            HashAlgo::Sha256.digest(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            HashAlgo::Sha384.digest(b"abc"),
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
             8086072ba1e7cc2358baeca134c825a7"
        );
        assert_eq!(
            HashAlgo::Sha512.digest(b"abc"),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn test_digest_is_lowercase_hex() {
        let digest = HashAlgo::Sha1.digest(b"Census");
        assert_eq!(digest.len(), 40);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
