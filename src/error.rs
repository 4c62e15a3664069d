//! Error types for subnet-domain-map.
//!
//! File-level failures ([`MapError`]) stop the run. Per-domain and
//! per-address failures ([`ResolveError`], [`AddrParseError`]) are reported
//! and skipped by the matcher.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a successful run.
pub const EXIT_OK: i32 = 0;
/// Exit code when an input file is missing or unreadable.
pub const EXIT_INPUT_MISSING: i32 = 2;
/// Exit code when a subnet line fails strict CIDR parsing.
pub const EXIT_SUBNET_PARSE: i32 = 3;
/// Exit code when the report cannot be written.
pub const EXIT_OUTPUT_WRITE: i32 = 4;

/// Fatal errors that abort a run.
#[derive(Error, Debug)]
pub enum MapError {
    #[error("Could not find '{}'", path.display())]
    InputMissing { path: PathBuf },

    #[error("Could not read '{}': {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid subnet '{text}' at {}:{line}: {reason}", path.display())]
    SubnetParse {
        path: PathBuf,
        line: usize,
        text: String,
        #[source]
        reason: CidrError,
    },

    #[error("Error writing to '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MapError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            MapError::InputMissing { .. } | MapError::InputRead { .. } => EXIT_INPUT_MISSING,
            MapError::SubnetParse { .. } => EXIT_SUBNET_PARSE,
            MapError::OutputWrite { .. } => EXIT_OUTPUT_WRITE,
        }
    }
}

/// Reasons a CIDR string is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    #[error("invalid address {0}")]
    InvalidAddress(String),

    #[error("invalid prefix length {0}")]
    InvalidPrefix(String),

    #[error("network length /{0} is too long")]
    PrefixTooLong(u8),

    #[error("host bits set, network address is {0}")]
    HostBitsSet(String),
}

/// Outcome of a failed DNS lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no IPv4 address found")]
    NotFound,

    #[error("lookup failed: {0}")]
    Lookup(String),
}

/// A resolved address string that is not a valid IPv4 address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid IP address '{0}'")]
pub struct AddrParseError(pub String);
