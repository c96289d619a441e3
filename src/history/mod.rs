//! Commit history extracted from a `git log` stream.

pub mod parser;

use serde::{Deserialize, Serialize};

pub use parser::{parse_header, parse_log, FIELD_SEPARATOR, LOG_PRETTY_FORMAT};

/// One commit as read from the log stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Full commit hash. Never empty.
    pub hash: String,
    /// Commit subject. May be empty.
    pub message: String,
    /// Parent hashes in log order. Empty for root commits.
    pub parents: Vec<String>,
    /// Paths touched by the commit, in log order.
    pub files: Vec<String>,
}
