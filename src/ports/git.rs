//! Git port: repository acquisition and history extraction.

use std::path::Path;

use super::PortError;

/// Access to a version-control executable.
///
/// Abstracting git allows deterministic replay and testing without network
/// access or a real repository.
pub trait GitRepo: Send + Sync {
    /// Clones `url` into the directory `dest`.
    ///
    /// # Errors
    ///
    /// Returns an error if the clone fails or `git` cannot be run.
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), PortError>;

    /// Returns the raw log of the repository at `repo` for commits since
    /// `since` (`YYYY-MM-DD`), one `%H|%s|%P` header per commit followed by
    /// the names of the files it touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be produced.
    fn log_since(&self, repo: &Path, since: &str) -> Result<String, PortError>;
}
