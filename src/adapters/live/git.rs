//! Live git adapter using `git` CLI commands.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::history::LOG_PRETTY_FORMAT;
use crate::ports::git::GitRepo;
use crate::ports::PortError;

/// Live git adapter that shells out to the `git` CLI.
pub struct LiveGitRepo;

impl GitRepo for LiveGitRepo {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), PortError> {
        debug!(url, dest = %dest.display(), "git clone");
        let output = Command::new("git").arg("clone").arg("--quiet").arg(url).arg(dest).output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("git clone failed: {}", stderr.trim()).into());
        }
        Ok(())
    }

    fn log_since(&self, repo: &Path, since: &str) -> Result<String, PortError> {
        debug!(repo = %repo.display(), since, "git log");
        let output = Command::new("git")
            .arg("log")
            .arg(format!("--since={since}"))
            .arg("--name-only")
            .arg(format!("--pretty=format:{LOG_PRETTY_FORMAT}"))
            .current_dir(repo)
            .output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("git log failed: {}", stderr.trim()).into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_of_missing_source_fails() {
        let root = std::env::temp_dir().join("gitviz_live_git_test");
        let _ = std::fs::remove_dir_all(&root);
        let result = LiveGitRepo.clone_repo(
            &root.join("no-such-repo").display().to_string(),
            &root.join("dest"),
        );
        assert!(result.is_err());
    }
}
