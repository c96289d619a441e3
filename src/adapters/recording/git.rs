//! Recording adapter for the `GitRepo` port.

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{GitRepo, PortError};

/// Records git interactions while delegating to an inner implementation.
pub struct RecordingGitRepo {
    inner: Box<dyn GitRepo>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingGitRepo {
    /// Creates a new recording git repo wrapping the given implementation.
    pub fn new(inner: Box<dyn GitRepo>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct CloneInput<'a> {
    url: &'a str,
    dest: String,
}

#[derive(Serialize)]
struct LogInput<'a> {
    repo: String,
    since: &'a str,
}

impl GitRepo for RecordingGitRepo {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), PortError> {
        let result = self.inner.clone_repo(url, dest);
        if let Ok(mut guard) = self.recorder.lock() {
            guard.set_repo_url(url);
        }
        let input = CloneInput { url, dest: dest.display().to_string() };
        record_result(&self.recorder, "git", "clone_repo", &input, &result);
        result
    }

    fn log_since(&self, repo: &Path, since: &str) -> Result<String, PortError> {
        let result = self.inner.log_since(repo, since);
        let input = LogInput { repo: repo.display().to_string(), since };
        record_result(&self.recorder, "git", "log_since", &input, &result);
        result
    }
}
