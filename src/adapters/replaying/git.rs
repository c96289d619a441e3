//! Replaying adapter for the `GitRepo` port.

use std::path::Path;
use std::sync::Mutex;

use super::replay_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::git::GitRepo;
use crate::ports::PortError;

/// Replays recorded git operations from a cassette.
pub struct ReplayingGitRepo {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingGitRepo {
    /// Creates a new replaying git repo from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl GitRepo for ReplayingGitRepo {
    fn clone_repo(&self, _url: &str, _dest: &Path) -> Result<(), PortError> {
        replay_result(&self.replayer, "git", "clone_repo")
    }

    fn log_since(&self, _repo: &Path, _since: &str) -> Result<String, PortError> {
        replay_result(&self.replayer, "git", "log_since")
    }
}
