//! Service context bundling all port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::git::LiveGitRepo;
use crate::adapters::live::id_gen::LiveIdGenerator;
use crate::adapters::recording::{RecordingFileSystem, RecordingGitRepo, RecordingIdGenerator};
use crate::adapters::replaying::{ReplayingFileSystem, ReplayingGitRepo, ReplayingIdGenerator};
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::FileSystem;
use crate::ports::git::GitRepo;
use crate::ports::id_gen::IdGenerator;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations (live, recording, replaying).
pub struct ServiceContext {
    /// Filesystem for settings, output and scratch directories.
    pub fs: Box<dyn FileSystem>,
    /// Git executable for cloning and log extraction.
    pub git: Box<dyn GitRepo>,
    /// ID generator for scratch clone directory names.
    pub id_gen: Box<dyn IdGenerator>,
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a context from explicit adapters, without recording.
    #[must_use]
    pub fn new(
        fs: Box<dyn FileSystem>,
        git: Box<dyn GitRepo>,
        id_gen: Box<dyn IdGenerator>,
    ) -> Self {
        Self { fs, git, id_gen, recorder: None }
    }

    /// Creates a live context with real adapters.
    #[must_use]
    pub fn live() -> Self {
        Self::new(Box::new(LiveFileSystem), Box::new(LiveGitRepo), Box::new(LiveIdGenerator::new()))
    }

    /// Creates a live context that records every port call.
    ///
    /// Call [`ServiceContext::finish_recording`] to write the cassette.
    #[must_use]
    pub fn recording(path: &Path) -> Self {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(path, "gitviz-session")));
        Self {
            fs: Box::new(RecordingFileSystem::new(Box::new(LiveFileSystem), Arc::clone(&recorder))),
            git: Box::new(RecordingGitRepo::new(Box::new(LiveGitRepo), Arc::clone(&recorder))),
            id_gen: Box::new(RecordingIdGenerator::new(
                Box::new(LiveIdGenerator::new()),
                Arc::clone(&recorder),
            )),
            recorder: Some(recorder),
        }
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// Each port gets its own replayer over the same cassette so per-port
    /// cursors are independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette: Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;
        Ok(Self::from_cassette(&cassette))
    }

    /// Creates a replaying context from an in-memory cassette.
    #[must_use]
    pub fn from_cassette(cassette: &Cassette) -> Self {
        Self::new(
            Box::new(ReplayingFileSystem::new(CassetteReplayer::new(cassette))),
            Box::new(ReplayingGitRepo::new(CassetteReplayer::new(cassette))),
            Box::new(ReplayingIdGenerator::new(CassetteReplayer::new(cassette))),
        )
    }

    /// Writes the recorded cassette, if this is a recording context.
    ///
    /// Returns the cassette path, or `None` for live and replaying contexts.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be written.
    pub fn finish_recording(&self) -> Result<Option<PathBuf>, String> {
        let Some(recorder) = &self.recorder else {
            return Ok(None);
        };
        let mut guard = recorder.lock().map_err(|_| "recorder lock poisoned".to_string())?;
        guard
            .finish()
            .map(Some)
            .map_err(|e| format!("Failed to write cassette: {e}"))
    }
}
