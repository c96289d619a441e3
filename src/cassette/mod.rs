//! Cassette format for recording and replaying port interactions.
//!
//! A cassette captures every call a `render` session makes to the git,
//! filesystem and id ports, so the whole pipeline can be replayed offline.

pub mod format;
pub mod recorder;
pub mod replayer;
