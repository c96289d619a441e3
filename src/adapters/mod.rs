//! Port implementations.
//!
//! - `live`: real `git`, disk and UUIDs.
//! - `recording`: wraps another adapter and writes every call to a cassette.
//! - `replaying`: serves calls back from a cassette.

pub mod live;
pub mod recording;
pub mod replaying;
