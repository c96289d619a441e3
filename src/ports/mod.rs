//! Port traits defining external boundaries.
//!
//! Each trait is a boundary between the core (log parsing, graph building,
//! rendering) and the outside world: the `git` executable, the filesystem,
//! and unique-id generation for scratch directories. Implementations live in
//! `src/adapters/`.

pub mod filesystem;
pub mod git;
pub mod id_gen;

pub use filesystem::FileSystem;
pub use git::GitRepo;
pub use id_gen::IdGenerator;

/// Error type returned across port boundaries.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;
