//! Command dispatch and handlers.

pub mod graph;
pub mod render;

use std::env;
use std::path::PathBuf;

use tracing::info;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Environment variable naming a cassette file to record the session into.
pub const RECORD_ENV: &str = "GITVIZ_RECORD";

/// Dispatch a parsed command to its handler.
///
/// When `GITVIZ_RECORD` is set to a file path, every port interaction is
/// recorded to that cassette file.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let ctx = match env::var_os(RECORD_ENV) {
        Some(path) => ServiceContext::recording(&PathBuf::from(path)),
        None => ServiceContext::live(),
    };

    let result = dispatch_with_context(command, &ctx);

    // Write the cassette even when the command failed.
    if let Some(path) = ctx.finish_recording()? {
        info!(path = %path.display(), "recording saved");
        eprintln!("Recording saved to: {}", path.display());
    }

    result
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Render { config } => {
            let work_dir = env::current_dir()
                .map_err(|e| format!("failed to get current directory: {e}"))?;
            render::run_with_context(ctx, config, &work_dir)
        }
        Command::Graph { input, format } => graph::run_with_context(ctx, input.as_deref(), *format),
    }
}
