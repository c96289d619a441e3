//! `gitviz graph` command.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::context::ServiceContext;
use crate::graph::build_graph;
use crate::history::parse_log;
use crate::render::OutputFormat;

/// Execute the `graph` command: read a log from `input` (stdin when `None`)
/// and print the diagram to stdout.
///
/// # Errors
///
/// Returns an error string if the log cannot be read or the diagram cannot be
/// serialized.
pub fn run_with_context(
    ctx: &ServiceContext,
    input: Option<&Path>,
    format: OutputFormat,
) -> Result<(), String> {
    let raw = match input {
        Some(path) => ctx
            .fs
            .read_to_string(path)
            .map_err(|e| format!("failed to read log file {}: {e}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("failed to read log from stdin: {e}"))?;
            buf
        }
    };

    println!("{}", render_log(&raw, format)?);
    Ok(())
}

/// Parse, build and render `raw` log text.
///
/// # Errors
///
/// Returns an error string if serialization fails.
pub fn render_log(raw: &str, format: OutputFormat) -> Result<String, String> {
    let commits = parse_log(raw);
    debug!(commits = commits.len(), ?format, "rendering log");
    format
        .render(&build_graph(&commits))
        .map_err(|e| format!("failed to render graph: {e}"))
}
