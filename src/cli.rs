//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::render::OutputFormat;

/// Top-level CLI parser for `gitviz`.
#[derive(Debug, Parser)]
#[command(name = "gitviz", version, about = "Render commit history as a commit/file diagram")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Clone the configured repository and write its diagram.
    Render {
        /// YAML settings file with `repo_url`, `output_file` and `commit_date`.
        #[arg(value_name = "CONFIG")]
        config: PathBuf,
    },
    /// Render an already extracted `git log` to stdout.
    Graph {
        /// Log file produced with `--name-only --pretty=format:%H|%s|%P`.
        /// Reads stdin when omitted.
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Diagram format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::PlantUml)]
        format: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use crate::render::OutputFormat;
    use clap::Parser;

    #[test]
    fn parses_render_subcommand() {
        let cli = Cli::parse_from(["gitviz", "render", "config.yaml"]);
        assert!(matches!(
            cli.command,
            Command::Render { ref config } if config.ends_with("config.yaml")
        ));
    }

    #[test]
    fn render_requires_config() {
        assert!(Cli::try_parse_from(["gitviz", "render"]).is_err());
    }

    #[test]
    fn parses_graph_defaults() {
        let cli = Cli::parse_from(["gitviz", "graph"]);
        assert!(matches!(
            cli.command,
            Command::Graph { input: None, format: OutputFormat::PlantUml }
        ));
    }

    #[test]
    fn parses_graph_json_from_file() {
        let cli = Cli::parse_from(["gitviz", "graph", "--input", "log.txt", "--format", "json"]);
        match cli.command {
            Command::Graph { input, format } => {
                assert_eq!(input.unwrap().to_str(), Some("log.txt"));
                assert_eq!(format, OutputFormat::Json);
            }
            Command::Render { .. } => panic!("expected graph"),
        }
    }
}
