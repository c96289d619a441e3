//! Serializers turning a [`GraphDescription`] into diagram text.

pub mod plantuml;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::graph::GraphDescription;

pub use plantuml::render_plantuml;

/// Output formats understood by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// PlantUML component diagram.
    #[default]
    #[value(name = "plantuml")]
    PlantUml,
    /// JSON dump of nodes and edges.
    Json,
}

impl OutputFormat {
    /// Render `graph` in this format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(self, graph: &GraphDescription) -> Result<String, serde_json::Error> {
        match self {
            OutputFormat::PlantUml => Ok(render_plantuml(graph)),
            OutputFormat::Json => render_json(graph),
        }
    }
}

/// Pretty-printed JSON form of the graph.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(graph: &GraphDescription) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(graph)
}
