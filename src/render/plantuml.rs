//! PlantUML serializer.

use crate::graph::{EdgeKind, GraphDescription};

const START_MARKER: &str = "@startuml";
const END_MARKER: &str = "@enduml";
const SKINPARAM: [&str; 3] = ["skinparam rectangle {", "   BackgroundColor #FDF6E3", "}"];

/// Render the graph as a PlantUML document.
///
/// Declarations come first (commits, then files), followed by edges in the
/// order of [`GraphDescription::edges`]. Touched edges point from commit to
/// file; derives edges use an inheritance arrow from parent into child.
pub fn render_plantuml(graph: &GraphDescription) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(
        SKINPARAM.len() + 2 + graph.commit_nodes.len() + graph.file_nodes.len() + graph.edges.len(),
    );
    lines.push(START_MARKER.to_string());
    lines.extend(SKINPARAM.iter().map(|s| (*s).to_string()));

    for node in &graph.commit_nodes {
        lines.push(format!("rectangle \"{}\" as {}", label(&node.message), node.id));
    }
    for node in &graph.file_nodes {
        lines.push(format!("rectangle \"{}\" as {}", label(&node.path), node.id));
    }

    for edge in &graph.edges {
        lines.push(match edge.kind {
            EdgeKind::Touched => format!("{} --> {}", edge.from, edge.to),
            EdgeKind::Derives => format!("{} <|-- {}", edge.from, edge.to),
        });
    }

    lines.push(END_MARKER.to_string());
    lines.join("\n")
}

/// A double quote would close the label string early.
fn label(text: &str) -> String {
    text.replace('"', "'")
}
