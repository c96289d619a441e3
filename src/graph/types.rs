use std::fmt;

use serde::{Serialize, Serializer};

/// Synthetic identifier of a node in one rendered diagram.
///
/// Numbering is 1-based and per kind, in assignment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    /// The n-th commit node.
    Commit(usize),
    /// The n-th file node.
    File(usize),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Commit(n) => write!(f, "Commit{n}"),
            NodeId::File(n) => write!(f, "File{n}"),
        }
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A commit box, labelled with the commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitNode {
    /// Node identifier.
    pub id: NodeId,
    /// Commit hash the node stands for.
    pub hash: String,
    /// Label text.
    pub message: String,
}

/// A file box, labelled with the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileNode {
    /// Node identifier.
    pub id: NodeId,
    /// Repository-relative path, also the label.
    pub path: String,
}

/// The relation an edge expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Commit to a file it modified.
    Touched,
    /// Parent commit to child commit.
    Derives,
}

/// A directed, typed edge between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Source node.
    pub from: NodeId,
    /// Target node.
    pub to: NodeId,
    /// Relation type.
    pub kind: EdgeKind,
}

/// Nodes and edges of a commit/file diagram, in render order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDescription {
    /// Commit nodes, oldest commit first.
    pub commit_nodes: Vec<CommitNode>,
    /// File nodes in first-seen order.
    pub file_nodes: Vec<FileNode>,
    /// Touched edges grouped per commit, followed by derives edges.
    pub edges: Vec<Edge>,
}

impl GraphDescription {
    /// Returns `true` when the diagram has no nodes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commit_nodes.is_empty() && self.file_nodes.is_empty()
    }

    /// Node a derives edge from `hash` starts at: the last record carrying
    /// `hash`, if any.
    #[must_use]
    pub fn commit_id(&self, hash: &str) -> Option<NodeId> {
        self.commit_nodes.iter().rev().find(|n| n.hash == hash).map(|n| n.id)
    }

    /// Node assigned to `path`, if it was touched.
    #[must_use]
    pub fn file_id(&self, path: &str) -> Option<NodeId> {
        self.file_nodes.iter().find(|n| n.path == path).map(|n| n.id)
    }

    /// Commit-to-file edges in render order.
    pub fn touched_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.kind == EdgeKind::Touched)
    }

    /// Parent-to-child edges in render order.
    pub fn derives_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.kind == EdgeKind::Derives)
    }
}
