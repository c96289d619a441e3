use std::collections::HashMap;

use tracing::{debug, trace};

use super::types::{CommitNode, Edge, EdgeKind, FileNode, GraphDescription, NodeId};
use crate::history::CommitRecord;

/// Assigns 1-based node numbers to string keys.
///
/// The map is only used for lookups; render order comes from the vectors in
/// [`GraphDescription`], never from iterating this map.
#[derive(Debug, Default)]
struct NodeIndex {
    lookup: HashMap<String, usize>,
    assigned: usize,
}

impl NodeIndex {
    /// Assign a fresh number to `key`, replacing any earlier assignment.
    fn assign(&mut self, key: &str) -> usize {
        self.assigned += 1;
        self.lookup.insert(key.to_string(), self.assigned);
        self.assigned
    }

    /// Return the existing number for `key` or assign one. The flag is `true`
    /// when the number is new.
    fn get_or_assign(&mut self, key: &str) -> (usize, bool) {
        match self.lookup.get(key) {
            Some(&n) => (n, false),
            None => (self.assign(key), true),
        }
    }

    fn get(&self, key: &str) -> Option<usize> {
        self.lookup.get(key).copied()
    }
}

/// Build the diagram description for a newest-first commit sequence.
///
/// Commits are visited oldest-first so the earliest commit gets `Commit1`.
/// The first pass numbers commits and files and records touched edges; the
/// second adds a derives edge for every parent that is itself in `commits`.
/// Parents outside the sequence are skipped without error.
pub fn build_graph(commits: &[CommitRecord]) -> GraphDescription {
    let mut graph = GraphDescription::default();
    let mut commit_index = NodeIndex::default();
    let mut file_index = NodeIndex::default();

    for record in commits.iter().rev() {
        let commit_id = NodeId::Commit(commit_index.assign(&record.hash));
        graph.commit_nodes.push(CommitNode {
            id: commit_id,
            hash: record.hash.clone(),
            message: record.message.clone(),
        });

        for path in &record.files {
            let (n, is_new) = file_index.get_or_assign(path);
            let file_id = NodeId::File(n);
            if is_new {
                graph.file_nodes.push(FileNode { id: file_id, path: path.clone() });
            }
            graph.edges.push(Edge { from: commit_id, to: file_id, kind: EdgeKind::Touched });
        }
    }

    let mut unknown_parents = 0usize;
    for (position, record) in commits.iter().rev().enumerate() {
        let child = NodeId::Commit(position + 1);
        for parent in &record.parents {
            if let Some(n) = commit_index.get(parent) {
                graph.edges.push(Edge {
                    from: NodeId::Commit(n),
                    to: child,
                    kind: EdgeKind::Derives,
                });
            } else {
                trace!(commit = %record.hash, parent = %parent, "parent outside log range");
                unknown_parents += 1;
            }
        }
    }

    debug!(
        commits = graph.commit_nodes.len(),
        files = graph.file_nodes.len(),
        edges = graph.edges.len(),
        unknown_parents,
        "built commit graph"
    );
    graph
}
