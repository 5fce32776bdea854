//! Graph derivation for visualization.
//!
//! The graph is rebuilt from a fresh full fetch on every call; nothing is
//! cached or persisted. One node per note, one directed edge per resolvable
//! outgoing link. Edges are not deduplicated: a note linking the same target
//! twice yields two parallel edges, preserving reference multiplicity.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use notelink_core::{Error, Result};

use crate::engine::LinkEngine;

/// Graph node in the visualization payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: Uuid,
    pub title: String,
    /// Out-degree plus in-degree of the note (dangling links count toward
    /// the source only).
    pub connection_count: usize,
    pub tags: Vec<String>,
    // Layout fields for an external force-directed animator. Initialized to
    // zero here and never mutated by the engine.
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

/// Directed edge in the visualization payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source_id: Uuid,
    pub target_id: Uuid,
}

/// Visualization payload: the full note collection as nodes and edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl LinkEngine {
    /// Build the note graph from the live collection.
    ///
    /// Titles resolve through a `title -> id` index built first-writer-wins
    /// when duplicate titles exist. Connection counts are computed in two
    /// passes: each note's out-degree, then +1 on every resolvable target.
    /// Unresolved (dangling) links produce no edge.
    pub async fn build_note_graph(&self) -> Result<NoteGraph> {
        let notes = self
            .store()
            .get_all_notes()
            .await
            .map_err(|e| Error::store("build_note_graph", e))?;

        let mut title_index: HashMap<&str, Uuid> = HashMap::with_capacity(notes.len());
        for note in &notes {
            title_index.entry(note.title.as_str()).or_insert(note.id);
        }

        // Out-degree pass: every outgoing link counts for its source, even
        // when the target does not exist.
        let mut connection_counts: HashMap<Uuid, usize> = HashMap::with_capacity(notes.len());
        for note in &notes {
            connection_counts.insert(note.id, note.outgoing_links.len());
        }

        // In-degree pass: only links that resolve to a known id count for
        // the target, and only those produce an edge.
        let mut edges = Vec::new();
        for note in &notes {
            for target_title in &note.outgoing_links {
                if let Some(&target_id) = title_index.get(target_title.as_str()) {
                    if let Some(count) = connection_counts.get_mut(&target_id) {
                        *count += 1;
                    }
                    edges.push(GraphEdge {
                        source_id: note.id,
                        target_id,
                    });
                }
            }
        }

        let nodes: Vec<GraphNode> = notes
            .iter()
            .map(|note| GraphNode {
                id: note.id,
                title: note.title.clone(),
                connection_count: connection_counts.get(&note.id).copied().unwrap_or(0),
                tags: note.tags.clone(),
                x: 0.0,
                y: 0.0,
                vx: 0.0,
                vy: 0.0,
            })
            .collect();

        debug!(
            op = "build_note_graph",
            node_count = nodes.len(),
            edge_count = edges.len(),
            "built note graph"
        );
        Ok(NoteGraph { nodes, edges })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::mock::MockNoteStore;
    use notelink_core::Note;

    fn linked_note(title: &str, links: &[&str]) -> Note {
        Note::new(title, "").with_outgoing_links(links.iter().map(|s| s.to_string()).collect())
    }

    fn node<'a>(graph: &'a NoteGraph, title: &str) -> &'a GraphNode {
        graph
            .nodes
            .iter()
            .find(|n| n.title == title)
            .unwrap_or_else(|| panic!("node {title} missing"))
    }

    #[tokio::test]
    async fn test_graph_counts_out_and_in_degree() {
        // A -> B, A -> C, B -> A
        let store = MockNoteStore::new()
            .with_note(linked_note("A", &["B", "C"]))
            .with_note(linked_note("B", &["A"]))
            .with_note(linked_note("C", &[]));
        let engine = LinkEngine::new(Arc::new(store));

        let graph = engine.build_note_graph().await.unwrap();

        assert_eq!(node(&graph, "A").connection_count, 3); // out 2 + in 1
        assert_eq!(node(&graph, "B").connection_count, 2); // out 1 + in 1
        assert_eq!(node(&graph, "C").connection_count, 1); // out 0 + in 1
        assert_eq!(graph.edges.len(), 3);
    }

    #[tokio::test]
    async fn test_dangling_links_count_source_only_and_yield_no_edge() {
        let store = MockNoteStore::new()
            .with_note(linked_note("A", &["Ghost"]))
            .with_note(linked_note("B", &[]));
        let engine = LinkEngine::new(Arc::new(store));

        let graph = engine.build_note_graph().await.unwrap();

        assert_eq!(node(&graph, "A").connection_count, 1);
        assert_eq!(node(&graph, "B").connection_count, 0);
        assert!(graph.edges.is_empty());
    }

    #[tokio::test]
    async fn test_parallel_edges_are_preserved() {
        let store = MockNoteStore::new()
            .with_note(linked_note("A", &["B", "B"]))
            .with_note(linked_note("B", &[]));
        let engine = LinkEngine::new(Arc::new(store));

        let graph = engine.build_note_graph().await.unwrap();

        assert_eq!(graph.edges.len(), 2);
        assert_eq!(graph.edges[0], graph.edges[1]);
        assert_eq!(node(&graph, "B").connection_count, 2);
    }

    #[tokio::test]
    async fn test_duplicate_titles_resolve_first_writer_wins() {
        let first = linked_note("Dup", &[]);
        let second = linked_note("Dup", &[]);
        let first_id = first.id;

        let store = MockNoteStore::new()
            .with_note(first)
            .with_note(second)
            .with_note(linked_note("A", &["Dup"]));
        let engine = LinkEngine::new(Arc::new(store));

        let graph = engine.build_note_graph().await.unwrap();

        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].target_id, first_id);
        // Both duplicates still appear as nodes.
        assert_eq!(graph.nodes.iter().filter(|n| n.title == "Dup").count(), 2);
    }

    #[tokio::test]
    async fn test_layout_fields_start_zeroed() {
        let store = MockNoteStore::new().with_note(linked_note("A", &[]));
        let engine = LinkEngine::new(Arc::new(store));

        let graph = engine.build_note_graph().await.unwrap();
        let n = node(&graph, "A");
        assert_eq!((n.x, n.y, n.vx, n.vy), (0.0, 0.0, 0.0, 0.0));
    }

    #[tokio::test]
    async fn test_graph_payload_serializes_for_visualization() {
        let store = MockNoteStore::new()
            .with_note(linked_note("A", &["B"]))
            .with_note(linked_note("B", &[]).with_tags(vec!["inbox".to_string()]));
        let engine = LinkEngine::new(Arc::new(store));

        let graph = engine.build_note_graph().await.unwrap();
        let payload = serde_json::to_value(&graph).unwrap();

        assert_eq!(payload["nodes"].as_array().unwrap().len(), 2);
        assert_eq!(payload["edges"].as_array().unwrap().len(), 1);
        assert!(payload["nodes"][0]["connection_count"].is_u64());
        assert!(payload["edges"][0]["source_id"].is_string());
    }

    #[tokio::test]
    async fn test_graph_wraps_store_failure() {
        let store = MockNoteStore::new().fail_get_all_notes();
        let engine = LinkEngine::new(Arc::new(store));

        let err = engine.build_note_graph().await.unwrap_err();
        assert_eq!(err.operation(), Some("build_note_graph"));
    }
}
