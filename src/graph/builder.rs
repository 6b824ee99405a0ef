use crate::graph::ir::{GraphEdge, GraphNode, ImportGraph};
use crate::parse::SourceLocation;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Resolved import ready for graph insertion
#[derive(Debug, Clone)]
pub struct ResolvedImport {
    pub source: PathBuf,
    pub target: PathBuf,
    /// Imported items, empty for side-effect imports
    pub label: String,
    pub location: SourceLocation,
}

/// Builds an ImportGraph from resolved imports with node and edge
/// deduplication.
pub struct GraphBuilder {
    graph: ImportGraph,
    node_map: HashMap<PathBuf, petgraph::graph::NodeIndex>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: ImportGraph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Get or create the node for a file path.
    fn ensure_node(&mut self, path: &Path) -> petgraph::graph::NodeIndex {
        if let Some(&idx) = self.node_map.get(path) {
            return idx;
        }
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let idx = self.graph.add_node(GraphNode {
            path: path.to_path_buf(),
            name,
            dir,
        });
        self.node_map.insert(path.to_path_buf(), idx);
        idx
    }

    /// Register a scanned file so it appears even without imports.
    pub fn ensure_file(&mut self, path: &Path) {
        self.ensure_node(path);
    }

    /// Add a resolved import to the graph.
    pub fn add_import(&mut self, import: &ResolvedImport) {
        let source_idx = self.ensure_node(&import.source);
        let target_idx = self.ensure_node(&import.target);

        // Check if edge already exists
        if let Some(edge_idx) = self.graph.find_edge(source_idx, target_idx) {
            let edge = &mut self.graph[edge_idx];
            if !edge.source_locations.contains(&import.location) {
                edge.source_locations.push(import.location.clone());
                if !import.label.is_empty() {
                    edge.labels.push(import.label.clone());
                }
            }
        } else {
            let labels = if import.label.is_empty() {
                vec![]
            } else {
                vec![import.label.clone()]
            };
            self.graph.add_edge(
                source_idx,
                target_idx,
                GraphEdge {
                    labels,
                    source_locations: vec![import.location.clone()],
                },
            );
        }
    }

    /// Consume the builder and return the built graph.
    pub fn build(self) -> ImportGraph {
        self.graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
