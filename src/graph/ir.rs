use crate::parse::SourceLocation;
use petgraph::graph::DiGraph;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// The import graph: one node per source file, one edge per importing pair
pub type ImportGraph = DiGraph<GraphNode, GraphEdge>;

#[derive(Debug, Clone, Serialize)]
pub struct GraphNode {
    /// Path relative to the scan root
    pub path: PathBuf,
    /// Display name: file stem without extension
    pub name: String,
    /// Containing directory, used for clustering
    pub dir: PathBuf,
}

impl GraphNode {
    /// Stable node identifier: the relative path with forward slashes.
    pub fn id(&self) -> String {
        slash(&self.path)
    }

    /// Cluster label for the containing directory.
    pub fn dir_label(&self) -> String {
        slash(&self.dir)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphEdge {
    /// Imported items, one entry per contributing import statement
    pub labels: Vec<String>,
    /// All import statements that contributed to this edge
    pub source_locations: Vec<SourceLocation>,
}

fn slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
