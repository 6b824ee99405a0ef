use crate::errors::Result;
use crate::graph::ir::ImportGraph;
use crate::output::OutputFormat;
use crate::parse::SourceLocation;
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct GraphOutput {
    pub metadata: Metadata,
    pub nodes: Vec<NodeOutput>,
    pub edges: Vec<EdgeOutput>,
}

#[derive(Debug, Serialize)]
pub struct Metadata {
    pub root: PathBuf,
    pub format: OutputFormat,
    pub files_scanned: usize,
    pub node_count: usize,
    pub edge_count: usize,
}

#[derive(Debug, Serialize)]
pub struct NodeOutput {
    pub id: String,
    pub name: String,
    pub dir: String,
}

#[derive(Debug, Serialize)]
pub struct EdgeOutput {
    pub from: String,
    pub to: String,
    pub labels: Vec<String>,
    pub source_locations: Vec<SourceLocation>,
}

/// Write the import graph as pretty-printed JSON.
pub fn write_json<W: Write>(writer: &mut W, graph: &ImportGraph, metadata: Metadata) -> Result<()> {
    let nodes: Vec<NodeOutput> = graph
        .node_indices()
        .map(|idx| {
            let node = &graph[idx];
            NodeOutput {
                id: node.id(),
                name: node.name.clone(),
                dir: node.dir_label(),
            }
        })
        .collect();

    let edges: Vec<EdgeOutput> = graph
        .edge_references()
        .map(|edge| EdgeOutput {
            from: graph[edge.source()].id(),
            to: graph[edge.target()].id(),
            labels: edge.weight().labels.clone(),
            source_locations: edge.weight().source_locations.clone(),
        })
        .collect();

    let output = GraphOutput {
        metadata,
        nodes,
        edges,
    };

    serde_json::to_writer_pretty(&mut *writer, &output)?;
    writeln!(writer)?;
    Ok(())
}
