use crate::errors::Result;
use crate::graph::ir::ImportGraph;
use std::collections::BTreeMap;
use std::io::Write;

/// Write the import graph in Graphviz DOT format, with one cluster per
/// directory. Edges are emitted after all clusters so they never pull
/// nodes into the wrong subgraph.
pub fn write_dot<W: Write>(writer: &mut W, graph: &ImportGraph) -> Result<()> {
    writeln!(writer, "strict digraph imports {{")?;
    writeln!(writer, "  node [shape=box];")?;
    writeln!(writer, "  edge [fontsize=8];")?;
    writeln!(writer, "  rankdir=\"LR\";")?;

    // Group nodes by directory
    let mut clusters: BTreeMap<String, Vec<petgraph::graph::NodeIndex>> = BTreeMap::new();
    for idx in graph.node_indices() {
        clusters
            .entry(graph[idx].dir_label())
            .or_default()
            .push(idx);
    }

    for (dir, nodes) in &clusters {
        writeln!(writer, "  subgraph {} {{", cluster_name(dir))?;
        writeln!(writer, "    label = \"{}\";", escape(dir))?;
        writeln!(writer, "    color = \"blue\"; fontcolor=\"blue\";")?;
        for &idx in nodes {
            let node = &graph[idx];
            writeln!(
                writer,
                "    \"{}\"[label=\"{}\"];",
                escape(&node.id()),
                escape(&node.name)
            )?;
        }
        writeln!(writer, "  }}")?;
    }

    for edge in graph.edge_indices() {
        let (source, target) = graph.edge_endpoints(edge).expect("edge has endpoints");
        let source_id = escape(&graph[source].id());
        let target_id = escape(&graph[target].id());
        let label = graph[edge].labels.join("\n");
        if label.is_empty() {
            writeln!(writer, "  \"{source_id}\" -> \"{target_id}\";")?;
        } else {
            writeln!(
                writer,
                "  \"{source_id}\" -> \"{target_id}\" [label=\"{}\"];",
                escape(&label)
            )?;
        }
    }

    writeln!(writer, "}}")?;
    Ok(())
}

/// Graphviz cluster names may only contain word characters.
fn cluster_name(dir: &str) -> String {
    let sanitized: String = dir
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    format!("cluster_{sanitized}")
}

/// Escape a string for use inside a double-quoted DOT literal. Newlines
/// become the DOT line-break escape.
fn escape(s: &str) -> String {
    s.replace('"', "\\\"").replace('\n', "\\n")
}
