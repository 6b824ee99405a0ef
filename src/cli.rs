use crate::errors::{EntwineError, Result};
use crate::graph::builder::{GraphBuilder, ResolvedImport};
use crate::output::{self, OutputFormat};
use crate::parse::{self, resolver, SourceLocation};
use crate::walk;
use clap::Parser;
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "entwine",
    version,
    about = "Import dependency graph generator for JavaScript and TypeScript"
)]
pub struct Cli {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Dot)]
    pub format: OutputFormat,

    /// Include glob patterns
    #[arg(long)]
    pub include: Vec<String>,

    /// Exclude glob patterns
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Walk the directory tree without consulting the git index
    #[arg(long)]
    pub untracked: bool,
}

pub fn run(cli: &Cli) -> Result<()> {
    let root = cli
        .path
        .canonicalize()
        .map_err(|_| EntwineError::NoFiles {
            path: cli.path.clone(),
        })?;

    let files = walk::discover_files(&root, &cli.include, &cli.exclude, cli.untracked)?;
    if files.is_empty() {
        return Err(EntwineError::NoFiles { path: root });
    }
    tracing::debug!(count = files.len(), root = %root.display(), "discovered source files");

    let file_set: HashSet<PathBuf> = files.iter().cloned().collect();

    let mut builder = GraphBuilder::new();
    for file in &files {
        builder.ensure_file(file);
    }

    for file in &files {
        let source = match std::fs::read_to_string(root.join(file)) {
            Ok(s) => s,
            Err(err) => {
                tracing::warn!(file = %file.display(), %err, "skipping unreadable file");
                continue;
            }
        };

        for raw in parse::extract_imports(&source) {
            // Bare specifiers are external packages
            let Some(normalized) = resolver::normalize_specifier(file, &raw.specifier) else {
                continue;
            };
            // Targets outside the scanned set produce no edge
            let Some(target) = resolver::resolve_target(&normalized, &file_set) else {
                continue;
            };

            builder.add_import(&ResolvedImport {
                source: file.clone(),
                target,
                label: raw.clause.label(),
                location: SourceLocation {
                    file: file.clone(),
                    line: raw.line,
                },
            });
        }
    }

    let graph = builder.build();
    let mut stdout = std::io::stdout();

    match cli.format {
        OutputFormat::Dot => output::dot::write_dot(&mut stdout, &graph)?,
        OutputFormat::Json => {
            let metadata = output::json::Metadata {
                root,
                format: cli.format,
                files_scanned: files.len(),
                node_count: graph.node_count(),
                edge_count: graph.edge_count(),
            };
            output::json::write_json(&mut stdout, &graph, metadata)?;
        }
    }

    Ok(())
}
