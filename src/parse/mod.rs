pub mod javascript;
pub mod resolver;

pub use javascript::extract_imports;

use serde::Serialize;
use std::path::PathBuf;

/// Raw import statement extracted from a single source file.
#[derive(Debug, Clone, PartialEq)]
pub struct RawImport {
    /// The module specifier as written (`"./util.ts"`, `"react"`)
    pub specifier: String,
    /// What the statement binds
    pub clause: ImportClause,
    /// Line number of the import statement (1-indexed)
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImportClause {
    /// `import foo from "m"` / `import foo as bar from "m"`
    Default { name: String, alias: Option<String> },
    /// `import { a, b as c } from "m"`
    Named { names: Vec<String> },
    /// `import * as ns from "m"`
    Namespace { alias: String },
    /// `import "m"`
    SideEffect,
}

impl ImportClause {
    /// Human-readable description of the imported items, used as the edge
    /// label. Named imports are listed one per line; side-effect imports
    /// yield an empty label.
    pub fn label(&self) -> String {
        match self {
            ImportClause::Default {
                name,
                alias: Some(alias),
            } => format!("{name} as {alias}"),
            ImportClause::Default { name, alias: None } => name.clone(),
            ImportClause::Named { names } => names.join("\n"),
            ImportClause::Namespace { alias } => format!("* as {alias}"),
            ImportClause::SideEffect => String::new(),
        }
    }
}

/// Source location for edge provenance
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: usize,
}
