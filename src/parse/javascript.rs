use crate::parse::{ImportClause, RawImport};
use regex::Regex;
use std::sync::LazyLock;

// Matches static ES import statements:
//   import foo from "m"             (group 1, optional `as` alias in 2)
//   import { a, b as c } from "m"   (group 3, may span lines)
//   import * as ns from "m"         (group 4)
//   import "m"                      (no binding groups)
// `import type ...` is matched like its value counterpart. The specifier
// is group 5. Dynamic `import(...)` and `require(...)` are not matched.
static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"import\s+(?:type\s+)?(?:(\w+)(?:\s+as\s+(\w+))?|\{([\s\S]*?)\}|\*\s+as\s+(\w+))?\s*(?:from\s*)?["']([^"']+)["']"#,
    )
    .expect("import regex is valid")
});

/// Extract all static import statements from a source file.
pub fn extract_imports(source: &str) -> Vec<RawImport> {
    let mut imports = Vec::new();

    for caps in IMPORT_RE.captures_iter(source) {
        let Some(specifier) = caps.get(5) else {
            continue;
        };

        let clause = if let Some(default) = caps.get(1) {
            ImportClause::Default {
                name: default.as_str().to_string(),
                alias: caps.get(2).map(|a| a.as_str().to_string()),
            }
        } else if let Some(named) = caps.get(3) {
            let names = named
                .as_str()
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect();
            ImportClause::Named { names }
        } else if let Some(namespace) = caps.get(4) {
            ImportClause::Namespace {
                alias: namespace.as_str().to_string(),
            }
        } else {
            ImportClause::SideEffect
        };

        let start = caps.get(0).map_or(0, |m| m.start());
        let line = source[..start].bytes().filter(|&b| b == b'\n').count() + 1;

        imports.push(RawImport {
            specifier: specifier.as_str().to_string(),
            clause,
            line,
        });
    }

    imports
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_default_import() {
        let imports = extract_imports(r#"import foo from "./foo.ts";"#);
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].specifier, "./foo.ts");
        assert_eq!(
            imports[0].clause,
            ImportClause::Default {
                name: "foo".to_string(),
                alias: None,
            }
        );
    }

    #[test]
    fn extracts_named_imports() {
        let imports = extract_imports(r#"import { a, b as c } from "./util.ts";"#);
        assert_eq!(imports.len(), 1);
        assert_eq!(
            imports[0].clause,
            ImportClause::Named {
                names: vec!["a".to_string(), "b as c".to_string()],
            }
        );
        assert_eq!(imports[0].clause.label(), "a\nb as c");
    }

    #[test]
    fn extracts_multiline_named_imports() {
        let source = "import {\n  first,\n  second,\n} from './mod.ts';\n";
        let imports = extract_imports(source);
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].line, 1);
        assert_eq!(
            imports[0].clause,
            ImportClause::Named {
                names: vec!["first".to_string(), "second".to_string()],
            }
        );
    }

    #[test]
    fn extracts_namespace_import() {
        let imports = extract_imports(r#"import * as path from "./path.ts";"#);
        assert_eq!(imports.len(), 1);
        assert_eq!(
            imports[0].clause,
            ImportClause::Namespace {
                alias: "path".to_string(),
            }
        );
        assert_eq!(imports[0].clause.label(), "* as path");
    }

    #[test]
    fn extracts_side_effect_import() {
        let imports = extract_imports(r#"import "./polyfill.ts";"#);
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].clause, ImportClause::SideEffect);
        assert_eq!(imports[0].clause.label(), "");
    }

    #[test]
    fn extracts_type_import() {
        let imports = extract_imports(r#"import type { Config } from "./config.ts";"#);
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].specifier, "./config.ts");
        assert_eq!(
            imports[0].clause,
            ImportClause::Named {
                names: vec!["Config".to_string()],
            }
        );
    }

    #[test]
    fn records_line_numbers() {
        let source = "const x = 1;\n\nimport a from './a.ts';\nimport b from './b.ts';\n";
        let imports = extract_imports(source);
        assert_eq!(imports.len(), 2);
        assert_eq!(imports[0].line, 3);
        assert_eq!(imports[1].line, 4);
    }

    #[test]
    fn accepts_single_quotes() {
        let imports = extract_imports("import foo from './foo.js';");
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].specifier, "./foo.js");
    }

    #[test]
    fn keeps_bare_specifiers() {
        let imports = extract_imports(r#"import { useState } from "react";"#);
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].specifier, "react");
    }

    #[test]
    fn ignores_dynamic_import() {
        let imports = extract_imports(r#"const mod = await import("./lazy.ts");"#);
        assert!(imports.is_empty());
    }
}
