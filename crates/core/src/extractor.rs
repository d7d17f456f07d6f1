use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static IMPORT_STMT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*import\s+([A-Za-z0-9_.]+)").unwrap());

static FROM_IMPORT_STMT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*from\s+([A-Za-z0-9_.]+)\s+import\s+").unwrap());

/// Extract the top-level module names referenced by import statements.
///
/// Scans the text line by line. `import x.y.z` and `from x.y import z` both
/// contribute `x`; trailing content (`as np`, multi-import lists) does not
/// affect the leading module token. Lines matching neither form are ignored,
/// as are relative imports (`from . import x`), whose captured path has no
/// leading identifier segment.
///
/// The returned list is deduplicated and preserves first-seen order. No
/// imports found yields an empty list, which callers treat as "nothing to
/// generate" rather than an error.
pub fn extract(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for line in text.lines() {
        let path = match IMPORT_STMT.captures(line) {
            Some(caps) => caps.get(1),
            None => FROM_IMPORT_STMT.captures(line).and_then(|caps| caps.get(1)),
        };

        let Some(path) = path else { continue };

        let top_level = path.as_str().split('.').next().unwrap_or_default();
        if top_level.is_empty() {
            continue;
        }

        if seen.insert(top_level.to_string()) {
            names.push(top_level.to_string());
        }
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_import() {
        let names = extract("import os\nimport sys");
        assert_eq!(names, vec!["os", "sys"]);
    }

    #[test]
    fn test_import_with_alias() {
        let names = extract("import numpy as np\nfrom sklearn.ensemble import RandomForestClassifier\n");
        assert_eq!(names, vec!["numpy", "sklearn"]);
    }

    #[test]
    fn test_dotted_path_keeps_top_level() {
        let names = extract("import pkg.sub.mod");
        assert_eq!(names, vec!["pkg"]);
    }

    #[test]
    fn test_from_import() {
        let names = extract("from pandas import DataFrame, Series");
        assert_eq!(names, vec!["pandas"]);
    }

    #[test]
    fn test_indented_imports_match() {
        let names = extract("def lazy():\n    import requests\n    from flask import Flask\n");
        assert_eq!(names, vec!["requests", "flask"]);
    }

    #[test]
    fn test_no_imports() {
        let names = extract("x = 1\nprint(x)\n# import commented_out\n");
        assert!(names.is_empty());
    }

    #[test]
    fn test_relative_imports_ignored() {
        let names = extract("from . import utils\nfrom ..config import Settings\n");
        assert!(names.is_empty());
    }

    #[test]
    fn test_deduplication_preserves_first_seen_order() {
        let names = extract("import pandas\nimport numpy\nfrom pandas import read_csv\n");
        assert_eq!(names, vec!["pandas", "numpy"]);
    }

    #[test]
    fn test_case_preserved() {
        let names = extract("import NumPy");
        assert_eq!(names, vec!["NumPy"]);
    }

    #[test]
    fn test_import_keyword_prefix_does_not_match() {
        // `importlib.import_module(...)` calls are not import statements
        let names = extract("importlib.import_module(\"json\")\nfrom_x = 2\n");
        assert!(names.is_empty());
    }
}
