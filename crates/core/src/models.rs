use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Outcome for a single import name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// The import name as captured from the source text
    pub import: String,
    /// The installable package name (lowercase); `None` when unresolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Whether the alias table supplied the package name
    #[serde(default)]
    pub via_alias: bool,
}

impl Resolution {
    /// Render this resolution as one manifest line.
    ///
    /// Resolved names become a bare package line; unresolved names become a
    /// comment quoting the original import verbatim.
    pub fn manifest_line(&self) -> String {
        match &self.package {
            Some(package) => package.clone(),
            None => format!("# Could not resolve \"{}\" to a PyPI package", self.import),
        }
    }
}

/// Statistics about one resolution run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveStats {
    pub total_imports: usize,
    pub resolved: usize,
    pub aliased: usize,
    pub unresolved: usize,
    /// Remote probes actually issued
    pub index_probes: usize,
    /// Probes answered from the existence cache
    pub cache_hits: usize,
}

/// Resolution metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveMetadata {
    pub duration_ms: u64,
    pub timestamp: String,
    pub tool_version: String,
}

impl Default for ResolveMetadata {
    fn default() -> Self {
        Self {
            duration_ms: 0,
            timestamp: chrono::Utc::now().to_rfc3339(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Full outcome of a resolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionReport {
    /// One entry per input name, in input order
    pub resolutions: Vec<Resolution>,
    pub stats: ResolveStats,
    pub metadata: ResolveMetadata,
}

impl ResolutionReport {
    /// The final manifest text: one line per resolution, deduplicated by
    /// exact string equality in first-seen order, newline-joined.
    ///
    /// Two imports resolving to the same package collapse to one line;
    /// unresolved comments about different names do not collapse.
    pub fn manifest(&self) -> String {
        let mut seen = HashSet::new();
        let mut lines = Vec::new();

        for resolution in &self.resolutions {
            let line = resolution.manifest_line();
            if seen.insert(line.clone()) {
                lines.push(line);
            }
        }

        lines.join("\n")
    }

    /// Import names that could not be resolved, in input order.
    pub fn unresolved_imports(&self) -> Vec<&str> {
        self.resolutions
            .iter()
            .filter(|r| r.package.is_none())
            .map(|r| r.import.as_str())
            .collect()
    }
}
