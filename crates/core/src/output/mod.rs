mod json;
mod yaml;

pub use json::to_json;
pub use yaml::to_yaml;

use crate::models::ResolutionReport;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// requirements.txt-compatible manifest text
    Text,
    Json,
    Yaml,
    Summary,
}

/// Format a ResolutionReport according to the specified format
pub fn format_output(report: &ResolutionReport, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Text => Ok(report.manifest()),
        OutputFormat::Json => to_json(report),
        OutputFormat::Yaml => to_yaml(report),
        OutputFormat::Summary => Ok(format_summary(report)),
    }
}

/// Generate a human-readable summary
pub fn format_summary(report: &ResolutionReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Resolution Summary\n\
         ==================\n\
         Imports: {}\n\
         - Resolved: {} ({} via alias)\n\
         - Unresolved: {}\n\n",
        report.stats.total_imports,
        report.stats.resolved,
        report.stats.aliased,
        report.stats.unresolved,
    ));

    output.push_str(&format!(
        "Index Probes: {} (cache hits: {})\n\n",
        report.stats.index_probes, report.stats.cache_hits
    ));

    let resolved: Vec<_> = report
        .resolutions
        .iter()
        .filter_map(|r| r.package.as_ref().map(|p| (r.import.as_str(), p.as_str())))
        .collect();
    if !resolved.is_empty() {
        output.push_str("Resolved Packages:\n");
        for (import, package) in resolved {
            if import.to_lowercase() == *package {
                output.push_str(&format!("  {}\n", package));
            } else {
                output.push_str(&format!("  {} -> {}\n", import, package));
            }
        }
        output.push('\n');
    }

    let unresolved = report.unresolved_imports();
    if !unresolved.is_empty() {
        output.push_str("Unresolved Imports:\n");
        for import in unresolved {
            output.push_str(&format!("  {}\n", import));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "Duration: {}ms\n\
         Timestamp: {}\n\
         Tool Version: {}\n",
        report.metadata.duration_ms, report.metadata.timestamp, report.metadata.tool_version
    ));

    output
}

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}
