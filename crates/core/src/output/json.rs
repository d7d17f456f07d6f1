use super::FormatError;
use crate::models::ResolutionReport;

/// Serialize a ResolutionReport to pretty-printed JSON
pub fn to_json(report: &ResolutionReport) -> Result<String, FormatError> {
    serde_json::to_string_pretty(report).map_err(FormatError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ResolveMetadata, ResolveStats};

    #[test]
    fn test_to_json() {
        let report = ResolutionReport {
            resolutions: vec![],
            stats: ResolveStats::default(),
            metadata: ResolveMetadata::default(),
        };

        let json = to_json(&report).unwrap();
        assert!(json.contains("\"resolutions\""));
        assert!(json.contains("\"stats\""));
    }
}
