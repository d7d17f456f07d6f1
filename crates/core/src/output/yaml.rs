use super::FormatError;
use crate::models::ResolutionReport;

/// Serialize a ResolutionReport to YAML
pub fn to_yaml(report: &ResolutionReport) -> Result<String, FormatError> {
    serde_yaml::to_string(report).map_err(FormatError::from)
}
