use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::time::Duration;
use thiserror::Error;

/// Base URL of the PyPI JSON API.
pub const DEFAULT_INDEX_URL: &str = "https://pypi.org/pypi";

/// Characters escaped when a package name is placed in a URL path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.');

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Failed to initialize HTTP client: {0}")]
    InitError(String),
    #[error("Index request failed: {0}")]
    RequestError(#[from] reqwest::Error),
}

/// Existence probe against a remote package index.
///
/// The resolver depends on this trait rather than on a concrete transport,
/// so tests can substitute a deterministic in-memory index for the network.
/// A probe may fail; the resolver downgrades failures to "does not exist".
#[async_trait]
pub trait PackageIndex {
    /// Whether a package with this name exists on the index.
    async fn exists(&self, name: &str) -> Result<bool, IndexError>;
}

/// Package index backed by the PyPI JSON API.
///
/// Existence is probed with `GET {base-url}/{name}/json`: a 2xx response
/// means the package exists, any other status means it does not. No
/// authentication, no retries.
pub struct PyPiIndex {
    client: reqwest::Client,
    base_url: String,
}

impl PyPiIndex {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, IndexError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("reqgen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| IndexError::InitError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn package_url(&self, name: &str) -> String {
        let encoded = utf8_percent_encode(name, PATH_SEGMENT);
        format!("{}/{}/json", self.base_url, encoded)
    }
}

#[async_trait]
impl PackageIndex for PyPiIndex {
    async fn exists(&self, name: &str) -> Result<bool, IndexError> {
        let response = self.client.get(self.package_url(name)).send().await?;
        Ok(response.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_url() {
        let index = PyPiIndex::new(DEFAULT_INDEX_URL, Duration::from_secs(10)).unwrap();
        assert_eq!(
            index.package_url("numpy"),
            "https://pypi.org/pypi/numpy/json"
        );
        assert_eq!(
            index.package_url("scikit-learn"),
            "https://pypi.org/pypi/scikit-learn/json"
        );
    }

    #[test]
    fn test_package_url_escapes_unusual_characters() {
        let index = PyPiIndex::new(DEFAULT_INDEX_URL, Duration::from_secs(10)).unwrap();
        assert_eq!(
            index.package_url("a/b"),
            "https://pypi.org/pypi/a%2Fb/json"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let index = PyPiIndex::new("https://pypi.org/pypi/", Duration::from_secs(10)).unwrap();
        assert_eq!(index.package_url("flask"), "https://pypi.org/pypi/flask/json");
    }
}
