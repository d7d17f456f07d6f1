//! Reqgen Core Library
//!
//! This library turns Python source text into a requirements.txt-style
//! dependency manifest. It scans import statements, maps well-known import
//! aliases to their installable package names, verifies candidates against
//! the PyPI JSON API (with memoized probes), and renders the deduplicated
//! result.
//!
//! # Features
//!
//! - Extract top-level module names from `import` / `from ... import` lines
//! - Resolve import names to installable packages with alias fallback
//! - Memoize remote existence checks across a resolver's lifetime
//! - Scan files or whole directory trees for imports
//! - Output the manifest as text, or the full report as JSON/YAML/summary
//!
//! # Example
//!
//! ```no_run
//! use reqgen_core::{extract, PyPiIndex, ResolveConfig, Resolver};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let names = extract("import numpy as np\nfrom sklearn import svm\n");
//!
//! let config = ResolveConfig::default();
//! let index = PyPiIndex::new(&config.index_url, config.timeout)?;
//! let mut resolver = Resolver::new(index);
//!
//! let report = resolver.resolve(&names).await;
//! println!("{}", report.manifest());
//! # Ok(())
//! # }
//! ```

pub mod alias;
pub mod cache;
pub mod config;
pub mod extractor;
pub mod index;
pub mod models;
pub mod output;
pub mod resolver;
pub mod scanner;
pub mod stdlib;

// Re-exports for convenience
pub use cache::ExistenceCache;
pub use config::{ConfigError, ResolveConfig, ScanConfig};
pub use extractor::extract;
pub use index::{IndexError, PackageIndex, PyPiIndex, DEFAULT_INDEX_URL};
pub use models::*;
pub use output::{format_output, format_summary, FormatError, OutputFormat};
pub use resolver::Resolver;
pub use scanner::{ScanError, SourceScanner};
