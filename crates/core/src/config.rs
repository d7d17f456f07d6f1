use crate::index::DEFAULT_INDEX_URL;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to build glob pattern: {0}")]
    GlobError(#[from] globset::Error),
    #[error("Failed to parse gitignore: {0}")]
    GitignoreError(#[from] ignore::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Configuration for package resolution
#[derive(Debug, Clone)]
pub struct ResolveConfig {
    /// Base URL of the package index JSON API
    pub index_url: String,
    /// HTTP timeout applied to each existence probe
    pub timeout: Duration,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl ResolveConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index_url(mut self, url: impl Into<String>) -> Self {
        self.index_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Configuration for scanning source files
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// File or directory to scan
    pub root: PathBuf,
    /// Additional ignore patterns (glob style)
    pub ignore_patterns: Vec<String>,
    /// Custom ignore file path
    pub ignore_file: Option<PathBuf>,
    /// Include virtualenv / cache directories in the scan
    pub include_env_dirs: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            ignore_patterns: vec![],
            ignore_file: None,
            include_env_dirs: false,
        }
    }
}

impl ScanConfig {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ..Default::default()
        }
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    pub fn with_ignore_file(mut self, path: PathBuf) -> Self {
        self.ignore_file = Some(path);
        self
    }

    pub fn with_include_env_dirs(mut self, include: bool) -> Self {
        self.include_env_dirs = include;
        self
    }
}

/// Filter for ignoring files and directories
pub struct IgnoreFilter {
    gitignore: Option<Gitignore>,
    custom_globs: GlobSet,
    default_ignores: GlobSet,
}

impl IgnoreFilter {
    pub fn new(config: &ScanConfig) -> Result<Self, ConfigError> {
        // Load .gitignore if present
        let gitignore = if let Some(ref ignore_file) = config.ignore_file {
            let mut builder = GitignoreBuilder::new(&config.root);
            builder.add(ignore_file);
            Some(builder.build()?)
        } else {
            let gitignore_path = config.root.join(".gitignore");
            if gitignore_path.exists() {
                let mut builder = GitignoreBuilder::new(&config.root);
                builder.add(&gitignore_path);
                Some(builder.build()?)
            } else {
                None
            }
        };

        // Build custom ignore globs
        let mut custom_builder = GlobSetBuilder::new();
        for pattern in &config.ignore_patterns {
            custom_builder.add(Glob::new(pattern)?);
        }
        let custom_globs = custom_builder.build()?;

        // Default ignores (unless include_env_dirs is true)
        let mut default_builder = GlobSetBuilder::new();
        if !config.include_env_dirs {
            default_builder.add(Glob::new("**/.venv/**")?);
            default_builder.add(Glob::new("**/venv/**")?);
            default_builder.add(Glob::new("**/site-packages/**")?);
            default_builder.add(Glob::new("**/__pycache__/**")?);
            default_builder.add(Glob::new("**/.git/**")?);
            default_builder.add(Glob::new("**/.tox/**")?);
            default_builder.add(Glob::new("**/.eggs/**")?);
            default_builder.add(Glob::new("**/.mypy_cache/**")?);
            default_builder.add(Glob::new("**/.pytest_cache/**")?);
            default_builder.add(Glob::new("**/build/**")?);
            default_builder.add(Glob::new("**/dist/**")?);
            default_builder.add(Glob::new("**/*.pyc")?);
            default_builder.add(Glob::new("**/*.pyo")?);
            default_builder.add(Glob::new("**/.DS_Store")?);
        }
        let default_ignores = default_builder.build()?;

        Ok(Self {
            gitignore,
            custom_globs,
            default_ignores,
        })
    }

    /// Check if a path should be ignored
    pub fn should_ignore(&self, path: &Path, is_dir: bool) -> bool {
        let path_str = path.to_string_lossy();

        // Check default ignores
        if self.default_ignores.is_match(&*path_str) {
            return true;
        }

        // Check custom patterns
        if self.custom_globs.is_match(&*path_str) {
            return true;
        }

        // Check gitignore
        if let Some(ref gi) = self.gitignore {
            if gi.matched(path, is_dir).is_ignore() {
                return true;
            }
        }

        false
    }
}
