use crate::config::{IgnoreFilter, ScanConfig};
use crate::extractor;
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] crate::config::ConfigError),
}

/// Collects import names from a Python file or directory tree.
pub struct SourceScanner {
    config: ScanConfig,
    ignore_filter: IgnoreFilter,
}

impl SourceScanner {
    pub fn new(config: ScanConfig) -> Result<Self, ScanError> {
        let ignore_filter = IgnoreFilter::new(&config)?;
        Ok(Self {
            config,
            ignore_filter,
        })
    }

    /// Scan the root and return the deduplicated import names.
    ///
    /// Files are read and parsed in parallel; the merged result preserves
    /// the first-seen order over the sorted file list, so repeated scans of
    /// the same tree produce the same ordering. Unreadable files are
    /// skipped.
    pub fn scan(&self) -> Result<Vec<String>, ScanError> {
        let files = self.find_source_files()?;

        let per_file: Vec<Vec<String>> = files
            .par_iter()
            .filter_map(|path| fs::read_to_string(path).ok())
            .map(|content| extractor::extract(&content))
            .collect();

        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for file_names in per_file {
            for name in file_names {
                if seen.insert(name.clone()) {
                    names.push(name);
                }
            }
        }

        Ok(names)
    }

    /// Find all Python source files under the root.
    fn find_source_files(&self) -> Result<Vec<PathBuf>, ScanError> {
        if self.config.root.is_file() {
            return Ok(vec![self.config.root.clone()]);
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(&self.config.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if entry.file_type().is_dir() {
                continue;
            }

            if self.ignore_filter.should_ignore(path, false) {
                continue;
            }

            match path.extension().and_then(|ext| ext.to_str()) {
                Some("py") | Some("pyi") => files.push(path.to_path_buf()),
                _ => {}
            }
        }

        Ok(files)
    }
}
