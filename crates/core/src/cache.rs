use std::collections::HashMap;

/// Memoized results of remote existence probes.
///
/// Keys are lowercase package names. Entries are never invalidated: a cache
/// lives as long as its resolver, or longer when carried over between runs
/// with [`crate::Resolver::into_cache`]. Repeated names therefore cost at
/// most one remote probe each.
#[derive(Debug, Clone, Default)]
pub struct ExistenceCache {
    entries: HashMap<String, bool>,
}

impl ExistenceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached existence result for a package name, if any.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.entries.get(&name.to_lowercase()).copied()
    }

    /// Record the existence result for a package name.
    pub fn insert(&mut self, name: &str, exists: bool) {
        self.entries.insert(name.to_lowercase(), exists);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
