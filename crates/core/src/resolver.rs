use crate::alias;
use crate::cache::ExistenceCache;
use crate::index::PackageIndex;
use crate::models::{Resolution, ResolutionReport, ResolveMetadata, ResolveStats};
use std::time::Instant;

/// Resolves import names to best-guess installable package names.
///
/// Each name is handled in input order: alias mapping first, then a cached
/// existence probe against the index, then a fallback probe of the unmapped
/// name when the alias missed. Probes run strictly one at a time; a name's
/// checks complete before the next name starts.
///
/// The resolver owns its [`ExistenceCache`], so reusing one resolver across
/// calls keeps the memoized probe results warm.
pub struct Resolver<I: PackageIndex> {
    index: I,
    cache: ExistenceCache,
}

impl<I: PackageIndex> Resolver<I> {
    pub fn new(index: I) -> Self {
        Self {
            index,
            cache: ExistenceCache::new(),
        }
    }

    /// Build a resolver around a previously warmed cache.
    pub fn with_cache(index: I, cache: ExistenceCache) -> Self {
        Self { index, cache }
    }

    /// Consume the resolver, keeping the warmed cache for a later run.
    pub fn into_cache(self) -> ExistenceCache {
        self.cache
    }

    /// Resolve every name to a package or an unresolved marker.
    ///
    /// Never fails: probe errors count as "does not exist", so the worst
    /// outcome is a report whose manifest is entirely comment lines. Every
    /// input name appears in the report exactly once, in input order.
    pub async fn resolve(&mut self, names: &[String]) -> ResolutionReport {
        let start = Instant::now();
        let mut stats = ResolveStats::default();
        let mut resolutions = Vec::with_capacity(names.len());

        for name in names {
            stats.total_imports += 1;

            let resolution = self.resolve_one(name, &mut stats).await;
            match resolution.package {
                Some(_) if resolution.via_alias => {
                    stats.resolved += 1;
                    stats.aliased += 1;
                }
                Some(_) => stats.resolved += 1,
                None => stats.unresolved += 1,
            }

            resolutions.push(resolution);
        }

        ResolutionReport {
            resolutions,
            stats,
            metadata: ResolveMetadata {
                duration_ms: start.elapsed().as_millis() as u64,
                ..Default::default()
            },
        }
    }

    async fn resolve_one(&mut self, name: &str, stats: &mut ResolveStats) -> Resolution {
        let lower = name.to_lowercase();

        if let Some(alias_package) = alias::canonical_package(&lower) {
            if self.exists(alias_package, stats).await {
                return Resolution {
                    import: name.to_string(),
                    package: Some(alias_package.to_lowercase()),
                    via_alias: true,
                };
            }

            // Alias missed on the index; fall back to the unmapped name.
            if self.exists(name, stats).await {
                return Resolution {
                    import: name.to_string(),
                    package: Some(lower),
                    via_alias: false,
                };
            }

            return Resolution {
                import: name.to_string(),
                package: None,
                via_alias: false,
            };
        }

        if self.exists(name, stats).await {
            return Resolution {
                import: name.to_string(),
                package: Some(lower),
                via_alias: false,
            };
        }

        Resolution {
            import: name.to_string(),
            package: None,
            via_alias: false,
        }
    }

    /// Cached existence check. A failed probe counts as "does not exist".
    async fn exists(&mut self, name: &str, stats: &mut ResolveStats) -> bool {
        if let Some(cached) = self.cache.get(name) {
            stats.cache_hits += 1;
            return cached;
        }

        stats.index_probes += 1;
        let exists = self.index.exists(name).await.unwrap_or(false);
        self.cache.insert(name, exists);
        exists
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::IndexError;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Deterministic in-memory index. Case-insensitive like PyPI.
    struct FakeIndex {
        packages: HashSet<String>,
        probes: AtomicUsize,
        fail: bool,
    }

    impl FakeIndex {
        fn with_packages(packages: &[&str]) -> Self {
            Self {
                packages: packages.iter().map(|p| p.to_lowercase()).collect(),
                probes: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                packages: HashSet::new(),
                probes: AtomicUsize::new(0),
                fail: true,
            }
        }

        fn probe_count(&self) -> usize {
            self.probes.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PackageIndex for FakeIndex {
        async fn exists(&self, name: &str) -> Result<bool, IndexError> {
            self.probes.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(IndexError::InitError("index offline".to_string()));
            }
            Ok(self.packages.contains(&name.to_lowercase()))
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|n| n.to_string()).collect()
    }

    #[tokio::test]
    async fn test_plain_resolution_lowercases() {
        let mut resolver = Resolver::new(FakeIndex::with_packages(&["numpy"]));
        let report = resolver.resolve(&names(&["NumPy"])).await;

        assert_eq!(report.manifest(), "numpy");
        assert_eq!(report.stats.resolved, 1);
    }

    #[tokio::test]
    async fn test_alias_resolution() {
        let mut resolver = Resolver::new(FakeIndex::with_packages(&["opencv-python"]));
        let report = resolver.resolve(&names(&["cv2"])).await;

        assert_eq!(report.manifest(), "opencv-python");
        assert_eq!(report.stats.aliased, 1);
        assert!(report.resolutions[0].via_alias);
    }

    #[tokio::test]
    async fn test_alias_fallback_to_original() {
        // `yaml` aliases to PyYAML; an index that only knows `yaml` itself
        // must fall back to the lowercased original.
        let mut resolver = Resolver::new(FakeIndex::with_packages(&["yaml"]));
        let report = resolver.resolve(&names(&["yaml"])).await;

        assert_eq!(report.manifest(), "yaml");
        assert!(!report.resolutions[0].via_alias);
        assert_eq!(report.stats.index_probes, 2);
    }

    #[tokio::test]
    async fn test_unresolved_comment_quotes_original() {
        let mut resolver = Resolver::new(FakeIndex::with_packages(&[]));
        let report = resolver.resolve(&names(&["Foo"])).await;

        assert_eq!(
            report.manifest(),
            "# Could not resolve \"Foo\" to a PyPI package"
        );
        assert_eq!(report.stats.unresolved, 1);
    }

    #[tokio::test]
    async fn test_duplicate_names_share_probes_and_collapse() {
        let index = FakeIndex::with_packages(&["numpy"]);
        let mut resolver = Resolver::new(index);
        let report = resolver.resolve(&names(&["numpy", "NumPy"])).await;

        assert_eq!(report.manifest(), "numpy");
        assert_eq!(report.resolutions.len(), 2);
        assert_eq!(report.stats.index_probes, 1);
        assert_eq!(report.stats.cache_hits, 1);
    }

    #[tokio::test]
    async fn test_warm_cache_issues_no_new_probes() {
        let mut resolver = Resolver::new(FakeIndex::with_packages(&["numpy", "pandas"]));
        let input = names(&["numpy", "pandas", "nosuchpkg"]);

        let first = resolver.resolve(&input).await;
        let probes_after_first = resolver.index.probe_count();
        let second = resolver.resolve(&input).await;

        assert_eq!(first.manifest(), second.manifest());
        assert_eq!(resolver.index.probe_count(), probes_after_first);
        assert_eq!(second.stats.index_probes, 0);
    }

    #[tokio::test]
    async fn test_probe_failure_means_unresolved() {
        let mut resolver = Resolver::new(FakeIndex::failing());
        let report = resolver.resolve(&names(&["numpy", "cv2"])).await;

        assert_eq!(report.stats.unresolved, 2);
        assert_eq!(
            report.manifest(),
            "# Could not resolve \"numpy\" to a PyPI package\n\
             # Could not resolve \"cv2\" to a PyPI package"
        );
    }

    #[tokio::test]
    async fn test_every_name_appears_exactly_once() {
        let mut resolver = Resolver::new(FakeIndex::with_packages(&["requests"]));
        let input = names(&["requests", "definitely_missing"]);
        let report = resolver.resolve(&input).await;

        assert_eq!(report.resolutions.len(), input.len());
        let manifest = report.manifest();
        assert_eq!(manifest.matches("requests").count(), 1);
        assert_eq!(manifest.matches("definitely_missing").count(), 1);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let mut resolver = Resolver::new(FakeIndex::with_packages(&[]));
        let report = resolver.resolve(&[]).await;

        assert!(report.resolutions.is_empty());
        assert_eq!(report.manifest(), "");
        assert_eq!(resolver.index.probe_count(), 0);
    }

    #[tokio::test]
    async fn test_cache_survives_into_cache_roundtrip() {
        let mut resolver = Resolver::new(FakeIndex::with_packages(&["flask"]));
        resolver.resolve(&names(&["flask"])).await;

        let cache = resolver.into_cache();
        assert_eq!(cache.get("flask"), Some(true));

        let mut warmed = Resolver::with_cache(FakeIndex::with_packages(&["flask"]), cache);
        let report = warmed.resolve(&names(&["flask"])).await;
        assert_eq!(report.stats.index_probes, 0);
        assert_eq!(report.stats.cache_hits, 1);
    }
}
