// SPDX-License-Identifier: MPL-2.0
//! Preload cache for gallery media.
//!
//! Media is loaded ahead of time so the lightbox can show it without waiting.
//!
//! # Design
//!
//! - **Append-only**: entries are inserted once and never evicted
//! - **Source-keyed**: entries are indexed by [`SourceId`]
//! - **Injected loader**: the cache delegates fetching to a [`MediaLoader`]
//! - **No in-flight deduplication**: two concurrent requests for the same
//!   uncached source both hit the loader; the cache is only consulted before
//!   a load starts and populated after it succeeds
//!
//! # Usage
//!
//! ```ignore
//! let cache = PreloadCache::new(Arc::new(FileLoader::new(root)));
//!
//! let handle = cache.preload(SourceId::from("photos/a.jpg")).await?;
//! let outcomes = cache.preload_all(gallery.iter().cloned()).await;
//! ```

use crate::error::LoadError;
use crate::media::{MediaHandle, MediaLoader, SourceId};
use futures_util::future::join_all;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Result of one entry of a batch preload.
#[derive(Debug, Clone)]
pub enum PreloadOutcome {
    Loaded { source: SourceId, handle: MediaHandle },
    Failed(LoadError),
}

impl PreloadOutcome {
    #[must_use]
    pub fn source(&self) -> &SourceId {
        match self {
            PreloadOutcome::Loaded { source, .. } => source,
            PreloadOutcome::Failed(err) => &err.id,
        }
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, PreloadOutcome::Loaded { .. })
    }
}

/// Statistics about preload cache behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreloadStats {
    /// Requests served from the cache.
    pub hits: u64,

    /// Requests that had to go to the loader.
    pub misses: u64,

    /// Successful loads stored in the cache.
    pub insertions: u64,

    /// Loads that failed.
    pub failures: u64,
}

impl PreloadStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

#[derive(Debug, Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    insertions: AtomicU64,
    failures: AtomicU64,
}

/// Session-lifetime cache of loaded media.
///
/// Cloning is cheap and every clone shares the same entries, so a clone can be
/// moved into an async task.
#[derive(Clone)]
pub struct PreloadCache {
    entries: Arc<RwLock<HashMap<SourceId, MediaHandle>>>,
    loader: Arc<dyn MediaLoader>,
    counters: Arc<Counters>,
}

impl PreloadCache {
    #[must_use]
    pub fn new(loader: Arc<dyn MediaLoader>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            loader,
            counters: Arc::new(Counters::default()),
        }
    }

    /// Returns the handle for `source`, loading it on first request.
    ///
    /// A cached source resolves on the first poll without calling the loader.
    ///
    /// # Errors
    ///
    /// Returns the loader's [`LoadError`]; nothing is cached in that case.
    pub async fn preload(&self, source: SourceId) -> Result<MediaHandle, LoadError> {
        if let Some(handle) = self.get(&source) {
            self.counters.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(handle);
        }
        self.counters.misses.fetch_add(1, Ordering::Relaxed);

        let kind = source.kind();
        match self.loader.load(source.clone(), kind).await {
            Ok(handle) => {
                self.entries
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(source, handle.clone());
                self.counters.insertions.fetch_add(1, Ordering::Relaxed);
                Ok(handle)
            }
            Err(err) => {
                self.counters.failures.fetch_add(1, Ordering::Relaxed);
                Err(err)
            }
        }
    }

    /// Preloads every source and waits for all of them to settle.
    ///
    /// Failures do not stop the batch. The outcomes are in input order,
    /// whatever order the loads finish in.
    pub async fn preload_all<I>(&self, sources: I) -> Vec<PreloadOutcome>
    where
        I: IntoIterator<Item = SourceId>,
    {
        join_all(sources.into_iter().map(|source| async move {
            match self.preload(source.clone()).await {
                Ok(handle) => PreloadOutcome::Loaded { source, handle },
                Err(err) => PreloadOutcome::Failed(err),
            }
        }))
        .await
    }

    /// Gets a cached handle without loading.
    #[must_use]
    pub fn get(&self, source: &SourceId) -> Option<MediaHandle> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(source)
            .cloned()
    }

    #[must_use]
    pub fn contains(&self, source: &SourceId) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(source)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn stats(&self) -> PreloadStats {
        PreloadStats {
            hits: self.counters.hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
            insertions: self.counters.insertions.load(Ordering::Relaxed),
            failures: self.counters.failures.load(Ordering::Relaxed),
        }
    }
}

impl std::fmt::Debug for PreloadCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreloadCache")
            .field("entries", &self.len())
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadFailure;
    use crate::media::{ImageData, MediaKind};
    use futures_util::future::{BoxFuture, FutureExt};
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Loader that succeeds unless the source is listed as broken, and records
    /// every call it receives.
    #[derive(Default)]
    struct ScriptedLoader {
        broken: HashSet<String>,
        /// Per-source artificial latency, to shuffle completion order.
        delays: HashMap<String, Duration>,
        calls: Mutex<Vec<(String, MediaKind)>>,
    }

    impl ScriptedLoader {
        fn calls(&self) -> Vec<(String, MediaKind)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl MediaLoader for ScriptedLoader {
        fn load(
            &self,
            source: SourceId,
            kind: MediaKind,
        ) -> BoxFuture<'static, Result<MediaHandle, LoadError>> {
            self.calls
                .lock()
                .unwrap()
                .push((source.as_str().to_string(), kind));
            let broken = self.broken.contains(source.as_str());
            let delay = self.delays.get(source.as_str()).copied();
            async move {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                if broken {
                    Err(LoadError::new(source, LoadFailure::Io("404".into())))
                } else {
                    Ok(MediaHandle::Image(ImageData::from_rgba(1, 1, vec![0; 4])))
                }
            }
            .boxed()
        }
    }

    fn cache_with(loader: ScriptedLoader) -> (PreloadCache, Arc<ScriptedLoader>) {
        let loader = Arc::new(loader);
        (PreloadCache::new(loader.clone()), loader)
    }

    #[tokio::test]
    async fn new_cache_is_empty() {
        let (cache, _) = cache_with(ScriptedLoader::default());
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), PreloadStats::default());
    }

    #[tokio::test]
    async fn successful_preload_is_cached() {
        let (cache, loader) = cache_with(ScriptedLoader::default());
        let source = SourceId::from("a.jpg");

        cache.preload(source.clone()).await.expect("load should succeed");

        assert!(cache.contains(&source));
        assert_eq!(loader.calls(), vec![("a.jpg".to_string(), MediaKind::Image)]);
        assert_eq!(cache.stats().insertions, 1);
    }

    #[tokio::test]
    async fn failed_preload_is_not_cached() {
        let (cache, _) = cache_with(ScriptedLoader {
            broken: HashSet::from(["gone.png".to_string()]),
            ..Default::default()
        });
        let source = SourceId::from("gone.png");

        let err = cache.preload(source.clone()).await.unwrap_err();

        assert_eq!(err.id, source);
        assert!(!cache.contains(&source));
        assert_eq!(cache.stats().failures, 1);
    }

    #[tokio::test]
    async fn cached_source_resolves_on_first_poll_without_loading() {
        let (cache, loader) = cache_with(ScriptedLoader::default());
        let source = SourceId::from("a.jpg");
        cache.preload(source.clone()).await.unwrap();

        let again = cache.preload(source.clone()).now_or_never();

        assert!(matches!(again, Some(Ok(_))));
        assert_eq!(loader.calls().len(), 1);
        assert_eq!(cache.stats().hits, 1);
    }

    #[tokio::test]
    async fn classifies_videos_before_loading() {
        let (cache, loader) = cache_with(ScriptedLoader::default());
        cache.preload(SourceId::from("intro.webm")).await.unwrap();
        assert_eq!(loader.calls()[0].1, MediaKind::Video);
    }

    #[tokio::test]
    async fn concurrent_requests_are_not_deduplicated() {
        // Slow enough that the second miss starts before the first one lands.
        let (cache, loader) = cache_with(ScriptedLoader {
            delays: HashMap::from([("a.jpg".to_string(), Duration::from_millis(20))]),
            ..Default::default()
        });
        let source = SourceId::from("a.jpg");

        let (first, second) =
            tokio::join!(cache.preload(source.clone()), cache.preload(source.clone()));

        assert!(first.is_ok() && second.is_ok());
        assert_eq!(loader.calls().len(), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().misses, 2);
        assert_eq!(cache.stats().hits, 0);
    }

    #[tokio::test]
    async fn preload_all_settles_every_entry_in_input_order() {
        let (cache, _) = cache_with(ScriptedLoader {
            broken: HashSet::from(["b.jpg".to_string()]),
            delays: HashMap::from([("a.jpg".to_string(), Duration::from_millis(30))]),
            ..Default::default()
        });

        let outcomes = cache
            .preload_all(["a.jpg", "b.jpg", "c.jpg"].map(SourceId::from))
            .await;

        let sources: Vec<&str> = outcomes.iter().map(|o| o.source().as_str()).collect();
        assert_eq!(sources, vec!["a.jpg", "b.jpg", "c.jpg"]);
        assert!(outcomes[0].is_loaded());
        assert!(matches!(&outcomes[1], PreloadOutcome::Failed(err) if err.id.as_str() == "b.jpg"));
        assert!(outcomes[2].is_loaded());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn hit_rate_handles_empty_stats() {
        assert_eq!(PreloadStats::default().hit_rate(), 0.0);
        let stats = PreloadStats {
            hits: 1,
            misses: 1,
            ..Default::default()
        };
        assert!((stats.hit_rate() - 50.0).abs() < 0.01);
    }
}
