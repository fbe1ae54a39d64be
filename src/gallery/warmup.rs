// SPDX-License-Identifier: MPL-2.0
//! Cache warm-up for a freshly loaded gallery.

use crate::gallery::GalleryList;
use crate::media::{PreloadCache, PreloadOutcome};
use tokio::task::JoinHandle;

/// Result of [`initialize`].
#[derive(Debug)]
pub struct Warmup {
    /// Outcomes for the visible prefix, in gallery order.
    pub visible: Vec<PreloadOutcome>,
    /// The detached batch for the rest of the gallery, if there was a rest.
    ///
    /// Dropping the handle does not cancel the batch.
    pub background: Option<JoinHandle<Vec<PreloadOutcome>>>,
}

impl Warmup {
    #[must_use]
    pub fn summary(&self) -> WarmupSummary {
        let loaded = self.visible.iter().filter(|o| o.is_loaded()).count();
        WarmupSummary {
            loaded,
            failed: self.visible.len() - loaded,
            background_started: self.background.is_some(),
        }
    }
}

/// Counts reported to the application once the visible prefix has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WarmupSummary {
    pub loaded: usize,
    pub failed: usize,
    pub background_started: bool,
}

/// Preloads the first `visible_prefix` items and waits for them to settle, then
/// starts preloading the remaining items in the background.
///
/// Background failures are only logged.
///
/// Must be called from within a Tokio runtime.
pub async fn initialize(cache: PreloadCache, gallery: GalleryList, visible_prefix: usize) -> Warmup {
    let (head, tail) = gallery.split_prefix(visible_prefix);
    let tail = tail.to_vec();

    let visible = cache.preload_all(head.iter().cloned()).await;
    for outcome in &visible {
        if let PreloadOutcome::Failed(err) = outcome {
            tracing::warn!(source = %err.id, reason = %err.reason, "visible item failed to preload");
        }
    }
    tracing::info!(
        loaded = visible.iter().filter(|o| o.is_loaded()).count(),
        total = visible.len(),
        "visible gallery prefix settled"
    );

    let background = (!tail.is_empty()).then(|| {
        tokio::spawn(async move {
            let outcomes = cache.preload_all(tail).await;
            for outcome in &outcomes {
                if let PreloadOutcome::Failed(err) = outcome {
                    tracing::warn!(source = %err.id, reason = %err.reason, "background preload failed");
                }
            }
            tracing::debug!(count = outcomes.len(), "background preload finished");
            outcomes
        })
    });

    Warmup { visible, background }
}
