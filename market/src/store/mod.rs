//! AssetStore
//!
//! Canonical in-memory state for the price board:
//!   • ordered asset list (order changes only on sort)
//!   • current sort key and direction
//!   • load status slot for a future async source
//!
//! Every mutation bumps a revision published on a `watch` channel; views
//! re-read [`AssetStore::view`] whenever the revision changes.

pub mod merge;

use std::collections::HashMap;
use std::sync::Arc;

use common::time::now_ms;
use parking_lot::RwLock;
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, instrument};

use crate::types::{Asset, AssetPatch, LoadStatus, SortDirection, SortKey};
use merge::{merge_update, overlay_patch};

/// Point-in-time copy of the store state handed to views.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreView {
    pub assets: Vec<Asset>,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    pub status: LoadStatus,
    pub error: Option<String>,

    /// Incremented on every mutation.
    pub revision: u64,
    /// Wall-clock time of the last mutation (ms since epoch).
    pub updated_ms: u64,
}

struct Inner {
    state: RwLock<StoreView>,
    /// Original asset list, restored by `reset_to_seed`.
    seed: Vec<Asset>,
    revision: watch::Sender<u64>,
}

/// Cloneable handle to the single store instance.
#[derive(Clone)]
pub struct AssetStore {
    inner: Arc<Inner>,
}

impl AssetStore {
    /// Create a store holding `seed`, sorted by rank ascending.
    pub fn new(seed: Vec<Asset>) -> Self {
        let mut assets = seed.clone();
        sort_assets(&mut assets, SortKey::Rank, SortDirection::Asc);

        let (revision, _) = watch::channel(0);

        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(StoreView {
                    assets,
                    sort_key: SortKey::Rank,
                    sort_direction: SortDirection::Asc,
                    status: LoadStatus::Idle,
                    error: None,
                    revision: 0,
                    updated_ms: now_ms(),
                }),
                seed,
                revision,
            }),
        }
    }

    /// Merge a complete snapshot, matching assets by id.
    ///
    /// Assets missing from the snapshot are left alone and snapshot entries
    /// with unknown ids are dropped; the asset set never grows or shrinks.
    /// Returns the number of assets merged.
    pub fn apply_snapshot(&self, snapshot: &[Asset]) -> usize {
        let mut state = self.inner.state.write();
        self.merge_locked(&mut state, snapshot)
    }

    /// Derive a snapshot from the current assets and merge it, all under one
    /// write lock. No other mutation can land between the read and the merge.
    ///
    /// Returns the number of assets merged.
    pub fn update_with<F>(&self, derive: F) -> usize
    where
        F: FnOnce(&[Asset]) -> Vec<Asset>,
    {
        let mut state = self.inner.state.write();
        let snapshot = derive(&state.assets);
        self.merge_locked(&mut state, &snapshot)
    }

    /// Overlay a sparse update onto one asset.
    ///
    /// Returns `false` when no asset has the patch's id; that case is a
    /// silent no-op.
    pub fn apply_patch(&self, patch: AssetPatch) -> bool {
        let mut state = self.inner.state.write();

        let Some(existing) = state.assets.iter_mut().find(|a| a.id == patch.id) else {
            debug!(id = %patch.id, "patch ignored: unknown asset id");
            return false;
        };

        overlay_patch(existing, patch);
        self.publish(&mut state);
        true
    }

    /// Record the sort order and reorder the asset list.
    ///
    /// The sort is stable: assets comparing equal keep their relative order.
    #[instrument(skip(self), target = "store")]
    pub fn set_sort(&self, key: SortKey, direction: SortDirection) {
        let mut state = self.inner.state.write();

        state.sort_key = key;
        state.sort_direction = direction;
        sort_assets(&mut state.assets, key, direction);

        self.publish(&mut state);
        debug!("assets reordered");
    }

    /// Column-header behaviour: the active key while ascending flips to
    /// descending, anything else sorts ascending.
    ///
    /// Returns the direction that was applied.
    pub fn toggle_sort(&self, key: SortKey) -> SortDirection {
        let (current_key, current_dir) = self.sort();

        let direction = if key == current_key && current_dir == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };

        self.set_sort(key, direction);
        direction
    }

    /// Re-apply the original seed list as a full snapshot, discarding all
    /// accumulated drift. Previous prices follow the normal merge rule.
    #[instrument(skip(self), target = "store")]
    pub fn reset_to_seed(&self) -> usize {
        let merged = self.apply_snapshot(&self.inner.seed);
        info!(merged, "store reset to seed data");
        merged
    }

    pub fn set_status(&self, status: LoadStatus, error: Option<String>) {
        let mut state = self.inner.state.write();
        state.status = status;
        state.error = error;
        self.publish(&mut state);
    }

    /// Current assets in display order.
    pub fn assets(&self) -> Vec<Asset> {
        self.inner.state.read().assets.clone()
    }

    pub fn get(&self, id: &str) -> Option<Asset> {
        self.inner
            .state
            .read()
            .assets
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    pub fn sort(&self) -> (SortKey, SortDirection) {
        let state = self.inner.state.read();
        (state.sort_key, state.sort_direction)
    }

    pub fn view(&self) -> StoreView {
        self.inner.state.read().clone()
    }

    pub fn revision(&self) -> u64 {
        *self.inner.revision.borrow()
    }

    pub fn len(&self) -> usize {
        self.inner.state.read().assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Receiver that observes the revision after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.revision.subscribe()
    }

    fn merge_locked(&self, state: &mut StoreView, snapshot: &[Asset]) -> usize {
        let by_id: HashMap<&str, &Asset> = snapshot.iter().map(|a| (a.id.as_str(), a)).collect();
        let mut merged = 0;

        for existing in state.assets.iter_mut() {
            if let Some(update) = by_id.get(existing.id.as_str()) {
                *existing = merge_update(existing, update);
                merged += 1;
            }
        }

        if merged > 0 {
            self.publish(state);
        }

        merged
    }

    fn publish(&self, state: &mut StoreView) {
        state.revision += 1;
        state.updated_ms = now_ms();
        self.inner.revision.send_replace(state.revision);
    }
}

/// Stable sort of `assets` by `key`; descending reverses the comparison.
pub fn sort_assets(assets: &mut [Asset], key: SortKey, direction: SortDirection) {
    assets.sort_by(|a, b| {
        let ord = key.compare(a, b);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}
