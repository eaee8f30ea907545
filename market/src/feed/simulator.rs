use tracing::debug;

use crate::feed::{FeedConfig, Jitter};
use crate::store::AssetStore;
use crate::types::Asset;

/// Derives the next snapshot of every asset from the previous one.
pub struct FeedSimulator<J> {
    config: FeedConfig,
    jitter: J,
}

impl<J: Jitter> FeedSimulator<J> {
    pub fn new(config: FeedConfig, jitter: J) -> Self {
        Self { config, jitter }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Perturb a single asset.
    ///
    /// Rank, name, symbol, market cap, supplies and the 7d change are
    /// carried over untouched.
    pub fn next_asset(&mut self, asset: &Asset) -> Asset {
        let cfg = &self.config;
        let jitter = &mut self.jitter;
        let stable = cfg.is_stablecoin(&asset.symbol);

        let mut next = asset.clone();

        let price_delta = jitter.symmetric(cfg.price_band(&asset.symbol));
        next.price = round_price(asset.price * (1.0 + price_delta));

        if stable {
            next.percent_change_1h = round_to(jitter.symmetric(cfg.stable_change_band), 2);
            next.percent_change_24h = round_to(jitter.symmetric(cfg.stable_change_band), 2);
        } else {
            next.percent_change_1h =
                round_to(asset.percent_change_1h + jitter.symmetric(cfg.change_1h_band), 2);
            next.percent_change_24h =
                round_to(asset.percent_change_24h + jitter.symmetric(cfg.change_24h_band), 2);
        }

        let volume_delta = jitter.symmetric(cfg.volume_band);
        next.volume_24h = (asset.volume_24h as f64 * (1.0 + volume_delta))
            .round()
            .max(0.0) as u64;

        if let Some(last) = asset.samples.latest() {
            let sample_delta = jitter.symmetric(cfg.sample_band);
            next.samples.advance(last * (1.0 + sample_delta));
        }

        next
    }

    /// Perturb every asset; order and length follow `current`.
    pub fn next_snapshot(&mut self, current: &[Asset]) -> Vec<Asset> {
        current.iter().map(|a| self.next_asset(a)).collect()
    }

    /// Run one tick against `store`: derive the next snapshot from its
    /// current assets and publish it as one batch.
    ///
    /// Read and merge happen under a single store lock, so a concurrent
    /// reset is never overwritten by a snapshot derived from stale state.
    /// Returns the number of assets merged.
    pub fn tick(&mut self, store: &AssetStore) -> usize {
        let merged = store.update_with(|current| self.next_snapshot(current));

        debug!(merged, "feed snapshot published");
        merged
    }
}

/// Round `value` to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Prices under 10 keep 4 decimals, everything else 2.
pub fn round_price(price: f64) -> f64 {
    if price < 10.0 {
        round_to(price, 4)
    } else {
        round_to(price, 2)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::feed::Jitter;

    /// Returns `half_width * unit` for every draw.
    pub struct FixedJitter(pub f64);

    impl Jitter for FixedJitter {
        fn symmetric(&mut self, half_width: f64) -> f64 {
            half_width * self.0
        }
    }
}
