//! Simulated live price feed.
//!
//! Data flow:
//! AssetStore (current state) → FeedSimulator::next_snapshot → AssetStore::apply_snapshot
//!
//! [`FeedSimulator`] holds the pure per-tick perturbation logic.
//! [`FeedSimulator::start`] moves it onto a tokio task and returns the
//! [`FeedHandle`] that owns the timer.

mod config;
mod handle;
mod jitter;
mod simulator;

pub use config::FeedConfig;
pub use handle::FeedHandle;
pub use jitter::{Jitter, RngJitter};
pub use simulator::{FeedSimulator, round_price, round_to};
