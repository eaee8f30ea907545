//! End-to-end behaviour of the feed publishing into the store.

use market::{
    AssetPatch, AssetStore, FeedConfig, FeedSimulator, Jitter, SortDirection, SortKey,
    seed::{SAMPLE_LEN, initial_assets},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Every draw is `half_width * unit`.
struct FixedJitter(f64);

impl Jitter for FixedJitter {
    fn symmetric(&mut self, half_width: f64) -> f64 {
        half_width * self.0
    }
}

fn seeded_store() -> AssetStore {
    AssetStore::new(initial_assets(&mut StdRng::seed_from_u64(11)))
}

fn names(store: &AssetStore) -> Vec<String> {
    store.assets().into_iter().map(|a| a.name).collect()
}

#[test]
fn one_tick_moves_bitcoin_one_percent() {
    let store = seeded_store();
    let mut sim = FeedSimulator::new(FeedConfig::default(), FixedJitter(1.0));

    let merged = sim.tick(&store);

    let btc = store.get("bitcoin").unwrap();
    assert_eq!(merged, 6);
    assert_eq!(btc.price, 94697.07);
    assert_eq!(btc.previous_price, Some(93759.48));
    assert_eq!(btc.samples.len(), SAMPLE_LEN);
}

#[test]
fn price_descending_orders_the_seed_list() {
    let store = seeded_store();

    store.set_sort(SortKey::Price, SortDirection::Desc);

    assert_eq!(
        names(&store),
        ["Bitcoin", "Ethereum", "BNB", "Solana", "XRP", "Tether"]
    );
}

#[test]
fn unchanged_tether_price_records_nothing() {
    let store = seeded_store();

    assert!(store.apply_patch(AssetPatch::new("tether").with_price(1.00)));

    assert_eq!(store.get("tether").unwrap().previous_price, None);
}

#[test]
fn reapplying_the_same_snapshot_keeps_first_previous_price() {
    let store = seeded_store();

    let mut snapshot = store.assets();
    let btc = snapshot.iter_mut().find(|a| a.id == "bitcoin").unwrap();
    btc.price = 95_000.0;

    store.apply_snapshot(&snapshot);
    store.apply_snapshot(&snapshot);

    let btc = store.get("bitcoin").unwrap();
    assert_eq!(btc.price, 95_000.0);
    assert_eq!(btc.previous_price, Some(93759.48));
}

#[test]
fn snapshot_without_price_moves_leaves_previous_prices() {
    let store = seeded_store();
    let mut sim = FeedSimulator::new(FeedConfig::default(), FixedJitter(1.0));
    sim.tick(&store);
    let before: Vec<_> = store.assets().iter().map(|a| a.previous_price).collect();

    store.apply_snapshot(&store.assets());

    let after: Vec<_> = store.assets().iter().map(|a| a.previous_price).collect();
    assert_eq!(before, after);
}

#[test]
fn refresh_discards_drift_for_following_ticks() {
    let store = seeded_store();
    let seed = store.assets();
    let mut drifting = FeedSimulator::new(FeedConfig::default(), FixedJitter(0.7));
    for _ in 0..5 {
        drifting.tick(&store);
    }
    assert_ne!(store.get("bitcoin").unwrap().price, 93759.48);

    store.reset_to_seed();

    // A zero-jitter tick must now start from the seed prices.
    let mut still = FeedSimulator::new(FeedConfig::default(), FixedJitter(0.0));
    still.tick(&store);
    for (now, orig) in store.assets().iter().zip(&seed) {
        assert_eq!(now.price, orig.price, "{}", now.id);
    }
}

#[test]
fn feed_never_touches_order_or_identity() {
    let store = seeded_store();
    store.set_sort(SortKey::Name, SortDirection::Asc);
    let order = names(&store);

    let mut sim = FeedSimulator::new(
        FeedConfig::default(),
        market::RngJitter::new(StdRng::seed_from_u64(5)),
    );
    for _ in 0..10 {
        sim.tick(&store);
    }

    assert_eq!(names(&store), order);
    for a in store.assets() {
        assert_eq!(a.samples.len(), SAMPLE_LEN);
    }
}
