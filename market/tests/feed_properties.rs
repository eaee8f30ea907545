//! Invariants of the feed and the store under random inputs.

use market::{
    Asset, AssetStore, FeedConfig, FeedSimulator, Jitter, RngJitter, RollingSamples,
    SortDirection, SortKey,
    seed::{SAMPLE_LEN, initial_assets},
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

struct FixedJitter(f64);

impl Jitter for FixedJitter {
    fn symmetric(&mut self, half_width: f64) -> f64 {
        half_width * self.0
    }
}

fn asset(id: String, symbol: &str, price: f64) -> Asset {
    Asset {
        id: id.clone(),
        rank: 1,
        name: id,
        symbol: symbol.to_string(),
        price,
        previous_price: None,
        percent_change_1h: 0.0,
        percent_change_24h: 0.0,
        percent_change_7d: 0.0,
        market_cap: 0,
        volume_24h: 1_000_000,
        circulating_supply: 1.0,
        max_supply: None,
        samples: RollingSamples::new([100.0; SAMPLE_LEN]),
    }
}

fn nonzero_unit() -> impl Strategy<Value = f64> {
    prop_oneof![-1.0..-0.001f64, 0.001..1.0f64]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn sample_window_length_is_invariant(seed in any::<u64>(), ticks in 1usize..40) {
        let store = AssetStore::new(initial_assets(&mut StdRng::seed_from_u64(seed)));
        let mut sim = FeedSimulator::new(
            FeedConfig::default(),
            RngJitter::new(StdRng::seed_from_u64(seed ^ 0x5eed)),
        );

        for _ in 0..ticks {
            sim.tick(&store);
            for a in store.assets() {
                prop_assert_eq!(a.samples.len(), SAMPLE_LEN);
            }
        }
    }

    #[test]
    fn stablecoin_stays_pinned(seed in any::<u64>(), ticks in 1usize..40) {
        let store = AssetStore::new(initial_assets(&mut StdRng::seed_from_u64(seed)));
        let mut sim = FeedSimulator::new(
            FeedConfig::default(),
            RngJitter::new(StdRng::seed_from_u64(seed)),
        );

        let mut last = store.get("tether").unwrap().price;
        for _ in 0..ticks {
            sim.tick(&store);
            let usdt = store.get("tether").unwrap();

            // ±0.05% plus half a unit of the 4th decimal.
            prop_assert!((usdt.price - last).abs() <= last * 0.0005 + 0.00005);
            prop_assert!(usdt.percent_change_1h.abs() <= 0.01);
            prop_assert!(usdt.percent_change_24h.abs() <= 0.01);
            last = usdt.price;
        }
    }

    #[test]
    fn stable_move_is_ten_times_tighter(unit in nonzero_unit()) {
        let cfg = FeedConfig::default();
        let price = 1_000_000.0;

        let stable = FeedSimulator::new(cfg.clone(), FixedJitter(unit))
            .next_asset(&asset("usdt".into(), "USDT", price));
        let volatile = FeedSimulator::new(cfg, FixedJitter(unit))
            .next_asset(&asset("btc".into(), "BTC", price));

        let stable_move = (stable.price - price).abs();
        let volatile_move = (volatile.price - price).abs();
        prop_assert!(stable_move * 10.0 <= volatile_move,
            "stable {} vs volatile {}", stable_move, volatile_move);
    }

    #[test]
    fn descending_reverses_ascending(prices in prop::collection::vec(0u32..50, 1..24)) {
        let assets: Vec<Asset> = prices
            .iter()
            .enumerate()
            .map(|(i, p)| asset(format!("a{i:02}"), "X", *p as f64))
            .collect();
        let store = AssetStore::new(assets);

        store.set_sort(SortKey::Price, SortDirection::Asc);
        let asc = store.assets();
        store.set_sort(SortKey::Price, SortDirection::Desc);
        let desc = store.assets();

        let pos_desc = |id: &str| desc.iter().position(|a| a.id == id).unwrap();

        for (i, a) in asc.iter().enumerate() {
            prop_assert!(asc[..i].iter().all(|b| b.price <= a.price));
            for b in &asc[i + 1..] {
                if a.price < b.price {
                    prop_assert!(pos_desc(&b.id) < pos_desc(&a.id));
                }
            }
        }
    }

    #[test]
    fn repeated_snapshot_records_change_once(p1 in 1.0..1e6f64, p2 in 1.0..1e6f64) {
        prop_assume!(p1 != p2);
        let store = AssetStore::new(vec![asset("x".into(), "X", p1)]);
        let update = asset("x".into(), "X", p2);

        store.apply_snapshot(std::slice::from_ref(&update));
        store.apply_snapshot(std::slice::from_ref(&update));

        let x = store.get("x").unwrap();
        prop_assert_eq!(x.price, p2);
        prop_assert_eq!(x.previous_price, Some(p1));
    }
}
