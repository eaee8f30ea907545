//! Timer lifecycle of the running feed, on tokio's paused clock.

use std::time::Duration;

use market::{AssetStore, FeedConfig, FeedSimulator, RngJitter, seed::initial_assets};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::time::{Instant, sleep};

fn setup() -> (AssetStore, FeedSimulator<RngJitter<StdRng>>) {
    let store = AssetStore::new(initial_assets(&mut StdRng::seed_from_u64(3)));
    let sim = FeedSimulator::new(
        FeedConfig::default(),
        RngJitter::new(StdRng::seed_from_u64(4)),
    );
    (store, sim)
}

#[tokio::test(start_paused = true)]
async fn first_tick_waits_one_interval() {
    let (store, sim) = setup();
    let mut rx = store.subscribe();
    let started = Instant::now();

    let handle = sim.start(store.clone());
    rx.changed().await.unwrap();

    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(2), "{elapsed:?}");
    assert!(elapsed < Duration::from_secs(3), "{elapsed:?}");
    assert_eq!(store.revision(), 1);

    assert_eq!(handle.stop().await.unwrap(), 1);
}

#[tokio::test(start_paused = true)]
async fn publishes_one_batch_per_tick() {
    let (store, sim) = setup();
    let mut rx = store.subscribe();

    let handle = sim.start(store.clone());
    for expected in 1..=3u64 {
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), expected);
    }

    assert_eq!(handle.stop().await.unwrap(), 3);
    assert_eq!(store.revision(), 3);
}

#[tokio::test(start_paused = true)]
async fn stop_halts_future_ticks() {
    let (store, sim) = setup();
    let mut rx = store.subscribe();

    let handle = sim.start(store.clone());
    rx.changed().await.unwrap();
    handle.stop().await.unwrap();

    sleep(Duration::from_secs(30)).await;

    assert_eq!(store.revision(), 1);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_cancels_the_timer() {
    let (store, sim) = setup();
    let mut rx = store.subscribe();

    let handle = sim.start(store.clone());
    rx.changed().await.unwrap();
    drop(handle);

    sleep(Duration::from_secs(30)).await;

    assert_eq!(store.revision(), 1);
}

#[tokio::test(start_paused = true)]
async fn custom_interval_is_honoured() {
    let (store, _) = setup();
    let sim = FeedSimulator::new(
        FeedConfig::default().with_interval(Duration::from_millis(250)),
        RngJitter::new(StdRng::seed_from_u64(8)),
    );
    let started = Instant::now();

    let handle = sim.start(store.clone());
    sleep(Duration::from_millis(1_100)).await;
    let ticks = handle.stop().await.unwrap();

    assert_eq!(ticks, 4);
    assert_eq!(store.revision(), 4);
    assert!(started.elapsed() >= Duration::from_millis(1_100));
}

#[tokio::test(start_paused = true)]
async fn empty_store_ticks_without_publishing() {
    let store = AssetStore::new(Vec::new());
    let sim = FeedSimulator::new(
        FeedConfig::default(),
        RngJitter::new(StdRng::seed_from_u64(4)),
    );

    let handle = sim.start(store.clone());
    sleep(Duration::from_millis(10_500)).await;

    assert_eq!(handle.stop().await.unwrap(), 5);
    assert_eq!(store.revision(), 0);
    assert!(store.is_empty());
}
