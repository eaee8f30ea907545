use common::logger::{TraceId, init_tracing, root_span};
use market::seed::initial_assets;
use market::{AssetStore, FeedSimulator, RngJitter};
use pricewatch::{
    command::run_commands,
    config::AppConfig,
    view::{ViewFormat, run_view},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::{Instrument, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env();
    init_tracing("pricewatch", cfg.json);

    let mut rng = match cfg.feed_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let store = AssetStore::new(initial_assets(&mut rng));
    info!(
        assets = store.len(),
        interval_ms = cfg.feed_interval_ms,
        seed = ?cfg.feed_seed,
        "asset store ready"
    );

    let feed = FeedSimulator::new(cfg.feed_config(), RngJitter::new(rng)).start(store.clone());

    let view = tokio::spawn(
        run_view(store.clone(), ViewFormat::from_json_flag(cfg.json))
            .instrument(root_span("console_view", &TraceId::default())),
    );

    let (quit_tx, mut quit_rx) = mpsc::channel(1);
    let stdin = BufReader::new(tokio::io::stdin());
    tokio::spawn(async move {
        if let Err(e) = run_commands(store, stdin, quit_tx).await {
            tracing::error!(error = ?e, "command reader failed");
        }
    });

    tokio::select! {
        _ = tokio::signal::ctrl_c() => info!("ctrl-c received"),
        Some(()) = quit_rx.recv() => {}
    }

    let ticks = feed.stop().await?;
    view.abort();

    info!(ticks, "pricewatch stopped");
    Ok(())
}
