use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("unknown sort direction: {0} (expected asc or desc)")]
    UnknownSortDirection(String),

    #[error("feed task failed: {0}")]
    FeedTask(#[from] tokio::task::JoinError),
}
