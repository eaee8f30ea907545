use market::MarketError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("empty command")]
    EmptyCommand,

    #[error("unknown command: {0} (try: refresh, sort <key> [asc|desc], quit)")]
    UnknownCommand(String),

    #[error("sort needs a key, e.g. `sort price desc`")]
    MissingSortKey,

    #[error(transparent)]
    Market(#[from] MarketError),
}
