//! Line commands read from stdin while the board is running.

use std::str::FromStr;

use anyhow::{Context, Result};
use market::{AssetStore, SortDirection, SortKey};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::error::AppError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Restore the seed dataset.
    Refresh,
    /// `sort <key>` toggles like a column header; an explicit direction
    /// is applied as given.
    Sort {
        key: SortKey,
        direction: Option<SortDirection>,
    },
    Quit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(AppError::EmptyCommand);
        };

        match verb.to_ascii_lowercase().as_str() {
            "refresh" | "r" => Ok(Self::Refresh),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            "sort" | "s" => {
                let key = words.next().ok_or(AppError::MissingSortKey)?.parse()?;
                let direction = words.next().map(str::parse).transpose()?;
                Ok(Self::Sort { key, direction })
            }
            other => Err(AppError::UnknownCommand(other.to_string())),
        }
    }
}

impl Command {
    /// Apply to the store. `Quit` is handled by the caller.
    pub fn apply(&self, store: &AssetStore) {
        match self {
            Self::Refresh => {
                store.reset_to_seed();
            }
            Self::Sort {
                key,
                direction: Some(direction),
            } => store.set_sort(*key, *direction),
            Self::Sort {
                key,
                direction: None,
            } => {
                let applied = store.toggle_sort(*key);
                info!(key = %key, direction = %applied, "sort toggled");
            }
            Self::Quit => {}
        }
    }
}

/// Read commands line by line until EOF or `quit`.
///
/// Bad lines are logged and skipped. `quit` is forwarded on `quit`.
pub async fn run_commands<R>(store: AssetStore, input: R, quit: mpsc::Sender<()>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await.context("read command line")? {
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => {
                info!("quit requested");
                let _ = quit.send(()).await;
                break;
            }
            Ok(cmd) => cmd.apply(&store),
            Err(e) => warn!(error = %e, line = %line.trim(), "ignoring command"),
        }
    }

    Ok(())
}
