use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Fixed-length trailing window of price samples backing the sparkline.
///
/// The length is set at construction and never changes: every
/// [`advance`](Self::advance) drops the oldest sample and appends one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RollingSamples {
    values: VecDeque<f64>,
}

impl RollingSamples {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Drop the oldest sample and append `sample`.
    ///
    /// An empty window stays empty.
    pub fn advance(&mut self, sample: f64) {
        if self.values.pop_front().is_some() {
            self.values.push_back(sample);
        }
    }

    pub fn latest(&self) -> Option<f64> {
        self.values.back().copied()
    }

    pub fn oldest(&self) -> Option<f64> {
        self.values.front().copied()
    }

    /// Smallest and largest sample, used to scale the sparkline.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        let mut it = self.values.iter().copied();
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
