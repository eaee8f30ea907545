use rand::Rng;

/// Source of symmetric random deltas for the feed.
pub trait Jitter: Send + 'static {
    /// A value in `[-half_width, half_width)`. Zero when `half_width` is not
    /// positive.
    fn symmetric(&mut self, half_width: f64) -> f64;
}

/// Uniform [`Jitter`] backed by any `rand` generator.
pub struct RngJitter<R> {
    rng: R,
}

impl<R: Rng> RngJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send + 'static> Jitter for RngJitter<R> {
    fn symmetric(&mut self, half_width: f64) -> f64 {
        if half_width.is_nan() || half_width <= 0.0 {
            return 0.0;
        }
        self.rng.random_range(-half_width..half_width)
    }
}
