use crate::domain::model::Message;
use crate::utils::error::Result;
use rand::seq::SliceRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for the draw.
pub trait RandomSource {
    fn shuffle<T>(&mut self, items: &mut [T]);
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>;
}

/// Adapts any `rand` generator to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Same seed, same draw.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

/// Where the core reports what it is doing.
pub trait EventLog {
    fn debug(&self, _line: &str) {}
    fn info(&self, line: &str);
    fn warning(&self, line: &str);
    fn error(&self, line: &str);
}

/// Transport that hands one message to its recipient.
pub trait Delivery {
    fn deliver(&mut self, message: &Message) -> Result<()>;
}
