//! Random fixture generation.
//!
//! [`FixtureRng`] wraps a seeded [`StdRng`] and remembers the seed, so a test
//! that fails on generated data can be replayed by exporting
//! `TESTASSURE_SEED=<seed>`. The free `generate_random_*` functions draw from a
//! thread-local `FixtureRng` built from the environment.
//!
//! ## Example
//!
//! ```rust
//! use testassure::FixtureRng;
//!
//! let mut rng = FixtureRng::seeded(7);
//! let age = rng.integer(18, 99)?;
//! let names = rng.array(3, |rng| rng.string(8));
//! assert!((18..=99).contains(&age));
//! assert_eq!(names.len(), 3);
//! # Ok::<(), testassure::DataError>(())
//! ```

use crate::config;
use crate::error::{DataError, Result};
use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::cell::RefCell;
use tracing::{debug, trace, warn};

/// Seeded random source for test fixtures.
#[derive(Debug, Clone)]
pub struct FixtureRng {
    seed: u64,
    rng: StdRng,
}

impl FixtureRng {
    /// Creates a deterministic generator.
    pub fn seeded(seed: u64) -> Self {
        debug!(seed, "fixture rng seeded");
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a generator from a fresh random seed.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::thread_rng().gen())
    }

    /// Uses the seed pinned in `TESTASSURE_SEED`, or fresh entropy when unset.
    pub fn from_env() -> Result<Self> {
        Ok(match config::env_seed()? {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        })
    }

    /// Seed this generator started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[min, max]`.
    pub fn integer(&mut self, min: i64, max: i64) -> Result<i64> {
        if min > max {
            return Err(DataError::invalid_range(min, max));
        }
        Ok(self.rng.gen_range(min..=max))
    }

    /// Uniform float in `[min, max)`. A degenerate range `min == max` yields `min`.
    pub fn float(&mut self, min: f64, max: f64) -> Result<f64> {
        if min > max || !(max - min).is_finite() {
            return Err(DataError::invalid_range(min, max));
        }
        if min == max {
            return Ok(min);
        }
        Ok(self.rng.gen_range(min..max))
    }

    /// Same as [`FixtureRng::float`].
    pub fn number(&mut self, min: f64, max: f64) -> Result<f64> {
        self.float(min, max)
    }

    /// Alphanumeric string of exactly `length` characters.
    pub fn string(&mut self, length: usize) -> String {
        (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }

    pub fn boolean(&mut self) -> bool {
        self.rng.gen()
    }

    /// Uniform instant in `[start, end]`, at millisecond resolution.
    pub fn date(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<DateTime<Utc>> {
        if start > end {
            return Err(DataError::invalid_range(start, end));
        }
        let millis = self
            .rng
            .gen_range(start.timestamp_millis()..=end.timestamp_millis());
        let instant = DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| DataError::invalid_range(start, end))?;
        // Millisecond truncation can land just before a sub-millisecond start.
        Ok(instant.clamp(start, end))
    }

    /// Uniformly chosen element, or `None` for an empty slice.
    pub fn element<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.rng.gen_range(0..items.len()))
    }

    /// Calls `generator` `length` times, in order, collecting the results.
    pub fn array<T>(
        &mut self,
        length: usize,
        mut generator: impl FnMut(&mut Self) -> T,
    ) -> Vec<T> {
        trace!(length, seed = self.seed, "generating fixture array");
        (0..length).map(|_| generator(self)).collect()
    }
}

impl RngCore for FixtureRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

thread_local! {
    static THREAD_RNG: RefCell<FixtureRng> = RefCell::new(thread_rng_from_env());
}

fn thread_rng_from_env() -> FixtureRng {
    FixtureRng::from_env().unwrap_or_else(|err| {
        warn!(%err, "ignoring {} override", config::SEED_ENV_VAR);
        FixtureRng::from_entropy()
    })
}

fn with_thread_rng<T>(f: impl FnOnce(&mut FixtureRng) -> T) -> T {
    THREAD_RNG.with(|rng| f(&mut rng.borrow_mut()))
}

/// Seed of the calling thread's fixture generator.
pub fn thread_seed() -> u64 {
    with_thread_rng(|rng| rng.seed())
}

/// Random integer in `[min, max]`.
pub fn generate_random_integer(min: i64, max: i64) -> Result<i64> {
    with_thread_rng(|rng| rng.integer(min, max))
}

/// Random float in `[min, max)`.
pub fn generate_random_float(min: f64, max: f64) -> Result<f64> {
    with_thread_rng(|rng| rng.float(min, max))
}

/// Random float in `[min, max)`.
pub fn generate_random_number(min: f64, max: f64) -> Result<f64> {
    with_thread_rng(|rng| rng.number(min, max))
}

/// Random alphanumeric string of `length` characters.
pub fn generate_random_string(length: usize) -> String {
    with_thread_rng(|rng| rng.string(length))
}

pub fn generate_random_boolean() -> bool {
    with_thread_rng(|rng| rng.boolean())
}

/// Random instant in `[start, end]`.
pub fn generate_random_date(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<DateTime<Utc>> {
    with_thread_rng(|rng| rng.date(start, end))
}

/// Random element of `items`, or `None` if it is empty.
pub fn generate_random_element<T>(items: &[T]) -> Option<&T> {
    with_thread_rng(|rng| rng.element(items))
}

/// Vector of `length` values produced by `generator`.
///
/// The generator may itself call the other `generate_random_*` functions.
pub fn generate_random_array<T>(length: usize, generator: impl FnMut() -> T) -> Vec<T> {
    trace!(length, "generating fixture array");
    std::iter::repeat_with(generator).take(length).collect()
}
