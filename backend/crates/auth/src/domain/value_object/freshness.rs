//! Freshness Factor Value Object
//!
//! Fraction of a token's lifetime during which it counts as "fresh".

use std::time::Duration;

/// Freshness factor in `(0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreshnessFactor(f64);

impl FreshnessFactor {
    /// A factor of 1 makes the fresh window equal the whole lifetime
    pub const WHOLE_LIFETIME: FreshnessFactor = FreshnessFactor(1.0);

    /// Returns `None` outside `(0, 1]` (NaN included)
    pub fn new(value: f64) -> Option<Self> {
        if value > 0.0 && value <= 1.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn get(&self) -> f64 {
        self.0
    }

    /// Length of the fresh window for a token living `lifetime`, in ms
    ///
    /// Never exceeds the lifetime itself. `None` when the lifetime does not
    /// fit in `i64` milliseconds.
    pub fn window_ms(&self, lifetime: Duration) -> Option<i64> {
        let lifetime_ms = i64::try_from(lifetime.as_millis()).ok()?;
        let window = (lifetime_ms as f64 * self.0).round() as i64;
        Some(window.clamp(0, lifetime_ms))
    }
}

impl Default for FreshnessFactor {
    fn default() -> Self {
        Self(0.5)
    }
}
