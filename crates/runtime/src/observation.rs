//! Shared proximity observation.
//!
//! The sensor worker writes the latest forward-sector minimum and the ticker
//! reads it. Only the most recent value matters, so a single atomic slot is
//! enough: last writer wins and readers never see a torn value.

use std::sync::atomic::{AtomicU32, Ordering};

/// Quiet NaN, used as the "nothing observed" marker.
const UNOBSERVED: u32 = 0x7fc0_0000;

/// Single-slot cell holding the latest minimum forward distance.
#[derive(Debug)]
pub struct ProximityCell {
    bits: AtomicU32,
}

impl ProximityCell {
    /// Creates an empty cell. [`load`](Self::load) returns `None` until the
    /// first [`store`](Self::store).
    pub fn new() -> Self {
        Self {
            bits: AtomicU32::new(UNOBSERVED),
        }
    }

    /// Publishes a new distance. NaN is treated as [`clear`](Self::clear).
    pub fn store(&self, distance: f32) {
        let bits = if distance.is_nan() {
            UNOBSERVED
        } else {
            distance.to_bits()
        };
        self.bits.store(bits, Ordering::Release);
    }

    /// Forgets the current observation.
    pub fn clear(&self) {
        self.bits.store(UNOBSERVED, Ordering::Release);
    }

    /// Latest distance, or `None` if nothing usable has been observed.
    pub fn load(&self) -> Option<f32> {
        let value = f32::from_bits(self.bits.load(Ordering::Acquire));
        (!value.is_nan()).then_some(value)
    }
}

impl Default for ProximityCell {
    fn default() -> Self {
        Self::new()
    }
}
