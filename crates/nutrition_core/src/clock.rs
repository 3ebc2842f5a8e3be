//! Time source used to stamp `created_at` on new records.
//!
//! # Responsibility
//! - Provide wall-clock time for production storage.
//! - Provide a controllable clock so ordering can be tested deterministically.
//!
//! # Invariants
//! - Timestamps are Unix epoch milliseconds.
//! - `ManualClock` clones share one underlying time value.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Source of the current time in epoch milliseconds.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

/// Wall-clock time backed by `chrono::Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Settable clock for tests and simulations.
///
/// Cloning shares the underlying time, so a test can keep one handle while the
/// storage owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    current_ms: Arc<AtomicI64>,
}

impl ManualClock {
    /// Creates a clock frozen at `start_ms`.
    pub fn at_ms(start_ms: i64) -> Self {
        Self {
            current_ms: Arc::new(AtomicI64::new(start_ms)),
        }
    }

    /// Sets the current time.
    pub fn set_ms(&self, value: i64) {
        self.current_ms.store(value, Ordering::SeqCst);
    }

    /// Moves time forward by `delta_ms` and returns the new time.
    pub fn advance_ms(&self, delta_ms: i64) -> i64 {
        self.current_ms.fetch_add(delta_ms, Ordering::SeqCst) + delta_ms
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.current_ms.load(Ordering::SeqCst)
    }
}
