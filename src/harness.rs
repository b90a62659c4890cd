// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Timing primitives for the benchmark suite.
//!
//! Measurement is deliberately simple: one monotonic clock read before and
//! after a sequential loop, no warmup and no per-iteration sampling.

use std::time::Instant;

/// Run `op` exactly `iterations` times and return the elapsed wall-clock
/// time in whole milliseconds (truncated, not rounded).
///
/// An iteration count of zero is legal: the closure is never invoked and the
/// result is ~0. The closure borrows whatever container it acts on; the timer
/// itself never touches container state. Panics from `op` propagate to the
/// caller unmodified.
pub fn measure_ms<F>(iterations: u64, mut op: F) -> u64
where
    F: FnMut(),
{
    let start = Instant::now();
    for _ in 0..iterations {
        op();
    }
    start.elapsed().as_millis() as u64
}

/// Timer for measuring individual spans.
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Stop the timer and return elapsed whole milliseconds.
    pub fn stop_ms(self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}
