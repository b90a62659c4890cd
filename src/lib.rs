// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! List Operation Benchmark
//!
//! A small harness for comparing the cost of basic sequence operations on
//! `Vec<i64>` against `LinkedList<i64>`.
//!
//! # Benchmark Phases
//!
//! - **Add**: push at the front of an initially empty container
//! - **Get**: read the middle element of a pre-populated container
//! - **Delete**: remove the last element until the container is drained
//!
//! Each phase runs against both container kinds and the six measurements are
//! rendered as a tab-separated table. Runs can optionally be persisted as
//! timestamped JSON files for later comparison.

pub mod harness;
pub mod list;
pub mod metrics;
pub mod reporter;
pub mod suite;

pub use harness::{measure_ms, Timer};
pub use list::{ListKind, SeqList};
pub use metrics::{Measurement, Method, SuiteReport, SystemInfo};
pub use reporter::JsonReporter;
pub use suite::{render_table, run_suite};

/// Iteration count used when the caller does not supply one.
pub const DEFAULT_ITERATIONS: u64 = 100_000;
