// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Result types for benchmark runs.
//!
//! A run produces one [`Measurement`] per method/kind pair, collected into a
//! [`SuiteReport`] together with a timestamp and the system the run executed
//! on.

use crate::list::ListKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sysinfo::System;

/// The container operation a measurement timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Insert at position 0
    Add,
    /// Read the middle element
    Get,
    /// Remove the last element
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Add => write!(f, "add"),
            Method::Get => write!(f, "get"),
            Method::Delete => write!(f, "delete"),
        }
    }
}

/// One timed phase on one container kind. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    /// Operation that was timed
    pub method: Method,
    /// Container the operation ran against
    pub kind: ListKind,
    /// Number of times the operation was invoked
    pub iterations: u64,
    /// Elapsed wall-clock time in whole milliseconds
    pub elapsed_ms: u64,
}

/// System information captured at benchmark time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system name
    pub os: String,
    /// OS version
    pub os_version: String,
    /// Kernel version (Linux)
    pub kernel_version: Option<String>,
    /// CPU model name
    pub cpu_model: String,
    /// Number of CPU cores
    pub cpu_cores: usize,
    /// Total system memory in bytes
    pub memory_bytes: u64,
    /// Hostname
    pub hostname: String,
}

impl SystemInfo {
    /// Collect current system information.
    pub fn collect() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();

        Self {
            os: System::name().unwrap_or_else(|| "Unknown".to_string()),
            os_version: System::os_version().unwrap_or_else(|| "Unknown".to_string()),
            kernel_version: System::kernel_version(),
            cpu_model: sys
                .cpus()
                .first()
                .map(|cpu| cpu.brand().to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            cpu_cores: sys.cpus().len(),
            memory_bytes: sys.total_memory(),
            hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

/// Complete report for one suite run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Suite identifier
    pub benchmark_suite: String,
    /// Crate version
    pub version: String,
    /// Timestamp when the suite was run
    pub timestamp: DateTime<Utc>,
    /// System information
    pub system_info: SystemInfo,
    /// Iteration count the suite ran with
    pub iterations: u64,
    /// Individual measurements, in report order
    pub results: Vec<Measurement>,
}

impl SuiteReport {
    /// Create an empty report for a run with the given iteration count.
    pub fn new(iterations: u64) -> Self {
        Self {
            benchmark_suite: "list-ops".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            system_info: SystemInfo::collect(),
            iterations,
            results: Vec::new(),
        }
    }

    /// Append a measurement to the report.
    pub fn add_result(&mut self, result: Measurement) {
        self.results.push(result);
    }
}
