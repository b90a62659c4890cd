// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! The benchmark driver: three phases, two container kinds, fixed order.

use crate::harness::measure_ms;
use crate::list::{ListKind, SeqList};
use crate::metrics::{Measurement, Method, SuiteReport};
use tracing::debug;

/// Header line of the rendered table.
pub const TABLE_HEADER: &str = "Method\tList Type\tIterations\tTime (ms)";

/// Run the full suite: add, get, and delete phases, each timed on both
/// container kinds.
///
/// The add phase front-inserts into initially empty containers. The get and
/// delete phases share a second set of containers, freshly populated with
/// `0..iterations`, independent of the add phase's mutated ones. Get reads
/// the middle element (`len / 2`, re-evaluated per call); delete drains from
/// the back, leaving both containers empty afterwards.
pub fn run_suite(iterations: u64) -> SuiteReport {
    let mut report = SuiteReport::new(iterations);

    debug!(iterations, "running add phase");
    for kind in ListKind::ALL {
        let mut list = SeqList::new(kind);
        let elapsed_ms = measure_ms(iterations, || list.push_front(0));
        report.add_result(Measurement {
            method: Method::Add,
            kind,
            iterations,
            elapsed_ms,
        });
    }

    let mut populated: Vec<SeqList> = ListKind::ALL
        .into_iter()
        .map(|kind| populate(kind, iterations))
        .collect();

    debug!(iterations, "running get phase");
    for list in &populated {
        let elapsed_ms = measure_ms(iterations, || {
            let _ = list.get(list.len() / 2);
        });
        report.add_result(Measurement {
            method: Method::Get,
            kind: list.kind(),
            iterations,
            elapsed_ms,
        });
    }

    debug!(iterations, "running delete phase");
    for list in &mut populated {
        let kind = list.kind();
        // Draining past empty yields None rather than a fault; with exactly
        // `iterations` elements populated above it never does.
        let elapsed_ms = measure_ms(iterations, || {
            let _ = list.remove_last();
        });
        report.add_result(Measurement {
            method: Method::Delete,
            kind,
            iterations,
            elapsed_ms,
        });
    }

    report
}

/// Render a report as a tab-separated table, one line per measurement.
pub fn render_table(report: &SuiteReport) -> String {
    use std::fmt::Write;

    let mut out = String::from(TABLE_HEADER);
    out.push('\n');
    for m in &report.results {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}",
            m.method, m.kind, m.iterations, m.elapsed_ms
        );
    }
    out
}

/// Build a container holding `0..n` in ascending order via repeated append.
fn populate(kind: ListKind, n: u64) -> SeqList {
    let mut list = SeqList::new(kind);
    for i in 0..n {
        list.push_back(i as i64);
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_result_order() {
        let report = run_suite(10);
        let order: Vec<(Method, ListKind)> =
            report.results.iter().map(|m| (m.method, m.kind)).collect();
        assert_eq!(
            order,
            vec![
                (Method::Add, ListKind::Array),
                (Method::Add, ListKind::Linked),
                (Method::Get, ListKind::Array),
                (Method::Get, ListKind::Linked),
                (Method::Delete, ListKind::Array),
                (Method::Delete, ListKind::Linked),
            ]
        );
        assert!(report.results.iter().all(|m| m.iterations == 10));
    }

    #[test]
    fn test_suite_zero_iterations() {
        let report = run_suite(0);
        assert_eq!(report.results.len(), 6);
        for m in &report.results {
            assert_eq!(m.iterations, 0);
            assert_eq!(m.elapsed_ms, 0);
        }
    }

    #[test]
    fn test_populate_middle_element() {
        for kind in ListKind::ALL {
            let list = populate(kind, 10);
            assert_eq!(list.len(), 10);
            assert_eq!(list.get(list.len() / 2), Some(5), "kind {}", kind);
        }
    }

    #[test]
    fn test_delete_phase_drains_containers() {
        for kind in ListKind::ALL {
            let mut list = populate(kind, 8);
            for _ in 0..8 {
                assert!(list.remove_last().is_some());
            }
            assert!(list.is_empty());
            assert_eq!(list.remove_last(), None);
        }
    }

    #[test]
    fn test_table_round_trip() {
        let report = run_suite(5);
        let table = render_table(&report);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], TABLE_HEADER);

        let expected = [
            ("add", "Vec"),
            ("add", "LinkedList"),
            ("get", "Vec"),
            ("get", "LinkedList"),
            ("delete", "Vec"),
            ("delete", "LinkedList"),
        ];
        for (line, (method, kind)) in lines[1..].iter().zip(expected) {
            let fields: Vec<&str> = line.split('\t').collect();
            assert_eq!(fields.len(), 4);
            assert_eq!(fields[0], method);
            assert_eq!(fields[1], kind);
            assert_eq!(fields[2], "5");
            fields[3].parse::<u64>().unwrap();
        }
    }
}
