// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! The two sequence containers under test.
//!
//! `SeqList` is a two-variant enum dispatched by `match`, not a trait object:
//! the point of the benchmark is the concrete storage layout, so the kinds
//! stay visible as a plain tag.

use serde::{Deserialize, Serialize};
use std::collections::LinkedList;

/// Tag selecting which container backs a [`SeqList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    /// Contiguous storage: O(1) amortized append/index, O(n) front insert.
    Array,
    /// Node chain: O(1) insert/remove at the ends, O(n) indexed access.
    Linked,
}

impl ListKind {
    /// Both kinds, in report order.
    pub const ALL: [ListKind; 2] = [ListKind::Array, ListKind::Linked];
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Array => write!(f, "Vec"),
            ListKind::Linked => write!(f, "LinkedList"),
        }
    }
}

/// A sequence of integers backed by either contiguous or linked storage.
#[derive(Debug)]
pub enum SeqList {
    Array(Vec<i64>),
    Linked(LinkedList<i64>),
}

impl SeqList {
    /// Create an empty container of the given kind.
    pub fn new(kind: ListKind) -> Self {
        match kind {
            ListKind::Array => SeqList::Array(Vec::new()),
            ListKind::Linked => SeqList::Linked(LinkedList::new()),
        }
    }

    /// Which kind backs this container.
    pub fn kind(&self) -> ListKind {
        match self {
            SeqList::Array(_) => ListKind::Array,
            SeqList::Linked(_) => ListKind::Linked,
        }
    }

    /// Insert at position 0. O(n) for the array kind, O(1) for the linked.
    pub fn push_front(&mut self, value: i64) {
        match self {
            SeqList::Array(v) => v.insert(0, value),
            SeqList::Linked(l) => l.push_front(value),
        }
    }

    /// Append at the end. O(1) amortized for both kinds.
    pub fn push_back(&mut self, value: i64) {
        match self {
            SeqList::Array(v) => v.push(value),
            SeqList::Linked(l) => l.push_back(value),
        }
    }

    /// Read the element at `index`. O(1) for the array kind; the linked kind
    /// walks the chain from the front.
    pub fn get(&self, index: usize) -> Option<i64> {
        match self {
            SeqList::Array(v) => v.get(index).copied(),
            SeqList::Linked(l) => l.iter().nth(index).copied(),
        }
    }

    /// Remove and return the last element, or `None` if the container is
    /// empty (the underflow signal).
    pub fn remove_last(&mut self) -> Option<i64> {
        match self {
            SeqList::Array(v) => v.pop(),
            SeqList::Linked(l) => l.pop_back(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SeqList::Array(v) => v.len(),
            SeqList::Linked(l) => l.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_front_reverses_order() {
        for kind in ListKind::ALL {
            let mut list = SeqList::new(kind);
            for i in 0..5 {
                list.push_front(i);
            }
            assert_eq!(list.len(), 5);
            let contents: Vec<i64> = (0..5).filter_map(|i| list.get(i)).collect();
            assert_eq!(contents, vec![4, 3, 2, 1, 0], "kind {}", kind);
        }
    }

    #[test]
    fn test_push_back_keeps_order() {
        for kind in ListKind::ALL {
            let mut list = SeqList::new(kind);
            for i in 0..10 {
                list.push_back(i);
            }
            assert_eq!(list.get(0), Some(0));
            assert_eq!(list.get(5), Some(5));
            assert_eq!(list.get(9), Some(9));
            assert_eq!(list.get(10), None);
        }
    }

    #[test]
    fn test_remove_last_underflow() {
        for kind in ListKind::ALL {
            let mut list = SeqList::new(kind);
            list.push_back(1);
            list.push_back(2);
            assert_eq!(list.remove_last(), Some(2));
            assert_eq!(list.remove_last(), Some(1));
            assert!(list.is_empty());
            assert_eq!(list.remove_last(), None, "kind {}", kind);
        }
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ListKind::Array.to_string(), "Vec");
        assert_eq!(ListKind::Linked.to_string(), "LinkedList");
    }
}
