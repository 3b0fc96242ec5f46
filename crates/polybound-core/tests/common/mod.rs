//! Shared utilities for integration tests

#![allow(dead_code)]

/// Lengths around the interesting boundaries of a small inline capacity
pub fn edge_case_lengths(capacity: usize) -> Vec<usize> {
    let mut lengths = vec![0, 1, capacity.saturating_sub(1), capacity];
    lengths.sort_unstable();
    lengths.dedup();
    lengths
}

/// Operations applied to an inline vector and a `Vec` model in lockstep
#[derive(Debug, Clone)]
pub enum Op {
    Push(i32),
    Pop,
    Erase(usize),
    Insert(usize, i32),
    Resize(usize, i32),
    Truncate(usize),
    Clear,
}
