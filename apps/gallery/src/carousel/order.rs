//! Session order and wrap-around paging.
//!
//! The session order is drawn once when a viewer's session starts and is then
//! traversed with modulo windows, so prev/next always revisit the same cards
//! in the same sequence. Every index is taken modulo the order length: a window
//! larger than the order simply repeats records.

use rand::Rng;
use serde::Serialize;

use crate::models::ExhibitorRecord;

/// Logical cards per window. 1, 2 or 3 of them are shown depending on the viewport.
pub const PAGE_SIZE: usize = 3;

/// The one-time shuffled permutation of all records for a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionOrder {
    records: Vec<ExhibitorRecord>,
}

impl SessionOrder {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ExhibitorRecord] {
        &self.records
    }
}

/// Fisher–Yates shuffle into a fresh vector. The input slice is left untouched.
pub fn shuffle<R: Rng + ?Sized>(records: &[ExhibitorRecord], rng: &mut R) -> Vec<ExhibitorRecord> {
    let mut out = records.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Draws the session order. Call once per session and keep the result.
pub fn shuffle_once<R: Rng + ?Sized>(records: &[ExhibitorRecord], rng: &mut R) -> SessionOrder {
    SessionOrder {
        records: shuffle(records, rng),
    }
}

/// Returns `size` consecutive records starting at `cursor`, wrapping modulo the order length.
///
/// An empty order yields an empty window.
pub fn window_at(order: &SessionOrder, cursor: usize, size: usize) -> Vec<ExhibitorRecord> {
    let len = order.len();
    if len == 0 {
        return Vec::new();
    }
    (0..size)
        .map(|i| order.records[(cursor + i) % len].clone())
        .collect()
}

/// `(cursor + step) mod length`. Returns 0 for an empty order.
pub fn advance(cursor: usize, step: usize, length: usize) -> usize {
    if length == 0 {
        return 0;
    }
    (cursor + step) % length
}

/// `(cursor - step + length) mod length`, computed without underflow for any step.
pub fn retreat(cursor: usize, step: usize, length: usize) -> usize {
    if length == 0 {
        return 0;
    }
    (cursor % length + length - step % length) % length
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
