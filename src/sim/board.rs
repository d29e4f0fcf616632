//! The board: an ordered, append-only sequence of generated rows
//!
//! Row 0 is implicit grass and never stored; storage index `i` holds the row
//! at absolute index `i + 1`.

use rand_pcg::Pcg32;

use super::generate::generate_rows;
use super::state::Row;
use crate::consts::INITIAL_ROWS;

/// Generated rows ahead of the start. Grows in `INITIAL_ROWS` batches and
/// never shrinks or reorders within a run.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    rows: Vec<Row>,
}

impl BoardState {
    /// Fresh board of `INITIAL_ROWS` rows starting at row 0
    pub fn new(rng: &mut Pcg32) -> Self {
        Self {
            rows: generate_rows(INITIAL_ROWS, 0, rng),
        }
    }

    /// Read-only view of all generated rows
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row at an absolute row index, if generated. Row 0 and everything
    /// behind the start are grass and yield `None`.
    pub fn row_at(&self, row_index: i32) -> Option<&Row> {
        if row_index < 1 {
            return None;
        }
        self.rows.get(row_index as usize - 1)
    }

    /// Append the next `INITIAL_ROWS` batch, continuing difficulty from the
    /// current length. Callers gate this on an exact threshold so a crossing
    /// appends exactly once.
    pub fn add_rows(&mut self, rng: &mut Pcg32) {
        let starting_row = self.rows.len();
        let batch = generate_rows(INITIAL_ROWS, starting_row, rng);
        self.rows.extend(batch);
    }

    /// Replace everything with a fresh starting board
    pub fn reset(&mut self, rng: &mut Pcg32) {
        self.rows = generate_rows(INITIAL_ROWS, 0, rng);
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}
