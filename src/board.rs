//! Ground-truth boards: mine placement, neighbor counts, and flood-fill
//! reveal into a solver view.
//!
//! The deduction engine never sees a `Board`; it only receives `Grid`
//! snapshots. Boards exist so tests and the playback loop can stand in for
//! the real game the way the browser-facing collaborators would.

use crate::rng::BoardRng;
use crate::types::{Cell, Grid, NeighborCache};

/// Full knowledge of one game: the mine layout plus precomputed neighbor
/// counts for every clear cell.
pub struct Board {
    rows: usize,
    cols: usize,
    mines: Vec<bool>,
    counts: Vec<u8>,
}

impl Board {
    /// Build a board with mines at the given coordinates.
    pub fn with_mines(
        rows: usize,
        cols: usize,
        mines: &[(usize, usize)],
        nc: &NeighborCache,
    ) -> Self {
        let mut mask = vec![false; rows * cols];
        for &(r, c) in mines {
            mask[r * cols + c] = true;
        }
        let counts = calculate_counts(rows, cols, &mask, nc);
        Self {
            rows,
            cols,
            mines: mask,
            counts,
        }
    }

    /// Place `mine_count` mines at random, keeping every cell within
    /// Chebyshev distance `safe_radius` of `safe` clear so the opening click
    /// cannot detonate.
    pub fn random(
        rows: usize,
        cols: usize,
        mine_count: usize,
        safe: (usize, usize),
        safe_radius: usize,
        rng: &mut BoardRng,
        nc: &NeighborCache,
    ) -> Self {
        let mut mask = vec![false; rows * cols];
        let mut placed = 0;
        let mut attempts = 0;
        let max_placement_attempts = 100_000;

        while placed < mine_count && attempts < max_placement_attempts {
            attempts += 1;
            let r = rng.gen_range(rows);
            let c = rng.gen_range(cols);

            let dr = r.abs_diff(safe.0);
            let dc = c.abs_diff(safe.1);
            if dr <= safe_radius && dc <= safe_radius {
                continue;
            }

            if !mask[r * cols + c] {
                mask[r * cols + c] = true;
                placed += 1;
            }
        }

        let counts = calculate_counts(rows, cols, &mask, nc);
        Self {
            rows,
            cols,
            mines: mask,
            counts,
        }
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn is_mine(&self, row: usize, col: usize) -> bool {
        self.mines[row * self.cols + col]
    }

    /// Mine count among the neighbors of a clear cell.
    #[inline(always)]
    pub fn count_at(&self, row: usize, col: usize) -> u8 {
        self.counts[row * self.cols + col]
    }

    /// Total mines on the board.
    pub fn mine_count(&self) -> usize {
        self.mines.iter().filter(|&&m| m).count()
    }

    /// Reveal (row, col) into the solver view, flood-filling zero regions.
    ///
    /// Flagged and already revealed cells are left alone. The starting cell
    /// must not be a mine; a zero region never borders one, so the fill stays
    /// on clear cells.
    pub fn reveal_into(&self, view: &mut Grid, row: usize, col: usize) {
        debug_assert!(!self.is_mine(row, col), "reveal on mine ({row}, {col})");

        let mut stack: Vec<(usize, usize)> = vec![(row, col)];

        while let Some((r, c)) = stack.pop() {
            if !view.in_bounds(r, c) {
                continue;
            }
            if view.get(r, c) != Cell::Unknown {
                continue;
            }

            let count = self.count_at(r, c);
            view.set(r, c, Cell::Revealed(count));

            if count == 0 {
                for dr in -1i32..=1 {
                    for dc in -1i32..=1 {
                        if dr == 0 && dc == 0 {
                            continue;
                        }
                        let nr = r as i32 + dr;
                        let ncl = c as i32 + dc;
                        if nr >= 0 && nr < self.rows as i32 && ncl >= 0 && ncl < self.cols as i32 {
                            stack.push((nr as usize, ncl as usize));
                        }
                    }
                }
            }
        }
    }
}

/// Neighbor mine counts for all clear cells. Mine cells keep 0; their count
/// is never consulted.
fn calculate_counts(rows: usize, cols: usize, mines: &[bool], nc: &NeighborCache) -> Vec<u8> {
    let mut counts = vec![0u8; rows * cols];

    for row in 0..rows {
        for col in 0..cols {
            if mines[row * cols + col] {
                continue;
            }
            let mut count = 0;
            for &(nr, ncl) in nc.get(row, col) {
                if mines[nr * cols + ncl] {
                    count += 1;
                }
            }
            counts[row * cols + col] = count;
        }
    }

    counts
}
