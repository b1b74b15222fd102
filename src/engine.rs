//! The deduction passes and guess heuristic.
//!
//! Contains:
//! - Primary pass: two local counting rules per revealed number
//!   (saturation: enough flags → rest safe; exhaustion: just enough
//!   unknowns → all mines)
//! - Fallback pattern pass: a lone unknown next to an unflagged 1
//! - Guess selection: least risky unknown cell when nothing is provable
//! - Top-level `next_step()` encoding the precedence between them
//!
//! All deductions are single-constraint: each revealed number is considered
//! on its own, with no subset or overlap reasoning across neighboring
//! numbers.

use std::collections::HashSet;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::types::{cell_key, Cell, Grid, NeighborCache};

// ─── Moves ──────────────────────────────────────────────────────────────────

/// Action to perform on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    Reveal,
    Flag,
}

/// One move for the input-injection side: a coordinate plus an action tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub kind: MoveKind,
}

/// Result of a deduction pass: provably safe and provably mined coordinates.
/// The two sets are deduplicated by coordinate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deduction {
    pub safe: Vec<(usize, usize)>,
    pub mines: Vec<(usize, usize)>,
}

impl Deduction {
    pub fn is_empty(&self) -> bool {
        self.safe.is_empty() && self.mines.is_empty()
    }

    /// Render as moves: reveals for safe cells, then flags for mines.
    pub fn moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.safe.len() + self.mines.len());
        for &(row, col) in &self.safe {
            moves.push(Move {
                row,
                col,
                kind: MoveKind::Reveal,
            });
        }
        for &(row, col) in &self.mines {
            moves.push(Move {
                row,
                col,
                kind: MoveKind::Flag,
            });
        }
        moves
    }
}

// ─── Primary pass ───────────────────────────────────────────────────────────

/// Flagged / unknown breakdown of one cell's neighborhood.
struct NeighborCounts {
    flagged: usize,
    unknowns: Vec<(usize, usize)>,
}

fn count_neighbors(grid: &Grid, nc: &NeighborCache, row: usize, col: usize) -> NeighborCounts {
    let mut flagged = 0;
    let mut unknowns = Vec::new();

    for &(nr, ncl) in nc.get(row, col) {
        match grid.get(nr, ncl) {
            Cell::Flagged => flagged += 1,
            Cell::Unknown => unknowns.push((nr, ncl)),
            Cell::Revealed(_) => {}
        }
    }

    NeighborCounts { flagged, unknowns }
}

/// Primary pass over every revealed number:
///
/// - saturation: flagged neighbors == count → remaining unknowns are safe
/// - exhaustion: flagged + unknown neighbors == count → remaining unknowns
///   are mines
///
/// Both rules are checked independently for each cell; output sets are
/// deduplicated by coordinate across the whole scan.
pub fn infer_moves(grid: &Grid, nc: &NeighborCache) -> Deduction {
    let mut safe_seen: HashSet<u32> = HashSet::new();
    let mut mine_seen: HashSet<u32> = HashSet::new();
    let mut deduction = Deduction::default();

    for (row, col) in grid.coords() {
        let n = match grid.get(row, col) {
            Cell::Revealed(n) => n as usize,
            _ => continue,
        };

        let counts = count_neighbors(grid, nc, row, col);
        if counts.unknowns.is_empty() {
            continue;
        }

        if counts.flagged == n {
            for &(r, c) in &counts.unknowns {
                if safe_seen.insert(cell_key(r, c)) {
                    deduction.safe.push((r, c));
                }
            }
        }
        if counts.flagged + counts.unknowns.len() == n {
            for &(r, c) in &counts.unknowns {
                if mine_seen.insert(cell_key(r, c)) {
                    deduction.mines.push((r, c));
                }
            }
        }
    }

    deduction
}

// ─── Fallback pattern pass ──────────────────────────────────────────────────

/// Fallback pass, consulted only when the primary pass comes up empty: an
/// unflagged 1 with a single unknown neighbor pins that neighbor as its mine.
///
/// Derives mines only, never safe cells. On consistent input the exhaustion
/// rule already covers this shape; the pass still runs before guessing.
pub fn pattern_moves(grid: &Grid, nc: &NeighborCache) -> Vec<(usize, usize)> {
    let mut seen: HashSet<u32> = HashSet::new();
    let mut mines = Vec::new();

    for (row, col) in grid.coords() {
        if grid.get(row, col) != Cell::Revealed(1) {
            continue;
        }
        let counts = count_neighbors(grid, nc, row, col);
        if counts.flagged == 0 && counts.unknowns.len() == 1 {
            let (r, c) = counts.unknowns[0];
            if seen.insert(cell_key(r, c)) {
                mines.push((r, c));
            }
        }
    }

    mines
}

// ─── Guess selection ────────────────────────────────────────────────────────

/// A guess candidate with its risk score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Guess {
    pub row: usize,
    pub col: usize,
    /// Number of adjacent revealed cells with a positive count.
    pub score: usize,
}

/// Pick the least risky unknown cell: the one with the fewest adjacent
/// revealed numbers. Ties go to the earliest coordinate in row-major scan
/// order. `None` means no unknown cells are left.
pub fn pick_guess(grid: &Grid, nc: &NeighborCache) -> Option<Guess> {
    let mut best: Option<Guess> = None;

    for (row, col) in grid.coords() {
        if grid.get(row, col) != Cell::Unknown {
            continue;
        }
        let score = nc
            .get(row, col)
            .iter()
            .filter(|&&(nr, ncl)| matches!(grid.get(nr, ncl), Cell::Revealed(n) if n > 0))
            .count();
        // Strict comparison keeps the first coordinate on ties.
        if best.map_or(true, |b| score < b.score) {
            best = Some(Guess { row, col, score });
        }
    }

    if let Some(g) = best {
        trace!("guess candidate ({}, {}) score {}", g.row, g.col, g.score);
    }
    best
}

// ─── Top-level step ─────────────────────────────────────────────────────────

/// What the calling loop should do next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Provable moves exist; act on all of them.
    Deduced(Deduction),
    /// Nothing provable; reveal the least risky unknown cell.
    Guess(Guess),
    /// No unknown cells remain.
    Complete,
}

/// One inference cycle over a snapshot: the primary pass, then the pattern
/// fallback, then a guess. `Complete` when no unknown cells are left.
pub fn next_step(grid: &Grid, nc: &NeighborCache) -> Step {
    let deduction = infer_moves(grid, nc);
    if !deduction.is_empty() {
        return Step::Deduced(deduction);
    }

    let mines = pattern_moves(grid, nc);
    if !mines.is_empty() {
        return Step::Deduced(Deduction {
            safe: Vec::new(),
            mines,
        });
    }

    match pick_guess(grid, nc) {
        Some(guess) => Step::Guess(guess),
        None => Step::Complete,
    }
}
