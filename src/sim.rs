//! Full-game playback against a ground-truth board.
//!
//! Drives the engine the same way the browser-facing caller does: capture →
//! infer → act → recapture, sequentially. Deduced reveals and flags are sound
//! as long as the revealed counts are truthful; only guesses can detonate.

use log::debug;

use crate::board::Board;
use crate::engine::{next_step, Step};
use crate::types::{Cell, Grid, NeighborCache};

/// Terminal result of one simulated game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every non-mine cell was revealed; remaining mines are flagged.
    Cleared { steps: usize },
    /// The opening click or a guess hit a mine.
    Detonated { row: usize, col: usize, steps: usize },
}

/// Play a full game from the opening click at `start`, applying engine output
/// until the board is complete or a guess detonates.
pub fn play(board: &Board, start: (usize, usize), nc: &NeighborCache) -> Outcome {
    let mut view = Grid::new(board.rows(), board.cols());
    let mut steps = 0;

    if board.is_mine(start.0, start.1) {
        return Outcome::Detonated {
            row: start.0,
            col: start.1,
            steps,
        };
    }
    board.reveal_into(&mut view, start.0, start.1);

    // Every acting cycle reveals or flags at least one unknown cell, so the
    // loop is bounded by the cell count.
    let max_cycles = board.rows() * board.cols() + 1;
    for _ in 0..max_cycles {
        match next_step(&view, nc) {
            Step::Complete => {
                debug!("board complete after {steps} steps");
                return Outcome::Cleared { steps };
            }
            Step::Deduced(deduction) => {
                steps += 1;
                debug!(
                    "step {steps}: deduced {} safe, {} mines",
                    deduction.safe.len(),
                    deduction.mines.len()
                );
                for &(r, c) in &deduction.mines {
                    debug_assert!(board.is_mine(r, c), "flag deduced on clear cell ({r}, {c})");
                    view.set(r, c, Cell::Flagged);
                }
                for &(r, c) in &deduction.safe {
                    debug_assert!(!board.is_mine(r, c), "reveal deduced on mine ({r}, {c})");
                    board.reveal_into(&mut view, r, c);
                }
            }
            Step::Guess(guess) => {
                steps += 1;
                debug!(
                    "step {steps}: guessing ({}, {}) score {}",
                    guess.row, guess.col, guess.score
                );
                if board.is_mine(guess.row, guess.col) {
                    return Outcome::Detonated {
                        row: guess.row,
                        col: guess.col,
                        steps,
                    };
                }
                board.reveal_into(&mut view, guess.row, guess.col);
            }
        }
    }

    unreachable!("inference loop stopped making progress");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::infer_moves;
    use crate::rng::BoardRng;

    #[test]
    fn test_clears_single_mine_board() {
        let nc = NeighborCache::new(3, 3);
        let board = Board::with_mines(3, 3, &[(0, 0)], &nc);

        // The opening cascade reveals all clear cells; the exhausted 1 at
        // (1,1) then flags the mine.
        let outcome = play(&board, (2, 2), &nc);
        assert!(matches!(outcome, Outcome::Cleared { .. }));
    }

    #[test]
    fn test_clears_with_guesses() {
        let nc = NeighborCache::new(2, 2);
        let board = Board::with_mines(2, 2, &[(1, 1)], &nc);

        // A bare 1 in the corner proves nothing; the low-risk guesses open
        // (0,1) and (1,0) until the 1s pin the mine.
        let outcome = play(&board, (0, 0), &nc);
        assert!(matches!(outcome, Outcome::Cleared { .. }));
    }

    #[test]
    fn test_detonates_on_unlucky_guess() {
        let nc = NeighborCache::new(2, 2);
        let board = Board::with_mines(2, 2, &[(0, 1)], &nc);

        // Opening at (1,0) reveals a bare 1. The first guess (0,0) is clear;
        // the second, (0,1) by row-major tie-break, is the mine.
        let outcome = play(&board, (1, 0), &nc);
        assert_eq!(
            outcome,
            Outcome::Detonated {
                row: 0,
                col: 1,
                steps: 2
            }
        );
    }

    #[test]
    fn test_detonates_on_mined_opening() {
        let nc = NeighborCache::new(2, 2);
        let board = Board::with_mines(2, 2, &[(0, 0)], &nc);
        assert_eq!(
            play(&board, (0, 0), &nc),
            Outcome::Detonated {
                row: 0,
                col: 0,
                steps: 0
            }
        );
    }

    #[test]
    fn test_terminates_on_random_boards() {
        let nc = NeighborCache::new(9, 9);
        for seed in 0..20 {
            let mut rng = BoardRng::from_seed(seed);
            let board = Board::random(9, 9, 10, (4, 4), 1, &mut rng, &nc);
            // Either result is fine; the debug asserts in `play` check that
            // every deduced move was sound along the way.
            match play(&board, (4, 4), &nc) {
                Outcome::Cleared { steps } | Outcome::Detonated { steps, .. } => {
                    assert!(steps <= 9 * 9 + 1, "seed {seed} ran too long");
                }
            }
        }
    }

    #[test]
    fn test_deductions_sound_against_ground_truth() {
        let nc = NeighborCache::new(9, 9);
        for seed in 0..25 {
            let mut rng = BoardRng::from_seed(seed);
            let board = Board::random(9, 9, 10, (4, 4), 1, &mut rng, &nc);
            let mut view = Grid::new(9, 9);
            board.reveal_into(&mut view, 4, 4);

            loop {
                let deduction = infer_moves(&view, &nc);
                if deduction.is_empty() {
                    break;
                }
                for &(r, c) in &deduction.mines {
                    assert!(board.is_mine(r, c), "seed {seed}: flagged clear cell ({r}, {c})");
                    view.set(r, c, Cell::Flagged);
                }
                for &(r, c) in &deduction.safe {
                    assert!(!board.is_mine(r, c), "seed {seed}: revealed mine ({r}, {c})");
                    board.reveal_into(&mut view, r, c);
                }
            }
        }
    }
}
