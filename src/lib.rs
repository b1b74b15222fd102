//! Constraint-based deduction engine for automated Minesweeper play.
//!
//! The surrounding system drives a real browser: it captures the board by
//! sampling pixels and injects mouse events to click cells. This crate is the
//! part in between. Given a snapshot of the visible grid it works out which
//! unknown cells are provably safe, which provably hold mines, and which cell
//! to open when nothing is provable. Capture, input injection, and game
//! lifecycle stay on the caller's side of the boundary; they hand in a
//! [`Grid`] and take back [`Move`]s.
//!
//! - [`types`]: cell states, grid snapshots, neighbor cache
//! - [`engine`]: deduction passes, guess heuristic, the [`Step`] API
//! - [`board`]: ground-truth boards for tests and simulation
//! - [`rng`]: seedable RNG for board setup
//! - [`sim`]: full-game playback against a ground-truth board

pub mod board;
pub mod engine;
pub mod rng;
pub mod sim;
pub mod types;

pub use engine::{infer_moves, next_step, Deduction, Guess, Move, MoveKind, Step};
pub use types::{Cell, Grid, GridError, NeighborCache};
