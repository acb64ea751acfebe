//! Error taxonomy for a defusal session.
//!
//! A session can end three ways: the bomb is defused (success), the bomb
//! detonates (a legitimate game outcome, carried as [`SolveError::Detonated`]
//! until the coordinator converts it into an outcome value), or something is
//! actually wrong -- a bookkeeping violation, an operator who never produces a
//! valid answer, or an I/O failure. All of them travel through one enum so
//! `?` works end-to-end.

use thiserror::Error;

/// Errors and terminal conditions raised while solving a bomb.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The strike limit was reached and the bomb detonated. This is the game
    /// ending, not a software fault; `BombSolver::run` converts it into
    /// [`BombOutcome::Detonated`](crate::bomb::BombOutcome::Detonated).
    #[error("bomb detonated after {strikes} strikes")]
    Detonated { strikes: u32 },

    /// The bomb reported defused while solvers remained queued. Indicates a
    /// module that over-reported solves or a miscounted pool.
    #[error("bomb defused with {remaining} solver(s) still queued")]
    DefusedWithQueue { remaining: usize },

    /// The solver queue drained without the bomb reporting defused. Indicates
    /// a module that under-reported solves or a miscounted pool.
    #[error("solver queue empty but only {solves} of {total} modules solved")]
    QueueNotDefused { solves: u32, total: u32 },

    /// A reorder hook returned something other than a permutation of the
    /// queue it was given.
    #[error("reorder hook of \"{type_id}\" corrupted the solve queue")]
    ReorderCorrupted { type_id: String },

    /// The operator exhausted the invalid-answer retry budget on one prompt.
    #[error("too many invalid responses ({attempts} attempts)")]
    RetriesExhausted { attempts: u32 },

    /// The console failed to read or write.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SolveError {
    /// Whether this error is a consistency violation (a bug in module
    /// bookkeeping or pool construction) rather than a game outcome or an
    /// input-layer failure.
    pub fn is_consistency_violation(&self) -> bool {
        matches!(
            self,
            SolveError::DefusedWithQueue { .. }
                | SolveError::QueueNotDefused { .. }
                | SolveError::ReorderCorrupted { .. }
        )
    }
}
