//! Defuse Core -- the coordination engine for cooperative bomb defusal.
//!
//! An operator sits in front of a bomb; this library plays the expert on the
//! other end of the line. A [`bomb::BombSolver`] owns one
//! [`edgework::Edgework`] record and a queue of [`solver::ModuleSolver`]s,
//! one per module type on the bomb. The coordinator first collects exactly
//! the edgework fields the queued solvers declare they need, then runs
//! solvers one instance at a time until every module is solved or the strike
//! limit detonates the bomb.
//!
//! # Session pipeline
//!
//! 1. **Pool selection** -- [`pool::modules_from_pool`] asks which module
//!    types are present and builds the solver queue.
//! 2. **Acquisition** -- `total_modules` is snapshotted and
//!    [`edgework::Edgework::acquire`] prompts for the declared fields.
//! 3. **Main loop** -- reorder pass (a fold of the queue order through every
//!    solver's `reorder` hook), pop, run one instance, requeue unless the
//!    type is fully solved.
//! 4. **Termination** -- empty queue with a defused bomb is success; any
//!    other combination is a consistency violation.
//!
//! # Key types
//!
//! - [`bomb::BombSolver`] -- session coordinator and queue owner.
//! - [`bomb::BombOutcome`] -- how a completed session ended (defused or
//!   detonated); detonation is an outcome value, not a process exit.
//! - [`solver::ModuleSolver`] -- the per-module-type contract: identity,
//!   declared edgework needs, one-stage logic, and overridable driving
//!   hooks.
//! - [`edgework::Edgework`] -- device metadata and the strike/solve
//!   counters, mutated only through its registration operations.
//! - [`console::Console`] -- the blocking operator I/O boundary, with the
//!   prompt/validation/retry loops as provided methods.
//! - [`error::SolveError`] -- the full error taxonomy, detonation included.

pub mod bomb;
pub mod console;
pub mod edgework;
pub mod error;
pub mod pool;
pub mod solver;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
