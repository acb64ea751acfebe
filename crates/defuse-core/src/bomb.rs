//! The bomb coordinator: owns the edgework and the solve queue, drives
//! edgework acquisition, and runs solvers until the bomb is defused.
//!
//! # Session shape
//!
//! 1. **Init** -- the queue is taken from the constructor; an empty
//!    [`Edgework`] is created and every queued solver's declared needs are
//!    folded into it.
//! 2. **Acquisition** -- `total_modules` is snapshotted as the sum of queued
//!    copy counts, then [`Edgework::acquire`] runs once. Solvers added later
//!    are not counted; that is an accepted limitation of pool construction.
//! 3. **Main loop** -- reorder pass, pop a solver from the back of the
//!    queue, run one instance, requeue at the back unless every copy of its
//!    type is solved.
//! 4. **Termination** -- the queue emptying while the bomb reports defused is
//!    success; any other combination is a consistency violation and aborts
//!    the session.
//!
//! # Reordering
//!
//! Each pass snapshots the queue as [`QueueTag`]s and folds that sequence
//! through every queued solver's `reorder` hook, in queue order -- later
//! hooks see the effect of earlier ones. Each hook must return a permutation
//! of its input; the deque is then permuted to match. The fold is sequential
//! and deterministic by construction.

use std::collections::VecDeque;

use crate::console::Console;
use crate::edgework::{Edgework, EdgeworkReport};
use crate::error::SolveError;
use crate::solver::{ModuleSolver, QueueTag, SolveContext};

// ---------------------------------------------------------------------------
// Session hooks
// ---------------------------------------------------------------------------

/// Coordinator-level observers invoked after every strike and solve. The
/// defaults do nothing; a boss-module-style scheduler can supply its own to
/// track cross-cutting consequences.
pub trait SessionHooks {
    fn handle_strike(&mut self, edgework: &Edgework) {
        let _ = edgework;
    }

    fn handle_solve(&mut self, edgework: &Edgework) {
        let _ = edgework;
    }
}

/// The default hooks: do nothing.
#[derive(Debug, Default)]
pub struct NoHooks;

impl SessionHooks for NoHooks {}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// How a completed session ended. Both variants are legitimate game endings;
/// software faults surface as [`SolveError`]s instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BombOutcome {
    Defused,
    Detonated,
}

// ---------------------------------------------------------------------------
// BombSolver
// ---------------------------------------------------------------------------

/// Coordinator for one defusal session. Owns the edgework and the solver
/// queue; contains no solving logic of its own.
pub struct BombSolver {
    edgework: Edgework,
    queue: VecDeque<Box<dyn ModuleSolver>>,
    hooks: Box<dyn SessionHooks>,
}

impl BombSolver {
    /// Build a coordinator over the given solvers and register their
    /// edgework needs.
    pub fn new(solvers: Vec<Box<dyn ModuleSolver>>) -> Self {
        let mut edgework = Edgework::new();
        for solver in &solvers {
            edgework.require(solver.required_edgework());
        }
        Self {
            edgework,
            queue: solvers.into(),
            hooks: Box::new(NoHooks),
        }
    }

    /// Replace the default session hooks.
    pub fn with_hooks(mut self, hooks: Box<dyn SessionHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn edgework(&self) -> &Edgework {
        &self.edgework
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Type identifiers of the queued solvers, front (solved last) to back
    /// (solved next).
    pub fn queue_type_ids(&self) -> Vec<&str> {
        self.queue.iter().map(|solver| solver.type_id()).collect()
    }

    /// How many individual modules are on the bomb. Meaningful only before
    /// edgework acquisition snapshots it.
    pub fn module_count(&self) -> u32 {
        self.queue
            .iter()
            .map(|solver| solver.state().total_count())
            .sum()
    }

    /// Run the one-time edgework acquisition, forcing `total_modules` to the
    /// current queue's module count.
    pub fn acquire_edgework(
        &mut self,
        console: &mut dyn Console,
        mut report: EdgeworkReport,
    ) -> Result<(), SolveError> {
        report.total_modules = Some(self.module_count());
        self.edgework.acquire(console, report)
    }

    /// Acquire edgework, then call each solver in turn until the bomb is
    /// defused or detonates. Consistency violations and console failures
    /// propagate as errors.
    pub fn run(
        &mut self,
        console: &mut dyn Console,
        report: EdgeworkReport,
    ) -> Result<BombOutcome, SolveError> {
        self.acquire_edgework(console, report)?;
        match self.run_queue(console) {
            Ok(()) => {
                console.emit("Bomb defused!");
                Ok(BombOutcome::Defused)
            }
            Err(SolveError::Detonated { strikes }) => {
                tracing::info!(strikes, "session ended in detonation");
                console.emit("Bomb exploded! Hopefully it wasn't my fault.");
                Ok(BombOutcome::Detonated)
            }
            Err(err) => Err(err),
        }
    }

    fn run_queue(&mut self, console: &mut dyn Console) -> Result<(), SolveError> {
        while !self.queue.is_empty() {
            if self.edgework.defused() {
                return Err(SolveError::DefusedWithQueue {
                    remaining: self.queue.len(),
                });
            }
            self.reorder_pass()?;
            let Some(mut solver) = self.queue.pop_back() else {
                break;
            };
            let mut ctx = SolveContext {
                edgework: &mut self.edgework,
                console: &mut *console,
                hooks: &mut *self.hooks,
            };
            let solved_instance = solver.run_one_instance(&mut ctx)?;
            tracing::debug!(
                module = solver.type_id(),
                solved_instance,
                remaining = self.queue.len(),
                "instance finished"
            );
            if !solver.all_solved() {
                self.queue.push_back(solver);
            }
        }
        if self.edgework.defused() {
            Ok(())
        } else {
            Err(SolveError::QueueNotDefused {
                solves: self.edgework.solves(),
                total: self.edgework.total_modules(),
            })
        }
    }

    /// Fold the queue order through every queued solver's reorder hook, then
    /// permute the queue to the final order. Run automatically before every
    /// dequeue; public so scheduling policies can be tested in isolation.
    pub fn reorder_pass(&mut self) -> Result<(), SolveError> {
        let mut order: Vec<QueueTag> = self
            .queue
            .iter()
            .enumerate()
            .map(|(slot, solver)| QueueTag {
                slot,
                type_id: solver.type_id().to_string(),
            })
            .collect();
        for idx in 0..self.queue.len() {
            let next = self.queue[idx].reorder(std::mem::take(&mut order));
            if !is_permutation(&next, self.queue.len()) {
                return Err(SolveError::ReorderCorrupted {
                    type_id: self.queue[idx].type_id().to_string(),
                });
            }
            order = next;
        }
        if order.iter().enumerate().any(|(i, tag)| tag.slot != i) {
            let new_order: Vec<&str> = order.iter().map(|tag| tag.type_id.as_str()).collect();
            tracing::debug!(?new_order, "queue reordered");
        }
        let mut slots: Vec<Option<Box<dyn ModuleSolver>>> =
            self.queue.drain(..).map(Some).collect();
        for tag in &order {
            if let Some(solver) = slots[tag.slot].take() {
                self.queue.push_back(solver);
            }
        }
        Ok(())
    }
}

fn is_permutation(order: &[QueueTag], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for tag in order {
        if tag.slot >= len || seen[tag.slot] {
            return false;
        }
        seen[tag.slot] = true;
    }
    true
}

// ===========================================================================
// Tests
// ===========================================================================
