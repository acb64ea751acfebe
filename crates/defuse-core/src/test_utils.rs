//! Shared test helpers: a scripted console and a configurable stub solver.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so the helpers
//! are available to unit tests here and, via the `test-utils` feature, to
//! the downstream crates' tests.

use std::collections::VecDeque;
use std::io;

use crate::console::Console;
use crate::edgework::{Edgework, EdgeworkReport};
use crate::error::SolveError;
use crate::solver::{ModuleSolver, QueueTag, SolveContext, SolverState};

// ===========================================================================
// ScriptedConsole
// ===========================================================================

/// A [`Console`] fed from a prepared list of answers, capturing everything
/// emitted. Running out of answers surfaces as an I/O error so a test with a
/// short script fails loudly instead of hanging.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    pub fn push_answer(&mut self, answer: impl Into<String>) {
        self.answers.push_back(answer.into());
    }

    pub fn answers_remaining(&self) -> usize {
        self.answers.len()
    }

    /// Every line emitted so far, in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Whether any emitted line equals `line` exactly.
    pub fn saw(&self, line: &str) -> bool {
        self.transcript.iter().any(|l| l == line)
    }

    /// Whether any emitted line contains `fragment`.
    pub fn saw_containing(&self, fragment: &str) -> bool {
        self.transcript.iter().any(|l| l.contains(fragment))
    }
}

impl Console for ScriptedConsole {
    fn emit(&mut self, message: &str) {
        self.transcript.push(message.to_string());
    }

    fn read_response(&mut self) -> Result<String, SolveError> {
        self.answers.pop_front().ok_or_else(|| {
            SolveError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "scripted console ran out of answers",
            ))
        })
    }
}

// ===========================================================================
// Edgework helper
// ===========================================================================

/// An [`Edgework`] acquired from overrides alone, no prompting.
pub fn acquired_edgework(report: EdgeworkReport) -> Edgework {
    let mut edgework = Edgework::new();
    let mut console = ScriptedConsole::default();
    edgework
        .acquire(&mut console, report)
        .expect("override-only acquisition cannot prompt");
    edgework
}

// ===========================================================================
// StubSolver
// ===========================================================================

/// A configurable no-op solver for exercising the driving protocol and the
/// coordinator without any puzzle content. `run_stage` does nothing; all
/// interaction comes from the strike/solve queries of the default protocol.
#[derive(Debug)]
pub struct StubSolver {
    id: String,
    state: SolverState,
    stages: u32,
    reset_on_strike: bool,
    silent_solves: bool,
    reorder_mode: ReorderMode,
    /// How many times `run_stage` has executed.
    pub stages_run: u32,
    /// How many times `clear_data` has executed.
    pub clears: u32,
}

#[derive(Debug, Clone, Copy)]
enum ReorderMode {
    Identity,
    Reverse,
    DropFirst,
}

impl StubSolver {
    pub fn new(id: impl Into<String>, count: u32) -> Self {
        Self {
            id: id.into(),
            state: SolverState::new(count),
            stages: 1,
            reset_on_strike: false,
            silent_solves: false,
            reorder_mode: ReorderMode::Identity,
            stages_run: 0,
            clears: 0,
        }
    }

    pub fn with_stages(mut self, stages: u32) -> Self {
        self.stages = stages;
        self
    }

    pub fn with_reset_on_strike(mut self) -> Self {
        self.reset_on_strike = true;
        self
    }

    /// Mark instances solved locally without registering the solve with the
    /// edgework, to provoke bookkeeping violations in tests.
    pub fn with_silent_solves(mut self) -> Self {
        self.silent_solves = true;
        self
    }

    /// Reorder hook that reverses the queue.
    pub fn with_reversing_reorder(mut self) -> Self {
        self.reorder_mode = ReorderMode::Reverse;
        self
    }

    /// Reorder hook that illegally drops the first entry.
    pub fn with_dropping_reorder(mut self) -> Self {
        self.reorder_mode = ReorderMode::DropFirst;
        self
    }
}

impl ModuleSolver for StubSolver {
    fn name(&self) -> &str {
        &self.id
    }

    fn type_id(&self) -> &str {
        &self.id
    }

    fn required_edgework(&self) -> crate::edgework::EdgeFlags {
        crate::edgework::EdgeFlags::NONE
    }

    fn state(&self) -> &SolverState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut SolverState {
        &mut self.state
    }

    fn total_stages(&self) -> u32 {
        self.stages
    }

    fn reset_stages_on_strike(&self) -> bool {
        self.reset_on_strike
    }

    fn clear_data(&mut self) {
        self.clears += 1;
    }

    fn run_stage(&mut self, _ctx: &mut SolveContext<'_>) -> Result<(), SolveError> {
        self.stages_run += 1;
        Ok(())
    }

    fn check_solve(&mut self, ctx: &mut SolveContext<'_>) -> Result<bool, SolveError> {
        if !self.silent_solves {
            // default behavior
            if ctx.console.yes_no("Did the module solve?")? {
                ctx.edgework.register_solve();
                self.on_solved();
                ctx.hooks.handle_solve(ctx.edgework);
                return Ok(true);
            }
            return Ok(false);
        }
        if ctx.console.yes_no("Did the module solve?")? {
            self.on_solved();
            return Ok(true);
        }
        Ok(false)
    }

    fn reorder(&self, order: Vec<QueueTag>) -> Vec<QueueTag> {
        match self.reorder_mode {
            ReorderMode::Identity => order,
            ReorderMode::Reverse => order.into_iter().rev().collect(),
            ReorderMode::DropFirst => order.into_iter().skip(1).collect(),
        }
    }
}
