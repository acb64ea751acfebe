//! The per-module-type state machine and its driving protocol.
//!
//! One [`ModuleSolver`] represents one module *type* on the bomb, carrying a
//! count of physical copies; all copies share the one state machine. The
//! trait requires only identity, declared edgework needs, access to the
//! embedded [`SolverState`], and the interactive logic for a single stage --
//! everything else (stage advancement, strike and solve queries, instance
//! announcement, queue reordering) has a default a solver can override.
//!
//! Solvers never hold references to the bomb. Each run receives a
//! [`SolveContext`] borrowing the shared [`Edgework`], the operator
//! [`Console`], and the coordinator's [`SessionHooks`], which also means a
//! solver cannot read edgework before the acquisition phase has produced it.

use crate::bomb::SessionHooks;
use crate::console::Console;
use crate::edgework::{EdgeFlags, Edgework};
use crate::error::SolveError;

// ---------------------------------------------------------------------------
// SolverState
// ---------------------------------------------------------------------------

/// Progress counters shared by every module solver: how many physical copies
/// exist, how many are solved, and how far into the current instance's
/// stages we are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverState {
    total_count: u32,
    solved_count: u32,
    current_stage: u32,
}

impl SolverState {
    /// State for a module type with `total_count` physical copies. A count
    /// of zero is treated as one.
    pub fn new(total_count: u32) -> Self {
        Self {
            total_count: total_count.max(1),
            solved_count: 0,
            current_stage: 0,
        }
    }

    pub fn total_count(&self) -> u32 {
        self.total_count
    }

    pub fn solved_count(&self) -> u32 {
        self.solved_count
    }

    /// The stage currently being attempted, 1-based; 0 between instances.
    pub fn current_stage(&self) -> u32 {
        self.current_stage
    }

    /// Whether every physical copy of this type is solved.
    pub fn all_solved(&self) -> bool {
        self.solved_count >= self.total_count
    }

    /// Move to the next stage and return its number.
    pub fn advance_stage(&mut self) -> u32 {
        self.current_stage += 1;
        self.current_stage
    }

    /// Roll back one stage (strike handling for non-resetting modules).
    pub fn rewind_stage(&mut self) {
        self.current_stage = self.current_stage.saturating_sub(1);
    }

    /// Drop back to before the first stage.
    pub fn reset_stage(&mut self) {
        self.current_stage = 0;
    }

    /// Record one solved instance. Saturates at `total_count`.
    pub fn record_solve(&mut self) {
        self.solved_count = (self.solved_count + 1).min(self.total_count);
    }
}

// ---------------------------------------------------------------------------
// SolveContext
// ---------------------------------------------------------------------------

/// Everything a solver may touch while running: the shared edgework, the
/// operator console, and the coordinator's session hooks.
pub struct SolveContext<'a> {
    pub edgework: &'a mut Edgework,
    pub console: &'a mut dyn Console,
    pub hooks: &'a mut dyn SessionHooks,
}

// ---------------------------------------------------------------------------
// QueueTag
// ---------------------------------------------------------------------------

/// Identity of one queued solver as seen by reordering hooks: its position
/// in the pre-pass queue (`slot`, 0 = front of the queue, which is solved
/// last) and its stable type identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueTag {
    pub slot: usize,
    pub type_id: String,
}

// ---------------------------------------------------------------------------
// ModuleSolver
// ---------------------------------------------------------------------------

/// One module type's solving protocol.
pub trait ModuleSolver {
    /// Display name, used in operator-facing messages.
    fn name(&self) -> &str;

    /// Stable type identifier, used by name-keyed scheduling policies.
    fn type_id(&self) -> &str;

    /// Edgework fields this solver reads.
    fn required_edgework(&self) -> EdgeFlags;

    fn state(&self) -> &SolverState;

    fn state_mut(&mut self) -> &mut SolverState;

    /// Interactive logic for exactly one stage (the entire module if
    /// unstaged).
    fn run_stage(&mut self, ctx: &mut SolveContext<'_>) -> Result<(), SolveError>;

    /// How many stages one instance has. Unstaged modules keep the default.
    fn total_stages(&self) -> u32 {
        1
    }

    /// Whether a strike wipes all stage progress instead of rolling back one
    /// stage.
    fn reset_stages_on_strike(&self) -> bool {
        false
    }

    /// Tear down instance-scoped data. Invoked at every stage reset; the
    /// matching setup lives in the solver's constructor.
    fn clear_data(&mut self) {}

    /// Whether every physical copy of this type is solved.
    fn all_solved(&self) -> bool {
        self.state().all_solved()
    }

    /// Print the Now Solving banner. Use only at the start of an instance.
    fn announce(&mut self, ctx: &mut SolveContext<'_>) {
        let number = self.state().solved_count() + 1;
        ctx.console
            .emit(&format!("--- NOW SOLVING: {} #{}", self.name(), number));
    }

    /// Set up the next stage; false once all stages have been attempted.
    fn advance_stage(&mut self, ctx: &mut SolveContext<'_>) -> bool {
        let stage = self.state_mut().advance_stage();
        let stages_remain = stage <= self.total_stages();
        if self.total_stages() > 1 && stages_remain {
            ctx.console.emit(&format!("- STAGE {stage}"));
        }
        stages_remain
    }

    /// Reset stage progress and clear instance data.
    fn reset_stages(&mut self) {
        self.state_mut().reset_stage();
        self.clear_data();
    }

    /// Ask whether the last stage struck and handle it if so. A strike that
    /// reaches the limit propagates as [`SolveError::Detonated`].
    fn check_strike(&mut self, ctx: &mut SolveContext<'_>) -> Result<bool, SolveError> {
        if ctx.console.yes_no("Did the module strike?")? {
            ctx.edgework.register_strike()?;
            self.on_struck();
            ctx.hooks.handle_strike(ctx.edgework);
            return Ok(true);
        }
        Ok(false)
    }

    /// Ask whether the instance solved and handle it if so.
    fn check_solve(&mut self, ctx: &mut SolveContext<'_>) -> Result<bool, SolveError> {
        if ctx.console.yes_no("Did the module solve?")? {
            ctx.edgework.register_solve();
            self.on_solved();
            ctx.hooks.handle_solve(ctx.edgework);
            return Ok(true);
        }
        Ok(false)
    }

    /// Handle a strike on this module.
    fn on_struck(&mut self) {
        if self.reset_stages_on_strike() {
            self.reset_stages();
        } else {
            self.state_mut().rewind_stage();
        }
    }

    /// Handle a solve of this module.
    fn on_solved(&mut self) {
        self.reset_stages();
        self.state_mut().record_solve();
    }

    /// Run one instance of this module to completion or abandonment.
    /// Returns whether the instance solved; an unsolved instance stays in
    /// the queue to be retried from its first stage.
    fn run_one_instance(&mut self, ctx: &mut SolveContext<'_>) -> Result<bool, SolveError> {
        self.announce(ctx);
        while self.advance_stage(ctx) {
            self.run_stage(ctx)?;
            self.check_strike(ctx)?;
        }
        let solved = self.check_solve(ctx)?;
        if !solved {
            self.reset_stages();
        }
        Ok(solved)
    }

    /// Adjust the solve queue, if needed. Must return a permutation of
    /// `order`; the default leaves it unchanged.
    fn reorder(&self, order: Vec<QueueTag>) -> Vec<QueueTag> {
        order
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bomb::NoHooks;
    use crate::edgework::EdgeworkReport;
    use crate::test_utils::{ScriptedConsole, StubSolver, acquired_edgework};

    fn run_instance(
        solver: &mut dyn ModuleSolver,
        edgework: &mut Edgework,
        console: &mut ScriptedConsole,
    ) -> Result<bool, SolveError> {
        let mut hooks = NoHooks;
        let mut ctx = SolveContext {
            edgework,
            console,
            hooks: &mut hooks,
        };
        solver.run_one_instance(&mut ctx)
    }

    #[test]
    fn state_counters_clamp() {
        let mut state = SolverState::new(0);
        assert_eq!(state.total_count(), 1);
        state.record_solve();
        state.record_solve();
        assert_eq!(state.solved_count(), 1);
        state.rewind_stage();
        assert_eq!(state.current_stage(), 0);
    }

    #[test]
    fn single_stage_solve_first_ask() {
        let mut solver = StubSolver::new("probe", 1);
        let mut edgework = acquired_edgework(EdgeworkReport {
            total_modules: Some(1),
            ..Default::default()
        });
        // no strike, solved
        let mut console = ScriptedConsole::new(["n", "y"]);
        let solved = run_instance(&mut solver, &mut edgework, &mut console).unwrap();
        assert!(solved);
        assert!(solver.all_solved());
        assert_eq!(edgework.solves(), 1);
        assert!(console.saw("--- NOW SOLVING: probe #1"));
        // unstaged module: no stage banner
        assert!(!console.saw("- STAGE 1"));
    }

    #[test]
    fn unsolved_instance_resets_stage_progress() {
        let mut solver = StubSolver::new("probe", 1).with_stages(3);
        let mut edgework = acquired_edgework(EdgeworkReport::default());
        // three stages, no strikes, then "did it solve" -> no
        let mut console = ScriptedConsole::new(["n", "n", "n", "n"]);
        let solved = run_instance(&mut solver, &mut edgework, &mut console).unwrap();
        assert!(!solved);
        assert_eq!(solver.state().current_stage(), 0);
        assert!(console.saw("- STAGE 3"));
    }

    #[test]
    fn strike_rolls_back_one_stage_and_stage_reruns() {
        let mut solver = StubSolver::new("probe", 1).with_stages(2);
        let mut edgework = acquired_edgework(EdgeworkReport::default());
        // stage 1 strikes, so it reruns: strike-yes, strike-no, stage 2
        // strike-no, solve-yes
        let mut console = ScriptedConsole::new(["y", "n", "n", "y"]);
        let solved = run_instance(&mut solver, &mut edgework, &mut console).unwrap();
        assert!(solved);
        assert_eq!(edgework.strikes(), 1);
        assert_eq!(solver.stages_run, 3); // stage 1 twice, stage 2 once
    }

    #[test]
    fn strike_resets_all_stages_when_configured() {
        let mut solver = StubSolver::new("probe", 1)
            .with_stages(2)
            .with_reset_on_strike();
        let mut edgework = acquired_edgework(EdgeworkReport::default());
        // stage 1 clean, stage 2 strikes -> back to stage 1; then both
        // stages clean and the instance solves
        let mut console = ScriptedConsole::new(["n", "y", "n", "n", "y"]);
        let solved = run_instance(&mut solver, &mut edgework, &mut console).unwrap();
        assert!(solved);
        // once for the strike reset, once for the solve reset
        assert_eq!(solver.clears, 2);
        assert_eq!(solver.stages_run, 4);
    }

    #[test]
    fn detonation_fires_before_solve_query() {
        let mut solver = StubSolver::new("probe", 1);
        let mut edgework = acquired_edgework(EdgeworkReport {
            max_strikes: Some(1),
            ..Default::default()
        });
        let mut console = ScriptedConsole::new(["y", "y"]);
        let result = run_instance(&mut solver, &mut edgework, &mut console);
        assert!(matches!(result, Err(SolveError::Detonated { strikes: 1 })));
        // the solve query was never reached
        assert_eq!(console.answers_remaining(), 1);
        assert!(!console.saw("Did the module solve? (y/n)"));
    }

    #[test]
    fn second_instance_announced_with_next_ordinal() {
        let mut solver = StubSolver::new("probe", 2);
        let mut edgework = acquired_edgework(EdgeworkReport {
            total_modules: Some(2),
            ..Default::default()
        });
        let mut console = ScriptedConsole::new(["n", "y", "n", "y"]);
        assert!(run_instance(&mut solver, &mut edgework, &mut console).unwrap());
        assert!(!solver.all_solved());
        assert!(run_instance(&mut solver, &mut edgework, &mut console).unwrap());
        assert!(solver.all_solved());
        assert!(console.saw("--- NOW SOLVING: probe #1"));
        assert!(console.saw("--- NOW SOLVING: probe #2"));
    }

    #[test]
    fn default_reorder_is_identity() {
        let solver = StubSolver::new("probe", 1);
        let order = vec![
            QueueTag {
                slot: 0,
                type_id: "a".to_string(),
            },
            QueueTag {
                slot: 1,
                type_id: "b".to_string(),
            },
        ];
        assert_eq!(solver.reorder(order.clone()), order);
    }
}
