//! Solver for Turn The Keys.
//!
//! Turning the right keys voids certain other modules, so this solver also
//! carries the scheduling policy: modules whose solves are required first
//! move to the back of the queue (solved next), modules that must stay
//! unsolved move to the front (solved last).

use defuse_core::edgework::EdgeFlags;
use defuse_core::error::SolveError;
use defuse_core::solver::{ModuleSolver, QueueTag, SolveContext, SolverState};

/// Type ids that must be solved before the right keys turn.
const REQUIRED_SOLVES: &[&str] = &[
    // vanilla modules
    "BigButton",
    "Keypad",
    "Morse",
    "Password",
    "WhosOnFirst",
    "Wires",
    // modded modules
    "ColourFlash",
    "CrazyTalk",
    "KeypadV2", // Round Keypad
    "Listening",
    "OrientationCube",
    "TwoBits",
];

/// Type ids that must not be solved until the right keys turn.
const BANNED_SOLVES: &[&str] = &[
    // vanilla modules
    "Maze",
    "Memory",
    "Simon",
    "Venn", // Complicated Wires
    "WireSequence",
    // modded modules
    "combinationLock",
    "CryptModule", // Cryptography
    "MazeV2",      // Plumbing
    "Semaphore",
    "spwizAstrology", // Astrology
    "switchModule",   // Switches
];

#[derive(Debug)]
pub struct TurnTheKeys {
    state: SolverState,
    right_keys_turned: bool,
}

impl TurnTheKeys {
    pub fn new(count: u32) -> Self {
        Self {
            state: SolverState::new(count),
            right_keys_turned: false,
        }
    }

    pub fn boxed(count: u32) -> Box<dyn ModuleSolver> {
        Box::new(Self::new(count))
    }
}

impl ModuleSolver for TurnTheKeys {
    fn name(&self) -> &str {
        "Turn The Keys"
    }

    fn type_id(&self) -> &str {
        "TurnTheKeyAdvanced"
    }

    fn required_edgework(&self) -> EdgeFlags {
        EdgeFlags::NONE
    }

    fn state(&self) -> &SolverState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut SolverState {
        &mut self.state
    }

    fn run_stage(&mut self, ctx: &mut SolveContext<'_>) -> Result<(), SolveError> {
        if !self.right_keys_turned {
            ctx.console
                .emit("This module and others like it have a number displaying each module's priority.");
            ctx.console
                .emit("Turn each right key on modules of this type, in descending order of priority.");
        }
        ctx.console
            .emit("Turn the lowest priority left key that hasn't already been turned.");
        Ok(())
    }

    fn on_solved(&mut self) {
        self.right_keys_turned = true;
        self.reset_stages();
        self.state.record_solve();
    }

    fn reorder(&self, order: Vec<QueueTag>) -> Vec<QueueTag> {
        let required = |tag: &QueueTag| REQUIRED_SOLVES.contains(&tag.type_id.as_str());
        let banned = |tag: &QueueTag| BANNED_SOLVES.contains(&tag.type_id.as_str());
        // banned types go to the front reversed, required types to the back
        let mut queue: Vec<QueueTag> =
            order.iter().filter(|tag| banned(tag)).rev().cloned().collect();
        queue.extend(
            order
                .iter()
                .filter(|tag| !required(tag) && !banned(tag))
                .cloned(),
        );
        queue.extend(order.iter().filter(|tag| required(tag)).cloned());
        queue
    }
}
