//! Solver for vanilla Simon Says.
//!
//! Simon has a mid-loop win condition: the operator can report a solve after
//! any stage from the third on, so the module overrides the default driving
//! loop rather than `run_stage`.

use defuse_core::edgework::EdgeFlags;
use defuse_core::error::SolveError;
use defuse_core::solver::{ModuleSolver, SolveContext, SolverState};

const COLORS: &[&str] = &["red", "blue", "green", "yellow"];

#[derive(Debug)]
pub struct SimonSays {
    state: SolverState,
    color_sequence: Vec<String>,
}

impl SimonSays {
    pub fn new(count: u32) -> Self {
        Self {
            state: SolverState::new(count),
            color_sequence: Vec::new(),
        }
    }

    pub fn boxed(count: u32) -> Box<dyn ModuleSolver> {
        Box::new(Self::new(count))
    }
}

/// The color to press for one flashed color, by serial vowel and strike
/// count.
fn simon_response(vowel: bool, strikes: u32, color: &str) -> &'static str {
    // rows: 0, 1, 2+ strikes; columns: red, blue, green, yellow
    let key: [[&'static str; 4]; 3] = if vowel {
        [
            ["Blue", "Red", "Yellow", "Green"],
            ["Yellow", "Green", "Blue", "Red"],
            ["Green", "Red", "Yellow", "Blue"],
        ]
    } else {
        [
            ["Blue", "Yellow", "Green", "Red"],
            ["Red", "Blue", "Yellow", "Green"],
            ["Yellow", "Green", "Blue", "Red"],
        ]
    };
    let row = &key[strikes.min(2) as usize];
    match color {
        "red" => row[0],
        "blue" => row[1],
        "green" => row[2],
        _ => row[3], // yellow
    }
}

impl ModuleSolver for SimonSays {
    fn name(&self) -> &str {
        "Simon Says"
    }

    fn type_id(&self) -> &str {
        "Simon"
    }

    fn required_edgework(&self) -> EdgeFlags {
        EdgeFlags::SERIAL | EdgeFlags::STRIKES
    }

    fn state(&self) -> &SolverState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut SolverState {
        &mut self.state
    }

    fn total_stages(&self) -> u32 {
        5 // longest possible flash sequence
    }

    fn clear_data(&mut self) {
        self.color_sequence.clear();
    }

    fn run_stage(&mut self, ctx: &mut SolveContext<'_>) -> Result<(), SolveError> {
        if self.state.current_stage() == 1 {
            ctx.console.emit("What color is flashing?");
        } else {
            ctx.console
                .emit("What color is now flashing at the end of the sequence?");
        }
        ctx.console
            .emit("Type one of \"red\", \"blue\", \"green\", or \"yellow\", without quotes.");
        let color = ctx.console.string_from_set(COLORS, false, false)?;
        self.color_sequence.push(color);
        let vowel = ctx.edgework.serial_contains_vowel();
        let strikes = ctx.edgework.strikes();
        ctx.console.emit("Press the following colors in order:");
        for flashed in &self.color_sequence {
            ctx.console.emit(simon_response(vowel, strikes, flashed));
        }
        Ok(())
    }

    fn on_struck(&mut self) {
        // roll back one stage and drop the color that struck
        self.state.rewind_stage();
        self.color_sequence.pop();
    }

    fn run_one_instance(&mut self, ctx: &mut SolveContext<'_>) -> Result<bool, SolveError> {
        self.announce(ctx);
        while self.advance_stage(ctx) {
            self.run_stage(ctx)?;
            self.check_strike(ctx)?;
            if self.state.current_stage() >= 3 && self.check_solve(ctx)? {
                return Ok(true);
            }
        }
        self.reset_stages();
        Ok(false)
    }
}
