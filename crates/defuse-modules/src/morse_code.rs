//! Solver for vanilla Morse Code.

use defuse_core::edgework::EdgeFlags;
use defuse_core::error::SolveError;
use defuse_core::solver::{ModuleSolver, SolveContext, SolverState};

use crate::morse;

/// Response frequency (the digits after "3.") for each word the module can
/// flash.
const WORD_TO_FREQ: &[(&str, &str)] = &[
    ("shell", "505"),
    ("halls", "515"),
    ("slick", "522"),
    ("trick", "532"),
    ("boxes", "535"),
    ("leaks", "542"),
    ("strobe", "545"),
    ("bistro", "552"),
    ("flick", "555"),
    ("bombs", "565"),
    ("break", "572"),
    ("brick", "575"),
    ("steak", "582"),
    ("sting", "592"),
    ("vector", "595"),
    ("beats", "600"),
];

fn frequency_for(word: &str) -> Option<&'static str> {
    WORD_TO_FREQ
        .iter()
        .find(|(known, _)| *known == word)
        .map(|(_, freq)| *freq)
}

#[derive(Debug)]
pub struct MorseCode {
    state: SolverState,
}

impl MorseCode {
    pub fn new(count: u32) -> Self {
        Self {
            state: SolverState::new(count),
        }
    }

    pub fn boxed(count: u32) -> Box<dyn ModuleSolver> {
        Box::new(Self::new(count))
    }
}

impl ModuleSolver for MorseCode {
    fn name(&self) -> &str {
        "Morse Code"
    }

    fn type_id(&self) -> &str {
        "Morse"
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
        loop {
            ctx.console.emit("What Morse Code sequence is flashing?");
            let word = morse::ask_word(ctx.console)?;
            if let Some(freq) = frequency_for(&word) {
                ctx.console
                    .emit(&format!("Respond at frequency 3.{freq} MHz."));
                return Ok(());
            }
            ctx.console.emit("That word isn't in my table.");
        }
    }
}
