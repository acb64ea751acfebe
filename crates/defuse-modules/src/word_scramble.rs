//! Solver for Word Scramble.

use std::collections::BTreeSet;

use defuse_core::edgework::EdgeFlags;
use defuse_core::error::SolveError;
use defuse_core::solver::{ModuleSolver, SolveContext, SolverState};

const WORDS: [&str; 30] = [
    "module", "ottawa", "banana", "kaboom", "letter", "widget", "person", "sapper",
    "wiring", "archer", "device", "rocket", "damage", "defuse", "flames", "semtex",
    "cannon", "blasts", "attack", "weapon", "charge", "napalm", "mortar", "bursts",
    "casing", "disarm", "keypad", "button", "robots", "kevlar",
];

fn letter_set(word: &str) -> BTreeSet<char> {
    word.chars().collect()
}

fn unscramble(scramble: &str) -> Option<&'static str> {
    let letters = letter_set(scramble);
    WORDS.iter().copied().find(|word| letter_set(word) == letters)
}

fn six_lowercase(text: &str) -> bool {
    text.len() == 6 && text.chars().all(|c| c.is_ascii_lowercase())
}

#[derive(Debug)]
pub struct WordScramble {
    state: SolverState,
}

impl WordScramble {
    pub fn new(count: u32) -> Self {
        Self {
            state: SolverState::new(count),
        }
    }

    pub fn boxed(count: u32) -> Box<dyn ModuleSolver> {
        Box::new(Self::new(count))
    }
}

impl ModuleSolver for WordScramble {
    fn name(&self) -> &str {
        "Word Scramble"
    }

    fn type_id(&self) -> &str {
        "WordScrambleModule"
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
        ctx.console.emit("What is displayed on the module?");
        let mut scramble = ctx.console.string_matching(&six_lowercase, false)?;
        let answer = loop {
            if let Some(word) = unscramble(&scramble) {
                break word;
            }
            ctx.console.emit("Those letters don't correspond to a known word.");
            ctx.console.emit("What is displayed on the module?");
            scramble = ctx.console.string_matching(&six_lowercase, false)?;
        };
        ctx.console.emit(&format!("Type in the word \"{answer}\"."));
        Ok(())
    }
}
