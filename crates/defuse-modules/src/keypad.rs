//! Solver for vanilla Keypad.

use defuse_core::edgework::EdgeFlags;
use defuse_core::error::SolveError;
use defuse_core::solver::{ModuleSolver, SolveContext, SolverState};

const SYMBOLS: &[&str] = &[
    "copyright",
    "filled star",
    "hollow star",
    "smiley face",
    "double k",
    "omega",
    "squidknife",
    "pumpkin",
    "hook n",
    "six",
    "squiggly n",
    "at",
    "ae",
    "melted three",
    "euro",
    "n with hat",
    "dragon",
    "question mark",
    "paragraph",
    "right c",
    "left c",
    "pitchfork",
    "cursive",
    "tracks",
    "balloon",
    "upside down y",
    "bt",
];

/// The six key columns, top to bottom. Exactly one column contains any
/// solvable set of four symbols.
static COLUMNS: [[&str; 7]; 6] = [
    [
        "balloon",
        "at",
        "upside down y",
        "squiggly n",
        "squidknife",
        "hook n",
        "left c",
    ],
    [
        "euro",
        "balloon",
        "left c",
        "cursive",
        "hollow star",
        "hook n",
        "question mark",
    ],
    [
        "copyright",
        "pumpkin",
        "cursive",
        "double k",
        "melted three",
        "upside down y",
        "hollow star",
    ],
    [
        "six",
        "paragraph",
        "bt",
        "squidknife",
        "double k",
        "question mark",
        "smiley face",
    ],
    [
        "pitchfork",
        "smiley face",
        "bt",
        "right c",
        "paragraph",
        "dragon",
        "filled star",
    ],
    [
        "six",
        "euro",
        "tracks",
        "ae",
        "pitchfork",
        "n with hat",
        "omega",
    ],
];

#[derive(Debug)]
pub struct Keypad {
    state: SolverState,
}

impl Keypad {
    pub fn new(count: u32) -> Self {
        Self {
            state: SolverState::new(count),
        }
    }

    pub fn boxed(count: u32) -> Box<dyn ModuleSolver> {
        Box::new(Self::new(count))
    }
}

fn column_containing(symbols: &[String]) -> Option<&'static [&'static str; 7]> {
    COLUMNS
        .iter()
        .find(|column| symbols.iter().all(|s| column.contains(&s.as_str())))
}

impl ModuleSolver for Keypad {
    fn name(&self) -> &str {
        "Keypad"
    }

    fn type_id(&self) -> &str {
        "Keypad"
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
        ctx.console.emit("What symbols are on the keypad?");
        let mut symbols = ctx.console.strings_from_set(SYMBOLS, false, true, 4)?;
        while column_containing(&symbols).is_none() {
            ctx.console.emit("I couldn't find a solution for those symbols.");
            ctx.console.emit("Please ensure you typed them correctly.");
            ctx.console.emit("What symbols are on the keypad?");
            symbols = ctx.console.strings_from_set(SYMBOLS, false, true, 4)?;
        }
        if let Some(column) = column_containing(&symbols) {
            ctx.console.emit("Press the keys in the following order:");
            for symbol in column {
                if symbols.iter().any(|s| s == symbol) {
                    ctx.console.emit(&symbol.to_uppercase());
                }
            }
        }
        Ok(())
    }
}
