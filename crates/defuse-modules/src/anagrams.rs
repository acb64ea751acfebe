//! Solver for Anagrams.

use std::collections::BTreeSet;

use defuse_core::edgework::EdgeFlags;
use defuse_core::error::SolveError;
use defuse_core::solver::{ModuleSolver, SolveContext, SolverState};

const WORDS: &[&str] = &[
    "stream", "master", "tamers", "looped", "poodle", "pooled", "cellar", "caller",
    "recall", "seated", "sedate", "teased", "rescue", "secure", "recuse", "rashes",
    "shears", "shares", "barely", "barley", "bleary", "duster", "rusted", "rudest",
];

fn letter_set(word: &str) -> BTreeSet<char> {
    word.chars().collect()
}

#[derive(Debug)]
pub struct Anagrams {
    state: SolverState,
}

impl Anagrams {
    pub fn new(count: u32) -> Self {
        Self {
            state: SolverState::new(count),
        }
    }

    pub fn boxed(count: u32) -> Box<dyn ModuleSolver> {
        Box::new(Self::new(count))
    }
}

impl ModuleSolver for Anagrams {
    fn name(&self) -> &str {
        "Anagrams"
    }

    fn type_id(&self) -> &str {
        "AnagramsModule"
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
        ctx.console.emit("What word is on the display?");
        let word = ctx.console.string_from_set(WORDS, false, false)?;
        let letters = letter_set(&word);
        for candidate in WORDS {
            if letter_set(candidate) == letters && *candidate != word {
                ctx.console
                    .emit(&format!("Type in the word \"{candidate}\"."));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use defuse_core::bomb::NoHooks;
    use defuse_core::edgework::EdgeworkReport;
    use defuse_core::test_utils::{ScriptedConsole, acquired_edgework};

    #[test]
    fn offers_the_other_anagrams() {
        let mut solver = Anagrams::new(1);
        let mut edgework = acquired_edgework(EdgeworkReport::default());
        let mut console = ScriptedConsole::new(["stream"]);
        let mut hooks = NoHooks;
        let mut ctx = SolveContext {
            edgework: &mut edgework,
            console: &mut console,
            hooks: &mut hooks,
        };
        solver.state_mut().advance_stage();
        solver.run_stage(&mut ctx).unwrap();
        assert!(console.saw("Type in the word \"master\"."));
        assert!(console.saw("Type in the word \"tamers\"."));
        assert!(!console.saw("Type in the word \"stream\"."));
    }
}
