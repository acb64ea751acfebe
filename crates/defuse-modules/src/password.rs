//! Solver for vanilla Password.

use std::collections::HashSet;

use defuse_core::edgework::EdgeFlags;
use defuse_core::error::SolveError;
use defuse_core::solver::{ModuleSolver, SolveContext, SolverState};

const WORDS: [&str; 35] = [
    "about", "after", "again", "below", "could", "every", "first", "found", "great",
    "house", "large", "learn", "never", "other", "place", "plant", "point", "right",
    "small", "sound", "spell", "still", "study", "their", "there", "these", "thing",
    "think", "three", "water", "where", "which", "world", "would", "write",
];

fn column_letters_valid(text: &str) -> bool {
    text.len() == 6 && text.chars().all(|c| c.is_ascii_lowercase())
}

#[derive(Debug)]
pub struct Password {
    state: SolverState,
}

impl Password {
    pub fn new(count: u32) -> Self {
        Self {
            state: SolverState::new(count),
        }
    }

    pub fn boxed(count: u32) -> Box<dyn ModuleSolver> {
        Box::new(Self::new(count))
    }
}

impl ModuleSolver for Password {
    fn name(&self) -> &str {
        "Password"
    }

    fn type_id(&self) -> &str {
        "Password"
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
            let mut possible: Vec<&str> = WORDS.to_vec();
            for column in 0..5 {
                ctx.console
                    .emit(&format!("What letters are in column {}?", column + 1));
                let mut letters = ctx.console.string_matching(&column_letters_valid, false)?;
                while letters.chars().collect::<HashSet<_>>().len() != 6 {
                    ctx.console.emit("There should be 6 unique letters in the column.");
                    ctx.console
                        .emit(&format!("What letters are in column {}?", column + 1));
                    letters = ctx.console.string_matching(&column_letters_valid, false)?;
                }
                possible.retain(|word| {
                    word.chars()
                        .nth(column)
                        .is_some_and(|c| letters.contains(c))
                });
                if possible.len() == 1 {
                    ctx.console.emit(&format!(
                        "Enter the password \"{}\".",
                        possible[0].to_uppercase()
                    ));
                    return Ok(());
                }
                if possible.is_empty() {
                    break;
                }
            }
            // no unique word after five columns: operator input must be off
            ctx.console.emit("Something went wrong. Let's start over.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use defuse_core::bomb::NoHooks;
    use defuse_core::edgework::EdgeworkReport;
    use defuse_core::test_utils::{ScriptedConsole, acquired_edgework};

    fn run_stage_with(answers: &[&str]) -> ScriptedConsole {
        let mut solver = Password::new(1);
        let mut edgework = acquired_edgework(EdgeworkReport::default());
        let mut console = ScriptedConsole::new(answers.iter().copied());
        let mut hooks = NoHooks;
        let mut ctx = SolveContext {
            edgework: &mut edgework,
            console: &mut console,
            hooks: &mut hooks,
        };
        solver.state_mut().advance_stage();
        solver.run_stage(&mut ctx).unwrap();
        console
    }

    #[test]
    fn narrows_to_a_unique_word() {
        // Column 1 "wabcde" keeps about/after/again/below/could/every/water/
        // where/which/world/would/write; column 2 "hxyzqj" keeps only
        // where/which, column 3 "eqjxyz" keeps only "where".
        let console = run_stage_with(&["wabcde", "hxyzqj", "eqjxyz"]);
        assert!(console.saw("Enter the password \"WHERE\"."));
    }

    #[test]
    fn duplicate_letters_in_a_column_reprompt() {
        let console = run_stage_with(&["aabbcc", "wabcde", "hxyzqj", "eqjxyz"]);
        assert!(console.saw("There should be 6 unique letters in the column."));
        assert!(console.saw("Enter the password \"WHERE\"."));
    }

    #[test]
    fn impossible_columns_restart_the_stage() {
        // No password starts with any of "qjzxvk", so the filter empties
        // and the stage restarts; the retry then resolves to "where".
        let console = run_stage_with(&["qjzxvk", "wabcde", "hxyzqj", "eqjxyz"]);
        assert!(console.saw("Something went wrong. Let's start over."));
        assert!(console.saw("Enter the password \"WHERE\"."));
    }
}
