//! Module pool selection: asking the operator which module types from a
//! catalog are physically present and building the matching solvers.

use crate::console::Console;
use crate::error::SolveError;
use crate::solver::ModuleSolver;

/// One selectable module type: its display name and a constructor taking
/// the number of physical copies.
#[derive(Clone, Copy)]
pub struct PoolEntry {
    pub name: &'static str,
    pub build: fn(u32) -> Box<dyn ModuleSolver>,
}

impl std::fmt::Debug for PoolEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoolEntry").field("name", &self.name).finish()
    }
}

/// Ask the operator which modules from `pool` are present on the bomb and
/// build one solver per distinct name, with `total_count` equal to how many
/// times the name was reported. Matching is case-insensitive; unrecognized
/// names are rejected by the console's set validation. `count == 0` reads
/// names until an empty line.
pub fn modules_from_pool(
    console: &mut dyn Console,
    pool: &[PoolEntry],
    count: usize,
    show_options: bool,
) -> Result<Vec<Box<dyn ModuleSolver>>, SolveError> {
    if show_options {
        console.emit("Which of the following modules are present on the bomb?");
    } else {
        console.emit("Which modules in the pool are present on the bomb?");
    }
    let names: Vec<&str> = pool.iter().map(|entry| entry.name).collect();
    let present = console.strings_from_set(&names, false, show_options, count)?;
    let mut solvers: Vec<Box<dyn ModuleSolver>> = Vec::new();
    for entry in pool {
        let copies = present
            .iter()
            .filter(|name| name.eq_ignore_ascii_case(entry.name))
            .count() as u32;
        if copies > 0 {
            solvers.push((entry.build)(copies));
        }
    }
    Ok(solvers)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ScriptedConsole, StubSolver};

    fn build_alpha(count: u32) -> Box<dyn ModuleSolver> {
        Box::new(StubSolver::new("alpha", count))
    }

    fn build_beta(count: u32) -> Box<dyn ModuleSolver> {
        Box::new(StubSolver::new("beta", count))
    }

    const POOL: &[PoolEntry] = &[
        PoolEntry {
            name: "Alpha",
            build: build_alpha,
        },
        PoolEntry {
            name: "Beta",
            build: build_beta,
        },
    ];

    #[test]
    fn repeats_become_copy_counts() {
        let mut console = ScriptedConsole::new(["alpha", "ALPHA", "beta"]);
        let solvers = modules_from_pool(&mut console, POOL, 3, true).unwrap();
        assert_eq!(solvers.len(), 2);
        assert_eq!(solvers[0].state().total_count(), 2);
        assert_eq!(solvers[1].state().total_count(), 1);
        assert!(console.saw("Which of the following modules are present on the bomb?"));
        assert!(console.saw("ALPHA, BETA"));
    }

    #[test]
    fn absent_types_build_nothing() {
        let mut console = ScriptedConsole::new(["beta", ""]);
        let solvers = modules_from_pool(&mut console, POOL, 0, false).unwrap();
        assert_eq!(solvers.len(), 1);
        assert_eq!(solvers[0].type_id(), "beta");
    }

    #[test]
    fn unrecognized_names_are_rejected_by_validation() {
        let mut console = ScriptedConsole::new(["gamma", "alpha"]);
        let solvers = modules_from_pool(&mut console, POOL, 1, true).unwrap();
        assert_eq!(solvers.len(), 1);
        assert!(console.saw("Answer \"gamma\" is not a valid answer and will be ignored."));
    }
}
