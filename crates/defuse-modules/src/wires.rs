//! Solver for vanilla Wires.

use defuse_core::edgework::EdgeFlags;
use defuse_core::error::SolveError;
use defuse_core::solver::{ModuleSolver, SolveContext, SolverState};

#[derive(Debug)]
pub struct Wires {
    state: SolverState,
}

impl Wires {
    pub fn new(count: u32) -> Self {
        Self {
            state: SolverState::new(count),
        }
    }

    pub fn boxed(count: u32) -> Box<dyn ModuleSolver> {
        Box::new(Self::new(count))
    }
}

impl ModuleSolver for Wires {
    fn name(&self) -> &str {
        "Wires"
    }

    fn type_id(&self) -> &str {
        "Wires"
    }

    fn required_edgework(&self) -> EdgeFlags {
        EdgeFlags::SERIAL
    }

    fn state(&self) -> &SolverState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut SolverState {
        &mut self.state
    }

    fn run_stage(&mut self, ctx: &mut SolveContext<'_>) -> Result<(), SolveError> {
        ctx.console
            .emit("What color wires are on the module, from top to bottom?");
        ctx.console
            .emit("Type R for red, Y for yellow, B for blue, W for white, and K for black.");
        let wires = ctx.console.string_matching(&wire_list_valid, false)?;
        let location = wire_to_cut(&wires, ctx.edgework.serial_last_digit_odd());
        ctx.console.emit(&format!("Cut the {location} wire."));
        Ok(())
    }
}

fn wire_list_valid(text: &str) -> bool {
    (3..=6).contains(&text.len()) && text.chars().all(|c| "rybwk".contains(c))
}

/// Which wire to cut, given the colors top to bottom and the serial parity.
fn wire_to_cut(wires: &str, serial_odd: bool) -> &'static str {
    let count = |color: char| wires.matches(color).count();
    let last = wires.chars().last();
    match wires.len() {
        3 => {
            if !wires.contains('r') {
                "second"
            } else if last == Some('w') {
                "last"
            } else if count('b') > 1 {
                "last blue"
            } else {
                "last"
            }
        }
        4 => {
            if count('r') > 1 && serial_odd {
                "last red"
            } else if last == Some('y') && !wires.contains('r') {
                "first"
            } else if count('b') == 1 {
                "first"
            } else if count('y') > 1 {
                "last"
            } else {
                "second"
            }
        }
        5 => {
            if last == Some('k') && serial_odd {
                "fourth"
            } else if count('r') == 1 && count('y') > 1 {
                "first"
            } else if !wires.contains('k') {
                "second"
            } else {
                "first"
            }
        }
        _ => {
            if !wires.contains('y') && serial_odd {
                "third"
            } else if count('y') == 1 && count('w') > 1 {
                "fourth"
            } else if !wires.contains('r') {
                "last"
            } else {
                "fourth"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_wire_rules() {
        assert_eq!(wire_to_cut("bky", false), "second");
        assert_eq!(wire_to_cut("rbw", false), "last");
        assert_eq!(wire_to_cut("rbb", false), "last blue");
        assert_eq!(wire_to_cut("ryk", false), "last");
    }

    #[test]
    fn four_wire_rules() {
        assert_eq!(wire_to_cut("rrby", true), "last red");
        assert_eq!(wire_to_cut("rrby", false), "first"); // single blue
        assert_eq!(wire_to_cut("bkwy", false), "first"); // ends yellow, no red
        assert_eq!(wire_to_cut("ykyw", false), "last"); // two yellows
        assert_eq!(wire_to_cut("rkwk", false), "second");
    }

    #[test]
    fn five_wire_rules() {
        assert_eq!(wire_to_cut("rybwk", true), "fourth");
        assert_eq!(wire_to_cut("ryywk", false), "first");
        assert_eq!(wire_to_cut("rybwb", false), "second"); // no black
        assert_eq!(wire_to_cut("rrbwk", false), "first");
    }

    #[test]
    fn six_wire_rules() {
        assert_eq!(wire_to_cut("rbwkbr", true), "third"); // no yellow, odd serial
        assert_eq!(wire_to_cut("ybwwkr", false), "fourth");
        assert_eq!(wire_to_cut("bbwkyy", false), "last"); // no red
        assert_eq!(wire_to_cut("rybwkk", false), "fourth");
    }

    #[test]
    fn accepts_only_known_colors() {
        assert!(wire_list_valid("ryb"));
        assert!(wire_list_valid("rybwkr"));
        assert!(!wire_list_valid("rg"));
        assert!(!wire_list_valid("rybwkrr"));
        assert!(!wire_list_valid("xyz"));
    }
}
