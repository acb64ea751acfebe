//! Solver for Follow the Leader.
//!
//! Wires run clockwise around the module between numbered plugs. One rule
//! from a rotating table of thirteen decides each wire after the starting
//! one; the starting wire's color decides whether the table advances
//! forward or backward.

use std::collections::HashSet;

use defuse_core::console::Console;
use defuse_core::edgework::{EdgeFlags, Edgework, Port};
use defuse_core::error::SolveError;
use defuse_core::solver::{ModuleSolver, SolveContext, SolverState};

const COLORS: &[&str] = &["red", "yellow", "green", "blue", "black", "white"];
const PLUGS: &[&str] = &[
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];

const NUM_RULES: i32 = 13;

#[derive(Debug)]
pub struct FollowTheLeader {
    state: SolverState,
}

impl FollowTheLeader {
    pub fn new(count: u32) -> Self {
        Self {
            state: SolverState::new(count),
        }
    }

    pub fn boxed(count: u32) -> Box<dyn ModuleSolver> {
        Box::new(Self::new(count))
    }
}

/// Walk the wire loop from the starting wire, announcing each cut.
fn wire_loop(
    console: &mut dyn Console,
    edgework: &Edgework,
    plugs: &[String],
    colors: &[String],
    start_index: usize,
) {
    let len = plugs.len();
    // one modular step backwards from index i
    let back = |i: usize, k: usize| (i + len - k % len) % len;

    let reverse_rules = matches!(colors[start_index].as_str(), "red" | "green" | "white");
    let rule_step: i32 = if reverse_rules { -1 } else { 1 };
    let mut current_rule: i32 = match edgework.serial_first_letter() {
        Some(letter) => i32::from(letter as u8 - b'a') % NUM_RULES,
        None => 0,
    };

    console.emit(&format!(
        "Cut the wire starting at plug {}.",
        plugs[start_index]
    ));
    let mut prev_cut = true;
    let mut prev_index = start_index;
    let mut current_index = (start_index + 1) % len;
    while current_index != start_index {
        let current_plug: i32 = plugs[current_index].parse().unwrap_or(0);
        let prev_color = colors[prev_index].as_str();
        let color_back = |k: usize| colors[back(prev_index, k)].as_str();
        let cut = match current_rule {
            0 => !matches!(prev_color, "yellow" | "blue" | "green"),
            1 => current_plug % 2 == 0,
            2 => prev_cut,
            3 => matches!(prev_color, "red" | "blue" | "black"),
            4 => {
                // fewer than three distinct colors among the last three wires
                let distinct: HashSet<&str> = (0..3).map(color_back).collect();
                distinct.len() < 3
            }
            5 => {
                (prev_color == colors[current_index])
                    != (color_back(1) == colors[current_index])
            }
            6 => matches!(prev_color, "yellow" | "white" | "green"),
            7 => !prev_cut,
            8 => plugs[prev_index].parse::<i32>().unwrap_or(0) + 1 != current_plug,
            9 => !matches!(prev_color, "white" | "black" | "red"),
            10 => prev_color != color_back(1),
            11 => current_plug > 6,
            _ => {
                !matches!(prev_color, "white" | "black")
                    || !matches!(color_back(1), "white" | "black")
            }
        };
        prev_cut = cut;
        if cut {
            console.emit(&format!(
                "Cut the wire starting at plug {}.",
                plugs[current_index]
            ));
        }
        prev_index = current_index;
        current_index = (current_index + 1) % len;
        current_rule = (current_rule + rule_step).rem_euclid(NUM_RULES);
    }
}

impl ModuleSolver for FollowTheLeader {
    fn name(&self) -> &str {
        "Follow the Leader"
    }

    fn type_id(&self) -> &str {
        "FollowTheLeaderModule"
    }

    fn required_edgework(&self) -> EdgeFlags {
        EdgeFlags::PORTS | EdgeFlags::SERIAL | EdgeFlags::BATTERIES | EdgeFlags::INDICATORS
    }

    fn state(&self) -> &SolverState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut SolverState {
        &mut self.state
    }

    fn run_stage(&mut self, ctx: &mut SolveContext<'_>) -> Result<(), SolveError> {
        ctx.console
            .emit("What plugs are the wires connected to, in numeric order?");
        let plugs = loop {
            let plugs = ctx.console.strings_from_set(PLUGS, false, false, 0)?;
            if !plugs.is_empty() {
                break plugs;
            }
            ctx.console.emit("There has to be at least one wire.");
            ctx.console
                .emit("What plugs are the wires connected to, in numeric order?");
        };
        ctx.console.emit(&format!(
            "Starting from plug {}, what colors are the wires in clockwise order?",
            plugs[0]
        ));
        let colors = ctx
            .console
            .strings_from_set(COLORS, false, false, plugs.len())?;

        let batteries = ctx.edgework.batteries().to_string();
        let serial_digit = ctx
            .edgework
            .serial_first_digit()
            .map(|d| d.to_string())
            .unwrap_or_default();
        let start_index = if ctx.edgework.has_port(Port::Rj45)
            && plugs.iter().any(|p| p == "4")
            && plugs.iter().any(|p| p == "5")
        {
            plugs.iter().position(|p| p == "4")
        } else if let Some(position) = plugs.iter().position(|p| *p == batteries) {
            Some(position)
        } else if !serial_digit.is_empty()
            && plugs.iter().any(|p| *p == serial_digit)
        {
            plugs.iter().position(|p| *p == serial_digit)
        } else if ctx.edgework.has_indicator("clr", true) {
            ctx.console.emit("Cut all of the wires in descending numeric order.");
            return Ok(());
        } else {
            Some(0)
        };
        let start_index = start_index.unwrap_or(0);
        wire_loop(ctx.console, ctx.edgework, &plugs, &colors, start_index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use defuse_core::bomb::NoHooks;
    use defuse_core::edgework::{EdgeworkReport, Indicator};
    use defuse_core::test_utils::{ScriptedConsole, acquired_edgework};

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn cut_plugs(console: &ScriptedConsole) -> Vec<String> {
        console
            .transcript()
            .iter()
            .filter_map(|l| {
                l.strip_prefix("Cut the wire starting at plug ")
                    .map(|rest| rest.trim_end_matches('.').to_string())
            })
            .collect()
    }

    #[test]
    fn rule_two_chains_previous_cuts() {
        // Serial "c..." starts at rule index 2 ("cut if the previous wire
        // was cut"), and a blue starting wire advances forward through the
        // table, so rule 2 then rule 3 apply.
        let edgework = acquired_edgework(EdgeworkReport {
            serial: Some("ca1de2".to_string()),
            ..Default::default()
        });
        let mut console = ScriptedConsole::default();
        let plugs = owned(&["1", "3", "5"]);
        let colors = owned(&["blue", "yellow", "black"]);
        wire_loop(&mut console, &edgework, &plugs, &colors, 0);
        // start wire always cut; rule 2 cuts plug 3 (previous was cut);
        // rule 3 checks the previous color (yellow) -> no cut for plug 5
        assert_eq!(cut_plugs(&console), vec!["1", "3"]);
    }

    #[test]
    fn red_start_walks_the_rules_backward() {
        let edgework = acquired_edgework(EdgeworkReport {
            serial: Some("ab1de2".to_string()), // rule index 0
            ..Default::default()
        });
        let mut console = ScriptedConsole::default();
        let plugs = owned(&["2", "4", "6"]);
        let colors = owned(&["red", "red", "red"]);
        wire_loop(&mut console, &edgework, &plugs, &colors, 0);
        // rule 0: previous not yellow/blue/green -> cut plug 4;
        // backward step lands on rule 12: previous or the one before not
        // white/black -> cut plug 6
        assert_eq!(cut_plugs(&console), vec!["2", "4", "6"]);
    }

    #[test]
    fn lit_clr_cuts_everything_descending() {
        let mut solver = FollowTheLeader::new(1);
        let mut edgework = acquired_edgework(EdgeworkReport {
            serial: Some("zz9zz9".to_string()),
            batteries: Some(0),
            indicators: Some(vec![Indicator::new("clr", true)]),
            ..Default::default()
        });
        // plugs 1 and 2; neither batteries (0) nor serial digit (9) match,
        // no rj45, so the lit CLR rule fires before any wire loop
        let mut console = ScriptedConsole::new(["1", "2", "", "red", "red"]);
        let mut hooks = NoHooks;
        let mut ctx = SolveContext {
            edgework: &mut edgework,
            console: &mut console,
            hooks: &mut hooks,
        };
        solver.state_mut().advance_stage();
        solver.run_stage(&mut ctx).unwrap();
        assert!(console.saw("Cut all of the wires in descending numeric order."));
        // the color list was still collected before the rule fired
        assert_eq!(console.answers_remaining(), 0);
    }

    #[test]
    fn rj45_with_plugs_four_and_five_starts_at_four() {
        let mut solver = FollowTheLeader::new(1);
        let mut edgework = acquired_edgework(EdgeworkReport {
            serial: Some("ab1de2".to_string()),
            batteries: Some(0),
            port_plates: Some(vec![vec![Port::Rj45]]),
            ..Default::default()
        });
        let mut console =
            ScriptedConsole::new(["3", "4", "5", "", "red", "blue", "black"]);
        let mut hooks = NoHooks;
        let mut ctx = SolveContext {
            edgework: &mut edgework,
            console: &mut console,
            hooks: &mut hooks,
        };
        solver.state_mut().advance_stage();
        solver.run_stage(&mut ctx).unwrap();
        assert!(console.saw("Cut the wire starting at plug 4."));
    }
}
