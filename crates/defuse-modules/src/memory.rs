//! Solver for vanilla Memory.

use defuse_core::edgework::EdgeFlags;
use defuse_core::error::SolveError;
use defuse_core::solver::{ModuleSolver, SolveContext, SolverState};

/// One recorded press: the button's label and its 1-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Press {
    label: char,
    position: usize,
}

#[derive(Debug)]
pub struct Memory {
    state: SolverState,
    presses: Vec<Press>,
}

impl Memory {
    pub fn new(count: u32) -> Self {
        Self {
            state: SolverState::new(count),
            presses: Vec::new(),
        }
    }

    pub fn boxed(count: u32) -> Box<dyn ModuleSolver> {
        Box::new(Self::new(count))
    }

    fn in_position(&self, position: usize, buttons: &str) -> Press {
        Press {
            label: buttons.chars().nth(position - 1).unwrap_or('1'),
            position,
        }
    }

    fn with_label(&self, label: char, buttons: &str) -> Press {
        Press {
            label,
            position: buttons.find(label).map_or(1, |i| i + 1),
        }
    }

    fn stage_1(&self, display: u32, buttons: &str) -> Press {
        match display {
            1 | 2 => self.in_position(2, buttons),
            3 => self.in_position(3, buttons),
            _ => self.in_position(4, buttons),
        }
    }

    fn stage_2(&self, display: u32, buttons: &str) -> Press {
        match display {
            1 => self.with_label('4', buttons),
            2 | 4 => self.in_position(self.presses[0].position, buttons),
            _ => self.in_position(1, buttons),
        }
    }

    fn stage_3(&self, display: u32, buttons: &str) -> Press {
        match display {
            1 => self.with_label(self.presses[1].label, buttons),
            2 => self.with_label(self.presses[0].label, buttons),
            3 => self.in_position(3, buttons),
            _ => self.with_label('4', buttons),
        }
    }

    fn stage_4(&self, display: u32, buttons: &str) -> Press {
        match display {
            1 => self.in_position(self.presses[0].position, buttons),
            2 => self.in_position(1, buttons),
            _ => self.in_position(self.presses[1].position, buttons),
        }
    }

    fn stage_5(&self, display: u32, buttons: &str) -> Press {
        match display {
            1 => self.with_label(self.presses[0].label, buttons),
            2 => self.with_label(self.presses[1].label, buttons),
            3 => self.with_label(self.presses[3].label, buttons),
            _ => self.with_label(self.presses[2].label, buttons),
        }
    }
}

fn buttons_valid(text: &str) -> bool {
    text.len() == 4 && text.chars().all(|c| ('1'..='4').contains(&c))
}

impl ModuleSolver for Memory {
    fn name(&self) -> &str {
        "Memory"
    }

    fn type_id(&self) -> &str {
        "Memory"
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

    fn total_stages(&self) -> u32 {
        5
    }

    fn reset_stages_on_strike(&self) -> bool {
        true
    }

    fn clear_data(&mut self) {
        self.presses.clear();
    }

    fn run_stage(&mut self, ctx: &mut SolveContext<'_>) -> Result<(), SolveError> {
        ctx.console.emit("What number is on the display?");
        let display: u32 = ctx
            .console
            .string_matching(&|s| matches!(s, "1" | "2" | "3" | "4"), false)?
            .parse()
            .unwrap_or(1);
        ctx.console.emit("What numbers are on the buttons, in reading order?");
        let mut buttons = ctx.console.string_matching(&buttons_valid, false)?;
        while "1234".chars().any(|c| !buttons.contains(c)) {
            ctx.console.emit("There should be one of each number on the buttons.");
            ctx.console.emit("What numbers are on the buttons, in reading order?");
            buttons = ctx.console.string_matching(&buttons_valid, false)?;
        }
        let press = match self.state.current_stage() {
            1 => self.stage_1(display, &buttons),
            2 => self.stage_2(display, &buttons),
            3 => self.stage_3(display, &buttons),
            4 => self.stage_4(display, &buttons),
            _ => self.stage_5(display, &buttons),
        };
        ctx.console
            .emit(&format!("Press the button labeled {}.", press.label));
        self.presses.push(press);
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
    fn button_validation_needs_one_of_each() {
        assert!(buttons_valid("4213"));
        assert!(!buttons_valid("421"));
        assert!(!buttons_valid("4215"));
        // repeats pass the shape check and are caught by the one-of-each loop
        assert!(buttons_valid("4211"));
    }

    #[test]
    fn stage_rules_recall_earlier_presses() {
        let mut memory = Memory::new(1);
        // stage 1, display 1: press position 2
        let press = memory.stage_1(1, "4213");
        assert_eq!(press, Press { label: '2', position: 2 });
        memory.presses.push(press);
        // stage 2, display 2: same position as stage 1
        let press = memory.stage_2(2, "1342");
        assert_eq!(press, Press { label: '3', position: 2 });
        memory.presses.push(press);
        // stage 3, display 2: same label as stage 1
        let press = memory.stage_3(2, "3124");
        assert_eq!(press, Press { label: '2', position: 3 });
        memory.presses.push(press);
        // stage 4, display 4: same position as stage 2
        let press = memory.stage_4(4, "4321");
        assert_eq!(press, Press { label: '3', position: 2 });
        memory.presses.push(press);
        // stage 5, display 3: same label as stage 4
        let press = memory.stage_5(3, "2431");
        assert_eq!(press, Press { label: '3', position: 3 });
    }

    #[test]
    fn malformed_buttons_reprompt_inside_the_stage() {
        let mut solver = Memory::new(1);
        let mut edgework = acquired_edgework(EdgeworkReport::default());
        let mut console = ScriptedConsole::new(["1", "4211", "4213"]);
        let mut hooks = NoHooks;
        let mut ctx = SolveContext {
            edgework: &mut edgework,
            console: &mut console,
            hooks: &mut hooks,
        };
        solver.state_mut().advance_stage();
        solver.run_stage(&mut ctx).unwrap();
        assert!(console.saw("There should be one of each number on the buttons."));
        assert!(console.saw("Press the button labeled 2."));
    }
}
