//! Solver for vanilla The Button.

use defuse_core::edgework::EdgeFlags;
use defuse_core::error::SolveError;
use defuse_core::solver::{ModuleSolver, SolveContext, SolverState};

const COLORS: &[&str] = &["red", "yellow", "blue", "white"];
const LABELS: &[&str] = &["abort", "detonate", "hold", "press"];

#[derive(Debug)]
pub struct TheButton {
    state: SolverState,
}

impl TheButton {
    pub fn new(count: u32) -> Self {
        Self {
            state: SolverState::new(count),
        }
    }

    pub fn boxed(count: u32) -> Box<dyn ModuleSolver> {
        Box::new(Self::new(count))
    }

    /// Walk the operator through holding the button and reading the strip.
    fn hold(&self, ctx: &mut SolveContext<'_>) -> Result<(), SolveError> {
        ctx.console
            .emit("Hold down the button. What color is the strip on the right?");
        ctx.console
            .emit("Type one of \"red\", \"yellow\", \"blue\", or \"white\", without quotes.");
        let strip = ctx.console.string_from_set(COLORS, false, false)?;
        let digit = match strip.as_str() {
            "blue" => 4,
            "yellow" => 5,
            _ => 1,
        };
        ctx.console.emit(&format!(
            "Release the button when the countdown timer has a {digit} in any position."
        ));
        Ok(())
    }
}

impl ModuleSolver for TheButton {
    fn name(&self) -> &str {
        "The Button"
    }

    fn type_id(&self) -> &str {
        "BigButton"
    }

    fn required_edgework(&self) -> EdgeFlags {
        EdgeFlags::BATTERIES | EdgeFlags::INDICATORS
    }

    fn state(&self) -> &SolverState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut SolverState {
        &mut self.state
    }

    fn run_stage(&mut self, ctx: &mut SolveContext<'_>) -> Result<(), SolveError> {
        ctx.console.emit("What color is the button?");
        ctx.console
            .emit("Type one of \"red\", \"yellow\", \"blue\", or \"white\", without quotes.");
        let color = ctx.console.string_from_set(COLORS, false, false)?;
        ctx.console.emit("What is the text on the label?");
        ctx.console
            .emit("Type one of \"abort\", \"detonate\", \"hold\", or \"press\", without quotes.");
        let label = ctx.console.string_from_set(LABELS, false, false)?;

        if color == "blue" && label == "abort" {
            self.hold(ctx)?;
        } else if ctx.edgework.batteries() > 1 && label == "detonate" {
            ctx.console.emit("Press and immediately release the button.");
        } else if color == "white" && ctx.edgework.has_indicator("car", true) {
            self.hold(ctx)?;
        } else if ctx.edgework.batteries() > 2 && ctx.edgework.has_indicator("frk", true) {
            ctx.console.emit("Press and immediately release the button.");
        } else if color == "yellow" {
            self.hold(ctx)?;
        } else if color == "red" && label == "hold" {
            ctx.console.emit("Press and immediately release the button.");
        } else {
            self.hold(ctx)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use defuse_core::bomb::NoHooks;
    use defuse_core::edgework::{EdgeworkReport, Indicator};
    use defuse_core::test_utils::{ScriptedConsole, acquired_edgework};

    fn stage(report: EdgeworkReport, answers: &[&str]) -> ScriptedConsole {
        let mut solver = TheButton::new(1);
        let mut edgework = acquired_edgework(report);
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
    fn blue_abort_is_held() {
        let console = stage(EdgeworkReport::default(), &["blue", "abort", "blue"]);
        assert!(console.saw(
            "Release the button when the countdown timer has a 4 in any position."
        ));
    }

    #[test]
    fn two_batteries_detonate_is_pressed() {
        let console = stage(
            EdgeworkReport {
                batteries: Some(2),
                ..Default::default()
            },
            &["red", "detonate"],
        );
        assert!(console.saw("Press and immediately release the button."));
    }

    #[test]
    fn white_with_lit_car_is_held() {
        let console = stage(
            EdgeworkReport {
                indicators: Some(vec![Indicator::new("car", true)]),
                ..Default::default()
            },
            &["white", "press", "yellow"],
        );
        assert!(console.saw(
            "Release the button when the countdown timer has a 5 in any position."
        ));
    }

    #[test]
    fn fallthrough_is_held_with_strip_one() {
        let console = stage(EdgeworkReport::default(), &["white", "press", "red"]);
        assert!(console.saw(
            "Release the button when the countdown timer has a 1 in any position."
        ));
    }
}
