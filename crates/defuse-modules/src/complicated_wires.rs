//! Solver for vanilla Complicated Wires.

use defuse_core::edgework::{EdgeFlags, Edgework, Port};
use defuse_core::error::SolveError;
use defuse_core::solver::{ModuleSolver, SolveContext, SolverState};

/// What to do with one wire, keyed by its features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VennAction {
    Cut,
    DontCut,
    CutIfSerialEven,
    CutIfParallelPort,
    CutIfTwoBatteries,
}

/// The Venn diagram, keyed on (red, blue, star, lit).
fn venn_action(red: bool, blue: bool, star: bool, lit: bool) -> VennAction {
    use VennAction::*;
    match (red, blue, star, lit) {
        (false, false, false, false) => Cut,
        (false, false, false, true) => DontCut,
        (false, false, true, false) => Cut,
        (false, false, true, true) => CutIfTwoBatteries,
        (false, true, false, false) => CutIfSerialEven,
        (false, true, false, true) => CutIfParallelPort,
        (false, true, true, false) => DontCut,
        (false, true, true, true) => CutIfParallelPort,
        (true, false, false, false) => CutIfSerialEven,
        (true, false, false, true) => CutIfTwoBatteries,
        (true, false, true, false) => Cut,
        (true, false, true, true) => CutIfTwoBatteries,
        (true, true, false, false) => CutIfSerialEven,
        (true, true, false, true) => CutIfSerialEven,
        (true, true, true, false) => CutIfParallelPort,
        (true, true, true, true) => DontCut,
    }
}

/// Whether a wire description ("r", "b", "w" colors plus "l" for a lit LED
/// and "s" for a star) must be cut on this bomb.
fn should_cut(edgework: &Edgework, wire: &str) -> bool {
    let action = venn_action(
        wire.contains('r'),
        wire.contains('b'),
        wire.contains('s'),
        wire.contains('l'),
    );
    match action {
        VennAction::Cut => true,
        VennAction::DontCut => false,
        VennAction::CutIfSerialEven => !edgework.serial_last_digit_odd(),
        VennAction::CutIfParallelPort => edgework.has_port(Port::Parallel),
        VennAction::CutIfTwoBatteries => edgework.batteries() >= 2,
    }
}

fn wire_text_valid(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| "rbwls".contains(c))
}

#[derive(Debug)]
pub struct ComplicatedWires {
    state: SolverState,
}

impl ComplicatedWires {
    pub fn new(count: u32) -> Self {
        Self {
            state: SolverState::new(count),
        }
    }

    pub fn boxed(count: u32) -> Box<dyn ModuleSolver> {
        Box::new(Self::new(count))
    }
}

impl ModuleSolver for ComplicatedWires {
    fn name(&self) -> &str {
        "Complicated Wires"
    }

    fn type_id(&self) -> &str {
        "Venn"
    }

    fn required_edgework(&self) -> EdgeFlags {
        EdgeFlags::SERIAL | EdgeFlags::PORTS | EdgeFlags::BATTERIES
    }

    fn state(&self) -> &SolverState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut SolverState {
        &mut self.state
    }

    fn run_stage(&mut self, ctx: &mut SolveContext<'_>) -> Result<(), SolveError> {
        ctx.console.emit("What wires are on the module?");
        ctx.console
            .emit("For each wire, include its colors, any of (R)ed, (B)lue, or (W)hite,");
        ctx.console
            .emit("whether the LED above it is (L)it, and whether a (S)tar is present.");
        ctx.console
            .emit("Input each wire as a string of the parenthesized letters above.");
        let wires = ctx.console.strings_matching(&wire_text_valid, false, 0)?;
        for wire in &wires {
            if should_cut(ctx.edgework, wire) {
                ctx.console
                    .emit(&format!("Cut wire {}.", wire.to_uppercase()));
            } else {
                ctx.console
                    .emit(&format!("Do not cut wire {}.", wire.to_uppercase()));
            }
        }
        Ok(())
    }
}
