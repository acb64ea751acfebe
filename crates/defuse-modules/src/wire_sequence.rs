//! Solver for vanilla Wire Sequence.
//!
//! The cut decision for each wire depends on how many wires of its color
//! have appeared across the whole module so far. Counts from the panel in
//! progress are kept separately so a strike can discard them without losing
//! the banked totals from completed panels.

use defuse_core::edgework::EdgeFlags;
use defuse_core::error::SolveError;
use defuse_core::solver::{ModuleSolver, SolveContext, SolverState};

/// Labels to cut for the nth wire of each color (1-based occurrence).
const RED_CUTS: [&str; 9] = ["c", "b", "a", "ac", "b", "ac", "abc", "ab", "b"];
const BLUE_CUTS: [&str; 9] = ["b", "ac", "b", "a", "b", "bc", "c", "ac", "a"];
const BLACK_CUTS: [&str; 9] = ["abc", "ac", "b", "ac", "b", "bc", "ab", "c", "c"];

fn cut_labels(color: &str, occurrence: u32) -> &'static str {
    let table = match color {
        "red" => &RED_CUTS,
        "blue" => &BLUE_CUTS,
        _ => &BLACK_CUTS,
    };
    table
        .get(occurrence.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// Per-color wire counts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct ColorCounts {
    red: u32,
    blue: u32,
    black: u32,
}

impl ColorCounts {
    fn get(&self, color: &str) -> u32 {
        match color {
            "red" => self.red,
            "blue" => self.blue,
            _ => self.black,
        }
    }

    fn bump(&mut self, color: &str) {
        match color {
            "red" => self.red += 1,
            "blue" => self.blue += 1,
            _ => self.black += 1,
        }
    }

    fn merge(&mut self, other: &ColorCounts) {
        self.red += other.red;
        self.blue += other.blue;
        self.black += other.black;
    }

    fn clear(&mut self) {
        *self = ColorCounts::default();
    }
}

fn wire_text_valid(text: &str) -> bool {
    let mut tokens = text.split_whitespace();
    let (Some(color), Some(label), None) = (tokens.next(), tokens.next(), tokens.next())
    else {
        return false;
    };
    matches!(color, "red" | "blue" | "black") && matches!(label, "a" | "b" | "c")
}

#[derive(Debug)]
pub struct WireSequence {
    state: SolverState,
    banked: ColorCounts,
    last_panel: ColorCounts,
}

impl WireSequence {
    pub fn new(count: u32) -> Self {
        Self {
            state: SolverState::new(count),
            banked: ColorCounts::default(),
            last_panel: ColorCounts::default(),
        }
    }

    pub fn boxed(count: u32) -> Box<dyn ModuleSolver> {
        Box::new(Self::new(count))
    }

    fn ask_wires(
        &self,
        ctx: &mut SolveContext<'_>,
    ) -> Result<Vec<(String, char)>, SolveError> {
        ctx.console
            .emit("What wires are on the panel, in order by their left plug?");
        ctx.console.emit("Input their color followed by the letter");
        ctx.console.emit("they're plugged into, like \"red C\".");
        let lines = ctx.console.strings_matching(&wire_text_valid, false, 0)?;
        Ok(lines
            .iter()
            .filter_map(|line| {
                let mut tokens = line.split_whitespace();
                let color = tokens.next()?.to_string();
                let label = tokens.next()?.chars().next()?;
                Some((color, label))
            })
            .collect())
    }
}

impl ModuleSolver for WireSequence {
    fn name(&self) -> &str {
        "Wire Sequence"
    }

    fn type_id(&self) -> &str {
        "WireSequence"
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
        4
    }

    fn clear_data(&mut self) {
        self.banked.clear();
        self.last_panel.clear();
    }

    fn on_struck(&mut self) {
        // the struck panel will be redone: discard its counts, keep the
        // banked totals and the stage position
        self.last_panel.clear();
    }

    fn run_stage(&mut self, ctx: &mut SolveContext<'_>) -> Result<(), SolveError> {
        // the previous panel survived: bank its counts
        let finished = self.last_panel.clone();
        self.banked.merge(&finished);
        self.last_panel.clear();
        let wires = self.ask_wires(ctx)?;
        for (color, label) in &wires {
            self.last_panel.bump(color);
            let occurrence = self.banked.get(color) + self.last_panel.get(color);
            if cut_labels(color, occurrence).contains(*label) {
                ctx.console.emit(&format!(
                    "Cut the {color} wire connected to label {}.",
                    label.to_ascii_uppercase()
                ));
            } else {
                ctx.console.emit(&format!(
                    "Do not cut the {color} wire connected to label {}.",
                    label.to_ascii_uppercase()
                ));
            }
        }
        ctx.console.emit("Press the down arrow to finish this panel.");
        Ok(())
    }
}
