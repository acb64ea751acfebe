//! Solver for vanilla Who's on First.

use defuse_core::edgework::EdgeFlags;
use defuse_core::error::SolveError;
use defuse_core::solver::{ModuleSolver, SolveContext, SolverState};

const VALID_DISPLAYS: &[&str] = &[
    "yes", "first", "display", "okay", "says", "nothing", "empty", "blank", "no", "led",
    "lead", "read", "red", "reed", "leed", "hold on", "you", "you are", "your", "you're",
    "ur", "there", "they're", "their", "they are", "see", "c", "cee",
];

const VALID_LABELS: &[&str] = &[
    "ready", "first", "no", "blank", "nothing", "yes", "what", "uhhh", "left", "right",
    "middle", "okay", "wait", "press", "you", "you are", "your", "you're", "ur", "u",
    "uh huh", "uh uh", "what?", "done", "next", "hold", "sure", "like",
];

/// Which button label (by reading-order index) the display points at.
/// "empty" stands for a blank display.
const DISPLAY_TO_INDEX: &[(&str, usize)] = &[
    ("yes", 2),
    ("first", 1),
    ("display", 5),
    ("okay", 1),
    ("says", 5),
    ("nothing", 2),
    ("empty", 4),
    ("blank", 3),
    ("no", 5),
    ("led", 2),
    ("lead", 5),
    ("read", 3),
    ("red", 3),
    ("reed", 4),
    ("leed", 4),
    ("hold on", 5),
    ("you", 3),
    ("you are", 5),
    ("your", 3),
    ("you're", 3),
    ("ur", 0),
    ("there", 5),
    ("they're", 4),
    ("their", 3),
    ("they are", 2),
    ("see", 5),
    ("c", 1),
    ("cee", 5),
];

/// For each key label, the other labels to press instead, in priority
/// order. The key label itself is the answer when nothing earlier appears.
const LABEL_PRIORITIES: &[(&str, &[&str])] = &[
    (
        "ready",
        &["yes", "okay", "what", "middle", "left", "press", "right", "blank"],
    ),
    (
        "first",
        &[
            "left", "okay", "yes", "middle", "no", "right", "nothing", "uhhh", "wait",
            "ready", "blank", "what", "press",
        ],
    ),
    (
        "no",
        &[
            "blank", "uhhh", "wait", "first", "what", "ready", "right", "yes", "nothing",
            "left", "press", "okay",
        ],
    ),
    ("blank", &["wait", "right", "okay", "middle"]),
    (
        "nothing",
        &[
            "uhhh", "right", "okay", "middle", "yes", "blank", "no", "press", "left",
            "what", "wait", "first",
        ],
    ),
    (
        "yes",
        &[
            "okay", "right", "uhhh", "middle", "first", "what", "press", "ready",
            "nothing",
        ],
    ),
    ("what", &["uhhh"]),
    (
        "uhhh",
        &[
            "ready", "nothing", "left", "what", "okay", "yes", "right", "no", "press",
            "blank",
        ],
    ),
    ("left", &["right"]),
    (
        "right",
        &["yes", "nothing", "ready", "press", "no", "wait", "what"],
    ),
    (
        "middle",
        &["blank", "ready", "okay", "what", "nothing", "press", "no", "wait", "left"],
    ),
    (
        "okay",
        &["middle", "no", "first", "yes", "uhhh", "nothing", "wait"],
    ),
    (
        "wait",
        &["uhhh", "no", "blank", "okay", "yes", "left", "first", "press", "what"],
    ),
    ("press", &["right", "middle", "yes", "ready"]),
    (
        "you",
        &["sure", "you are", "your", "you're", "next", "uh huh", "ur", "hold", "what?"],
    ),
    (
        "you are",
        &[
            "your", "next", "like", "uh huh", "what?", "done", "uh uh", "hold", "you",
            "u", "you're", "sure", "ur",
        ],
    ),
    ("your", &["uh uh", "you are", "uh huh"]),
    ("you're", &["you"]),
    ("ur", &["done", "u"]),
    (
        "u",
        &["uh huh", "sure", "next", "what?", "you're", "ur", "uh uh", "done"],
    ),
    ("uh huh", &[]),
    ("uh uh", &["ur", "u", "you are", "you're", "next"]),
    (
        "what?",
        &[
            "you", "hold", "you're", "your", "u", "done", "uh uh", "like", "you are",
            "uh huh", "ur", "next",
        ],
    ),
    (
        "done",
        &[
            "sure", "uh huh", "next", "what?", "your", "ur", "you're", "hold", "like",
            "you", "u", "you are", "uh uh",
        ],
    ),
    (
        "next",
        &["what?", "uh huh", "uh uh", "your", "hold", "sure"],
    ),
    (
        "hold",
        &[
            "you are", "u", "done", "uh uh", "you", "ur", "sure", "what?", "you're",
            "next",
        ],
    ),
    (
        "sure",
        &["you are", "done", "like", "you're", "you", "hold", "uh huh", "ur"],
    ),
    (
        "like",
        &[
            "you're", "next", "u", "ur", "hold", "done", "uh uh", "what?", "uh huh",
            "you",
        ],
    ),
];

fn display_index(display: &str) -> usize {
    DISPLAY_TO_INDEX
        .iter()
        .find(|(key, _)| *key == display)
        .map(|(_, index)| *index)
        .unwrap_or(0)
}

fn label_priorities(label: &str) -> &'static [&'static str] {
    LABEL_PRIORITIES
        .iter()
        .find(|(key, _)| *key == label)
        .map(|(_, buttons)| *buttons)
        .unwrap_or(&[])
}

#[derive(Debug)]
pub struct WhosOnFirst {
    state: SolverState,
}

impl WhosOnFirst {
    pub fn new(count: u32) -> Self {
        Self {
            state: SolverState::new(count),
        }
    }

    pub fn boxed(count: u32) -> Box<dyn ModuleSolver> {
        Box::new(Self::new(count))
    }
}

impl ModuleSolver for WhosOnFirst {
    fn name(&self) -> &str {
        "Who's on First"
    }

    fn type_id(&self) -> &str {
        "WhosOnFirst"
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
        3
    }

    fn run_stage(&mut self, ctx: &mut SolveContext<'_>) -> Result<(), SolveError> {
        ctx.console
            .emit("What text is on the display? (If there is no text, type \"Empty\".)");
        let display = ctx.console.string_from_set(VALID_DISPLAYS, false, false)?;
        ctx.console.emit("What are the button labels, in reading order?");
        let labels = ctx.console.strings_from_set(VALID_LABELS, false, false, 6)?;
        let key_label = labels[display_index(&display)].as_str();
        let mut answer = key_label;
        for button in label_priorities(key_label) {
            if labels.iter().any(|label| label == button) {
                answer = button;
                break;
            }
        }
        ctx.console
            .emit(&format!("Press the button labeled {}.", answer.to_uppercase()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use defuse_core::bomb::NoHooks;
    use defuse_core::edgework::EdgeworkReport;
    use defuse_core::test_utils::{ScriptedConsole, acquired_edgework};

    fn stage_answer(answers: &[&str]) -> ScriptedConsole {
        let mut solver = WhosOnFirst::new(1);
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
    fn display_points_at_the_keyed_position() {
        // "ur" points at position 0, whose label is "what"; the only
        // priority button for "what" is "uhhh", present at position 3.
        let console = stage_answer(&[
            "ur", "what", "left", "okay", "uhhh", "wait", "press",
        ]);
        assert!(console.saw("Press the button labeled UHHH."));
    }

    #[test]
    fn key_label_is_answer_when_no_priority_button_present() {
        // "what" has only "uhhh" in its priority list; it is absent, so the
        // key label itself is pressed.
        let console = stage_answer(&[
            "ur", "what", "left", "okay", "blank", "wait", "press",
        ]);
        assert!(console.saw("Press the button labeled WHAT."));
    }

    #[test]
    fn empty_display_reads_position_four() {
        // "empty" maps to index 4, label "you are"; its priority list hits
        // "next" before "done", "u", and "sure".
        let console = stage_answer(&[
            "empty", "sure", "u", "done", "next", "you are", "hold",
        ]);
        assert!(console.saw("Press the button labeled NEXT."));
    }

    #[test]
    fn every_display_has_an_index_and_every_label_has_priorities() {
        for display in VALID_DISPLAYS {
            assert!(
                DISPLAY_TO_INDEX.iter().any(|(key, _)| key == display),
                "missing display {display}"
            );
        }
        for label in VALID_LABELS {
            assert!(
                LABEL_PRIORITIES.iter().any(|(key, _)| key == label),
                "missing label {label}"
            );
        }
    }
}
