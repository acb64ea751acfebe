//! Module solvers for the defusal toolkit.
//!
//! Each solver implements [`defuse_core::solver::ModuleSolver`] for one
//! module type: its identity, the edgework it needs, and the interactive
//! logic for one stage. Decision tables live next to the solver that owns
//! them. The [`pools`] module collects everything into named catalogs for
//! mission construction.

pub mod anagrams;
pub mod button;
pub mod complicated_wires;
pub mod follow_the_leader;
pub mod keypad;
pub mod maze;
pub mod memory;
pub mod morse;
pub mod morse_code;
pub mod password;
pub mod pools;
pub mod simon_says;
pub mod turn_the_keys;
pub mod whos_on_first;
pub mod wire_sequence;
pub mod wires;
pub mod word_scramble;
