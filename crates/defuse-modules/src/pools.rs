//! Named module pools for mission construction.

use defuse_core::pool::PoolEntry;

use crate::anagrams::Anagrams;
use crate::button::TheButton;
use crate::complicated_wires::ComplicatedWires;
use crate::follow_the_leader::FollowTheLeader;
use crate::keypad::Keypad;
use crate::maze::Maze;
use crate::memory::Memory;
use crate::morse_code::MorseCode;
use crate::password::Password;
use crate::simon_says::SimonSays;
use crate::turn_the_keys::TurnTheKeys;
use crate::whos_on_first::WhosOnFirst;
use crate::wire_sequence::WireSequence;
use crate::wires::Wires;
use crate::word_scramble::WordScramble;

/// Every solvable vanilla module.
pub const ALL_VANILLA: &[PoolEntry] = &[
    PoolEntry {
        name: "Wires",
        build: Wires::boxed,
    },
    PoolEntry {
        name: "The Button",
        build: TheButton::boxed,
    },
    PoolEntry {
        name: "Keypad",
        build: Keypad::boxed,
    },
    PoolEntry {
        name: "Simon Says",
        build: SimonSays::boxed,
    },
    PoolEntry {
        name: "Who's on First",
        build: WhosOnFirst::boxed,
    },
    PoolEntry {
        name: "Memory",
        build: Memory::boxed,
    },
    PoolEntry {
        name: "Morse Code",
        build: MorseCode::boxed,
    },
    PoolEntry {
        name: "Complicated Wires",
        build: ComplicatedWires::boxed,
    },
    PoolEntry {
        name: "Wire Sequence",
        build: WireSequence::boxed,
    },
    PoolEntry {
        name: "Maze",
        build: Maze::boxed,
    },
    PoolEntry {
        name: "Password",
        build: Password::boxed,
    },
];

/// Every solvable modded module.
pub const ALL_MODS: &[PoolEntry] = &[
    PoolEntry {
        name: "Anagrams",
        build: Anagrams::boxed,
    },
    PoolEntry {
        name: "Follow the Leader",
        build: FollowTheLeader::boxed,
    },
    PoolEntry {
        name: "Turn The Keys",
        build: TurnTheKeys::boxed,
    },
    PoolEntry {
        name: "Word Scramble",
        build: WordScramble::boxed,
    },
];

/// Everything the toolkit can solve.
pub fn all_solvable() -> Vec<PoolEntry> {
    ALL_VANILLA.iter().chain(ALL_MODS).copied().collect()
}

/// Look up a pool entry by display name, case-insensitively.
pub fn find_entry(name: &str) -> Option<PoolEntry> {
    all_solvable()
        .into_iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
}
