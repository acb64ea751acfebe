//! Morse code lookup: validating, decoding, and prompting for signals.

use defuse_core::console::Console;
use defuse_core::error::SolveError;

/// International Morse for letters and digits.
pub const MORSE_ALPHABET: &[(char, &str)] = &[
    ('a', ".-"),
    ('b', "-..."),
    ('c', "-.-."),
    ('d', "-.."),
    ('e', "."),
    ('f', "..-."),
    ('g', "--."),
    ('h', "...."),
    ('i', ".."),
    ('j', ".---"),
    ('k', "-.-"),
    ('l', ".-.."),
    ('m', "--"),
    ('n', "-."),
    ('o', "---"),
    ('p', ".--."),
    ('q', "--.-"),
    ('r', ".-."),
    ('s', "..."),
    ('t', "-"),
    ('u', "..-"),
    ('v', "...-"),
    ('w', ".--"),
    ('x', "-..-"),
    ('y', "-.--"),
    ('z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
];

fn decode_symbol(code: &str) -> Option<char> {
    MORSE_ALPHABET
        .iter()
        .find(|(_, pattern)| *pattern == code)
        .map(|(letter, _)| *letter)
}

/// Whether every whitespace-separated group is a known Morse symbol.
pub fn valid_morse(text: &str) -> bool {
    text.split_whitespace().all(|code| decode_symbol(code).is_some())
}

/// Convert a Morse code string into regular text. Unknown groups are
/// dropped; validate with [`valid_morse`] first.
pub fn decode(code: &str) -> String {
    code.split_whitespace().filter_map(decode_symbol).collect()
}

/// Get a Morse code string from the operator and convert it to a word.
pub fn ask_word(console: &mut dyn Console) -> Result<String, SolveError> {
    let code = console.string_matching(&valid_morse, false)?;
    Ok(decode(&code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_words() {
        assert_eq!(decode("... .... . .-.. .-.."), "shell");
        assert_eq!(decode("-... --- -- -... ..."), "bombs");
    }

    #[test]
    fn validates_symbol_groups() {
        assert!(valid_morse("... --- ..."));
        assert!(valid_morse(""));
        assert!(!valid_morse("...---... x"));
        assert!(!valid_morse("......."));
    }
}
