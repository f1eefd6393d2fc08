//! Key aliases for front ends.
//!
//! Keyboards offer more than one way to type some calculator keys: a comma
//! for the decimal point, Escape for clear, Enter for equals. A [`Keymap`]
//! folds those onto the calculator's own alphabet before they reach
//! [`Calculator::input`].

use std::collections::HashMap;

use tracing::trace;

use crate::calculator::{Calculator, is_accepted};

/// Aliases every keymap starts with.
const DEFAULT_ALIASES: &[(char, char)] = &[
    (',', '.'),
    ('\u{1b}', 'C'),
    ('\r', '='),
    ('\n', '='),
];

/// Translates front-end characters into calculator keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keymap {
    aliases: HashMap<char, char>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            aliases: DEFAULT_ALIASES.iter().copied().collect(),
        }
    }
}

impl Keymap {
    /// Add or replace an alias. Aliases take priority over the calculator's
    /// own meaning of `from`.
    pub fn insert(&mut self, from: char, to: char) {
        self.aliases.insert(from, to);
    }

    /// Translate one character, or `None` if the calculator would ignore it.
    pub fn translate(&self, c: char) -> Option<char> {
        match self.aliases.get(&c) {
            Some(&to) => Some(to),
            None if is_accepted(c) => Some(c),
            None => None,
        }
    }

    /// Translate `keys` and feed the result to `calc`.
    pub fn feed(&self, calc: &mut Calculator, keys: &str) {
        for c in keys.chars() {
            match self.translate(c) {
                Some(key) => calc.input(key),
                None => trace!(?c, "no mapping for key"),
            }
        }
    }
}
