// Copyright (c) 2024 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE, LICENSE.additional and CONTRIBUTING.

use std::fmt::Display;

/// Index of a state in the automaton arena.
///
/// Two states with identical content are still different nodes,
/// states are only ever compared by index.
pub type StateIndex = usize;

#[derive(Debug, PartialEq, Clone)]
pub enum State {
    // The unique entry point.
    Start,

    // The unique accept point.
    Termination,

    Literal(char),

    // `.`
    Wildcard,

    // `[...]`
    CharacterClass(CharSet),

    // `atom*`, wraps the state of the atom
    RepeatStar(StateIndex),

    // `atom+`, wraps the state of the atom
    RepeatPlus(StateIndex),
}

impl State {
    /// The state wrapped by a repetition state.
    pub fn wrapped(&self) -> Option<StateIndex> {
        match self {
            State::RepeatStar(inner) | State::RepeatPlus(inner) => Some(*inner),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct CharSet {
    pub items: Vec<CharSetItem>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum CharSetItem {
    Char(char),
    Range(CharRange),
}

#[derive(Debug, PartialEq, Clone)]
pub struct CharRange {
    pub start: char,
    pub end_included: char,
}

impl CharSetItem {
    pub fn new_char(character: char) -> Self {
        CharSetItem::Char(character)
    }

    pub fn new_range(start: char, end_included: char) -> Self {
        CharSetItem::Range(CharRange {
            start,
            end_included,
        })
    }

    pub fn contains(&self, c: char) -> bool {
        match self {
            CharSetItem::Char(e) => *e == c,
            CharSetItem::Range(CharRange {
                start,
                end_included,
            }) => c >= *start && c <= *end_included,
        }
    }
}

impl CharSet {
    pub fn new(items: Vec<CharSetItem>) -> Self {
        CharSet { items }
    }

    pub fn contains(&self, c: char) -> bool {
        self.items.iter().any(|item| item.contains(c))
    }
}

/// The label of a transition that consumes one character.
///
/// The ordering only exists so that labels can key a `BTreeMap`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub enum Label {
    Char(char),
    Any,
    CharSet(String), // the text between the brackets
}

impl Display for CharSetItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharSetItem::Char(c) => write!(f, "'{}'", c.escape_default()),
            CharSetItem::Range(CharRange {
                start,
                end_included,
            }) => write!(
                f,
                "'{}'..'{}'",
                start.escape_default(),
                end_included.escape_default()
            ),
        }
    }
}

impl Display for CharSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: Vec<String> = self.items.iter().map(|e| e.to_string()).collect();
        write!(f, "[{}]", s.join(", "))
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            State::Start => f.write_str("Start"),
            State::Termination => f.write_str("Termination"),
            State::Literal(c) => write!(f, "Literal '{}'", c.escape_default()),
            State::Wildcard => f.write_str("Wildcard"),
            State::CharacterClass(charset) => write!(f, "CharacterClass {}", charset),
            State::RepeatStar(inner) => write!(f, "RepeatStar {{{}}}", inner),
            State::RepeatPlus(inner) => write!(f, "RepeatPlus {{{}}}", inner),
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Char(c) => write!(f, "Char '{}'", c.escape_default()),
            Label::Any => f.write_str("Any"),
            Label::CharSet(definition) => write!(f, "CharSet [{}]", definition),
        }
    }
}
