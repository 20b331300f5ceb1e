// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::{fmt::Display, ops::Range, str::FromStr};

use crate::{
    automaton::Automaton,
    compiler::compile,
    process::{contains_match, find_match, match_full},
    FsmError,
};

/// A compiled pattern, ready to match any number of texts.
#[derive(Debug, Clone)]
pub struct Regex {
    pattern: String,
    pub automaton: Automaton,
}

impl Regex {
    pub fn new(pattern: &str) -> Result<Self, FsmError> {
        let automaton = compile(pattern)?;
        Ok(Regex {
            pattern: pattern.to_owned(),
            automaton,
        })
    }

    /// Check whether the pattern occurs anywhere in the text.
    pub fn is_match(&self, text: &str) -> bool {
        contains_match(&self.automaton, text)
    }

    /// Check whether the whole text is matched by the pattern.
    pub fn is_full_match(&self, text: &str) -> bool {
        match_full(&self.automaton, text)
    }

    /// Find the leftmost (then longest) match in the text.
    pub fn find<'a>(&self, text: &'a str) -> Option<Match<'a>> {
        let char_range = find_match(&self.automaton, text)?;

        let start = byte_offset(text, char_range.start);
        let end = byte_offset(text, char_range.end);

        Some(Match::new(start, end, &text[start..end]))
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

impl Display for Regex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl FromStr for Regex {
    type Err = FsmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Regex::new(s)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Match<'a> {
    pub start: usize, // the position of utf-8 byte stream (value included)
    pub end: usize,   // the position of utf-8 byte stream (value excluded)
    pub value: &'a str,
}

impl<'a> Match<'a> {
    pub fn new(start: usize, end: usize, value: &'a str) -> Self {
        Match { start, end, value }
    }

    // the following methods are intended to
    // be compatible with the 'Match' API of crate 'regex':
    // https://docs.rs/regex/latest/regex/struct.Match.html

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn range(&self) -> Range<usize> {
        Range {
            start: self.start,
            end: self.end,
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.value
    }
}

// convert a char offset into a byte offset
fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(byte_index, _)| byte_index)
}
