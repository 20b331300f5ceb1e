// Copyright (c) 2024 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE, LICENSE.additional and CONTRIBUTING.

use crate::{location::Location, state::CharSetItem};

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Char(char), // ASCII literal
    Dot,        // .

    // [...]
    //
    // `definition` is the text between the brackets, kept for
    // labeling transitions.
    CharSet {
        definition: String,
        items: Vec<CharSetItem>,
    },

    ZeroOrMore, // *
    OneOrMore,  // +
}

#[derive(Debug, PartialEq, Clone)]
pub struct TokenWithRange {
    pub token: Token,
    pub range: Location,
}

impl TokenWithRange {
    pub fn new(token: Token, range: Location) -> Self {
        Self { token, range }
    }

    pub fn from_position_and_length(token: Token, position: &Location, length: usize) -> Self {
        Self {
            token,
            range: Location::from_position_and_length(position, length),
        }
    }
}
