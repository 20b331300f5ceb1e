// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use thiserror::Error;

use crate::location::Location;

/// Errors raised while turning a pattern into an automaton.
///
/// Matching never fails; a text that is not accepted is
/// simply a `false` (or `None`) result.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum FsmError {
    #[error("malformed pattern: {message} (at {location})")]
    MalformedPattern { message: String, location: Location },
}

impl FsmError {
    pub fn malformed(message: &str, location: Location) -> Self {
        FsmError::MalformedPattern {
            message: message.to_owned(),
            location,
        }
    }
}
