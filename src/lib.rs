// Copyright (c) 2024 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE, LICENSE.additional and CONTRIBUTING.

//! A small regular expression engine.
//!
//! Patterns are made of ASCII literal chars, the wildcard `.`, charsets such
//! as `[a-z0-9_]`, and the postfix repetitions `*` and `+`. A pattern is
//! compiled into a nondeterministic finite automaton, and texts are matched
//! by walking all reachable states in parallel.
//!
//! ```
//! use regex_fsm::Regex;
//!
//! let re = Regex::new("a*4.+hi").unwrap();
//! assert!(re.is_match("xx4uhi"));
//! assert!(!re.is_full_match("xx4uhi"));
//! ```

mod charwithposition;
mod error;
mod lexer;
mod location;
mod token;

pub mod automaton;
pub mod compiler;
pub mod process;
pub mod regex;
pub mod state;

pub use automaton::Automaton;
pub use compiler::compile;
pub use error::FsmError;
pub use location::Location;
pub use regex::{Match, Regex};
