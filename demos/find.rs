// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex_fsm::Regex;

pub fn main() {
    env_logger::init();

    let re = Regex::new("#[0-9a-f]+").unwrap();
    let text = "The color is #ffbb33 and the background is #bbdd99.";

    // find one
    if let Some(m) = re.find(text) {
        println!("Found match: {} at {:?}", m.as_str(), m.range());
    } else {
        println!("No match found");
    }

    // print the automaton
    println!("{}", re.automaton.get_debug_text());
}
