// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex_fsm::Regex;

pub fn main() {
    env_logger::init();

    let re = Regex::new("a*4.+hi").unwrap();
    println!("{}", re.is_match("aaaaaa4uhi")); // should be true
    println!("{}", re.is_match("4uhi")); // should be true
    println!("{}", re.is_match("meow")); // should be false

    let re = Regex::new("[0-9]+").unwrap();
    println!("{}", re.is_full_match("123")); // should be true
    println!("{}", re.is_full_match("abc")); // should be false
    println!("{}", re.is_full_match("a12b")); // should be false

    let re = Regex::new("[a-z0-9]+").unwrap();
    println!("{}", re.is_full_match("hello123")); // should be true
    println!("{}", re.is_full_match("HELLO")); // should be false
    println!("{}", re.is_full_match("hello_world")); // should be false

    match Regex::new("[a-z") {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("{}", e), // malformed pattern: unterminated character class (at 0..4)
    }
}
