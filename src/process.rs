// Copyright (c) 2024 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE, LICENSE.additional and CONTRIBUTING.

use std::{collections::BTreeSet, ops::Range};

use log::trace;

use crate::{automaton::Automaton, state::StateIndex};

/// When the simulation reports a match.
#[derive(Debug, PartialEq, Clone, Copy)]
enum AcceptMode {
    // Only after the whole text is consumed.
    AtEnd,

    // As soon as the termination state becomes reachable.
    First,

    // The last offset at which the termination state was reachable,
    // the simulation stops once nothing is reachable any more.
    Last,
}

/// Check whether the whole text is accepted by the automaton.
pub fn match_full(automaton: &Automaton, text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    run(automaton, &chars, 0, AcceptMode::AtEnd).is_some()
}

/// Check whether any substring of the text (the empty one included)
/// is accepted by the automaton.
pub fn contains_match(automaton: &Automaton, text: &str) -> bool {
    if match_full(automaton, text) {
        return true;
    }

    let chars: Vec<char> = text.chars().collect();
    (0..chars.len()).any(|start| run(automaton, &chars, start, AcceptMode::First).is_some())
}

/// Find the leftmost substring accepted by the automaton, preferring the
/// longest one among those starting at the same offset.
///
/// The returned range is measured in chars, not bytes.
pub fn find_match(automaton: &Automaton, text: &str) -> Option<Range<usize>> {
    let chars: Vec<char> = text.chars().collect();
    (0..=chars.len()).find_map(|start| {
        run(automaton, &chars, start, AcceptMode::Last).map(|end| Range { start, end })
    })
}

// Simulate the automaton over `chars[start..]`.
//
// Returns the char offset where the match ends, the meaning of "the"
// end depends on the `accept_mode`.
//
// The set of reachable states is local to this call, the automaton is
// only read, so a compiled automaton can be shared freely.
fn run(
    automaton: &Automaton,
    chars: &[char],
    start: usize,
    accept_mode: AcceptMode,
) -> Option<usize> {
    let termination_index = automaton.termination_index();

    let mut current_states =
        automaton.epsilon_closure(&BTreeSet::from([automaton.start_index()]));
    let mut last_accepted = None;

    trace!(
        "start at {}, {} reachable states",
        start,
        current_states.len()
    );

    if current_states.contains(&termination_index) {
        match accept_mode {
            AcceptMode::AtEnd => {}
            AcceptMode::First => return Some(start),
            AcceptMode::Last => last_accepted = Some(start),
        }
    }

    for (position, c) in chars.iter().enumerate().skip(start) {
        let next_states = step(automaton, &current_states, *c);

        if next_states.is_empty() {
            trace!("rejected at {}, char {:?}", position, c);

            return match accept_mode {
                AcceptMode::AtEnd => None,
                AcceptMode::First | AcceptMode::Last => last_accepted,
            };
        }

        current_states = automaton.epsilon_closure(&next_states);

        trace!(
            "consumed {:?} at {}, {} reachable states",
            c,
            position,
            current_states.len()
        );

        if current_states.contains(&termination_index) {
            match accept_mode {
                AcceptMode::AtEnd => {}
                AcceptMode::First => return Some(position + 1),
                AcceptMode::Last => last_accepted = Some(position + 1),
            }
        }
    }

    match accept_mode {
        AcceptMode::AtEnd => current_states
            .contains(&termination_index)
            .then_some(chars.len()),
        AcceptMode::First | AcceptMode::Last => last_accepted,
    }
}

// Consume one char from every state in the set.
//
// All matching destinations are taken in parallel, there is no
// priority between them.
fn step(
    automaton: &Automaton,
    current_states: &BTreeSet<StateIndex>,
    c: char,
) -> BTreeSet<StateIndex> {
    let mut next_states = BTreeSet::new();

    for &index in current_states {
        // a repetition state loops through the atom it wraps,
        // the atom leads back to the repetition state by epsilon.
        if let Some(inner_index) = automaton.get_state(index).wrapped() {
            if automaton.check_char(index, c) {
                next_states.insert(inner_index);
            }
        }

        // a labeled transition is taken when its destination accepts the char.
        for targets in automaton.get_entry(index).transitions.values() {
            for &target_index in targets {
                if automaton.check_char(target_index, c) {
                    next_states.insert(target_index);
                }
            }
        }
    }

    next_states
}
