// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::collections::{BTreeMap, BTreeSet};

use crate::state::{Label, State, StateIndex};

/// The outgoing edges of a single state.
#[derive(Debug, PartialEq, Default, Clone)]
pub struct StateEntry {
    // Edges that consume one character.
    pub transitions: BTreeMap<Label, BTreeSet<StateIndex>>,

    // Edges that consume nothing.
    pub epsilon: BTreeSet<StateIndex>,
}

/// A compiled pattern.
///
/// States live in an arena (`states`) and the transition table (`entries`)
/// runs parallel to it, so `entries[i]` holds the edges leaving `states[i]`.
/// The epsilon graph is cyclic whenever the pattern contains `*` or `+`,
/// which is why edges refer to indices instead of owning their targets.
///
/// The automaton is never modified once the compiler returns it.
#[derive(Debug, PartialEq, Clone)]
pub struct Automaton {
    states: Vec<State>,
    entries: Vec<StateEntry>,
    start_index: StateIndex,
    termination_index: StateIndex,
}

impl Automaton {
    /// Create an automaton containing only the start and the termination states.
    pub(crate) fn new() -> Self {
        let mut automaton = Automaton {
            states: vec![],
            entries: vec![],
            start_index: 0,
            termination_index: 0,
        };

        automaton.start_index = automaton.create_state(State::Start);
        automaton.termination_index = automaton.create_state(State::Termination);
        automaton
    }

    /// Register a state and return its index.
    pub(crate) fn create_state(&mut self, state: State) -> StateIndex {
        let index = self.states.len();
        self.states.push(state);
        self.entries.push(StateEntry::default());
        index
    }

    pub(crate) fn create_transition(
        &mut self,
        source_index: StateIndex,
        target_index: StateIndex,
        label: Label,
    ) {
        self.entries[source_index]
            .transitions
            .entry(label)
            .or_default()
            .insert(target_index);
    }

    pub(crate) fn create_epsilon(&mut self, source_index: StateIndex, target_index: StateIndex) {
        self.entries[source_index].epsilon.insert(target_index);
    }

    pub fn start_index(&self) -> StateIndex {
        self.start_index
    }

    pub fn termination_index(&self) -> StateIndex {
        self.termination_index
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn get_state(&self, index: StateIndex) -> &State {
        &self.states[index]
    }

    pub fn get_entry(&self, index: StateIndex) -> &StateEntry {
        &self.entries[index]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Check whether the state accepts the character.
    ///
    /// A repetition state accepts whatever its wrapped atom accepts,
    /// the start and the termination states never accept anything.
    pub fn check_char(&self, index: StateIndex, c: char) -> bool {
        match &self.states[index] {
            State::Start | State::Termination => false,
            State::Literal(e) => *e == c,
            State::Wildcard => true,
            State::CharacterClass(charset) => charset.contains(c),
            State::RepeatStar(inner) | State::RepeatPlus(inner) => self.check_char(*inner, c),
        }
    }

    /// The smallest superset of `states` that is closed under epsilon edges.
    pub fn epsilon_closure(&self, states: &BTreeSet<StateIndex>) -> BTreeSet<StateIndex> {
        let mut closure = states.clone();
        let mut stack: Vec<StateIndex> = states.iter().copied().collect();

        while let Some(index) = stack.pop() {
            for next_index in &self.entries[index].epsilon {
                if closure.insert(*next_index) {
                    stack.push(*next_index);
                }
            }
        }

        closure
    }

    /// Render all states and edges, one state per line followed by its
    /// outgoing edges.
    ///
    /// The start state is marked with `>`, the termination state with `<`.
    pub fn get_debug_text(&self) -> String {
        let mut lines: Vec<String> = vec![];

        for (index, (state, entry)) in self.states.iter().zip(self.entries.iter()).enumerate() {
            let prefix = if index == self.start_index {
                '>'
            } else if index == self.termination_index {
                '<'
            } else {
                '-'
            };

            lines.push(format!("{} {} {}", prefix, index, state));

            for (label, targets) in &entry.transitions {
                for target in targets {
                    lines.push(format!("  -> {}, {}", target, label));
                }
            }

            for target in &entry.epsilon {
                lines.push(format!("  -> {}, Epsilon", target));
            }
        }

        lines.join("\n")
    }
}
