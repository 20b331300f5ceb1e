// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use log::{debug, trace};

use crate::{
    automaton::Automaton,
    error::FsmError,
    lexer::lex_from_str,
    state::{CharSet, Label, State, StateIndex},
    token::{Token, TokenWithRange},
};

/// Compile a pattern into an automaton.
///
/// Nothing is returned when the pattern is malformed, there is
/// no partially built automaton.
pub fn compile(pattern: &str) -> Result<Automaton, FsmError> {
    let token_with_ranges = lex_from_str(pattern)?;

    let mut automaton = Automaton::new();
    let mut compiler = Compiler::new(&token_with_ranges, &mut automaton);
    compiler.compile()?;

    debug!(
        "compiled pattern {:?} into {} states",
        pattern,
        automaton.len()
    );

    Ok(automaton)
}

#[derive(Debug, PartialEq, Clone, Copy)]
enum RepetitionType {
    ZeroOrMore,
    OneOrMore,
}

struct Compiler<'a> {
    token_with_ranges: &'a [TokenWithRange],

    // The compilation target
    automaton: &'a mut Automaton,

    // Index of the state that the next atom is attached to
    tail_index: StateIndex,
}

impl<'a> Compiler<'a> {
    fn new(token_with_ranges: &'a [TokenWithRange], automaton: &'a mut Automaton) -> Self {
        let tail_index = automaton.start_index();
        Compiler {
            token_with_ranges,
            automaton,
            tail_index,
        }
    }

    fn compile(&mut self) -> Result<(), FsmError> {
        // The pattern is a plain sequence of atoms, each atom is appended
        // to the tail, and the tail moves to the new atom (or to the loop
        // state of a repetition).
        //
        //        atom         atom           loop
        // start ------> 'a' ------> 'b' ... ---- o ====> termination
        //  (tail)                                 epsilon
        let token_with_ranges = self.token_with_ranges;
        let mut idx = 0;

        while idx < token_with_ranges.len() {
            let token_with_range = &token_with_ranges[idx];

            let (state, label) = match &token_with_range.token {
                Token::Char(c) => (State::Literal(*c), Label::Char(*c)),
                Token::Dot => (State::Wildcard, Label::Any),
                Token::CharSet { definition, items } => (
                    State::CharacterClass(CharSet::new(items.clone())),
                    Label::CharSet(definition.clone()),
                ),
                Token::ZeroOrMore | Token::OneOrMore => {
                    return Err(FsmError::malformed(
                        "nothing to repeat",
                        token_with_range.range,
                    ));
                }
            };

            let repetition_type = match token_with_ranges.get(idx + 1) {
                Some(TokenWithRange {
                    token: Token::ZeroOrMore,
                    ..
                }) => Some(RepetitionType::ZeroOrMore),
                Some(TokenWithRange {
                    token: Token::OneOrMore,
                    ..
                }) => Some(RepetitionType::OneOrMore),
                _ => None,
            };

            match repetition_type {
                Some(repetition_type) => {
                    self.tail_index = self.emit_repetition(state, label, repetition_type);
                    idx += 2;
                }
                None => {
                    self.tail_index = self.emit_atom(state, label);
                    idx += 1;
                }
            }
        }

        let termination_index = self.automaton.termination_index();
        self.automaton
            .create_epsilon(self.tail_index, termination_index);

        Ok(())
    }

    fn emit_atom(&mut self, state: State, label: Label) -> StateIndex {
        // tail --- label ---> atom
        let atom_index = self.create_state(state);
        self.automaton
            .create_transition(self.tail_index, atom_index, label);
        atom_index
    }

    fn emit_repetition(
        &mut self,
        state: State,
        label: Label,
        repetition_type: RepetitionType,
    ) -> StateIndex {
        // zero or more:
        //
        //        epsilon
        //   /----------------------\
        //   |                      v
        // tail --- label ---> atom <===> loop
        //                          epsilon
        //
        // one or more, same as above without the bypass from
        // the tail to the loop state.
        //
        // The loop state becomes the new tail. The loop state accepts
        // whatever the atom accepts, and consuming a char from the loop
        // state leads back to the atom, that is how the loop repeats.
        let atom_index = self.create_state(state);

        let loop_state = match repetition_type {
            RepetitionType::ZeroOrMore => State::RepeatStar(atom_index),
            RepetitionType::OneOrMore => State::RepeatPlus(atom_index),
        };
        let loop_index = self.create_state(loop_state);

        if repetition_type == RepetitionType::ZeroOrMore {
            self.automaton.create_epsilon(self.tail_index, loop_index);
        }

        self.automaton
            .create_transition(self.tail_index, atom_index, label);
        self.automaton.create_epsilon(atom_index, loop_index);
        self.automaton.create_epsilon(loop_index, atom_index);

        loop_index
    }

    fn create_state(&mut self, state: State) -> StateIndex {
        trace!("create state: {}", state);
        self.automaton.create_state(state)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::{assert_eq, assert_str_eq};

    use crate::{error::FsmError, location::Location};

    use super::compile;

    #[test]
    fn test_compile_empty() {
        let automaton = compile("").unwrap();
        let s = automaton.get_debug_text();

        assert_str_eq!(
            s,
            "\
> 0 Start
  -> 1, Epsilon
< 1 Termination"
        );
    }

    #[test]
    fn test_compile_char() {
        // single char
        {
            let automaton = compile("a").unwrap();
            let s = automaton.get_debug_text();

            assert_str_eq!(
                s,
                "\
> 0 Start
  -> 2, Char 'a'
< 1 Termination
- 2 Literal 'a'
  -> 1, Epsilon"
            );
        }

        // sequence chars
        {
            let automaton = compile("ab.").unwrap();
            let s = automaton.get_debug_text();

            assert_str_eq!(
                s,
                "\
> 0 Start
  -> 2, Char 'a'
< 1 Termination
- 2 Literal 'a'
  -> 3, Char 'b'
- 3 Literal 'b'
  -> 4, Any
- 4 Wildcard
  -> 1, Epsilon"
            );
        }

        // identical chars are distinct states
        {
            let automaton = compile("aa").unwrap();
            let s = automaton.get_debug_text();

            assert_str_eq!(
                s,
                "\
> 0 Start
  -> 2, Char 'a'
< 1 Termination
- 2 Literal 'a'
  -> 3, Char 'a'
- 3 Literal 'a'
  -> 1, Epsilon"
            );
        }
    }

    #[test]
    fn test_compile_charset() {
        let automaton = compile("[a-c_]x").unwrap();
        let s = automaton.get_debug_text();

        assert_str_eq!(
            s,
            "\
> 0 Start
  -> 2, CharSet [a-c_]
< 1 Termination
- 2 CharacterClass ['a'..'c', '_']
  -> 3, Char 'x'
- 3 Literal 'x'
  -> 1, Epsilon"
        );
    }

    #[test]
    fn test_compile_zero_or_more() {
        let automaton = compile("a*").unwrap();
        let s = automaton.get_debug_text();

        assert_str_eq!(
            s,
            "\
> 0 Start
  -> 2, Char 'a'
  -> 3, Epsilon
< 1 Termination
- 2 Literal 'a'
  -> 3, Epsilon
- 3 RepeatStar {2}
  -> 1, Epsilon
  -> 2, Epsilon"
        );
    }

    #[test]
    fn test_compile_one_or_more() {
        let automaton = compile("[0-9]+").unwrap();
        let s = automaton.get_debug_text();

        assert_str_eq!(
            s,
            "\
> 0 Start
  -> 2, CharSet [0-9]
< 1 Termination
- 2 CharacterClass ['0'..'9']
  -> 3, Epsilon
- 3 RepeatPlus {2}
  -> 1, Epsilon
  -> 2, Epsilon"
        );
    }

    #[test]
    fn test_compile_mixed() {
        let automaton = compile("a*4.+hi").unwrap();
        let s = automaton.get_debug_text();

        assert_str_eq!(
            s,
            "\
> 0 Start
  -> 2, Char 'a'
  -> 3, Epsilon
< 1 Termination
- 2 Literal 'a'
  -> 3, Epsilon
- 3 RepeatStar {2}
  -> 4, Char '4'
  -> 2, Epsilon
- 4 Literal '4'
  -> 5, Any
- 5 Wildcard
  -> 6, Epsilon
- 6 RepeatPlus {5}
  -> 7, Char 'h'
  -> 5, Epsilon
- 7 Literal 'h'
  -> 8, Char 'i'
- 8 Literal 'i'
  -> 1, Epsilon"
        );
    }

    #[test]
    fn test_compile_termination_has_no_outgoing_edges() {
        for pattern in ["", "a", "a*", "[a-z]+b", ".*.+"] {
            let automaton = compile(pattern).unwrap();
            let entry = automaton.get_entry(automaton.termination_index());
            assert!(entry.transitions.is_empty());
            assert!(entry.epsilon.is_empty());
        }
    }

    #[test]
    fn test_compile_errors() {
        assert!(matches!(
            compile("[a-z"),
            Err(FsmError::MalformedPattern { .. })
        ));

        assert_eq!(
            compile("*a"),
            Err(FsmError::malformed(
                "nothing to repeat",
                Location::new_range(0, 1)
            ))
        );

        assert_eq!(
            compile("a**"),
            Err(FsmError::malformed(
                "nothing to repeat",
                Location::new_range(2, 1)
            ))
        );

        assert_eq!(
            compile("[ab]+*"),
            Err(FsmError::malformed(
                "nothing to repeat",
                Location::new_range(5, 1)
            ))
        );

        assert!(matches!(
            compile("a[]"),
            Err(FsmError::MalformedPattern { .. })
        ));

        assert!(matches!(
            compile("é"),
            Err(FsmError::MalformedPattern { .. })
        ));
    }
}
