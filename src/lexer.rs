// Copyright (c) 2024 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE, LICENSE.additional and CONTRIBUTING.

// syntax summary
//
// - [ ]      charset, e.g. `[abc]`, `[a-z0-9]`
// - *        0 or more
// - +        1 or more
// - .        any character
//
// every other ASCII character stands for itself, including `]` outside of
// a charset. There is no escaping, so `[`, `*`, `+` and `.` can not be
// matched literally outside of a charset.
//
// inside a charset, `x-y` is an inclusive range, a hyphen at the first or
// the last position is a literal hyphen, e.g. `[-a]` and `[a-]`.

use std::iter::Peekable;

use crate::{
    charwithposition::{CharWithPosition, CharsWithPositionIter},
    error::FsmError,
    location::Location,
    state::CharSetItem,
    token::{Token, TokenWithRange},
};

pub fn lex_from_str(s: &str) -> Result<Vec<TokenWithRange>, FsmError> {
    let mut chars = s.chars();
    let char_position_iter = CharsWithPositionIter::new(&mut chars);
    let mut lexer = Lexer::new(char_position_iter.peekable());
    lexer.lex()
}

struct Lexer<'a> {
    upstream: Peekable<CharsWithPositionIter<'a>>,
    last_position: Location, // last position consumed
}

impl<'a> Lexer<'a> {
    fn new(upstream: Peekable<CharsWithPositionIter<'a>>) -> Self {
        Self {
            upstream,
            last_position: Location::new_position(0),
        }
    }

    fn next_char(&mut self) -> Option<char> {
        match self.upstream.next() {
            Some(CharWithPosition {
                character,
                position,
            }) => {
                self.last_position = position;
                Some(character)
            }
            None => None,
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.upstream
            .peek()
            .map(|CharWithPosition { character, .. }| *character)
    }

    fn push_single(&mut self, token_with_ranges: &mut Vec<TokenWithRange>, token: Token) {
        self.next_char(); // consume the current char
        token_with_ranges.push(TokenWithRange::from_position_and_length(
            token,
            &self.last_position,
            1,
        ));
    }
}

impl Lexer<'_> {
    fn lex(&mut self) -> Result<Vec<TokenWithRange>, FsmError> {
        let mut token_with_ranges = vec![];

        while let Some(current_char) = self.peek_char() {
            match current_char {
                '[' => {
                    let twr = self.lex_charset()?;
                    token_with_ranges.push(twr);
                }
                '*' => {
                    self.push_single(&mut token_with_ranges, Token::ZeroOrMore);
                }
                '+' => {
                    self.push_single(&mut token_with_ranges, Token::OneOrMore);
                }
                '.' => {
                    self.push_single(&mut token_with_ranges, Token::Dot);
                }
                c if c.is_ascii() => {
                    self.push_single(&mut token_with_ranges, Token::Char(c));
                }
                _ => {
                    self.next_char();
                    return Err(FsmError::malformed(
                        "unsupported character",
                        Location::from_position_and_length(&self.last_position, 1),
                    ));
                }
            }
        }

        Ok(token_with_ranges)
    }

    fn lex_charset(&mut self) -> Result<TokenWithRange, FsmError> {
        // [.....]?  //
        // ^      ^__// to here
        // |_________// current char, validated

        self.next_char(); // consume '['
        let position_start = self.last_position;

        let mut chars: Vec<(char, Location)> = vec![];

        loop {
            match self.next_char() {
                Some(']') => break,
                Some(c) if c.is_ascii() => {
                    chars.push((c, self.last_position));
                }
                Some(_) => {
                    return Err(FsmError::malformed(
                        "unsupported character",
                        Location::from_position_and_length(&self.last_position, 1),
                    ));
                }
                None => {
                    return Err(FsmError::malformed(
                        "unterminated character class",
                        Location::from_position_pair_with_end_included(
                            &position_start,
                            &self.last_position,
                        ),
                    ));
                }
            }
        }

        let range =
            Location::from_position_pair_with_end_included(&position_start, &self.last_position);

        if chars.is_empty() {
            return Err(FsmError::malformed("empty character class", range));
        }

        // merge the char range, e.g.
        // [a-z]
        //  ^ ^__ // to here
        //  |____ // merge from here
        let mut items = vec![];
        let mut idx = 0;
        while idx < chars.len() {
            if idx + 2 < chars.len() && chars[idx + 1].0 == '-' {
                let (char_start, position_range_start) = chars[idx];
                let (char_end, position_range_end) = chars[idx + 2];

                if char_start > char_end {
                    return Err(FsmError::malformed(
                        "invalid character range",
                        Location::from_position_pair_with_end_included(
                            &position_range_start,
                            &position_range_end,
                        ),
                    ));
                }

                items.push(CharSetItem::new_range(char_start, char_end));
                idx += 3;
            } else {
                items.push(CharSetItem::new_char(chars[idx].0));
                idx += 1;
            }
        }

        let definition: String = chars.iter().map(|(c, _)| c).collect();

        Ok(TokenWithRange::new(
            Token::CharSet { definition, items },
            range,
        ))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        error::FsmError,
        location::Location,
        state::CharSetItem,
        token::{Token, TokenWithRange},
    };

    use super::lex_from_str;

    fn lex_from_str_without_location(s: &str) -> Result<Vec<Token>, FsmError> {
        let tokens = lex_from_str(s)?
            .into_iter()
            .map(|e| e.token)
            .collect::<Vec<Token>>();
        Ok(tokens)
    }

    fn new_charset(definition: &str, items: Vec<CharSetItem>) -> Token {
        Token::CharSet {
            definition: definition.to_owned(),
            items,
        }
    }

    #[test]
    fn test_lex_char() {
        assert_eq!(lex_from_str_without_location("").unwrap(), vec![]);

        assert_eq!(
            lex_from_str_without_location("a").unwrap(),
            vec![Token::Char('a')]
        );

        assert_eq!(
            lex_from_str_without_location("a.4]").unwrap(),
            vec![
                Token::Char('a'),
                Token::Dot,
                Token::Char('4'),
                Token::Char(']'),
            ]
        );

        // location
        assert_eq!(
            lex_from_str("ab").unwrap(),
            vec![
                TokenWithRange::new(Token::Char('a'), Location::new_range(0, 1)),
                TokenWithRange::new(Token::Char('b'), Location::new_range(1, 1)),
            ]
        );
    }

    #[test]
    fn test_lex_repetition() {
        assert_eq!(
            lex_from_str_without_location("a*b+.*").unwrap(),
            vec![
                Token::Char('a'),
                Token::ZeroOrMore,
                Token::Char('b'),
                Token::OneOrMore,
                Token::Dot,
                Token::ZeroOrMore,
            ]
        );

        // repetition without an atom is a compile error, not a lex error
        assert_eq!(
            lex_from_str_without_location("**").unwrap(),
            vec![Token::ZeroOrMore, Token::ZeroOrMore]
        );
    }

    #[test]
    fn test_lex_charset() {
        assert_eq!(
            lex_from_str_without_location("[abc]").unwrap(),
            vec![new_charset(
                "abc",
                vec![
                    CharSetItem::new_char('a'),
                    CharSetItem::new_char('b'),
                    CharSetItem::new_char('c'),
                ]
            )]
        );

        assert_eq!(
            lex_from_str_without_location("[a-z0-9_]+").unwrap(),
            vec![
                new_charset(
                    "a-z0-9_",
                    vec![
                        CharSetItem::new_range('a', 'z'),
                        CharSetItem::new_range('0', '9'),
                        CharSetItem::new_char('_'),
                    ]
                ),
                Token::OneOrMore
            ]
        );

        // hyphen at the first and the last position
        assert_eq!(
            lex_from_str_without_location("[-a][a-]").unwrap(),
            vec![
                new_charset(
                    "-a",
                    vec![CharSetItem::new_char('-'), CharSetItem::new_char('a')]
                ),
                new_charset(
                    "a-",
                    vec![CharSetItem::new_char('a'), CharSetItem::new_char('-')]
                ),
            ]
        );

        // meta chars are literal inside a charset
        assert_eq!(
            lex_from_str_without_location("[.*[]").unwrap(),
            vec![new_charset(
                ".*[",
                vec![
                    CharSetItem::new_char('.'),
                    CharSetItem::new_char('*'),
                    CharSetItem::new_char('['),
                ]
            )]
        );

        // location
        assert_eq!(
            lex_from_str("x[0-9]").unwrap(),
            vec![
                TokenWithRange::new(Token::Char('x'), Location::new_range(0, 1)),
                TokenWithRange::new(
                    new_charset("0-9", vec![CharSetItem::new_range('0', '9')]),
                    Location::new_range(1, 5)
                ),
            ]
        );
    }

    #[test]
    fn test_lex_errors() {
        assert!(matches!(
            lex_from_str("[a-z"),
            Err(FsmError::MalformedPattern { message, location })
                if message == "unterminated character class" && location == Location::new_range(0, 4)
        ));

        assert!(matches!(
            lex_from_str("ab["),
            Err(FsmError::MalformedPattern { message, location })
                if message == "unterminated character class" && location == Location::new_range(2, 1)
        ));

        assert!(matches!(
            lex_from_str("a[]"),
            Err(FsmError::MalformedPattern { message, location })
                if message == "empty character class" && location == Location::new_range(1, 2)
        ));

        assert!(matches!(
            lex_from_str("[z-a]"),
            Err(FsmError::MalformedPattern { message, location })
                if message == "invalid character range" && location == Location::new_range(1, 3)
        ));

        assert!(matches!(
            lex_from_str("ab文"),
            Err(FsmError::MalformedPattern { message, location })
                if message == "unsupported character" && location == Location::new_range(2, 1)
        ));

        assert!(matches!(
            lex_from_str("[a文]"),
            Err(FsmError::MalformedPattern { message, .. })
                if message == "unsupported character"
        ));
    }
}
