// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{error::Error, fmt::Display, str::Chars};

use strum::AsRefStr;
use thiserror::Error;

use crate::{Punctuator, SourceRange, Token, TokenKind};

/// Splits a single line of BASIC into tokens.
pub struct Lexer<'source_code> {
    chars: Chars<'source_code>,

    current: Option<(usize, char)>,
    column: usize,
    errors: Vec<LexerError>,
}

impl<'source_code> Lexer<'source_code> {
    pub fn new(input: &'source_code str) -> Self {
        Self {
            chars: input.chars(),
            current: None,
            column: 0,
            errors: Vec::new(),
        }
    }

    pub fn next(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let ch = self.peek_char()?;
        match ch {
            'a'..='z' | 'A'..='Z' => Some(self.consume_word()),
            '0'..='9' => Some(self.consume_number()),

            _ => {
                let begin = self.current_column();
                self.consume_char();
                let range = SourceRange::new(begin, self.current_column());

                let kind = match Punctuator::from_char(ch) {
                    Some(punctuator) => TokenKind::Punctuator(punctuator),
                    None => TokenKind::IllegalCharacter(ch),
                };

                Some(Token::new(kind, range))
            }
        }
    }

    fn consume_word(&mut self) -> Token {
        let begin = self.current_column();
        let mut word = String::new();

        while let Some(c) = self.peek_char() {
            if !c.is_ascii_alphanumeric() && c != '_' {
                break;
            }

            word.push(c);
            self.consume_char();
        }

        Token::new(TokenKind::Word(word), SourceRange::new(begin, self.current_column()))
    }

    fn consume_number(&mut self) -> Token {
        let begin = self.current_column();
        let mut digits = String::new();

        while let Some(c) = self.peek_char() {
            if !c.is_ascii_digit() {
                break;
            }

            digits.push(c);
            self.consume_char();
        }

        let range = SourceRange::new(begin, self.current_column());

        let number = match digits.parse::<i64>() {
            Ok(number) => number,
            Err(..) => {
                self.errors.push(LexerError {
                    range,
                    kind: LexerErrorKind::InvalidNumber,
                });
                0
            }
        };

        Token::new(TokenKind::Number(number), range)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_whitespace() {
                break;
            }

            self.consume_char();
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        if let Some((_, c)) = self.current {
            return Some(c);
        }

        self.current = self.chars.next()
            .map(|char| {
                let column = self.column;
                self.column += 1;
                (column, char)
            });
        Some(self.current?.1)
    }

    fn consume_char(&mut self) {
        self.current = None;
        _ = self.peek_char();
    }

    fn current_column(&mut self) -> usize {
        _ = self.peek_char();
        match self.current {
            Some((column, _)) => column,
            None => self.column,
        }
    }

    pub fn collect_all(mut self) -> (Vec<Token>, Vec<LexerError>) {
        let mut tokens = Vec::new();

        while let Some(token) = self.next() {
            tokens.push(token);
        }

        (tokens, self.errors)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        Lexer::next(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerError {
    pub range: SourceRange,
    pub kind: LexerErrorKind,
}

impl Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

impl Error for LexerError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, AsRefStr)]
pub enum LexerErrorKind {
    #[error("Number is too large")]
    InvalidNumber,
}

impl LexerErrorKind {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
