// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use super::Punctuator;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifiers and keywords alike, keywords are recognized by the parser.
    Word(String),
    Number(i64),

    Punctuator(Punctuator),
    IllegalCharacter(char),
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Word(..) => "word",
            Self::Number(..) => "number",

            Self::Punctuator(punctuator) => punctuator.name(),
            Self::IllegalCharacter(..) => "illegal character",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Word(word) => f.write_str(word),
            Self::Number(number) => number.fmt(f),
            Self::Punctuator(punctuator) => punctuator.fmt(f),
            Self::IllegalCharacter(ch) => ch.fmt(f),
        }
    }
}
