// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use crate::{Keyword, Punctuator, SourceRange};

use super::TokenKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub range: SourceRange,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, range: SourceRange) -> Self {
        Self { kind, range }
    }

    #[must_use]
    pub const fn range(&self) -> SourceRange {
        self.range
    }

    #[must_use]
    pub fn as_word(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Word(word) => Some(word),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_keyword(&self) -> Option<Keyword> {
        self.as_word().and_then(Keyword::parse)
    }

    #[must_use]
    pub fn as_punctuator(&self) -> Option<Punctuator> {
        match self.kind {
            TokenKind::Punctuator(punctuator) => Some(punctuator),
            _ => None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}
