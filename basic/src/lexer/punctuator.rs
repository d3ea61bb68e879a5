// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum Punctuator {
    #[strum(serialize = "open parenthesis")]
    LeftParenthesis,
    #[strum(serialize = "close parenthesis")]
    RightParenthesis,
    #[strum(serialize = "plus")]
    PlusSign,
    #[strum(serialize = "minus")]
    HyphenMinus,
    #[strum(serialize = "asterisk")]
    Asterisk,
    #[strum(serialize = "slash")]
    Solidus,
    #[strum(serialize = "equals sign")]
    Equals,
    #[strum(serialize = "less-than")]
    LessThan,
    #[strum(serialize = "greater-than")]
    GreaterThan,
}

impl Punctuator {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::PlusSign => "+",
            Self::HyphenMinus => "-",
            Self::Asterisk => "*",
            Self::Solidus => "/",
            Self::Equals => "=",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
        }
    }

    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '(' => Self::LeftParenthesis,
            ')' => Self::RightParenthesis,
            '+' => Self::PlusSign,
            '-' => Self::HyphenMinus,
            '*' => Self::Asterisk,
            '/' => Self::Solidus,
            '=' => Self::Equals,
            '<' => Self::LessThan,
            '>' => Self::GreaterThan,
            _ => return None,
        })
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl Display for Punctuator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
