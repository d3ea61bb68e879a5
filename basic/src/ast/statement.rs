// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use crate::{Expression, Keyword, LineNumber, Punctuator};

/// A single parsed BASIC line, without its line number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    Comment,
    Assign(AssignStatement),
    Print(Expression),
    Input(String),
    Goto(LineNumber),
    If(IfStatement),
    Halt,
}

impl Statement {
    #[must_use]
    pub const fn keyword(&self) -> Keyword {
        match self {
            Self::Comment => Keyword::Rem,
            Self::Assign(..) => Keyword::Let,
            Self::Print(..) => Keyword::Print,
            Self::Input(..) => Keyword::Input,
            Self::Goto(..) => Keyword::Goto,
            Self::If(..) => Keyword::If,
            Self::Halt => Keyword::End,
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword().as_ref())?;

        match self {
            Self::Comment | Self::Halt => Ok(()),
            Self::Assign(statement) => f.write_fmt(format_args!(" {} = {}", statement.name, statement.expression)),
            Self::Print(expression) => f.write_fmt(format_args!(" {expression}")),
            Self::Input(name) => f.write_fmt(format_args!(" {name}")),
            Self::Goto(target) => f.write_fmt(format_args!(" {target}")),
            Self::If(statement) => {
                f.write_fmt(format_args!(
                    " {} {} {} {} {}",
                    statement.lhs,
                    statement.comparison,
                    statement.rhs,
                    Keyword::Then.as_ref(),
                    statement.target,
                ))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignStatement {
    pub name: String,
    pub expression: Expression,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IfStatement {
    pub lhs: Expression,
    pub comparison: Comparison,
    pub rhs: Expression,
    pub target: LineNumber,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    Equal,
    LessThan,
    GreaterThan,
}

impl Comparison {
    #[must_use]
    pub const fn from_punctuator(punctuator: Punctuator) -> Option<Self> {
        match punctuator {
            Punctuator::Equals => Some(Self::Equal),
            Punctuator::LessThan => Some(Self::LessThan),
            Punctuator::GreaterThan => Some(Self::GreaterThan),
            _ => None,
        }
    }

    #[must_use]
    pub const fn holds(&self, lhs: i64, rhs: i64) -> bool {
        match self {
            Self::Equal => lhs == rhs,
            Self::LessThan => lhs < rhs,
            Self::GreaterThan => lhs > rhs,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
        }
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
