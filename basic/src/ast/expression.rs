// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Write};

use crate::Punctuator;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    Constant(i64),
    Variable(String),
    BiExpression(BiExpression),
}

impl Expression {
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    #[must_use]
    pub fn binary(operator: BiOperator, lhs: Expression, rhs: Expression) -> Self {
        Self::BiExpression(BiExpression {
            operator,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    /// Binding strength when this expression appears as an operand, used to
    /// decide where parentheses are needed when printing.
    const fn precedence(&self) -> u8 {
        match self {
            Self::BiExpression(expr) => expr.operator.precedence(),
            _ => u8::MAX,
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(value) => value.fmt(f),
            Self::Variable(name) => f.write_str(name),
            Self::BiExpression(expr) => Display::fmt(expr, f),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BiExpression {
    pub operator: BiOperator,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
}

impl Display for BiExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precedence = self.operator.precedence();

        // Operators are left-associative, so a right operand of equal
        // strength needs parentheses too.
        write_operand(f, &self.lhs, self.lhs.precedence() < precedence)?;
        f.write_fmt(format_args!(" {} ", self.operator))?;
        write_operand(f, &self.rhs, self.rhs.precedence() <= precedence)
    }
}

fn write_operand(f: &mut std::fmt::Formatter<'_>, operand: &Expression, parenthesize: bool) -> std::fmt::Result {
    if parenthesize {
        f.write_char('(')?;
        Display::fmt(operand, f)?;
        f.write_char(')')
    } else {
        Display::fmt(operand, f)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BiOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BiOperator {
    #[must_use]
    pub const fn from_punctuator(punctuator: Punctuator) -> Option<Self> {
        match punctuator {
            Punctuator::PlusSign => Some(Self::Add),
            Punctuator::HyphenMinus => Some(Self::Subtract),
            Punctuator::Asterisk => Some(Self::Multiply),
            Punctuator::Solidus => Some(Self::Divide),
            _ => None,
        }
    }

    /// `*` and `/` bind tighter than `+` and `-`. Zero is reserved for
    /// tokens that are not operators at all.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

impl Display for BiOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
