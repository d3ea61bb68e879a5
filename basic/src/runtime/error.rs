// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{error::Error as StdError, fmt::Display, io};

use strum::AsRefStr;
use thiserror::Error;

use crate::{BiOperator, LineNumber};

#[derive(Debug, Clone, PartialEq, Eq, Error, AsRefStr)]
pub enum EvalError {
    #[error("Variable `{name}` has no value")]
    UnboundVariable { name: String },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Integer overflow while calculating {lhs} {operator} {rhs}")]
    Overflow { lhs: i64, operator: BiOperator, rhs: i64 },
}

/// A failure during `RUN` or an immediate statement. `line` is the line
/// that was executing, absent for immediate statements.
#[derive(Debug)]
pub struct RunError {
    pub line: Option<LineNumber>,
    pub kind: RunErrorKind,
}

impl RunError {
    #[must_use]
    pub const fn new(line: Option<LineNumber>, kind: RunErrorKind) -> Self {
        Self { line, kind }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.kind.as_ref()
    }
}

impl Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => f.write_fmt(format_args!("{} in line {line}", self.kind)),
            None => self.kind.fmt(f),
        }
    }
}

impl StdError for RunError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.kind)
    }
}

#[derive(Debug, Error, AsRefStr)]
pub enum RunErrorKind {
    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("Line {target} does not exist")]
    UndefinedLine { target: LineNumber },

    #[error("Line {line} has no statement")]
    UnparsedLine { line: LineNumber },

    #[error("No more input for `INPUT {variable}`")]
    InputClosed { variable: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line() {
        let error = RunError::new(Some(LineNumber::new(20)), RunErrorKind::UndefinedLine { target: LineNumber::new(99) });
        assert_eq!(error.to_string(), "Line 99 does not exist in line 20");
        assert_eq!(error.name(), "UndefinedLine");

        let error = RunError::new(None, EvalError::DivisionByZero.into());
        assert_eq!(error.to_string(), "Division by zero");
    }
}
