// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use basic::{Keyword, LexerError, LineNumber, ParseError, RunError, SourceRange, Token};
use colored::{Color, ColoredString, Colorize};
use strum::AsRefStr;
use thiserror::Error;

use crate::Command;

#[derive(Debug, Error, AsRefStr)]
pub enum SessionError {
    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Run(#[from] RunError),

    #[error("Line number {token} is out of range")]
    InvalidLineNumber { token: Token },

    #[error("Expected a line number at the start of the line, but got `{token}`")]
    MissingLineNumber { token: Token },

    #[error("`{keyword}` can only be used inside a numbered line")]
    NotImmediate { keyword: Keyword, token: Token },

    #[error("That command is not recognized. Please try again or ask for HELP")]
    UnknownCommand { token: Token },

    #[error("`{command}` must stand alone on the line, but got `{token}`")]
    CommandArguments { command: Command, token: Token },
}

impl SessionError {
    /// The columns of the typed line that caused this error, when the
    /// error is about the typed line at all.
    #[must_use]
    pub fn range(&self) -> Option<SourceRange> {
        match self {
            Self::Lexer(error) => Some(error.range),
            Self::Parse(error) => Some(error.range()),
            Self::Run(..) => None,

            Self::InvalidLineNumber { token }
            | Self::MissingLineNumber { token }
            | Self::NotImmediate { token, .. }
            | Self::UnknownCommand { token }
            | Self::CommandArguments { token, .. } => Some(token.range()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}

/// Reports an error on stderr, underlining the offending part of a line.
pub struct ErrorPrinter {
    message: String,
    line: Option<String>,
    range: Option<SourceRange>,
    hint: Option<String>,

    color: Color,
    gutter: ColoredString,
}

impl ErrorPrinter {
    #[must_use = "Use the `print` method to actually print"]
    pub fn new(message: impl Display) -> Self {
        Self {
            message: message.to_string(),
            line: None,
            range: None,
            hint: None,

            color: Color::Red,
            gutter: "".normal(),
        }
    }

    /// Shows `line` below the message, with a caret under `range` when
    /// given.
    #[must_use]
    pub fn line(self, line: impl Into<String>, range: Option<SourceRange>) -> Self {
        Self {
            line: Some(line.into()),
            range,
            ..self
        }
    }

    /// Labels the shown line with its BASIC line number.
    #[must_use]
    pub fn line_number(self, number: Option<LineNumber>) -> Self {
        Self {
            gutter: match number {
                Some(number) => number.to_string().blue().bold(),
                None => "".normal(),
            },
            ..self
        }
    }

    #[must_use]
    pub fn hint(self, hint: impl Into<Option<String>>) -> Self {
        Self {
            hint: hint.into(),
            ..self
        }
    }

    pub fn print(self) {
        eprintln!("{}: {}", "error".color(self.color).bold(), self.message.bold());

        if let Some(line) = &self.line {
            self.print_line_prefix();
            eprintln!("{line}");

            if let Some(range) = self.range {
                self.print_error_indicator(range);
            }
        }

        eprintln!();
    }

    fn print_error_indicator(&self, range: SourceRange) {
        let spaces = " ".repeat(range.start());
        let caret = "^".color(self.color).bold();
        let tildes = "~".repeat(range.len().saturating_sub(1)).color(self.color);

        let hint = match &self.hint {
            Some(hint) => format!("hint: {hint}").color(self.color).bold(),
            None => "".bold(),
        };

        self.print_gutter_padding();
        eprintln!("{spaces}{caret}{tildes} {hint}");
    }

    fn print_line_prefix(&self) {
        let separator = " | ".blue().bold();
        eprint!("{}{separator}", self.gutter);
    }

    fn print_gutter_padding(&self) {
        let separator = " | ".blue().bold();
        eprint!("{}{separator}", " ".repeat(self.gutter.chars().count()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basic::TokenKind;

    #[test]
    fn ranges() {
        let token = Token::new(TokenKind::Word("FOO".into()), SourceRange::new(2, 5));

        let error = SessionError::UnknownCommand { token };
        assert_eq!(error.range(), Some(SourceRange::new(2, 5)));
        assert_eq!(error.name(), "UnknownCommand");
        assert_eq!(error.to_string(), "That command is not recognized. Please try again or ask for HELP");
    }
}
