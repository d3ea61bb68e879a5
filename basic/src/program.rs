// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{collections::BTreeMap, ops::Bound};

use log::{debug, trace};
use thiserror::Error;

use crate::{LineNumber, Statement};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramLine {
    number: LineNumber,
    source: String,
    statement: Option<Statement>,
}

impl ProgramLine {
    #[must_use]
    pub const fn number(&self) -> LineNumber {
        self.number
    }

    /// The text as it was typed, including the line number.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub const fn statement(&self) -> Option<&Statement> {
        self.statement.as_ref()
    }
}

/// The lines of a BASIC program, kept in ascending line number order.
#[derive(Debug, Default, Clone)]
pub struct Program {
    lines: BTreeMap<LineNumber, ProgramLine>,
}

impl Program {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the source text of a line, replacing the previous text. The
    /// previous statement of that line is dropped, so the caller has to
    /// install the newly parsed one with [`Self::set_parsed_statement`].
    pub fn upsert_line(&mut self, number: LineNumber, source: impl Into<String>) {
        let line = ProgramLine {
            number,
            source: source.into(),
            statement: None,
        };

        if self.lines.insert(number, line).is_some() {
            debug!("Replaced line {number}");
        } else {
            debug!("Added line {number}");
        }
    }

    /// Stores the text and its parsed statement in one step.
    pub fn insert_line(&mut self, number: LineNumber, source: impl Into<String>, statement: Statement) {
        self.upsert_line(number, source);

        if let Some(line) = self.lines.get_mut(&number) {
            line.statement = Some(statement);
        }
    }

    /// Removes a line, returning it when it existed.
    pub fn remove_line(&mut self, number: LineNumber) -> Option<ProgramLine> {
        let removed = self.lines.remove(&number);

        if removed.is_some() {
            debug!("Removed line {number}");
        }

        removed
    }

    pub fn set_parsed_statement(&mut self, number: LineNumber, statement: Statement) -> Result<(), ProgramError> {
        let Some(line) = self.lines.get_mut(&number) else {
            return Err(ProgramError::UnknownLine { number });
        };

        trace!("Line {number} is now `{statement}`");
        line.statement = Some(statement);
        Ok(())
    }

    #[must_use]
    pub fn parsed_statement(&self, number: LineNumber) -> Option<&Statement> {
        self.lines.get(&number)?.statement()
    }

    #[must_use]
    pub fn source_line(&self, number: LineNumber) -> Option<&str> {
        self.lines.get(&number).map(ProgramLine::source)
    }

    #[must_use]
    pub fn contains(&self, number: LineNumber) -> bool {
        self.lines.contains_key(&number)
    }

    #[must_use]
    pub fn first_line(&self) -> Option<LineNumber> {
        self.lines.keys().next().copied()
    }

    /// The smallest stored line number strictly greater than `number`.
    /// `number` itself does not have to be stored.
    #[must_use]
    pub fn next_line(&self, number: LineNumber) -> Option<LineNumber> {
        self.lines
            .range((Bound::Excluded(number), Bound::Unbounded))
            .next()
            .map(|(number, _)| *number)
    }

    pub fn lines(&self) -> impl Iterator<Item = &ProgramLine> {
        self.lines.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        debug!("Cleared {} lines", self.lines.len());
        self.lines.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    #[error("Line {number} does not exist")]
    UnknownLine { number: LineNumber },
}
