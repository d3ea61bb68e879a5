// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::collections::HashMap;

use crate::LineNumber;

/// Where evaluation looks up the value of a variable.
pub trait Bindings {
    fn lookup(&self, name: &str) -> Option<i64>;
}

impl Bindings for HashMap<String, i64> {
    fn lookup(&self, name: &str) -> Option<i64> {
        self.get(name).copied()
    }
}

/// The integer variables of a session. Names are case sensitive.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Variables {
    values: HashMap<String, i64>,
}

impl Variables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    pub fn set(&mut self, name: impl Into<String>, value: i64) {
        self.values.insert(name.into(), value);
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Bindings for Variables {
    fn lookup(&self, name: &str) -> Option<i64> {
        self.get(name)
    }
}

/// The register telling the run loop which line executes next.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CurrentLine {
    Line(LineNumber),
    #[default]
    Halted,
}

impl CurrentLine {
    #[must_use]
    pub const fn line(&self) -> Option<LineNumber> {
        match self {
            Self::Line(number) => Some(*number),
            Self::Halted => None,
        }
    }
}

impl From<LineNumber> for CurrentLine {
    fn from(value: LineNumber) -> Self {
        Self::Line(value)
    }
}

impl From<Option<LineNumber>> for CurrentLine {
    fn from(value: Option<LineNumber>) -> Self {
        match value {
            Some(number) => Self::Line(number),
            None => Self::Halted,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct EvalState {
    variables: Variables,
    current_line: CurrentLine,
}

impl EvalState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut Variables {
        &mut self.variables
    }

    #[must_use]
    pub const fn current_line(&self) -> CurrentLine {
        self.current_line
    }

    pub fn set_current_line(&mut self, current_line: impl Into<CurrentLine>) {
        self.current_line = current_line.into();
    }

    pub fn halt(&mut self) {
        self.current_line = CurrentLine::Halted;
    }

    #[must_use]
    pub const fn is_halted(&self) -> bool {
        matches!(self.current_line, CurrentLine::Halted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_are_case_sensitive() {
        let mut variables = Variables::new();
        variables.set("x", 1);
        variables.set("X", 2);

        assert_eq!(variables.get("x"), Some(1));
        assert_eq!(variables.get("X"), Some(2));
        assert_eq!(variables.lookup("y"), None);
        assert_eq!(variables.len(), 2);

        variables.clear();
        assert!(variables.is_empty());
    }

    #[test]
    fn current_line_register() {
        let mut state = EvalState::new();
        assert!(state.is_halted());

        state.set_current_line(LineNumber::new(10));
        assert_eq!(state.current_line(), CurrentLine::Line(LineNumber::new(10)));
        assert_eq!(state.current_line().line(), Some(LineNumber::new(10)));

        state.set_current_line(CurrentLine::Halted);
        assert!(state.is_halted());
    }

    #[test]
    fn hash_map_bindings() {
        let bindings = HashMap::from([("A".to_string(), 4)]);
        assert_eq!(bindings.lookup("A"), Some(4));
        assert_eq!(bindings.lookup("a"), None);
    }
}
