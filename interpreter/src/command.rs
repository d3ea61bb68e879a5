// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{borrow::Cow, fmt::Display};

use basic::DocumentationProvider;
use strum::IntoEnumIterator;

/// A session command. Commands act on the stored program and are never
/// part of it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[derive(strum::AsRefStr, strum::EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Command {
    Run,
    List,
    Clear,
    Help,
    Quit,
}

impl Command {
    pub fn iter_variants() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub fn parse(input: &str) -> Option<Self> {
        Self::iter().find(|x| x.as_ref().eq_ignore_ascii_case(input))
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl DocumentationProvider for Command {
    fn provide_documentation(&self) -> Cow<'_, str> {
        Cow::Borrowed(match self {
            Self::Run => "Runs the program",
            Self::List => "Lists the program",
            Self::Clear => "Clears the program and all variables",
            Self::Help => "Prints this message",
            Self::Quit => "Exits from the BASIC interpreter",
        })
    }
}
