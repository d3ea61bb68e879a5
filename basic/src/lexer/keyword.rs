// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use strum::IntoEnumIterator;

use crate::DocumentationProvider;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::AsRefStr, strum::EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Keyword {
    Rem,
    Let,
    Print,
    Input,
    Goto,
    If,
    Then,
    End,
}

impl Keyword {
    pub fn iter_variants() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Keywords are matched regardless of case, so `print`, `Print` and
    /// `PRINT` are the same keyword.
    pub fn parse(input: &str) -> Option<Self> {
        Self::iter().find(|x| x.as_ref().eq_ignore_ascii_case(input))
    }

    #[must_use]
    pub const fn starts_statement(&self) -> bool {
        !matches!(self, Self::Then)
    }

    /// Whether a statement starting with this keyword may be typed without
    /// a line number and executed on the spot.
    #[must_use]
    pub const fn is_immediate(&self) -> bool {
        matches!(self, Self::Let | Self::Print | Self::Input)
    }

    #[must_use]
    pub const fn syntax(&self) -> &'static str {
        match self {
            Self::Rem => "REM comment",
            Self::Let => "LET variable = expression",
            Self::Print => "PRINT expression",
            Self::Input => "INPUT variable",
            Self::Goto => "GOTO line",
            Self::If => "IF expression op expression THEN line",
            Self::Then => "IF ... THEN line",
            Self::End => "END",
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl DocumentationProvider for Keyword {
    fn provide_documentation(&self) -> std::borrow::Cow<'_, str> {
        match self {
            Self::Rem => "A comment. Everything after `REM` on the line is ignored.",
            Self::Let => "Assigns the value of the expression to the variable.",
            Self::Print => "Evaluates the expression and prints its value on its own line.",
            Self::Input => "Asks for an integer and stores it in the variable.",
            Self::Goto => "Continues the program at the given line.",
            Self::If => r#"Continues the program at the given line when the comparison holds,
otherwise with the next line. The operator is one of `=`, `<` or `>`.
## Example
```basic
10 LET X = 0
20 LET X = X + 1
30 IF X < 3 THEN 20
40 PRINT X
```"#,
            Self::Then => "Separates the comparison of an `IF` statement from its target line.",
            Self::End => "Stops the program.",
        }.into()
    }
}
