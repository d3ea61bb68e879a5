// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::Path;

use anyhow::Context;
use basic::Console;

use crate::{ErrorPrinter, Session, SessionError};

/// How a program file run ended, for the exit code of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Finished,
    RuntimeError,
}

impl Completion {
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Finished => 0,
            Self::RuntimeError => 1,
        }
    }
}

pub fn run_file<C>(session: Session, path: &Path, console: &mut C) -> anyhow::Result<Completion>
        where C: Console + ?Sized {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;

    run_source(session, &source, console)
        .with_context(|| format!("{} could not be loaded", path.display()))
}

/// Loads every non-blank line of `source` as a numbered line and runs the
/// program. Nothing runs when any line fails to load.
pub fn run_source<C>(mut session: Session, source: &str, console: &mut C) -> anyhow::Result<Completion>
        where C: Console + ?Sized {
    let mut failures = 0;
    for line in source.lines().filter(|line| !line.trim().is_empty()) {
        if let Err(error) = session.load_line(line) {
            report(&session, line, &error);
            failures += 1;
        }
    }

    if failures != 0 {
        anyhow::bail!(
            "{failures} {} errors",
            if failures == 1 { "line contains" } else { "lines contain" }
        );
    }

    match session.process_line("RUN", console) {
        Ok(..) => Ok(Completion::Finished),
        Err(error) => {
            report(&session, "RUN", &error);
            Ok(Completion::RuntimeError)
        }
    }
}

/// Prints `error` for the typed `line`. Errors of a running program show
/// the stored line that failed instead.
pub fn report(session: &Session, line: &str, error: &SessionError) {
    let printer = ErrorPrinter::new(error);

    let printer = match error {
        SessionError::Run(run_error) => match run_error.line {
            Some(number) => {
                let source = session.program().source_line(number).unwrap_or_default();
                printer.line(source, None).line_number(Some(number))
            }
            None => printer.line(line, None),
        },

        SessionError::NotImmediate { .. } => {
            printer.line(line, error.range()).hint("prefix it with a line number".to_string())
        }

        _ => printer.line(line, error.range()),
    };

    printer.print();
}
