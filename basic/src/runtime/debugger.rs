// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{LineNumber, RunError, Statement};

/// Hooks into the run loop. Every hook does nothing by default.
pub trait Debugger {
    fn on_statement(&mut self, line: LineNumber, statement: &Statement) {
        _ = line;
        _ = statement;
    }

    /// Called when a statement transfers control somewhere other than the
    /// next line.
    fn on_jump(&mut self, from: LineNumber, to: LineNumber) {
        _ = from;
        _ = to;
    }

    fn on_runtime_error(&mut self, error: &RunError) {
        _ = error;
    }
}

impl Debugger for () {
}
