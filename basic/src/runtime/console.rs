// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{collections::VecDeque, io};

/// The input and output of a running program.
pub trait Console {
    /// Writes the result of a `PRINT` statement.
    fn print_value(&mut self, value: i64) -> io::Result<()>;

    /// Asks for the value of `variable` for an `INPUT` statement. Returns
    /// `None` when no more input is available.
    fn read_integer(&mut self, variable: &str) -> io::Result<Option<i64>>;
}

/// A console with scripted input that records everything printed.
#[derive(Debug, Default, Clone)]
pub struct BufferedConsole {
    inputs: VecDeque<i64>,
    outputs: Vec<i64>,
}

impl BufferedConsole {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_inputs(inputs: impl IntoIterator<Item = i64>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            outputs: Vec::new(),
        }
    }

    #[must_use]
    pub fn outputs(&self) -> &[i64] {
        &self.outputs
    }

    pub fn take_outputs(&mut self) -> Vec<i64> {
        std::mem::take(&mut self.outputs)
    }
}

impl Console for BufferedConsole {
    fn print_value(&mut self, value: i64) -> io::Result<()> {
        self.outputs.push(value);
        Ok(())
    }

    fn read_integer(&mut self, variable: &str) -> io::Result<Option<i64>> {
        _ = variable;
        Ok(self.inputs.pop_front())
    }
}
