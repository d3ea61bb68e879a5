// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io::{self, BufRead, Write};

use basic::Console;

/// A console on top of a reader and a writer, usually stdin and stdout.
pub struct StdConsole<R, W> {
    reader: R,
    writer: W,
    prompt: String,
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    #[must_use]
    pub fn stdio(prompt: impl Into<String>) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), prompt)
    }
}

impl<R, W> StdConsole<R, W>
        where R: BufRead,
              W: Write {
    pub fn new(reader: R, writer: W, prompt: impl Into<String>) -> Self {
        Self {
            reader,
            writer,
            prompt: prompt.into(),
        }
    }

    /// Reads one line without its line ending, or `None` at the end of the
    /// input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()
    }

    /// Asks a yes/no question until it is answered. The end of the input
    /// counts as yes.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        loop {
            self.write_str(question)?;

            let Some(answer) = self.read_line()? else {
                return Ok(true);
            };

            match answer.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.write_line("Please answer yes or no.")?,
            }
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R, W> Console for StdConsole<R, W>
        where R: BufRead,
              W: Write {
    fn print_value(&mut self, value: i64) -> io::Result<()> {
        writeln!(self.writer, "{value}")?;
        self.writer.flush()
    }

    fn read_integer(&mut self, variable: &str) -> io::Result<Option<i64>> {
        _ = variable;

        loop {
            self.writer.write_all(self.prompt.as_bytes())?;
            self.writer.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match line.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(..) => self.write_line("Illegal integer format. Try again.")?,
            }
        }
    }
}
