// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use basic::{
    parse_statement, run, run_with_debugger, Console, Debugger, DocumentationProvider, EvalState, Keyword, LineNumber,
    Lexer, Program, RunError, Statement, Token, TokenKind,
};
use log::debug;

use crate::{Command, SessionError};

/// What the terminal should do after a line was processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// Text for the user, such as a listing or the help message.
    Text(String),
    Quit,
}

/// The stored program and the variables of one interactive session.
#[derive(Debug, Default)]
pub struct Session {
    program: Program,
    state: EvalState,
    trace: bool,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints each executed line number to stderr during `RUN`.
    #[must_use]
    pub fn with_trace(self, trace: bool) -> Self {
        Self { trace, ..self }
    }

    #[must_use]
    pub const fn program(&self) -> &Program {
        &self.program
    }

    #[must_use]
    pub const fn state(&self) -> &EvalState {
        &self.state
    }

    pub fn process_line<C>(&mut self, line: &str, console: &mut C) -> Result<Outcome, SessionError>
            where C: Console + ?Sized {
        let (tokens, errors) = Lexer::new(line).collect_all();
        if let Some(error) = errors.into_iter().next() {
            return Err(error.into());
        }

        let Some(first) = tokens.first() else {
            return Ok(Outcome::Done);
        };

        match &first.kind {
            TokenKind::Number(number) => {
                self.edit_line(line, first, *number, &tokens[1..])?;
                Ok(Outcome::Done)
            }

            TokenKind::Word(word) => {
                if let Some(command) = Command::parse(word) {
                    if let Some(token) = tokens.get(1) {
                        return Err(SessionError::CommandArguments { command, token: token.clone() });
                    }

                    return self.execute_command(command, console);
                }

                match Keyword::parse(word) {
                    Some(keyword) if keyword.is_immediate() => {
                        self.execute_immediate(&tokens, console)?;
                        Ok(Outcome::Done)
                    }

                    Some(keyword) => Err(SessionError::NotImmediate { keyword, token: first.clone() }),
                    None => Err(SessionError::UnknownCommand { token: first.clone() }),
                }
            }

            _ => Err(SessionError::UnknownCommand { token: first.clone() }),
        }
    }

    /// Stores a line of a program file. Unlike [`Self::process_line`],
    /// the line must start with a line number and is never executed.
    pub fn load_line(&mut self, line: &str) -> Result<(), SessionError> {
        let (tokens, errors) = Lexer::new(line).collect_all();
        if let Some(error) = errors.into_iter().next() {
            return Err(error.into());
        }

        let Some(first) = tokens.first() else {
            return Ok(());
        };

        match first.kind {
            TokenKind::Number(number) => self.edit_line(line, first, number, &tokens[1..]),
            _ => Err(SessionError::MissingLineNumber { token: first.clone() }),
        }
    }

    /// A number on its own removes that line; otherwise the rest of the
    /// line replaces it, but only when it parses.
    fn edit_line(&mut self, line: &str, first: &Token, number: i64, rest: &[Token]) -> Result<(), SessionError> {
        let Ok(number) = LineNumber::try_from(number) else {
            return Err(SessionError::InvalidLineNumber { token: first.clone() });
        };

        if rest.is_empty() {
            self.program.remove_line(number);
            return Ok(());
        }

        let statement = parse_statement(rest)?;
        self.program.insert_line(number, line.trim(), statement);
        Ok(())
    }

    fn execute_immediate<C>(&mut self, tokens: &[Token], console: &mut C) -> Result<(), SessionError>
            where C: Console + ?Sized {
        let statement = parse_statement(tokens)?;
        debug!("Executing `{statement}` immediately");

        statement.execute(&mut self.state, console)
            .map_err(|kind| RunError::new(None, kind))?;
        Ok(())
    }

    fn execute_command<C>(&mut self, command: Command, console: &mut C) -> Result<Outcome, SessionError>
            where C: Console + ?Sized {
        match command {
            Command::Run => {
                if self.trace {
                    run_with_debugger(&self.program, &mut self.state, console, &mut LineTracer)?;
                } else {
                    run(&self.program, &mut self.state, console)?;
                }

                Ok(Outcome::Done)
            }

            Command::List => {
                let listing = self.program.lines()
                    .map(|line| line.source())
                    .collect::<Vec<_>>()
                    .join("\n");
                Ok(Outcome::Text(listing))
            }

            Command::Clear => {
                self.program.clear();
                self.state.variables_mut().clear();
                Ok(Outcome::Done)
            }

            Command::Help => Ok(Outcome::Text(help_text())),
            Command::Quit => Ok(Outcome::Quit),
        }
    }
}

struct LineTracer;

impl Debugger for LineTracer {
    fn on_statement(&mut self, line: LineNumber, statement: &Statement) {
        _ = statement;
        eprintln!("[{line}]");
    }
}

fn help_text() -> String {
    let mut text = String::from("Available commands:");

    for command in Command::iter_variants() {
        text += &format!("\n   {:<8}- {}", command.as_ref(), command.provide_documentation());
    }

    text += "\n\nStatements:";

    for keyword in Keyword::iter_variants().filter(|keyword| keyword.starts_statement()) {
        let documentation = keyword.provide_documentation();
        let summary = documentation.split("\n## ").next().unwrap_or_default().replace('\n', " ");
        text += &format!("\n   {:<40}{summary}", keyword.syntax());
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use basic::BufferedConsole;

    #[test]
    fn help_lists_commands_and_statements() {
        let help = help_text();

        for command in Command::iter_variants() {
            assert!(help.contains(command.as_ref()), "Missing {command} in {help}");
        }

        assert!(help.contains("IF expression op expression THEN line"));
        assert!(!help.contains("IF ... THEN line"));
    }

    #[test]
    fn numbered_line_is_stored_trimmed() {
        let mut session = Session::new();
        session.process_line("  10 PRINT 1  ", &mut BufferedConsole::new()).unwrap();

        assert_eq!(session.program().source_line(LineNumber::new(10)), Some("10 PRINT 1"));
    }
}
