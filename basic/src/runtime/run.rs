// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use log::{debug, trace, warn};

use crate::{Console, CurrentLine, Debugger, EvalState, LineNumber, Program, RunError, RunErrorKind};

/// Runs `program` from its first line until it ends, reaches `END` or fails.
pub fn run<C>(program: &Program, state: &mut EvalState, console: &mut C) -> Result<(), RunError>
        where C: Console + ?Sized {
    run_with_debugger(program, state, console, &mut ())
}

pub fn run_with_debugger<C, D>(
    program: &Program,
    state: &mut EvalState,
    console: &mut C,
    debugger: &mut D,
) -> Result<(), RunError>
        where C: Console + ?Sized,
              D: Debugger + ?Sized {
    debug!("Running program of {} lines", program.len());
    state.set_current_line(program.first_line());

    let mut executed = 0usize;

    while let CurrentLine::Line(line) = state.current_line() {
        if let Err(kind) = step(program, state, console, debugger, line) {
            let error = RunError::new(Some(line), kind);
            warn!("Run stopped: {error}");

            state.halt();
            debugger.on_runtime_error(&error);
            return Err(error);
        }

        executed += 1;
    }

    debug!("Program halted after {executed} statements");
    Ok(())
}

fn step<C, D>(
    program: &Program,
    state: &mut EvalState,
    console: &mut C,
    debugger: &mut D,
    line: LineNumber,
) -> Result<(), RunErrorKind>
        where C: Console + ?Sized,
              D: Debugger + ?Sized {
    let Some(statement) = program.parsed_statement(line) else {
        return Err(RunErrorKind::UnparsedLine { line });
    };

    trace!("{line} {statement}");
    debugger.on_statement(line, statement);

    let fallthrough = program.next_line(line);
    state.set_current_line(fallthrough);

    statement.execute(state, console)?;

    if let CurrentLine::Line(target) = state.current_line() {
        if Some(target) != fallthrough {
            if !program.contains(target) {
                return Err(RunErrorKind::UndefinedLine { target });
            }

            trace!("Jump from {line} to {target}");
            debugger.on_jump(line, target);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_statement, BufferedConsole, EvalError, Lexer, Statement, TokenKind};
    use pretty_assertions::assert_eq;

    fn program(lines: &[&str]) -> Program {
        let mut program = Program::new();

        for line in lines {
            let (tokens, errors) = Lexer::new(line).collect_all();
            assert!(errors.is_empty());

            let number = match tokens[0].kind {
                TokenKind::Number(number) => LineNumber::try_from(number).unwrap(),
                _ => panic!("Line without number: {line}"),
            };

            let statement = parse_statement(&tokens[1..]).unwrap();
            program.insert_line(number, *line, statement);
        }

        program
    }

    #[derive(Default)]
    struct Recorder {
        statements: Vec<u32>,
        jumps: Vec<(u32, u32)>,
        errors: Vec<String>,
    }

    impl Debugger for Recorder {
        fn on_statement(&mut self, line: LineNumber, statement: &Statement) {
            _ = statement;
            self.statements.push(line.get());
        }

        fn on_jump(&mut self, from: LineNumber, to: LineNumber) {
            self.jumps.push((from.get(), to.get()));
        }

        fn on_runtime_error(&mut self, error: &RunError) {
            self.errors.push(error.name().to_string());
        }
    }

    #[test]
    fn empty_program_halts_immediately() {
        let mut state = EvalState::new();
        run(&Program::new(), &mut state, &mut BufferedConsole::new()).unwrap();
        assert!(state.is_halted());
    }

    #[test]
    fn sequential_lines() {
        let program = program(&["10 LET X = 5", "20 PRINT X", "30 END", "40 PRINT 99"]);
        let mut state = EvalState::new();
        let mut console = BufferedConsole::new();

        run(&program, &mut state, &mut console).unwrap();

        assert_eq!(console.outputs(), &[5]);
        assert!(state.is_halted());
    }

    #[test]
    fn debugger_sees_statements_and_jumps() {
        let program = program(&[
            "10 LET X = 0",
            "20 LET X = X + 1",
            "30 IF X < 3 THEN 20",
            "40 PRINT X",
        ]);
        let mut recorder = Recorder::default();
        let mut console = BufferedConsole::new();

        run_with_debugger(&program, &mut EvalState::new(), &mut console, &mut recorder).unwrap();

        assert_eq!(console.outputs(), &[3]);
        assert_eq!(recorder.statements, vec![10, 20, 30, 20, 30, 20, 30, 40]);
        assert_eq!(recorder.jumps, vec![(30, 20), (30, 20)]);
        assert!(recorder.errors.is_empty());
    }

    #[test]
    fn goto_to_the_next_line_is_not_a_jump() {
        let program = program(&["10 GOTO 20", "20 PRINT 1"]);
        let mut recorder = Recorder::default();

        run_with_debugger(&program, &mut EvalState::new(), &mut BufferedConsole::new(), &mut recorder).unwrap();

        assert!(recorder.jumps.is_empty());
    }

    #[test]
    fn undefined_line_is_reported_at_the_jump() {
        let program = program(&["10 PRINT 1", "20 GOTO 99", "30 PRINT 2"]);
        let mut state = EvalState::new();
        let mut console = BufferedConsole::new();
        let mut recorder = Recorder::default();

        let error = run_with_debugger(&program, &mut state, &mut console, &mut recorder).unwrap_err();

        assert_eq!(error.line, Some(LineNumber::new(20)));
        assert!(matches!(error.kind, RunErrorKind::UndefinedLine { target } if target == LineNumber::new(99)));
        assert_eq!(console.outputs(), &[1]);
        assert!(state.is_halted());
        assert_eq!(recorder.errors, vec!["UndefinedLine"]);
    }

    #[test]
    fn error_keeps_earlier_bindings() {
        let program = program(&["10 LET X = 4", "20 LET Y = X / 0", "30 LET X = 8"]);
        let mut state = EvalState::new();

        let error = run(&program, &mut state, &mut BufferedConsole::new()).unwrap_err();

        assert_eq!(error.line, Some(LineNumber::new(20)));
        assert!(matches!(error.kind, RunErrorKind::Eval(EvalError::DivisionByZero)));
        assert_eq!(state.variables().get("X"), Some(4));
        assert_eq!(state.variables().get("Y"), None);
    }

    #[test]
    fn unparsed_line() {
        let mut program = program(&["10 PRINT 1"]);
        program.upsert_line(LineNumber::new(20), "20 PRINT 2");

        let error = run(&program, &mut EvalState::new(), &mut BufferedConsole::new()).unwrap_err();
        assert!(matches!(error.kind, RunErrorKind::UnparsedLine { line } if line == LineNumber::new(20)));
    }
}
