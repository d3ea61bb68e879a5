// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod ast;
mod lexer;
mod line_number;
mod parser;
mod program;
mod runtime;
mod util;

pub use self::{
    ast::{
        AssignStatement,
        BiExpression,
        BiOperator,
        Comparison,
        Expression,
        IfStatement,
        Statement,
    },
    lexer::{
        Keyword,
        Lexer,
        LexerError,
        LexerErrorKind,
        Punctuator,
        Token,
        TokenKind,
    },
    line_number::LineNumber,
    parser::{
        parse_expression,
        parse_statement,
        ParseError,
        ParseResult,
        Parser,
    },
    program::{
        Program,
        ProgramError,
        ProgramLine,
    },
    runtime::{
        run,
        run_with_debugger,
        Bindings,
        BufferedConsole,
        Console,
        CurrentLine,
        Debugger,
        EvalError,
        EvalState,
        RunError,
        RunErrorKind,
        Variables,
    },
    util::{
        DocumentationProvider,
        SourceRange,
    },
};
