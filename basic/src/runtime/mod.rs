// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod console;
mod debugger;
mod error;
mod evaluate;
mod execute;
mod run;
mod state;

pub use self::{
    console::{
        BufferedConsole,
        Console,
    },
    debugger::Debugger,
    error::{
        EvalError,
        RunError,
        RunErrorKind,
    },
    run::{
        run,
        run_with_debugger,
    },
    state::{
        Bindings,
        CurrentLine,
        EvalState,
        Variables,
    },
};
