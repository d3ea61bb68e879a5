// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod command;
mod config;
mod console;
mod error;
mod runner;
mod session;

pub use self::{
    command::Command,
    config::{
        ConfigRoot,
        ConfigSectionInput,
        ConfigSectionLog,
        ConfigSectionRun,
        DEFAULT_CONFIG_FILE,
    },
    console::StdConsole,
    error::{
        ErrorPrinter,
        SessionError,
    },
    runner::{
        report,
        run_file,
        run_source,
        Completion,
    },
    session::{
        Outcome,
        Session,
    },
};
