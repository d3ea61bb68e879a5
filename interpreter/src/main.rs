// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod logger;

use std::{
    io::{BufRead, Write},
    path::PathBuf,
    process::exit,
};

use basic_interpreter::{report, run_file, Completion, ConfigRoot, ErrorPrinter, Outcome, Session, StdConsole};
use clap::Subcommand;
use log::LevelFilter;
use logger::Logger;

#[derive(clap::Parser, Debug)]
#[command(version, about = "A line-numbered BASIC interpreter", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log debug messages to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Print each executed line number to stderr.
    #[arg(long)]
    trace: bool,

    /// Configuration file, `basic.toml` in the current directory by default.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read lines and commands interactively.
    Repl,

    /// Load a program file and run it.
    Run {
        file: PathBuf,
    },
}

fn main() {
    let args = Args::parse_args();

    let config = match ConfigRoot::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            ErrorPrinter::new(format!("{error:#}")).print();
            exit(2);
        }
    };

    let level = if args.verbose || config.log.debug { LevelFilter::Debug } else { LevelFilter::Warn };
    Logger::initialize(level);

    let session = Session::new().with_trace(args.trace || config.run.trace);
    let mut console = StdConsole::stdio(config.input.prompt.clone());

    let result = match args.command.unwrap_or(Commands::Repl) {
        Commands::Repl => repl(session, &mut console),
        Commands::Run { file } => run_file(session, &file, &mut console),
    };

    match result {
        Ok(completion) => exit(completion.exit_code()),
        Err(error) => {
            ErrorPrinter::new(format!("{error:#}")).print();
            exit(1);
        }
    }
}

fn repl<R, W>(mut session: Session, console: &mut StdConsole<R, W>) -> anyhow::Result<Completion>
        where R: BufRead,
              W: Write {
    while let Some(line) = console.read_line()? {
        match session.process_line(&line, console) {
            Ok(Outcome::Done) => (),

            Ok(Outcome::Text(text)) => {
                if !text.is_empty() {
                    console.write_line(&text)?;
                }
            }

            Ok(Outcome::Quit) => {
                if console.confirm("Are you sure you want to quit the program? ")? {
                    break;
                }
            }

            Err(error) => report(&session, &line, &error),
        }
    }

    Ok(Completion::Finished)
}
