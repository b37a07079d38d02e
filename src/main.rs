#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! superpowers: text, code, data and ASCII-art utilities on the command line.

mod cli;
mod commands;
mod powers;
mod types;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use cli::args::usage_exit_code;
use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = usage_exit_code(err.kind(), std::env::args_os().len());
            if code == 0 && err.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand {
                let _ = Cli::command().print_help();
            } else {
                let _ = err.print();
            }
            std::process::exit(code);
        }
    };

    let ctx = OutputCtx::new(cli.output, cli.json, cli.no_header, cli.debug);

    match commands::dispatch(&cli.command, &ctx) {
        Ok(()) => {}
        Err(err) => {
            let error_output = ErrorOutput::from_power_error(&err);
            write_error(&error_output, cli.output, cli.json);
            std::process::exit(err.exit_code());
        }
    }
}
