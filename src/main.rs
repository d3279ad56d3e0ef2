mod cli;
mod commands;
mod error;
mod filetime;
mod logging;
mod models;
mod output;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match commands::convert::run(&cli, std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
