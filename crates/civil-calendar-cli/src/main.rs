mod cli;
mod commands;
mod config;
mod logging;
mod render;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::commands::Settings;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let config = config::load(cli.config.as_deref())?;
    let settings = Settings::resolve(config, cli.format);

    match cli.command {
        Command::Diff(args) => commands::diff(args, &settings),
        Command::Age(args) => commands::age_on(args, &settings),
        Command::Add(args) => commands::add(args, &settings),
        Command::Weekday(args) => commands::weekday(args, &settings),
    }
}
