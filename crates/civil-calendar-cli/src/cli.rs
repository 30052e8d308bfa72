use std::path::PathBuf;

use civil_calendar::{CivilDate, DateOffset};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

/// Civil date calculator: differences, ages, offsets, and weekdays.
#[derive(Parser)]
#[command(
    name = "datecalc",
    version,
    about = "Calendar-correct date differences, ages, and offsets"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format (overrides the config file).
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML config file [default: datecalc.toml if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Years, months, and days between two dates, plus totals.
    Diff(DiffArgs),
    /// Age on a date, with the next birthday.
    Age(AgeArgs),
    /// Add (or subtract) years, months, weeks, and days to a date.
    Add(AddArgs),
    /// The day of the week a date falls on.
    Weekday(WeekdayArgs),
}

#[derive(clap::Args)]
pub struct DiffArgs {
    /// Start date (YYYY-MM-DD).
    pub from: CivilDate,

    /// End date (YYYY-MM-DD).
    pub to: CivilDate,

    /// Fail if FROM is after TO instead of swapping them.
    #[arg(long)]
    pub strict: bool,
}

#[derive(clap::Args)]
pub struct AgeArgs {
    /// Birth date (YYYY-MM-DD).
    pub birth_date: CivilDate,

    /// Date to measure the age on [default: today].
    #[arg(long)]
    pub on: Option<CivilDate>,
}

#[derive(clap::Args)]
pub struct AddArgs {
    /// Base date (YYYY-MM-DD).
    pub date: CivilDate,

    #[arg(long, allow_negative_numbers = true, default_value_t = 0)]
    pub years: i64,

    #[arg(long, allow_negative_numbers = true, default_value_t = 0)]
    pub months: i64,

    #[arg(long, allow_negative_numbers = true, default_value_t = 0)]
    pub weeks: i64,

    #[arg(long, allow_negative_numbers = true, default_value_t = 0)]
    pub days: i64,

    /// Offset expression such as +1y2m or -3w, added to the unit flags.
    #[arg(long, allow_hyphen_values = true)]
    pub offset: Option<DateOffset>,

    /// Subtract the offset instead of adding it.
    #[arg(long)]
    pub subtract: bool,
}

#[derive(clap::Args)]
pub struct WeekdayArgs {
    /// Date (YYYY-MM-DD).
    pub date: CivilDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
