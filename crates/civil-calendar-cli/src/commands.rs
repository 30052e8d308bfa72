use anyhow::{Context, Result};
use civil_calendar::{add_offset, age, difference, difference_unordered, CivilDate, DateOffset};
use tracing::{debug, info};

use crate::cli::{AddArgs, AgeArgs, DiffArgs, OutputFormat, WeekdayArgs};
use crate::config::DatecalcConfig;
use crate::render::Renderer;

/// Config values after CLI flags are applied.
#[derive(Debug, Clone)]
pub struct Settings {
    pub renderer: Renderer,
    pub strict_order: bool,
}

impl Settings {
    pub fn resolve(config: DatecalcConfig, format: Option<OutputFormat>) -> Self {
        Self {
            renderer: Renderer {
                format: format.unwrap_or(config.format),
                thousands_separator: config.thousands_separator,
            },
            strict_order: config.strict_order,
        }
    }
}

pub fn diff(args: DiffArgs, settings: &Settings) -> Result<String> {
    let strict = args.strict || settings.strict_order;
    debug!(from = %args.from, to = %args.to, strict, "diff");

    let result = if strict {
        difference(args.from, args.to).context("dates are in the wrong order")?
    } else {
        difference_unordered(args.from, args.to)
    };
    let (from, to) = if args.from <= args.to {
        (args.from, args.to)
    } else {
        info!("FROM is after TO, measuring from {} to {}", args.to, args.from);
        (args.to, args.from)
    };
    settings.renderer.difference(from, to, &result)
}

pub fn age_on(args: AgeArgs, settings: &Settings) -> Result<String> {
    let on = args.on.unwrap_or_else(today);
    debug!(birth_date = %args.birth_date, %on, "age");

    let report = age(args.birth_date, on).context("birth date must not be after the target date")?;
    settings.renderer.age(&report)
}

pub fn add(args: AddArgs, settings: &Settings) -> Result<String> {
    let flags = DateOffset::new(args.years, args.months, args.weeks, args.days);
    let combined = match args.offset {
        Some(expr) => combine(flags, expr).context("offset is too large")?,
        None => flags,
    };
    let offset = if args.subtract {
        combined.negated()
    } else {
        combined
    };
    debug!(date = %args.date, %offset, "add");

    let result = add_offset(args.date, offset)
        .with_context(|| format!("cannot add {offset} to {}", args.date))?;
    settings.renderer.added(args.date, offset, result)
}

pub fn weekday(args: WeekdayArgs, settings: &Settings) -> Result<String> {
    settings.renderer.weekday(args.date)
}

/// Sum two offsets field by field.
fn combine(a: DateOffset, b: DateOffset) -> Option<DateOffset> {
    Some(DateOffset::new(
        a.years.checked_add(b.years)?,
        a.months.checked_add(b.months)?,
        a.weeks.checked_add(b.weeks)?,
        a.days.checked_add(b.days)?,
    ))
}

/// Today's date on the local clock. Only the CLI reads the clock; the
/// engine always takes dates as inputs.
fn today() -> CivilDate {
    CivilDate::from(chrono::Local::now().date_naive())
}
