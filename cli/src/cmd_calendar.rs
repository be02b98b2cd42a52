// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::error::Error;
use std::fmt::Write;

use clap::{Arg, ArgMatches, Command, arg, value_parser};
use colored::{Color, Colorize};
use jiff::civil::Date;
use luach_core::{
    DayEvent, DayKind, EventMap, Luach, gregorian_month_name, short_label, translate_to_hebrew,
};
use luach_hebcal::GeonameId;

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::{OutputFormat, arg_city, arg_year, get_city, get_year, print_json};

const WEEKDAYS: [&str; 7] = ["א׳", "ב׳", "ג׳", "ד׳", "ה׳", "ו׳", "ש׳"];
const CELL_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy)]
pub struct CmdCalendar {
    pub year: Option<i16>,
    pub month: Option<i8>,
    pub city: Option<GeonameId>,
    pub verbose: bool,
    pub output_format: OutputFormat,
}

impl CmdCalendar {
    pub const NAME: &str = "calendar";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("cal")
            .about("Show a month with its Shabbatot and holidays")
            .arg(arg_year())
            .arg(Self::arg_month())
            .arg(arg_city())
            .arg(arg!(-v --verbose "Show event descriptions"))
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            year: get_year(matches),
            month: matches.get_one("month").copied(),
            city: get_city(matches),
            verbose: matches.get_flag("verbose"),
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, luach: &Luach) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing calendar...");
        let today = luach.today();
        let year = self.year.unwrap_or_else(|| today.year());
        let month = self.month.unwrap_or_else(|| today.month());
        let city = luach.resolve_city(self.city).await?;

        let events = luach.month_events(year, month, city).await?;
        match self.output_format {
            OutputFormat::Json => print_json(&events.values().collect::<Vec<_>>())?,
            OutputFormat::Table => {
                let title = gregorian_month_name(month).unwrap_or_default();
                println!("🗓️ {} · {title} {year} · {}", "לוח שנה עברי".bold(), city.name);
                println!();
                print!("{}", render_grid(year, month, &events, today)?);
                println!();

                if events.is_empty() {
                    println!("{}", "No Shabbatot or holidays".italic());
                    return Ok(());
                }

                let events: Vec<&DayEvent> = events.values().collect();
                let mut columns = vec![
                    EventColumn::Date,
                    EventColumn::HebrewDate,
                    EventColumn::Name,
                    EventColumn::CandleLighting,
                    EventColumn::Havdalah,
                ];
                if self.verbose {
                    columns.push(EventColumn::Description);
                }
                print!("{}", Table::new(&columns, &events));
            }
        }
        Ok(())
    }

    fn arg_month() -> Arg {
        arg!(-m --month <MONTH> "Month number, defaults to the current month")
            .value_parser(value_parser!(i8).range(1..=12))
    }
}

/// Month grid starting on Sunday. Shabbatot and holidays are colored, today
/// is underlined.
fn render_grid(
    year: i16,
    month: i8,
    events: &EventMap,
    today: Date,
) -> Result<String, Box<dyn Error>> {
    let first = Date::new(year, month, 1)?;
    let mut out = String::new();

    for weekday in WEEKDAYS {
        write!(out, "{weekday:>CELL_WIDTH$}")?;
    }
    out.push('\n');

    let offset = usize::try_from(first.weekday().to_sunday_zero_offset())?;
    out.push_str(&" ".repeat(offset * CELL_WIDTH));

    let mut column = offset;
    for day in 1..=first.days_in_month() {
        let date = Date::new(year, month, day)?;
        let cell = format!("{day:>CELL_WIDTH$}");
        let cell = match events.get(&date).map(|a| a.kind) {
            Some(DayKind::Shabbat) => cell.color(Color::Magenta),
            Some(DayKind::Holiday) => cell.color(Color::Yellow),
            None => cell.normal(),
        };
        let cell = if date == today { cell.underline().bold() } else { cell };
        write!(out, "{cell}")?;

        column += 1;
        if column == WEEKDAYS.len() {
            out.push('\n');
            column = 0;
        }
    }
    if column != 0 {
        out.push('\n');
    }
    Ok(out)
}

#[derive(Debug, Clone, Copy)]
enum EventColumn {
    Date,
    HebrewDate,
    Name,
    CandleLighting,
    Havdalah,
    Description,
}

impl TableColumn<&DayEvent> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Date => "Date",
            Self::HebrewDate => "Hebrew Date",
            Self::Name => "Name",
            Self::CandleLighting => "🕯️",
            Self::Havdalah => "⭐",
            Self::Description => "Description",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a &DayEvent) -> Cow<'a, str> {
        match self {
            Self::Date => data.date.to_string().into(),
            Self::HebrewDate => data.hebrew_date.as_deref().unwrap_or_default().into(),
            Self::Name => match &data.holiday_name {
                Some(holiday) if data.is_holiday_and_shabbat => {
                    format!("{} + {}", short_label(&data.name), short_label(holiday)).into()
                }
                _ => short_label(&data.name).into(),
            },
            Self::CandleLighting => data.candle_lighting.as_deref().unwrap_or_default().into(),
            Self::Havdalah => data.havdalah.as_deref().unwrap_or_default().into(),
            Self::Description => match data.is_holiday_and_shabbat {
                true => format!("{} (שבת וחג ביחד)", translate_to_hebrew(&data.description)).into(),
                false => translate_to_hebrew(&data.description).into(),
            },
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Date | Self::CandleLighting | Self::Havdalah => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, data: &&DayEvent) -> Option<Color> {
        match (self, data.kind) {
            (Self::Name, DayKind::Shabbat) => Some(Color::Magenta),
            (Self::Name, DayKind::Holiday) => Some(Color::Yellow),
            _ => None,
        }
    }
}
