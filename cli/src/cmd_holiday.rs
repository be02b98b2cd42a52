// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::error::Error;

use clap::{ArgMatches, Command};
use colored::{Color, Colorize};
use jiff::civil::Date;
use luach_core::{Holiday, Luach};
use luach_hebcal::GeonameId;

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::{OutputFormat, arg_city, arg_year, get_city, get_year, print_json};

#[derive(Debug, Clone, Copy)]
pub struct CmdHolidayList {
    pub year: Option<i16>,
    pub city: Option<GeonameId>,
    pub output_format: OutputFormat,
}

impl CmdHolidayList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List the holidays and new months of a year")
            .arg(arg_year())
            .arg(arg_city())
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            year: get_year(matches),
            city: get_city(matches),
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, luach: &Luach) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing holidays...");
        let today = luach.today();
        let year = self.year.unwrap_or_else(|| today.year());
        let city = match self.city {
            Some(id) => Some(luach.resolve_city(Some(id)).await?),
            None => None,
        };

        let holidays = luach.holidays(year, city).await?;
        match self.output_format {
            OutputFormat::Json => print_json(&holidays)?,
            OutputFormat::Table if holidays.is_empty() => {
                println!("{}", format!("No holidays in {year}").italic());
            }
            OutputFormat::Table => {
                let next = luach.next_holiday(&holidays).map(|a| a.holiday.date);
                let columns = [
                    HolidayColumn::Date,
                    HolidayColumn::HebrewDate,
                    HolidayColumn::Name { today, next },
                    HolidayColumn::EnglishName,
                ];
                print!("{}", Table::new(&columns, &holidays));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum HolidayColumn {
    Date,
    HebrewDate,
    Name { today: Date, next: Option<Date> },
    EnglishName,
}

impl TableColumn<Holiday> for HolidayColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Date => "Date",
            Self::HebrewDate => "Hebrew Date",
            Self::Name { .. } => "Name",
            Self::EnglishName => "English",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a Holiday) -> Cow<'a, str> {
        match self {
            Self::Date => data.date.to_string().into(),
            Self::HebrewDate => data.hebrew_date.as_str().into(),
            Self::Name { .. } => data.name.as_str().into(),
            Self::EnglishName => data.english_name.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Date => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, data: &Holiday) -> Option<Color> {
        match self {
            Self::Name { next, .. } if *next == Some(data.date) => Some(Color::Green),
            Self::Name { today, .. } if data.date < *today => Some(Color::BrightBlack),
            _ => None,
        }
    }
}
