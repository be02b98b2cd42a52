// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::{Color, Colorize};
use luach_core::{City, Luach, search_cities};
use luach_hebcal::GeonameId;

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::{OutputFormat, print_json};

#[derive(Debug, Clone)]
pub struct CmdCityList {
    pub query: Option<String>,
    pub output_format: OutputFormat,
}

impl CmdCityList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List supported cities, optionally filtered by name")
            .arg(arg!([QUERY] "Part of the Hebrew or English city name"))
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            query: matches.get_one("QUERY").cloned(),
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, luach: &Luach) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing cities...");
        let cities = search_cities(self.query.as_deref().unwrap_or_default());
        match self.output_format {
            OutputFormat::Json => print_json(&cities)?,
            OutputFormat::Table if cities.is_empty() => {
                println!("{}", "No matching cities".italic());
            }
            OutputFormat::Table => {
                let selected = luach.selected_city().await.id;
                let columns = [
                    CityColumn::Selected(selected),
                    CityColumn::Id,
                    CityColumn::Name(selected),
                    CityColumn::English,
                    CityColumn::Region,
                    CityColumn::CandleMinutes,
                ];
                print!("{}", Table::new(&columns, &cities));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdCitySet {
    pub id: GeonameId,
}

impl CmdCitySet {
    pub const NAME: &str = "set";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Select the city used by default")
            .arg(arg!(<ID> "GeoNames id of the city").value_parser(value_parser!(u32)))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<u32>("ID") {
            Some(id) => Self {
                id: GeonameId::new(*id),
            },
            None => unreachable!(),
        }
    }

    pub async fn run(self, luach: &Luach) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "selecting city...");
        let city = luach.select_city(self.id).await?;
        println!("{} {} ({})", "Selected".green(), city.name, city.english);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdCityShow {
    pub output_format: OutputFormat,
}

impl CmdCityShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the selected city")
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, luach: &Luach) -> Result<(), Box<dyn Error>> {
        let city = luach.selected_city().await;
        match self.output_format {
            OutputFormat::Json => print_json(city)?,
            OutputFormat::Table => {
                println!("{} · {} · {}", city.name.bold(), city.english, city.region);
                println!(
                    "GeoNames {}, candle lighting {} minutes before sunset",
                    city.id, city.candle_minutes
                );
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum CityColumn {
    Selected(GeonameId),
    Id,
    Name(GeonameId),
    English,
    Region,
    CandleMinutes,
}

impl TableColumn<&City> for CityColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Selected(_) => "",
            Self::Id => "ID",
            Self::Name(_) => "Name",
            Self::English => "English",
            Self::Region => "Region",
            Self::CandleMinutes => "Candles",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a &City) -> Cow<'a, str> {
        match self {
            Self::Selected(id) if *id == data.id => "*".into(),
            Self::Selected(_) => "".into(),
            Self::Id => data.id.to_string().into(),
            Self::Name(_) => data.name.into(),
            Self::English => data.english.into(),
            Self::Region => data.region.into(),
            Self::CandleMinutes => data.candle_minutes.to_string().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Id | Self::CandleMinutes => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, data: &&City) -> Option<Color> {
        match self {
            Self::Selected(id) | Self::Name(id) if *id == data.id => Some(Color::Green),
            _ => None,
        }
    }
}
