// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, arg, value_parser};
use luach_hebcal::GeonameId;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

pub fn arg_year() -> Arg {
    arg!(-y --year <YEAR> "Gregorian year, defaults to the current year")
        .value_parser(value_parser!(i16).range(1..=9999))
}

pub fn get_year(matches: &ArgMatches) -> Option<i16> {
    matches.get_one("year").copied()
}

pub fn arg_city() -> Arg {
    arg!(--city <ID> "GeoNames id of the city, defaults to the selected city")
        .value_parser(value_parser!(u32))
}

pub fn get_city(matches: &ArgMatches) -> Option<GeonameId> {
    matches.get_one::<u32>("city").copied().map(GeonameId::new)
}

pub fn print_json(value: &impl serde::Serialize) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
