// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::error::Error;

use clap::{ArgMatches, Command};
use luach_core::{Luach, ShabbatSummary};
use luach_hebcal::GeonameId;

use crate::table::{Table, TableColumn};
use crate::util::{OutputFormat, arg_city, get_city, print_json};

#[derive(Debug, Clone, Copy)]
pub struct CmdShabbat {
    pub city: Option<GeonameId>,
    pub output_format: OutputFormat,
}

impl CmdShabbat {
    pub const NAME: &str = "shabbat";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show this week's candle-lighting and havdalah times")
            .arg(arg_city())
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            city: get_city(matches),
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, luach: &Luach) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "fetching shabbat times...");
        let city = luach.resolve_city(self.city).await?;
        let summary = luach.shabbat(city).await?;

        match self.output_format {
            OutputFormat::Json => print_json(&summary)?,
            OutputFormat::Table => {
                let rows = ShabbatRow::rows(&summary);
                let columns = [ShabbatColumn::Label, ShabbatColumn::Value];
                print!("{}", Table::new(&columns, &rows).without_header());
            }
        }
        Ok(())
    }
}

struct ShabbatRow<'a> {
    label: &'static str,
    value: &'a str,
}

impl<'a> ShabbatRow<'a> {
    fn rows(summary: &'a ShabbatSummary) -> Vec<Self> {
        [
            ("פרשה", &summary.parasha),
            ("הדלקת נרות", &summary.candle_lighting),
            ("הבדלה", &summary.havdalah),
            ("תאריך", &summary.date),
            ("תאריך עברי", &summary.hebrew_date),
            ("מיקום", &summary.location),
        ]
        .into_iter()
        .map(|(label, value)| Self { label, value })
        .collect()
    }
}

#[derive(Debug, Clone, Copy)]
enum ShabbatColumn {
    Label,
    Value,
}

impl<'r> TableColumn<ShabbatRow<'r>> for ShabbatColumn {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn format<'a>(&self, data: &'a ShabbatRow<'r>) -> Cow<'a, str> {
        match self {
            Self::Label => data.label.into(),
            Self::Value => data.value.into(),
        }
    }
}
