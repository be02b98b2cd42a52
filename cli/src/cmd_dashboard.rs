// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use luach_core::{City, Luach, NextHoliday, ShabbatSummary};
use luach_hebcal::FetchError;

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdDashboard;

impl CmdDashboard {
    pub const NAME: &str = "dashboard";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the dashboard, which includes this week's Shabbat and the next holiday")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    /// Show the dashboard. Each section fails on its own.
    pub async fn run(self, luach: &Luach) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating dashboard...");

        let city = luach.selected_city().await;
        let (shabbat, next) = tokio::join!(luach.shabbat(city), Self::next_holiday(luach, city));

        println!("🕯️ {} · {}", "שבת".bold(), city.name);
        match shabbat {
            Ok(summary) => print_shabbat(&summary),
            Err(e) => println!("{} {}", "Error:".red(), e),
        }
        println!();

        println!("⭐ {}", "החג הבא".bold());
        match next {
            Ok(Some(next)) => print_next_holiday(&next),
            Ok(None) => println!("{}", "No upcoming holidays".italic()),
            Err(e) => println!("{} {}", "Error:".red(), e),
        }
        Ok(())
    }

    /// The next holiday, looking into the following year near its end.
    async fn next_holiday(luach: &Luach, city: &City) -> Result<Option<NextHoliday>, FetchError> {
        let year = luach.today().year();
        let holidays = luach.holidays(year, Some(city)).await?;
        if let Some(next) = luach.next_holiday(&holidays) {
            return Ok(Some(next));
        }

        let Some(next_year) = year.checked_add(1) else {
            return Ok(None);
        };
        let holidays = luach.holidays(next_year, Some(city)).await?;
        Ok(luach.next_holiday(&holidays))
    }
}

fn print_shabbat(summary: &ShabbatSummary) {
    println!(" {} {}", "►".green(), summary.parasha.italic());
    println!("   הדלקת נרות {}  ·  הבדלה {}", summary.candle_lighting, summary.havdalah);
    println!("   {}  ·  {}", summary.date, summary.hebrew_date);
}

fn print_next_holiday(next: &NextHoliday) {
    let when = match next.days_until {
        1 => "מחר".to_string(),
        n => format!("בעוד {n} ימים"),
    };
    println!(" {} {} ({})", "►".green(), next.holiday.name.italic(), when);
    println!("   {}  ·  {}", next.holiday.gregorian_date, next.holiday.hebrew_date);
}
