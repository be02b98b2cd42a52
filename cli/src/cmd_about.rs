// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, crate_version};
use colored::Colorize;
use luach_core::{APP_NAME, CITIES};

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdAbout;

impl CmdAbout {
    pub const NAME: &str = "about";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Show what luach is and where its data comes from")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing about...");
        println!("{} {}", APP_NAME.bold(), crate_version!());
        println!("Shabbat times, holidays and a Hebrew calendar in your terminal.");
        println!();
        println!(" {} Calendar and zmanim by Hebcal (https://www.hebcal.com)", "►".green());
        println!(" {} Translations by MyMemory (https://mymemory.translated.net)", "►".green());
        println!(" {} {} cities across Israel", "►".green(), CITIES.len());
        Ok(())
    }
}
