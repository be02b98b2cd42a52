// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of Luach, a Hebrew calendar for the terminal.

mod cli;
mod cmd_about;
mod cmd_calendar;
mod cmd_city;
mod cmd_dashboard;
mod cmd_generate_completion;
mod cmd_holiday;
mod cmd_shabbat;
mod cmd_translate;
mod config;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
