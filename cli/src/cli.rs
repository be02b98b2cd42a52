// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use luach_core::{APP_NAME, Luach};
use tracing_subscriber::EnvFilter;

use crate::cmd_about::CmdAbout;
use crate::cmd_calendar::CmdCalendar;
use crate::cmd_city::{CmdCityList, CmdCitySet, CmdCityShow};
use crate::cmd_dashboard::CmdDashboard;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_holiday::CmdHolidayList;
use crate::cmd_shabbat::CmdShabbat;
use crate::cmd_translate::CmdTranslate;
use crate::config::parse_config;

/// Run the Luach command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Hebrew calendar, Shabbat times and holidays in your terminal.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to dashboard
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/luach/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/luach/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdDashboard::command())
            .subcommand(CmdShabbat::command())
            .subcommand(CmdCalendar::command())
            .subcommand(
                Command::new("holiday")
                    .alias("h")
                    .about("Browse the holidays of a year")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdHolidayList::command()),
            )
            .subcommand(
                Command::new("city")
                    .about("List and select cities")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdCityList::command())
                    .subcommand(CmdCitySet::command())
                    .subcommand(CmdCityShow::command()),
            )
            .subcommand(CmdTranslate::command())
            .subcommand(CmdAbout::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdDashboard::NAME, matches)) => Dashboard(CmdDashboard::from(matches)),
            Some((CmdShabbat::NAME, matches)) => Shabbat(CmdShabbat::from(matches)),
            Some((CmdCalendar::NAME, matches)) => Calendar(CmdCalendar::from(matches)),
            Some(("holiday", matches)) => match matches.subcommand() {
                Some((CmdHolidayList::NAME, matches)) => {
                    HolidayList(CmdHolidayList::from(matches))
                }
                _ => unreachable!(),
            },
            Some(("city", matches)) => match matches.subcommand() {
                Some((CmdCityList::NAME, matches)) => CityList(CmdCityList::from(matches)),
                Some((CmdCitySet::NAME, matches)) => CitySet(CmdCitySet::from(matches)),
                Some((CmdCityShow::NAME, matches)) => CityShow(CmdCityShow::from(matches)),
                _ => unreachable!(),
            },
            Some((CmdTranslate::NAME, matches)) => Translate(CmdTranslate::from(matches)),
            Some((CmdAbout::NAME, matches)) => About(CmdAbout::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Dashboard(CmdDashboard),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show today's overview
    Dashboard(CmdDashboard),

    /// Show this week's Shabbat times
    Shabbat(CmdShabbat),

    /// Show a month of the calendar
    Calendar(CmdCalendar),

    /// List holidays
    HolidayList(CmdHolidayList),

    /// List or search cities
    CityList(CmdCityList),

    /// Select a city
    CitySet(CmdCitySet),

    /// Show the selected city
    CityShow(CmdCityShow),

    /// Translate text
    Translate(CmdTranslate),

    /// Show information about the application
    About(CmdAbout),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Dashboard(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            Shabbat(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            Calendar(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            HolidayList(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            CityList(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            CitySet(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            CityShow(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            Translate(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            About(a) => a.run(),
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Luach) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let (core_config, hebcal_config) = parse_config(config).await?;
        let luach = Luach::new(core_config, hebcal_config).await?;

        f(&luach).await
    }
}

#[cfg(test)]
mod tests {
    use luach_hebcal::GeonameId;

    use super::*;
    use crate::{cmd_generate_completion::Shell, util::OutputFormat};

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(vec!["test", "-c", "/tmp/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(matches!(cli.command, Commands::Dashboard(_)));
    }

    #[test]
    fn test_parse_default_dashboard() {
        let cli = Cli::try_parse_from(vec!["test"]).unwrap();
        assert!(matches!(cli.command, Commands::Dashboard(_)));
    }

    #[test]
    fn test_parse_dashboard() {
        let cli = Cli::try_parse_from(vec!["test", "dashboard"]).unwrap();
        assert!(matches!(cli.command, Commands::Dashboard(_)));
    }

    #[test]
    fn test_parse_shabbat() {
        let args = vec!["test", "shabbat", "--city", "281184", "--output-format", "json"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Shabbat(cmd) => {
                assert_eq!(cmd.city, Some(GeonameId::new(281_184)));
                assert_eq!(cmd.output_format, OutputFormat::Json);
            }
            _ => panic!("Expected Shabbat command"),
        }
    }

    #[test]
    fn test_parse_calendar() {
        let cli = Cli::try_parse_from(vec!["test", "cal", "-y", "2024", "-m", "2"]).unwrap();
        match cli.command {
            Commands::Calendar(cmd) => {
                assert_eq!(cmd.year, Some(2024));
                assert_eq!(cmd.month, Some(2));
                assert!(!cmd.verbose);
            }
            _ => panic!("Expected Calendar command"),
        }
    }

    #[test]
    fn test_parse_calendar_rejects_month_out_of_range() {
        assert!(Cli::try_parse_from(vec!["test", "calendar", "-m", "13"]).is_err());
    }

    #[test]
    fn test_parse_holiday_list() {
        let cli = Cli::try_parse_from(vec!["test", "holiday", "ls", "-y", "2025"]).unwrap();
        match cli.command {
            Commands::HolidayList(cmd) => assert_eq!(cmd.year, Some(2025)),
            _ => panic!("Expected HolidayList command"),
        }
    }

    #[test]
    fn test_parse_holiday_requires_subcommand() {
        assert!(Cli::try_parse_from(vec!["test", "holiday"]).is_err());
    }

    #[test]
    fn test_parse_city_list() {
        let cli = Cli::try_parse_from(vec!["test", "city", "list", "haifa"]).unwrap();
        assert!(matches!(cli.command, Commands::CityList(_)));
    }

    #[test]
    fn test_parse_city_set() {
        let cli = Cli::try_parse_from(vec!["test", "city", "set", "294801"]).unwrap();
        match cli.command {
            Commands::CitySet(cmd) => assert_eq!(cmd.id, GeonameId::new(294_801)),
            _ => panic!("Expected CitySet command"),
        }
    }

    #[test]
    fn test_parse_city_show() {
        let cli = Cli::try_parse_from(vec!["test", "city", "show"]).unwrap();
        assert!(matches!(cli.command, Commands::CityShow(_)));
    }

    #[test]
    fn test_parse_translate() {
        let cli = Cli::try_parse_from(vec!["test", "tr", "Pesach", "Purim"]).unwrap();
        match cli.command {
            Commands::Translate(cmd) => {
                assert_eq!(cmd.texts, vec!["Pesach".to_string(), "Purim".to_string()]);
                assert!(!cmd.interactive);
            }
            _ => panic!("Expected Translate command"),
        }
    }

    #[test]
    fn test_parse_about() {
        let cli = Cli::try_parse_from(vec!["test", "about"]).unwrap();
        assert!(matches!(cli.command, Commands::About(_)));
    }

    #[test]
    fn test_parse_generate_completions() {
        let args = vec!["test", "generate-completion", "zsh"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::GenerateCompletion(cmd) => {
                assert_eq!(cmd.shell, Shell::Zsh);
            }
            _ => panic!("Expected GenerateCompletion command"),
        }
    }
}
