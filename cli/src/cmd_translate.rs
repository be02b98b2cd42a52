// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::error::Error;
use std::sync::Arc;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use luach_core::{DebouncedTranslation, Luach, TranslationState};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::table::{Table, TableColumn};
use crate::util::{OutputFormat, print_json};

#[derive(Debug, Clone)]
pub struct CmdTranslate {
    pub texts: Vec<String>,
    pub target: Option<String>,
    pub interactive: bool,
    pub output_format: OutputFormat,
}

impl CmdTranslate {
    pub const NAME: &str = "translate";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("tr")
            .about("Translate English text")
            .arg(
                arg!([TEXT] "Text to translate, one request per argument")
                    .num_args(1..)
                    .required_unless_present("interactive"),
            )
            .arg(arg!(-t --to <LANG> "Target language, defaults to the configured language"))
            .arg(
                arg!(-i --interactive "Translate lines from stdin as they settle")
                    .conflicts_with("TEXT"),
            )
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            texts: matches
                .get_many::<String>("TEXT")
                .map(|a| a.cloned().collect())
                .unwrap_or_default(),
            target: matches.get_one("to").cloned(),
            interactive: matches.get_flag("interactive"),
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, luach: &Luach) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "translating...");
        let target = self
            .target
            .clone()
            .unwrap_or_else(|| luach.config().language.clone());

        if self.interactive {
            return Self::interactive(luach, target).await;
        }

        match self.texts.as_slice() {
            [text] if self.output_format == OutputFormat::Table => {
                let translation = luach.translator().translate(text, &target).await;
                println!("{}", translation.text);
                if let Some(e) = translation.error {
                    println!("{} {}", "Warning:".yellow(), e);
                }
            }
            texts => {
                let translations = luach.translator().translate_batch(texts, &target).await;
                match self.output_format {
                    OutputFormat::Json => print_json(&translations)?,
                    OutputFormat::Table => {
                        let rows: Vec<(&String, &String)> = translations.iter().collect();
                        let columns = [PairColumn::Source, PairColumn::Translation];
                        print!("{}", Table::new(&columns, &rows));
                    }
                }
            }
        }
        Ok(())
    }

    async fn interactive(luach: &Luach, target: String) -> Result<(), Box<dyn Error>> {
        let mut debounced = DebouncedTranslation::new(Arc::clone(luach.translator()), target);
        let mut rx = debounced.subscribe();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            tokio::select! {
                line = lines.next_line() => match line? {
                    Some(line) => debounced.set_text(line),
                    None => break,
                },
                Ok(()) = rx.changed() => print_state(&rx.borrow_and_update()),
            }
        }

        debounced.finish().await;
        if rx.has_changed()? {
            print_state(&rx.borrow_and_update());
        }
        Ok(())
    }
}

fn print_state(state: &TranslationState) {
    if state.loading || state.translated.is_empty() {
        return;
    }

    println!("{}", state.translated);
    if let Some(e) = &state.error {
        println!("{} {}", "Warning:".yellow(), e);
    }
}

#[derive(Debug, Clone, Copy)]
enum PairColumn {
    Source,
    Translation,
}

impl TableColumn<(&String, &String)> for PairColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Source => "Text",
            Self::Translation => "Translation",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a (&String, &String)) -> Cow<'a, str> {
        match self {
            Self::Source => data.0.as_str().into(),
            Self::Translation => data.1.as_str().into(),
        }
    }
}
