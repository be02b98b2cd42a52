// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use luach_hebcal::GeonameId;

use crate::city;

/// The name of the Luach application.
pub const APP_NAME: &str = "luach";

/// Configuration for the Luach application.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// City used when no city has been selected yet.
    #[serde(default = "default_city")]
    pub default_city: GeonameId,

    /// Candle-lighting minutes before sunset, overriding the city's custom.
    #[serde(default)]
    pub candle_lighting_minutes: Option<u16>,

    /// Havdalah minutes after sunset.
    #[serde(default = "default_havdalah_minutes")]
    pub havdalah_minutes: u16,

    /// Directory for storing application state.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// Target language for translations.
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_city: default_city(),
            candle_lighting_minutes: None,
            havdalah_minutes: default_havdalah_minutes(),
            state_dir: None,
            language: default_language(),
        }
    }
}

impl Config {
    /// Validates the configuration and resolves the state directory.
    ///
    /// A relative `state_dir` may start with `~`, `$HOME` or `$XDG_STATE_HOME`
    /// (`%UserProfile%` and `%LOCALAPPDATA%` on Windows). Without one, the
    /// platform state directory joined with [`APP_NAME`] is used.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        if city::find(self.default_city).is_none() {
            return Err(format!("Unknown default city: {}", self.default_city).into());
        }

        if self.language.trim().is_empty() {
            self.language = default_language();
        }

        self.state_dir = match self.state_dir.take() {
            Some(dir) => Some(
                expand_path(&dir)
                    .map_err(|e| format!("Failed to expand state directory path: {e}"))?,
            ),
            None => match get_state_dir() {
                Ok(dir) => Some(dir.join(APP_NAME)),
                Err(e) => {
                    tracing::warn!(err = %e, "no state directory, city selection will not persist");
                    None
                }
            },
        };
        Ok(())
    }
}

fn default_city() -> GeonameId {
    city::DEFAULT_CITY
}

fn default_havdalah_minutes() -> u16 {
    50
}

fn default_language() -> String {
    "he".to_string()
}

type BaseDir = fn() -> Result<PathBuf, Box<dyn Error>>;

#[cfg(unix)]
const PATH_PREFIXES: &[(&str, BaseDir)] = &[
    ("~", get_home_dir),
    ("$HOME", get_home_dir),
    ("${HOME}", get_home_dir),
    ("$XDG_STATE_HOME", get_state_dir),
    ("${XDG_STATE_HOME}", get_state_dir),
];

#[cfg(windows)]
const PATH_PREFIXES: &[(&str, BaseDir)] = &[
    ("~", get_home_dir),
    ("%UserProfile%", get_home_dir),
    ("%LOCALAPPDATA%", get_state_dir),
];

/// Expands a leading home or state directory variable.
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let mut components = path.components();
    let Some(first) = components.next() else {
        return Ok(path.to_owned());
    };
    let first = first.as_os_str().to_str().ok_or("Invalid path")?;

    match PATH_PREFIXES.iter().find(|(prefix, _)| *prefix == first) {
        Some((_, base)) => Ok(base()?.join(components.as_path())),
        None => Ok(path.to_owned()),
    }
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

fn get_state_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_local_dir();
    state_dir.ok_or_else(|| "User-specific state directory not found".into())
}
