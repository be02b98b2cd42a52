// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use jiff::civil::Date;

/// `GeoNames` identifier of a city, used by Hebcal to compute sunset times.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct GeonameId(u32);

impl GeonameId {
    /// Creates a new identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for GeonameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for GeonameId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Category of a calendar feed entry.
///
/// Unknown wire values are kept verbatim in [`Category::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    /// Candle-lighting time.
    Candles,
    /// End of Shabbat or holiday.
    Havdalah,
    /// Weekly Torah portion, one per Shabbat.
    Parashat,
    /// Holidays, fasts and special days.
    Holiday,
    /// New month.
    #[strum(serialize = "roshchodesh")]
    RoshChodesh,
    /// Anything else the feed returns (omer, mevarchim, zmanim, ...).
    #[strum(default)]
    Other(String),
}

impl Category {
    /// Returns the wire name of the category.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Candles => "candles",
            Self::Havdalah => "havdalah",
            Self::Parashat => "parashat",
            Self::Holiday => "holiday",
            Self::RoshChodesh => "roshchodesh",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        match raw.parse() {
            Ok(category) => category,
            Err(_) => Self::Other(raw),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl serde::Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Category {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

/// One entry of a Hebcal response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CalendarItem {
    /// `YYYY-MM-DD`, or an RFC 3339 date-time for timed entries.
    pub date: String,
    /// Entry category.
    pub category: Category,
    /// Title, localized according to the `lg` parameter.
    pub title: String,
    /// Hebrew title.
    #[serde(default)]
    pub hebrew: Option<String>,
    /// Hebrew date, such as `25 Kislev 5785`.
    #[serde(default)]
    pub hdate: Option<String>,
    /// Short explanation of the entry.
    #[serde(default)]
    pub memo: Option<String>,
    /// Link to the entry on hebcal.com.
    #[serde(default)]
    pub link: Option<String>,
}

impl CalendarItem {
    /// The civil date the entry falls on, ignoring any time part.
    #[must_use]
    pub fn day(&self) -> Option<Date> {
        self.date.get(..10)?.parse().ok()
    }

    /// `HH:MM` of a timed entry.
    #[must_use]
    pub fn time_of_day(&self) -> Option<&str> {
        let (_, time) = self.date.split_once('T')?;
        time.get(..5)
    }

    /// Hebrew title if present, the plain title otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.hebrew.as_deref().unwrap_or(&self.title)
    }
}

/// Location echoed back by Hebcal.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Location {
    /// Human readable location name.
    #[serde(default)]
    pub title: Option<String>,
}

/// Body of the `/hebcal` and `/shabbat` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CalendarResponse {
    /// Feed entries.
    #[serde(default)]
    pub items: Vec<CalendarItem>,
    /// Location the times were computed for.
    #[serde(default)]
    pub location: Option<Location>,
}
