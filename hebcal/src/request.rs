// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Query builders for the Hebcal endpoints.

use jiff::civil::Date;

use crate::error::FetchError;
use crate::types::GeonameId;

type Params = Vec<(&'static str, String)>;

fn on(key: &'static str) -> (&'static str, String) {
    (key, "on".to_string())
}

/// Query for the `/hebcal` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarQuery {
    params: Params,
}

impl CalendarQuery {
    /// Every entry of one Gregorian month, with candle-lighting times for the city.
    ///
    /// # Errors
    ///
    /// Returns an error if `year`/`month` do not name a valid month.
    pub fn month(year: i16, month: i8, geonameid: GeonameId) -> Result<Self, FetchError> {
        let start = Date::new(year, month, 1)?;
        let end = start.last_of_month();
        let params = vec![
            ("v", "1".to_string()),
            ("cfg", "json".to_string()),
            on("maj"),
            on("min"),
            on("mod"),
            on("nx"),
            ("year", year.to_string()),
            ("month", "x".to_string()),
            on("ss"),
            on("mf"),
            on("c"),
            ("geo", "geoname".to_string()),
            ("geonameid", geonameid.to_string()),
            on("M"),
            on("s"),
            ("start", start.to_string()),
            ("end", end.to_string()),
            ("lg", "he".to_string()),
        ];
        Ok(Self { params })
    }

    /// Holidays of a whole Gregorian year. Candle-lighting times are included
    /// only when a city is given.
    #[must_use]
    pub fn year(year: i16, geonameid: Option<GeonameId>) -> Self {
        let mut params = vec![
            ("v", "1".to_string()),
            ("cfg", "json".to_string()),
            ("year", year.to_string()),
            ("month", "x".to_string()),
            on("maj"),
            on("min"),
            on("mod"),
            on("nx"),
            on("ss"),
            on("M"),
            ("lg", "he".to_string()),
        ];
        if let Some(id) = geonameid {
            params.push(on("c"));
            params.push(("geo", "geoname".to_string()));
            params.push(("geonameid", id.to_string()));
        }
        Self { params }
    }

    /// Query string pairs.
    #[must_use]
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }
}

/// Query for the `/shabbat` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShabbatQuery {
    /// City to compute the times for.
    pub geonameid: GeonameId,
    /// Minutes before sunset for candle lighting.
    pub candle_lighting_minutes: u16,
    /// Minutes after sunset for havdalah.
    pub havdalah_minutes: u16,
}

impl ShabbatQuery {
    /// Query with the customary 18/50 minute offsets.
    #[must_use]
    pub const fn new(geonameid: GeonameId) -> Self {
        Self {
            geonameid,
            candle_lighting_minutes: 18,
            havdalah_minutes: 50,
        }
    }

    /// Query string pairs.
    #[must_use]
    pub fn params(&self) -> Params {
        vec![
            ("cfg", "json".to_string()),
            ("geonameid", self.geonameid.to_string()),
            on("M"),
            ("b", self.candle_lighting_minutes.to_string()),
            ("m", self.havdalah_minutes.to_string()),
            ("lg", "he".to_string()),
        ]
    }
}
