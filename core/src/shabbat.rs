// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use luach_hebcal::{CalendarItem, CalendarResponse, Category, FetchError, ShabbatQuery};

use crate::hebrew_date::{UNAVAILABLE, format_gregorian_date, format_hebrew_date};
use crate::source::CalendarSource;

/// The coming Shabbat at a glance. Missing values read [`UNAVAILABLE`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShabbatSummary {
    /// This week's parasha.
    pub parasha: String,
    /// Candle-lighting time, `HH:MM`.
    pub candle_lighting: String,
    /// Havdalah time, `HH:MM`.
    pub havdalah: String,
    /// Day of candle lighting, Hebrew long form.
    pub date: String,
    /// Hebrew date of candle lighting.
    pub hebrew_date: String,
    /// Location the times were computed for.
    pub location: String,
}

impl ShabbatSummary {
    /// Picks the first candle-lighting, havdalah and parasha entries.
    pub fn from_response(resp: &CalendarResponse) -> Self {
        let find = |category: Category| resp.items.iter().find(|a| a.category == category);
        let candles = find(Category::Candles);
        let havdalah = find(Category::Havdalah);
        let parasha = find(Category::Parashat);

        let time = |item: Option<&CalendarItem>| {
            item.and_then(CalendarItem::time_of_day)
                .unwrap_or(UNAVAILABLE)
                .to_string()
        };

        Self {
            parasha: parasha
                .map_or(UNAVAILABLE, CalendarItem::display_name)
                .to_string(),
            candle_lighting: time(candles),
            havdalah: time(havdalah),
            date: candles
                .and_then(CalendarItem::day)
                .map_or_else(|| UNAVAILABLE.to_string(), format_gregorian_date),
            hebrew_date: format_hebrew_date(candles.and_then(|a| a.hdate.as_deref())),
            location: resp
                .location
                .as_ref()
                .and_then(|a| a.title.clone())
                .unwrap_or_else(|| UNAVAILABLE.to_string()),
        }
    }
}

/// Fetches this week's Shabbat times.
///
/// # Errors
///
/// Returns the fetch error if the feed cannot be read.
#[tracing::instrument(skip(source))]
pub async fn fetch_shabbat(
    source: &dyn CalendarSource,
    query: &ShabbatQuery,
) -> Result<ShabbatSummary, FetchError> {
    let resp = source.shabbat(query).await?;
    Ok(ShabbatSummary::from_response(&resp))
}
