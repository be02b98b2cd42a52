// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;
use luach_hebcal::{CalendarItem, CalendarQuery, Category, FetchError, GeonameId};

use crate::hebrew_date::{format_gregorian_date, format_hebrew_date};
use crate::source::CalendarSource;

/// A holiday or new month.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    /// Hebrew name.
    pub name: String,
    /// Title as sent by the feed.
    pub english_name: String,
    /// Localized Hebrew date.
    pub hebrew_date: String,
    /// Gregorian date in Hebrew long form.
    pub gregorian_date: String,
    /// Gregorian date.
    pub date: Date,
    /// Feed category.
    pub category: Category,
    /// Link to hebcal.com.
    pub link: Option<String>,
    /// Short explanation.
    pub memo: Option<String>,
}

impl Holiday {
    fn from_item(item: &CalendarItem, date: Date) -> Self {
        Self {
            name: item.display_name().to_string(),
            english_name: item.title.clone(),
            hebrew_date: format_hebrew_date(item.hdate.as_deref()),
            gregorian_date: format_gregorian_date(date),
            date,
            category: item.category.clone(),
            link: item.link.clone(),
            memo: item.memo.clone(),
        }
    }
}

/// The first holiday after today.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextHoliday {
    /// The holiday.
    #[serde(flatten)]
    pub holiday: Holiday,
    /// Whole days from today.
    pub days_until: i32,
}

/// Keeps holidays and new months, sorted by date.
pub fn holidays(items: &[CalendarItem]) -> Vec<Holiday> {
    let mut holidays: Vec<Holiday> = items
        .iter()
        .filter(|a| matches!(a.category, Category::Holiday | Category::RoshChodesh))
        .filter_map(|a| a.day().map(|date| Holiday::from_item(a, date)))
        .collect();
    holidays.sort_by_key(|a| a.date);
    holidays
}

/// Finds the first holiday strictly after `today`.
pub fn next_holiday(holidays: &[Holiday], today: Date) -> Option<NextHoliday> {
    let holiday = holidays.iter().find(|a| a.date > today)?;
    let days_until = today.until(holiday.date).ok()?.get_days();
    Some(NextHoliday {
        holiday: holiday.clone(),
        days_until,
    })
}

/// Fetches the holidays of a Gregorian year.
///
/// # Errors
///
/// Returns the fetch error if the feed cannot be read.
#[tracing::instrument(skip(source))]
pub async fn fetch_holidays(
    source: &dyn CalendarSource,
    year: i16,
    geonameid: Option<GeonameId>,
) -> Result<Vec<Holiday>, FetchError> {
    let resp = source.calendar(&CalendarQuery::year(year, geonameid)).await?;
    Ok(holidays(&resp.items))
}
