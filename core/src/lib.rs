// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Hebrew calendar core: month reconciliation, Hebrew date formatting,
//! holidays, Shabbat times, translation and the selected city.

mod city;
mod config;
mod glossary;
mod hebrew_date;
mod holiday;
mod luach;
mod reconcile;
mod shabbat;
mod source;
mod translate;

pub use crate::city::{
    CITIES, City, CityStore, DEFAULT_CITY, default_city, find as find_city, search as search_cities,
};
pub use crate::config::{APP_NAME, Config};
pub use crate::glossary::{short_label, translate_to_hebrew};
pub use crate::hebrew_date::{
    UNAVAILABLE, format_gregorian_date, format_hebrew_date, gematria, gregorian_month_name,
};
pub use crate::holiday::{Holiday, NextHoliday, fetch_holidays, holidays, next_holiday};
pub use crate::luach::Luach;
pub use crate::reconcile::{DayEvent, DayKind, EventMap, fetch_month_events, localize, reconcile};
pub use crate::shabbat::{ShabbatSummary, fetch_shabbat};
pub use crate::source::CalendarSource;
pub use crate::translate::{
    DebouncedTranslation, Translation, TranslationBackend, TranslationCache, TranslationKey,
    TranslationState, Translator,
};
