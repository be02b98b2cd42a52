// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Merges a month of calendar feed entries into one event per day.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use jiff::civil::Date;
use luach_hebcal::{CalendarItem, CalendarQuery, Category, FetchError, GeonameId};
use regex::Regex;

use crate::hebrew_date::format_hebrew_date;
use crate::source::CalendarSource;

/// Events of a month, keyed by day.
pub type EventMap = BTreeMap<Date, DayEvent>;

/// Classification of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    /// Shabbat, labelled by its parasha.
    Shabbat,
    /// Holiday or new month.
    Holiday,
}

/// Everything known about a single day.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEvent {
    /// Gregorian date.
    pub date: Date,
    /// Shabbat or holiday.
    #[serde(rename = "type")]
    pub kind: DayKind,
    /// Display name, in Hebrew when the feed provides it.
    pub name: String,
    /// Longer description.
    pub description: String,
    /// Hebrew date as sent by the feed, localized by [`localize`].
    pub hebrew_date: Option<String>,
    /// Category of the entry that classified the day.
    pub category: Category,
    /// Candle-lighting time, `HH:MM`.
    pub candle_lighting: Option<String>,
    /// Havdalah time, `HH:MM`.
    pub havdalah: Option<String>,
    /// Holiday falling on this Shabbat.
    pub holiday_name: Option<String>,
    /// Whether a holiday coincides with Shabbat.
    pub is_holiday_and_shabbat: bool,
}

#[derive(Debug, Clone)]
struct Classified {
    kind: DayKind,
    name: String,
    description: String,
    hebrew_date: Option<String>,
    category: Category,
    holiday_name: Option<String>,
    is_holiday_and_shabbat: bool,
}

impl Classified {
    fn from_item(kind: DayKind, item: &CalendarItem) -> Self {
        let name = item.display_name().to_string();
        let description = match kind {
            DayKind::Shabbat => format!("שבת קודש - {name}"),
            DayKind::Holiday => item
                .memo
                .as_deref()
                .unwrap_or_else(|| item.display_name())
                .to_string(),
        };
        Self {
            kind,
            name,
            description,
            hebrew_date: item.hdate.clone(),
            category: item.category.clone(),
            holiday_name: None,
            is_holiday_and_shabbat: false,
        }
    }
}

/// A day being assembled: times may arrive before or without a classification.
#[derive(Debug, Default)]
struct Slot {
    candle_lighting: Option<String>,
    havdalah: Option<String>,
    day: Option<Classified>,
}

impl Slot {
    fn mark_shabbat(&mut self, item: &CalendarItem) {
        let mut shabbat = Classified::from_item(DayKind::Shabbat, item);
        match self.day.take() {
            Some(prev) if prev.kind == DayKind::Holiday => {
                shabbat.holiday_name = Some(prev.name);
                shabbat.is_holiday_and_shabbat = true;
            }
            Some(prev) => {
                shabbat.holiday_name = prev.holiday_name;
                shabbat.is_holiday_and_shabbat = prev.is_holiday_and_shabbat;
            }
            None => {}
        }
        self.day = Some(shabbat);
    }

    fn mark_holiday(&mut self, item: &CalendarItem) {
        if !self.is_shabbat() {
            self.day = Some(Classified::from_item(DayKind::Holiday, item));
        } else if let Some(shabbat) = &mut self.day {
            shabbat.holiday_name = Some(item.display_name().to_string());
            shabbat.is_holiday_and_shabbat = true;
        }
    }

    fn is_shabbat(&self) -> bool {
        self.day.as_ref().is_some_and(|a| a.kind == DayKind::Shabbat)
    }

    fn into_event(self, date: Date) -> Option<DayEvent> {
        let day = self.day?;
        Some(DayEvent {
            date,
            kind: day.kind,
            name: day.name,
            description: day.description,
            hebrew_date: day.hebrew_date,
            category: day.category,
            candle_lighting: self.candle_lighting,
            havdalah: self.havdalah,
            holiday_name: day.holiday_name,
            is_holiday_and_shabbat: day.is_holiday_and_shabbat,
        })
    }
}

/// Merges feed entries into at most one event per day.
///
/// Candle-lighting and havdalah entries only carry a time. A candle-lighting
/// time on an otherwise empty day moves to the next day when that day is a
/// Shabbat. Days left with nothing but a time are dropped. When a holiday and
/// a parasha share a day the day stays a Shabbat and records the holiday in
/// [`DayEvent::holiday_name`].
pub fn reconcile(items: &[CalendarItem]) -> EventMap {
    let mut slots: BTreeMap<Date, Slot> = BTreeMap::new();

    for item in items {
        let Some(date) = item.day() else {
            tracing::warn!(date = %item.date, title = %item.title, "skip item with invalid date");
            continue;
        };

        match &item.category {
            Category::Candles => {
                slots.entry(date).or_default().candle_lighting = extract_time(&item.title);
            }
            Category::Havdalah => {
                slots.entry(date).or_default().havdalah = extract_time(&item.title);
            }
            Category::Parashat => slots.entry(date).or_default().mark_shabbat(item),
            Category::Holiday | Category::RoshChodesh => {
                slots.entry(date).or_default().mark_holiday(item);
            }
            Category::Other(_) => {}
        }
    }

    let pending: Vec<(Date, String)> = slots
        .iter()
        .filter_map(|(date, slot)| match (&slot.day, &slot.candle_lighting) {
            (None, Some(time)) => Some((*date, time.clone())),
            _ => None,
        })
        .collect();

    for (date, time) in pending {
        let Ok(next) = date.tomorrow() else {
            continue;
        };
        if let Some(slot) = slots.get_mut(&next)
            && slot.is_shabbat()
        {
            slot.candle_lighting = Some(time);
        }
    }

    slots
        .into_iter()
        .filter_map(|(date, slot)| slot.into_event(date).map(|event| (date, event)))
        .collect()
}

/// Rewrites every event's Hebrew date into its display form.
pub fn localize(events: EventMap) -> EventMap {
    events
        .into_iter()
        .map(|(date, mut event)| {
            event.hebrew_date = Some(format_hebrew_date(event.hebrew_date.as_deref()));
            (date, event)
        })
        .collect()
}

/// Fetches one Gregorian month for a city and builds its render-ready event map.
///
/// # Errors
///
/// Any fetch failure fails the whole month; no partial map is returned.
#[tracing::instrument(skip(source))]
pub async fn fetch_month_events(
    source: &dyn CalendarSource,
    year: i16,
    month: i8,
    geonameid: GeonameId,
) -> Result<EventMap, FetchError> {
    let query = CalendarQuery::month(year, month, geonameid)?;
    let resp = source.calendar(&query).await?;
    let events = localize(reconcile(&resp.items));
    tracing::debug!(days = events.len(), "month reconciled");
    Ok(events)
}

static TIME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{2}:\d{2}").unwrap());

fn extract_time(title: &str) -> Option<String> {
    TIME.find(title).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn item(date: &str, category: Category, title: &str) -> CalendarItem {
        CalendarItem {
            date: date.to_string(),
            category,
            title: title.to_string(),
            hebrew: None,
            hdate: None,
            memo: None,
            link: None,
        }
    }

    fn parashat(date: &str, hebrew: &str) -> CalendarItem {
        CalendarItem {
            hebrew: Some(hebrew.to_string()),
            hdate: Some("4 Tevet 5785".to_string()),
            ..item(date, Category::Parashat, "Parashat Vaera")
        }
    }

    #[test]
    fn candle_lighting_moves_to_shabbat() {
        let items = vec![
            item(
                "2025-01-02T16:20:00+02:00",
                Category::Candles,
                "Candle lighting: 16:20",
            ),
            parashat("2025-01-03", "פרשת וארא"),
        ];

        let events = reconcile(&items);

        assert_eq!(events.len(), 1);
        assert!(!events.contains_key(&date(2025, 1, 2)));
        let shabbat = &events[&date(2025, 1, 3)];
        assert_eq!(shabbat.kind, DayKind::Shabbat);
        assert_eq!(shabbat.candle_lighting.as_deref(), Some("16:20"));
        assert_eq!(shabbat.name, "פרשת וארא");
        assert_eq!(shabbat.description, "שבת קודש - פרשת וארא");
    }

    #[test]
    fn havdalah_stays_on_its_own_day() {
        let items = vec![
            parashat("2025-01-04", "פרשת וארא"),
            item(
                "2025-01-04T17:34:00+02:00",
                Category::Havdalah,
                "Havdalah: 17:34",
            ),
        ];

        let events = reconcile(&items);
        assert_eq!(
            events[&date(2025, 1, 4)].havdalah.as_deref(),
            Some("17:34")
        );
    }

    #[test]
    fn holiday_on_shabbat_keeps_shabbat() {
        let holiday = CalendarItem {
            hebrew: Some("חנוכה: ח׳ נרות".to_string()),
            memo: Some("Hanukkah, the Jewish festival of rededication".to_string()),
            ..item("2024-12-28", Category::Holiday, "Chanukah: 8 Candles")
        };

        for items in [
            vec![parashat("2024-12-28", "פרשת מקץ"), holiday.clone()],
            vec![holiday.clone(), parashat("2024-12-28", "פרשת מקץ")],
        ] {
            let events = reconcile(&items);
            let day = &events[&date(2024, 12, 28)];
            assert_eq!(day.kind, DayKind::Shabbat);
            assert_eq!(day.name, "פרשת מקץ");
            assert_eq!(day.holiday_name.as_deref(), Some("חנוכה: ח׳ נרות"));
            assert!(day.is_holiday_and_shabbat);
        }
    }

    #[test]
    fn holiday_uses_memo_as_description() {
        let items = vec![CalendarItem {
            hebrew: Some("ראש חודש שבט".to_string()),
            memo: Some("Start of month of Sh'vat".to_string()),
            ..item("2025-01-30", Category::RoshChodesh, "Rosh Chodesh Sh'vat")
        }];

        let events = reconcile(&items);
        let day = &events[&date(2025, 1, 30)];
        assert_eq!(day.kind, DayKind::Holiday);
        assert_eq!(day.category, Category::RoshChodesh);
        assert_eq!(day.name, "ראש חודש שבט");
        assert_eq!(day.description, "Start of month of Sh'vat");
        assert!(!day.is_holiday_and_shabbat);
    }

    #[test]
    fn holiday_overwrites_previous_holiday() {
        let items = vec![
            item("2024-12-31", Category::RoshChodesh, "Rosh Chodesh Tevet"),
            item("2024-12-31", Category::Holiday, "Chanukah: 8th Day"),
        ];

        let events = reconcile(&items);
        let day = &events[&date(2024, 12, 31)];
        assert_eq!(day.name, "Chanukah: 8th Day");
        assert_eq!(day.category, Category::Holiday);
    }

    #[test]
    fn stray_times_are_dropped() {
        let items = vec![
            item(
                "2025-01-09T16:27:00+02:00",
                Category::Candles,
                "Candle lighting: 16:27",
            ),
            item(
                "2025-01-11T17:40:00+02:00",
                Category::Havdalah,
                "Havdalah: 17:40",
            ),
            item("2025-01-12", Category::Other("omer".to_string()), "Omer"),
        ];

        assert!(reconcile(&items).is_empty());
    }

    #[test]
    fn candle_lighting_on_holiday_eve_stays_when_classified() {
        let items = vec![
            CalendarItem {
                hebrew: Some("ערב פסח".to_string()),
                ..item("2025-04-12", Category::Holiday, "Erev Pesach")
            },
            item(
                "2025-04-12T18:46:00+03:00",
                Category::Candles,
                "Candle lighting: 18:46",
            ),
        ];

        let events = reconcile(&items);
        assert_eq!(
            events[&date(2025, 4, 12)].candle_lighting.as_deref(),
            Some("18:46")
        );
    }

    #[test]
    fn reconcile_is_deterministic() {
        let items = vec![
            item(
                "2025-01-02T16:20:00+02:00",
                Category::Candles,
                "Candle lighting: 16:20",
            ),
            parashat("2025-01-03", "פרשת וארא"),
            item("2025-01-03", Category::Holiday, "Asara B'Tevet"),
            item("2025-01-30", Category::RoshChodesh, "Rosh Chodesh Sh'vat"),
        ];

        let first = reconcile(&items);
        let second = reconcile(&items);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn localize_formats_hebrew_dates() {
        let events = localize(reconcile(&[
            parashat("2025-01-03", "פרשת וארא"),
            item("2025-01-30", Category::RoshChodesh, "Rosh Chodesh Sh'vat"),
        ]));

        assert_eq!(
            events[&date(2025, 1, 3)].hebrew_date.as_deref(),
            Some("ד׳ טבת 5785")
        );
        assert_eq!(
            events[&date(2025, 1, 30)].hebrew_date.as_deref(),
            Some("לא זמין")
        );
    }

    #[test]
    fn serializes_with_feed_field_names() {
        let events = reconcile(&[parashat("2025-01-03", "פרשת וארא")]);
        let json = serde_json::to_value(&events).unwrap();
        let day = &json["2025-01-03"];
        assert_eq!(day["type"], "shabbat");
        assert_eq!(day["category"], "parashat");
        assert_eq!(day["isHolidayAndShabbat"], false);
        assert!(day["candleLighting"].is_null());
    }

    #[test]
    fn extract_time_from_title() {
        assert_eq!(
            extract_time("הדלקת נרות: 16:12").as_deref(),
            Some("16:12")
        );
        assert_eq!(extract_time("Candle lighting"), None);
    }
}
