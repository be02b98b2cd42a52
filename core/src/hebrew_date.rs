// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Hebrew numerals and localized date strings.

use jiff::civil::Date;

/// Placeholder shown when a value is missing.
pub const UNAVAILABLE: &str = "לא זמין";

const ONES: [&str; 10] = ["", "א", "ב", "ג", "ד", "ה", "ו", "ז", "ח", "ט"];
const TENS: [&str; 10] = ["", "י", "כ", "ל", "מ", "נ", "ס", "ע", "פ", "צ"];
const HUNDREDS: [&str; 5] = ["", "ק", "ר", "ש", "ת"];

const GERESH: char = '׳';
const GERSHAYIM: char = '״';

/// Transliterated month names as emitted by Hebcal. Longer names come first so
/// that `Adar II` is never rewritten as `Adar` + `II`.
const MONTHS: [(&str, &str); 15] = [
    ("Adar II", "אדר ב׳"),
    ("Adar I", "אדר א׳"),
    ("Adar", "אדר"),
    ("Nisan", "ניסן"),
    ("Iyyar", "אייר"),
    ("Sivan", "סיוון"),
    ("Tamuz", "תמוז"),
    ("Av", "אב"),
    ("Elul", "אלול"),
    ("Tishrei", "תשרי"),
    ("Cheshvan", "חשוון"),
    ("Kislev", "כסלו"),
    ("Tevet", "טבת"),
    ("Sh'vat", "שבט"),
    ("Shvat", "שבט"),
];

const GREGORIAN_MONTHS: [&str; 12] = [
    "ינואר",
    "פברואר",
    "מרץ",
    "אפריל",
    "מאי",
    "יוני",
    "יולי",
    "אוגוסט",
    "ספטמבר",
    "אוקטובר",
    "נובמבר",
    "דצמבר",
];

/// Writes `n` in Hebrew numerals.
///
/// A single letter is followed by a geresh (`ה׳`), longer numerals carry a
/// gershayim before the last letter (`כ״ה`). 15 and 16 are written `ט״ו` and
/// `ט״ז`. Zero has no numeral and yields an empty string.
pub fn gematria(n: u32) -> String {
    let mut letters: Vec<&str> = Vec::new();

    let mut hundreds = n / 100;
    while hundreds > 4 {
        letters.push(HUNDREDS[4]);
        hundreds -= 4;
    }
    letters.push(HUNDREDS[hundreds as usize]);

    match n % 100 {
        15 => letters.extend(["ט", "ו"]),
        16 => letters.extend(["ט", "ז"]),
        rest => {
            letters.push(TENS[(rest / 10) as usize]);
            letters.push(ONES[(rest % 10) as usize]);
        }
    }

    letters.retain(|a| !a.is_empty());
    match letters.split_last() {
        None => String::new(),
        Some((last, [])) => format!("{last}{GERESH}"),
        Some((last, init)) => format!("{}{GERSHAYIM}{last}", init.concat()),
    }
}

/// Localizes a Hebcal Hebrew date such as `25 Kislev 5785` into `כ״ה כסלו 5785`.
///
/// Missing or empty input yields [`UNAVAILABLE`]; input without a leading day
/// number is returned unchanged.
pub fn format_hebrew_date(hdate: Option<&str>) -> String {
    let Some(hdate) = hdate.filter(|a| !a.is_empty()) else {
        return UNAVAILABLE.to_string();
    };

    let digits = hdate.len() - hdate.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    let Some(day) = hdate.get(..digits).and_then(|a| a.parse::<u32>().ok()) else {
        return hdate.to_string();
    };

    let numeral = gematria(day);
    if numeral.is_empty() {
        return hdate.to_string();
    }

    let mut localized = format!("{numeral}{}", &hdate[digits..]);
    for (english, hebrew) in MONTHS {
        localized = localized.replacen(english, hebrew, 1);
    }
    localized
}

/// Long Hebrew form of a Gregorian date, e.g. `3 בינואר 2025`.
pub fn format_gregorian_date(date: Date) -> String {
    let month = GREGORIAN_MONTHS
        .get(usize::try_from(date.month() - 1).unwrap_or_default())
        .copied()
        .unwrap_or_default();
    format!("{} ב{} {}", date.day(), month, date.year())
}

/// Hebrew name of a Gregorian month, `1..=12`.
pub fn gregorian_month_name(month: i8) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    GREGORIAN_MONTHS.get(index).copied()
}
