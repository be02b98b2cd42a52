// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Fixed English to Hebrew phrase table for event names.

use std::sync::LazyLock;

use regex::{Captures, Regex};

const PHRASES: &[(&str, &str)] = &[
    ("Parashat", "פרשת"),
    ("Shabbat", "שבת"),
    ("Rosh Chodesh", "ראש חודש"),
    ("Chanukah", "חנוכה"),
    ("Purim", "פורים"),
    ("Pesach", "פסח"),
    ("Shavuot", "שבועות"),
    ("Rosh Hashana", "ראש השנה"),
    ("Yom Kippur", "יום כיפור"),
    ("Sukkot", "סוכות"),
    ("Shmini Atzeret", "שמיני עצרת"),
    ("Simchat Torah", "שמחת תורה"),
    ("Tu BiShvat", "ט״ו בשבט"),
    ("Lag BaOmer", "ל״ג בעומר"),
    ("Tish'a B'Av", "תשעה באב"),
    ("Shabbat Shekalim", "שבת שקלים"),
    ("Shabbat Zachor", "שבת זכור"),
    ("Shabbat Parah", "שבת פרה"),
    ("Shabbat HaChodesh", "שבת החודש"),
    ("Shabbat HaGadol", "שבת הגדול"),
    ("Shabbat Chazon", "שבת חזון"),
    ("Shabbat Nachamu", "שבת נחמו"),
    ("Shabbat Shuva", "שבת שובה"),
    ("candle lighting", "הדלקת נרות"),
    ("Havdalah", "הבדלה"),
];

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let mut phrases: Vec<&str> = PHRASES.iter().map(|(en, _)| *en).collect();
    phrases.sort_by_key(|a| std::cmp::Reverse(a.len()));
    let alternation = phrases
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){alternation}")).unwrap()
});

/// Replaces every known phrase in `text` with its Hebrew form, ignoring case.
///
/// Longer phrases win over their prefixes, so `Shabbat Zachor` is rendered
/// as one phrase rather than `שבת Zachor`.
pub fn translate_to_hebrew(text: &str) -> String {
    PATTERN
        .replace_all(text, |caps: &Captures| {
            let matched = &caps[0];
            PHRASES
                .iter()
                .find(|(en, _)| en.eq_ignore_ascii_case(matched))
                .map_or_else(|| matched.to_string(), |(_, he)| (*he).to_string())
        })
        .into_owned()
}

/// Hebrew label for a month-grid cell: the first two words of `name`.
pub fn short_label(name: &str) -> String {
    let head = name.split(' ').take(2).collect::<Vec<_>>().join(" ");
    translate_to_hebrew(&head)
}
