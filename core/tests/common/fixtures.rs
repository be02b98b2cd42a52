// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Feed bodies and a Luach instance wired to a mock server.

use std::path::Path;

use luach_core::{Config, Luach};
use luach_hebcal::HebcalConfig;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// January 2025 in Kfar Saba: two Shabbatot, one of them Rosh Chodesh eve.
pub const MONTH_BODY: &str = r#"{
  "items": [
    { "title": "הדלקת נרות: 16:22", "date": "2025-01-03T16:22:00+02:00", "category": "candles" },
    { "title": "Parashat Vaera", "hebrew": "פרשת וארא", "date": "2025-01-04", "category": "parashat", "hdate": "4 Tevet 5785" },
    { "title": "הבדלה: 17:34", "date": "2025-01-04T17:34:00+02:00", "category": "havdalah" },
    { "title": "Asara B'Tevet", "hebrew": "עשרה בטבת", "date": "2025-01-10", "category": "holiday", "hdate": "10 Tevet 5785" },
    { "title": "הדלקת נרות: 16:28", "date": "2025-01-10T16:28:00+02:00", "category": "candles" },
    { "title": "Parashat Bo", "hebrew": "פרשת בא", "date": "2025-01-11", "category": "parashat", "hdate": "11 Tevet 5785" },
    { "title": "Rosh Chodesh Sh'vat", "date": "2025-01-30", "category": "roshchodesh", "hdate": "1 Sh'vat 5785" },
    { "title": "broken", "date": "not-a-date", "category": "holiday" }
  ]
}"#;

/// This week's Shabbat times.
pub const SHABBAT_BODY: &str = r#"{
  "location": { "title": "Kfar Saba, Israel" },
  "items": [
    { "title": "הדלקת נרות: 16:22", "date": "2025-01-03T16:22:00+02:00", "category": "candles", "hdate": "3 Tevet 5785" },
    { "title": "Parashat Vaera", "hebrew": "פרשת וארא", "date": "2025-01-04", "category": "parashat" },
    { "title": "הבדלה: 17:34", "date": "2025-01-04T17:34:00+02:00", "category": "havdalah" }
  ]
}"#;

/// Holidays of 2025, out of order and mixed with other categories.
pub const YEAR_BODY: &str = r#"{
  "items": [
    { "title": "Purim", "hebrew": "פורים", "date": "2025-03-14", "category": "holiday", "hdate": "14 Adar 5785" },
    { "title": "Tu BiShvat", "hebrew": "ט״ו בשבט", "date": "2025-02-13", "category": "holiday", "hdate": "15 Sh'vat 5785" },
    { "title": "Parashat Bo", "date": "2025-01-11", "category": "parashat" },
    { "title": "Rosh Chodesh Adar", "date": "2025-02-28", "category": "roshchodesh", "hdate": "30 Sh'vat 5785" }
  ]
}"#;

/// Mounts a JSON response on `route`.
pub async fn mount_json(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_owned(), "application/json"))
        .mount(server)
        .await;
}

/// Creates a Luach instance whose feeds are served by `server`.
pub async fn test_luach(server: &MockServer, state_dir: &Path) -> Luach {
    let config = Config {
        state_dir: Some(state_dir.to_path_buf()),
        ..Default::default()
    };
    Luach::new(config, HebcalConfig::with_base_url(server.uri()))
        .await
        .expect("Failed to create Luach")
}
