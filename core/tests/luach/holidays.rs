// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::date;
use luach_core::next_holiday;
use wiremock::MockServer;

use crate::common::{YEAR_BODY, mount_json, test_luach};

#[tokio::test]
async fn holidays_are_sorted_and_filtered() {
    let server = MockServer::start().await;
    mount_json(&server, "/hebcal", YEAR_BODY).await;
    let state = tempfile::tempdir().unwrap();
    let luach = test_luach(&server, state.path()).await;

    let holidays = luach.holidays(2025, None).await.unwrap();

    let names: Vec<_> = holidays.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["ט״ו בשבט", "Rosh Chodesh Adar", "פורים"]);
    assert_eq!(holidays[0].hebrew_date, "ט״ו שבט 5785");

    let next = next_holiday(&holidays, date(2025, 2, 13)).unwrap();
    assert_eq!(next.holiday.english_name, "Rosh Chodesh Adar");
    assert_eq!(next.days_until, 15);

    assert!(next_holiday(&holidays, date(2025, 3, 14)).is_none());
}
