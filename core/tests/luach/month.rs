// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::date;
use luach_core::{DayKind, find_city};
use luach_hebcal::{FetchError, GeonameId};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{MONTH_BODY, mount_json, test_luach};

#[tokio::test]
async fn month_events_are_reconciled_and_localized() {
    // Arrange
    let server = MockServer::start().await;
    mount_json(&server, "/hebcal", MONTH_BODY).await;
    let state = tempfile::tempdir().unwrap();
    let luach = test_luach(&server, state.path()).await;
    let city = find_city(GeonameId::new(294_071)).unwrap();

    // Act
    let events = luach.month_events(2025, 1, city).await.unwrap();

    // Assert
    let days: Vec<_> = events.keys().copied().collect();
    assert_eq!(
        days,
        [
            date(2025, 1, 4),
            date(2025, 1, 10),
            date(2025, 1, 11),
            date(2025, 1, 30)
        ]
    );

    let vaera = &events[&date(2025, 1, 4)];
    assert_eq!(vaera.kind, DayKind::Shabbat);
    assert_eq!(vaera.name, "פרשת וארא");
    assert_eq!(vaera.candle_lighting.as_deref(), Some("16:22"));
    assert_eq!(vaera.havdalah.as_deref(), Some("17:34"));
    assert_eq!(vaera.hebrew_date.as_deref(), Some("ד׳ טבת 5785"));

    let fast = &events[&date(2025, 1, 10)];
    assert_eq!(fast.kind, DayKind::Holiday);
    assert_eq!(fast.candle_lighting.as_deref(), Some("16:28"));
    assert_eq!(events[&date(2025, 1, 11)].candle_lighting, None);

    let rosh_chodesh = &events[&date(2025, 1, 30)];
    assert_eq!(rosh_chodesh.kind, DayKind::Holiday);
    assert_eq!(rosh_chodesh.hebrew_date.as_deref(), Some("א׳ שבט 5785"));
}

#[tokio::test]
async fn month_query_carries_city_and_window() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hebcal"))
        .and(query_param("geonameid", "281184"))
        .and(query_param("start", "2024-02-01"))
        .and(query_param("end", "2024-02-29"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"items":[]}"#, "application/json"))
        .expect(1)
        .mount(&server)
        .await;
    let state = tempfile::tempdir().unwrap();
    let luach = test_luach(&server, state.path()).await;
    let jerusalem = find_city(GeonameId::new(281_184)).unwrap();

    let events = luach.month_events(2024, 2, jerusalem).await.unwrap();

    assert!(events.is_empty());
}

#[tokio::test]
async fn month_fetch_failure_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hebcal"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;
    let state = tempfile::tempdir().unwrap();
    let luach = test_luach(&server, state.path()).await;
    let city = luach.selected_city().await;

    let err = luach.month_events(2025, 1, city).await.unwrap_err();

    assert!(
        matches!(err, FetchError::Status { status: 503, ref body } if body == "maintenance"),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn month_out_of_range_is_rejected() {
    let server = MockServer::start().await;
    let state = tempfile::tempdir().unwrap();
    let luach = test_luach(&server, state.path()).await;
    let city = luach.selected_city().await;

    let err = luach.month_events(2025, 13, city).await.unwrap_err();

    assert!(matches!(err, FetchError::InvalidQuery(_)));
}
