// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use luach_core::{Config, Luach, UNAVAILABLE, find_city};
use luach_hebcal::{GeonameId, HebcalConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{SHABBAT_BODY, test_luach};

#[tokio::test]
async fn shabbat_uses_city_candle_minutes() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shabbat"))
        .and(query_param("geonameid", "281184"))
        .and(query_param("b", "40"))
        .and(query_param("m", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SHABBAT_BODY, "application/json"))
        .expect(1)
        .mount(&server)
        .await;
    let state = tempfile::tempdir().unwrap();
    let luach = test_luach(&server, state.path()).await;
    let jerusalem = find_city(GeonameId::new(281_184)).unwrap();

    // Act
    let summary = luach.shabbat(jerusalem).await.unwrap();

    // Assert
    assert_eq!(summary.parasha, "פרשת וארא");
    assert_eq!(summary.candle_lighting, "16:22");
    assert_eq!(summary.havdalah, "17:34");
    assert_eq!(summary.date, "3 בינואר 2025");
    assert_eq!(summary.hebrew_date, "ג׳ טבת 5785");
    assert_eq!(summary.location, "Kfar Saba, Israel");
}

#[tokio::test]
async fn shabbat_config_overrides_minutes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shabbat"))
        .and(query_param("b", "20"))
        .and(query_param("m", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"items":[]}"#, "application/json"))
        .expect(1)
        .mount(&server)
        .await;
    let state = tempfile::tempdir().unwrap();
    let config = Config {
        candle_lighting_minutes: Some(20),
        havdalah_minutes: 42,
        state_dir: Some(state.path().to_path_buf()),
        ..Default::default()
    };
    let luach = Luach::new(config, HebcalConfig::with_base_url(server.uri()))
        .await
        .unwrap();
    let jerusalem = find_city(GeonameId::new(281_184)).unwrap();

    let summary = luach.shabbat(jerusalem).await.unwrap();

    assert_eq!(summary.parasha, UNAVAILABLE);
    assert_eq!(summary.candle_lighting, UNAVAILABLE);
    assert_eq!(summary.hebrew_date, UNAVAILABLE);
}
