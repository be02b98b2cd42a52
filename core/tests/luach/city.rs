// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use luach_core::{Config, DEFAULT_CITY, Luach};
use luach_hebcal::{GeonameId, HebcalConfig};
use wiremock::MockServer;

use crate::common::test_luach;

#[tokio::test]
async fn selected_city_survives_restart() {
    // Arrange
    let server = MockServer::start().await;
    let state = tempfile::tempdir().unwrap();
    let luach = test_luach(&server, state.path()).await;
    assert_eq!(luach.selected_city().await.id, DEFAULT_CITY);

    // Act
    let haifa = luach.select_city(GeonameId::new(294_801)).await.unwrap();

    // Assert
    assert_eq!(haifa.english, "Haifa");
    let restarted = test_luach(&server, state.path()).await;
    assert_eq!(restarted.selected_city().await.id, haifa.id);
    assert!(state.path().join("selected_city").exists());
}

#[tokio::test]
async fn unknown_city_is_rejected() {
    let server = MockServer::start().await;
    let state = tempfile::tempdir().unwrap();
    let luach = test_luach(&server, state.path()).await;

    assert!(luach.select_city(GeonameId::new(7)).await.is_err());
    assert!(!state.path().join("selected_city").exists());
    assert!(luach.resolve_city(Some(GeonameId::new(7))).await.is_err());
}

#[tokio::test]
async fn configured_default_city_applies_without_selection() {
    let server = MockServer::start().await;
    let state = tempfile::tempdir().unwrap();
    let config = Config {
        default_city: GeonameId::new(294_514),
        state_dir: Some(state.path().to_path_buf()),
        ..Default::default()
    };
    let luach = Luach::new(config, HebcalConfig::with_base_url(server.uri()))
        .await
        .unwrap();

    assert_eq!(luach.selected_city().await.english, "Eilat");
    assert_eq!(luach.resolve_city(None).await.unwrap().english, "Eilat");
}
