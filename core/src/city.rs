// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use luach_hebcal::GeonameId;
use tokio::fs;

/// A supported city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    /// GeoNames identifier.
    pub id: GeonameId,
    /// Hebrew name.
    pub name: &'static str,
    /// English name.
    pub english: &'static str,
    /// Hebrew region name.
    pub region: &'static str,
    /// Minutes before sunset for candle lighting.
    pub candle_minutes: u16,
}

const fn city(
    id: u32,
    name: &'static str,
    english: &'static str,
    region: &'static str,
    candle_minutes: u16,
) -> City {
    City {
        id: GeonameId::new(id),
        name,
        english,
        region,
        candle_minutes,
    }
}

const CENTER: &str = "מרכז";
const NORTH: &str = "צפון";
const SOUTH: &str = "דרום";

/// All supported cities.
pub const CITIES: &[City] = &[
    city(281_184, "ירושלים", "Jerusalem", CENTER, 40),
    city(293_397, "תל אביב", "Tel Aviv", CENTER, 18),
    city(294_801, "חיפה", "Haifa", NORTH, 18),
    city(294_946, "באר שבע", "Beer Sheva", SOUTH, 18),
    city(294_117, "ראשון לציון", "Rishon LeZion", CENTER, 18),
    city(293_308, "פתח תקווה", "Petah Tikva", CENTER, 18),
    city(294_071, "כפר סבא", "Kfar Saba", CENTER, 18),
    city(293_703, "נתניה", "Netanya", CENTER, 18),
    city(294_098, "חולון", "Holon", CENTER, 18),
    city(293_825, "בני ברק", "Bnei Brak", CENTER, 18),
    city(294_904, "רמת גן", "Ramat Gan", CENTER, 18),
    city(295_629, "אשדוד", "Ashdod", SOUTH, 18),
    city(295_530, "אשקלון", "Ashkelon", SOUTH, 18),
    city(294_751, "נצרת", "Nazareth", NORTH, 18),
    city(294_420, "מודיעין", "Modiin", CENTER, 22),
    city(295_277, "בית שמש", "Beit Shemesh", CENTER, 30),
    city(293_522, "הרצליה", "Herzliya", CENTER, 18),
    city(293_619, "כרמיאל", "Karmiel", NORTH, 18),
    city(294_514, "אילת", "Eilat", SOUTH, 18),
    city(293_322, "טבריה", "Tiberias", NORTH, 18),
    city(293_067, "צפת", "Safed", NORTH, 18),
];

/// Kfar Saba.
pub const DEFAULT_CITY: GeonameId = GeonameId::new(294_071);

/// Finds a city by id.
pub fn find(id: GeonameId) -> Option<&'static City> {
    CITIES.iter().find(|a| a.id == id)
}

/// The default city.
pub fn default_city() -> &'static City {
    find(DEFAULT_CITY).unwrap_or(&CITIES[0])
}

/// Cities whose Hebrew name contains `query`, or whose English name contains
/// it ignoring case. An empty query matches every city.
pub fn search(query: &str) -> Vec<&'static City> {
    let query = query.trim();
    let lower = query.to_lowercase();
    CITIES
        .iter()
        .filter(|a| a.name.contains(query) || a.english.to_lowercase().contains(&lower))
        .collect()
}

/// Persists the selected city as a single file in the state directory.
#[derive(Debug, Clone)]
pub struct CityStore {
    path: PathBuf,
}

impl CityStore {
    const FILE_NAME: &'static str = "selected_city";

    /// Creates a store under `state_dir`.
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(Self::FILE_NAME),
        }
    }

    /// Path of the state file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the selected city, falling back to the default city when the
    /// file is missing, unreadable or names an unknown city.
    pub async fn load(&self) -> GeonameId {
        self.load_or(DEFAULT_CITY).await
    }

    /// Reads the selected city, falling back to `fallback`.
    pub async fn load_or(&self, fallback: GeonameId) -> GeonameId {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), err = %e, "no selected city");
                return fallback;
            }
        };

        match content.parse::<GeonameId>() {
            Ok(id) if find(id).is_some() => id,
            _ => {
                tracing::warn!(path = %self.path.display(), content = %content.trim(), "invalid selected city, using default");
                fallback
            }
        }
    }

    /// Writes the selected city.
    pub async fn save(&self, id: GeonameId) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        tracing::debug!(path = %self.path.display(), %id, "saving selected city");
        fs::write(&self.path, id.to_string())
            .await
            .map_err(|e| format!("Failed to write {}: {e}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog() {
        assert_eq!(CITIES.len(), 21);

        let ids: HashSet<_> = CITIES.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), CITIES.len());

        assert_eq!(default_city().name, "כפר סבא");
        assert_eq!(find(GeonameId::new(281_184)).unwrap().candle_minutes, 40);
        assert_eq!(find(GeonameId::new(294_420)).unwrap().candle_minutes, 22);
        assert_eq!(find(GeonameId::new(295_277)).unwrap().candle_minutes, 30);
        assert!(find(GeonameId::new(1)).is_none());
    }

    #[test]
    fn test_search() {
        let found = search("שבע");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].english, "Beer Sheva");

        let found = search("haifa");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "חיפה");

        assert_eq!(search("").len(), CITIES.len());
        assert!(search("London").is_empty());
    }

    #[tokio::test]
    async fn test_store_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = CityStore::new(&dir.path().join("nested"));
        assert_eq!(store.load().await, DEFAULT_CITY);

        let eilat = GeonameId::new(294_514);
        assert_eq!(store.load_or(eilat).await, eilat);
    }

    #[tokio::test]
    async fn test_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = CityStore::new(&dir.path().join("nested"));

        let jerusalem = GeonameId::new(281_184);
        store.save(jerusalem).await.unwrap();
        assert_eq!(store.load().await, jerusalem);
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "281184");
    }

    #[tokio::test]
    async fn test_store_defaults_when_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let store = CityStore::new(dir.path());

        std::fs::write(store.path(), "not a number").unwrap();
        assert_eq!(store.load().await, DEFAULT_CITY);

        std::fs::write(store.path(), "12345").unwrap();
        assert_eq!(store.load().await, DEFAULT_CITY);
    }
}
