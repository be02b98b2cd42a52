// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::sync::Arc;

use jiff::Zoned;
use jiff::civil::Date;
use luach_hebcal::{FetchError, GeonameId, HebcalClient, HebcalConfig, MyMemoryClient, ShabbatQuery};
use tokio::fs;

use crate::city::{self, City, CityStore};
use crate::holiday::{self, Holiday, NextHoliday};
use crate::reconcile::{self, EventMap};
use crate::shabbat::{self, ShabbatSummary};
use crate::source::CalendarSource;
use crate::translate::{TranslationBackend, TranslationCache, Translator};
use crate::Config;

/// Luach application core.
#[derive(Clone)]
pub struct Luach {
    now: Zoned,
    config: Config,
    source: Arc<dyn CalendarSource>,
    translator: Arc<Translator>,
    cities: Option<CityStore>,
}

impl std::fmt::Debug for Luach {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Luach")
            .field("now", &self.now)
            .field("config", &self.config)
            .field("cities", &self.cities)
            .finish_non_exhaustive()
    }
}

impl Luach {
    /// Creates a new instance talking to the Hebcal and `MyMemory` services.
    pub async fn new(config: Config, hebcal: HebcalConfig) -> Result<Self, Box<dyn Error>> {
        let source = HebcalClient::new(hebcal.clone())
            .map_err(|e| format!("Failed to initialize calendar client: {e}"))?;
        let backend = MyMemoryClient::new(hebcal)
            .map_err(|e| format!("Failed to initialize translation client: {e}"))?;
        Self::with_parts(config, Arc::new(source), Arc::new(backend)).await
    }

    /// Creates a new instance over the given calendar source and translation
    /// backend.
    pub async fn with_parts(
        mut config: Config,
        source: Arc<dyn CalendarSource>,
        backend: Arc<dyn TranslationBackend>,
    ) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;
        prepare(&config).await?;
        Ok(Self::assemble(config, source, backend))
    }

    /// Without a state directory the selected city is not persisted.
    fn assemble(
        config: Config,
        source: Arc<dyn CalendarSource>,
        backend: Arc<dyn TranslationBackend>,
    ) -> Self {
        let cities = config.state_dir.as_deref().map(CityStore::new);
        let translator = Arc::new(Translator::new(backend, Arc::new(TranslationCache::new())));

        Self {
            now: Zoned::now(),
            config,
            source,
            translator,
            cities,
        }
    }

    /// The current time in the Luach instance.
    pub fn now(&self) -> &Zoned {
        &self.now
    }

    /// Today's civil date.
    pub fn today(&self) -> Date {
        self.now.date()
    }

    /// Refresh the current time to now.
    pub fn refresh_now(&mut self) {
        self.now = Zoned::now();
    }

    /// The normalized configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The translator shared by all commands.
    pub fn translator(&self) -> &Arc<Translator> {
        &self.translator
    }

    /// The persisted city, or the configured default city.
    pub async fn selected_city(&self) -> &'static City {
        let id = match &self.cities {
            Some(cities) => cities.load_or(self.config.default_city).await,
            None => self.config.default_city,
        };
        city::find(id).unwrap_or_else(city::default_city)
    }

    /// Persists `id` as the selected city.
    pub async fn select_city(&self, id: GeonameId) -> Result<&'static City, Box<dyn Error>> {
        let city = city::find(id).ok_or_else(|| format!("Unknown city: {id}"))?;
        let cities = self
            .cities
            .as_ref()
            .ok_or("No state directory, the selected city cannot be saved")?;
        cities.save(id).await?;
        Ok(city)
    }

    /// Resolves an explicit city, or the selected one.
    pub async fn resolve_city(
        &self,
        id: Option<GeonameId>,
    ) -> Result<&'static City, Box<dyn Error>> {
        match id {
            Some(id) => Ok(city::find(id).ok_or_else(|| format!("Unknown city: {id}"))?),
            None => Ok(self.selected_city().await),
        }
    }

    /// Reconciled events of a month for `city`.
    pub async fn month_events(
        &self,
        year: i16,
        month: i8,
        city: &City,
    ) -> Result<EventMap, FetchError> {
        reconcile::fetch_month_events(self.source.as_ref(), year, month, city.id).await
    }

    /// Holidays of a Gregorian year.
    pub async fn holidays(
        &self,
        year: i16,
        city: Option<&City>,
    ) -> Result<Vec<Holiday>, FetchError> {
        holiday::fetch_holidays(self.source.as_ref(), year, city.map(|a| a.id)).await
    }

    /// The first of `holidays` strictly after today.
    pub fn next_holiday(&self, holidays: &[Holiday]) -> Option<NextHoliday> {
        holiday::next_holiday(holidays, self.today())
    }

    /// Shabbat query for `city`, honouring the configured minute offsets.
    pub fn shabbat_query(&self, city: &City) -> ShabbatQuery {
        ShabbatQuery {
            geonameid: city.id,
            candle_lighting_minutes: self
                .config
                .candle_lighting_minutes
                .unwrap_or(city.candle_minutes),
            havdalah_minutes: self.config.havdalah_minutes,
        }
    }

    /// This week's Shabbat times for `city`.
    pub async fn shabbat(&self, city: &City) -> Result<ShabbatSummary, FetchError> {
        shabbat::fetch_shabbat(self.source.as_ref(), &self.shabbat_query(city)).await
    }
}

async fn prepare(config: &Config) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = &config.state_dir {
        tracing::debug!(path = %parent.display(), "ensuring state directory exists");
        fs::create_dir_all(parent).await?;
    }
    Ok(())
}
