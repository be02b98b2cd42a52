// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Hebcal client for calendar and Shabbat feeds.

use std::sync::Arc;

use crate::config::HebcalConfig;
use crate::error::FetchError;
use crate::http::HttpClient;
use crate::request::{CalendarQuery, ShabbatQuery};
use crate::types::CalendarResponse;

/// Client for the Hebcal REST API.
///
/// # Example
///
/// ```ignore
/// use luach_hebcal::{CalendarQuery, GeonameId, HebcalClient, HebcalConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HebcalClient::new(HebcalConfig::default())?;
/// let query = CalendarQuery::month(2025, 1, GeonameId::new(294071))?;
/// let resp = client.calendar(&query).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HebcalClient {
    http: Arc<HttpClient>,
    config: HebcalConfig,
}

impl HebcalClient {
    /// Creates a new Hebcal client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: HebcalConfig) -> Result<Self, FetchError> {
        let http = HttpClient::new(&config)?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// Fetches calendar entries (`/hebcal`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status or a malformed body.
    #[tracing::instrument(skip_all)]
    pub async fn calendar(&self, query: &CalendarQuery) -> Result<CalendarResponse, FetchError> {
        let url = HebcalConfig::endpoint(&self.config.base_url, "hebcal");
        let resp: CalendarResponse = self.http.get_json(&url, query.params()).await?;
        tracing::debug!(items = resp.items.len(), "calendar feed fetched");
        Ok(resp)
    }

    /// Fetches this week's Shabbat times (`/shabbat`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status or a malformed body.
    #[tracing::instrument(skip(self))]
    pub async fn shabbat(&self, query: &ShabbatQuery) -> Result<CalendarResponse, FetchError> {
        let url = HebcalConfig::endpoint(&self.config.base_url, "shabbat");
        let resp: CalendarResponse = self.http.get_json(&url, &query.params()).await?;
        tracing::debug!(items = resp.items.len(), "shabbat feed fetched");
        Ok(resp)
    }
}
