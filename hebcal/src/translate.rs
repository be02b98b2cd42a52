// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! `MyMemory` translation client.

use std::fmt;
use std::sync::Arc;

use crate::config::HebcalConfig;
use crate::error::FetchError;
use crate::http::HttpClient;

/// Source and target language of a translation, rendered as `en|he`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LangPair {
    /// Source language code.
    pub source: String,
    /// Target language code.
    pub target: String,
}

impl LangPair {
    /// From English into `target`.
    #[must_use]
    pub fn from_english(target: impl Into<String>) -> Self {
        Self {
            source: "en".to_string(),
            target: target.into(),
        }
    }
}

impl Default for LangPair {
    fn default() -> Self {
        Self::from_english("he")
    }
}

impl fmt::Display for LangPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.source, self.target)
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationResponse {
    #[serde(default)]
    response_status: serde_json::Value,
    #[serde(default)]
    response_data: Option<TranslationData>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationData {
    translated_text: String,
}

/// Client for the free `MyMemory` translation endpoint.
#[derive(Debug, Clone)]
pub struct MyMemoryClient {
    http: Arc<HttpClient>,
    config: HebcalConfig,
}

impl MyMemoryClient {
    /// Creates a new translation client.
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

    /// Translates `text`.
    ///
    /// # Errors
    ///
    /// Besides transport and decoding errors, a body whose `responseStatus` is
    /// not `200` or that lacks `responseData` is reported as [`FetchError::Api`].
    #[tracing::instrument(skip(self))]
    pub async fn translate(&self, text: &str, langpair: &LangPair) -> Result<String, FetchError> {
        let url = HebcalConfig::endpoint(&self.config.translation_url, "get");
        let query = [("q", text.to_string()), ("langpair", langpair.to_string())];
        let resp: TranslationResponse = self.http.get_json(&url, &query).await?;

        match resp {
            TranslationResponse {
                response_status,
                response_data: Some(data),
            } if response_status.as_u64() == Some(200) => Ok(data.translated_text),
            TranslationResponse {
                response_status, ..
            } => Err(FetchError::Api(response_status.to_string())),
        }
    }
}
