// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Remote endpoints and HTTP settings.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct HebcalConfig {
    /// Base URL of the Hebcal REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Base URL of the `MyMemory` translation API.
    #[serde(default = "default_translation_url")]
    pub translation_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://www.hebcal.com".to_string()
}

fn default_translation_url() -> String {
    "https://api.mymemory.translated.net".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("luach-hebcal/", env!("CARGO_PKG_VERSION")).to_string()
}

impl HebcalConfig {
    /// Points both feeds at the same server, mostly useful against a mock.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            translation_url: base_url.clone(),
            base_url,
            ..Default::default()
        }
    }

    pub(crate) fn endpoint(base: &str, path: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), path)
    }
}

impl Default for HebcalConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            translation_url: default_translation_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
