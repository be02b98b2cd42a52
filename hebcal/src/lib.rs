// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Clients for the Hebcal calendar feeds and the `MyMemory` translation feed.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

mod client;
mod config;
mod error;
mod http;
mod request;
mod translate;
mod types;

pub use crate::client::HebcalClient;
pub use crate::config::HebcalConfig;
pub use crate::error::FetchError;
pub use crate::request::{CalendarQuery, ShabbatQuery};
pub use crate::translate::{LangPair, MyMemoryClient};
pub use crate::types::{CalendarItem, CalendarResponse, Category, GeonameId, Location};
