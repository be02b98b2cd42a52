// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use luach_hebcal::{CalendarQuery, CalendarResponse, FetchError, HebcalClient, ShabbatQuery};

/// Remote calendar feeds the core reads from.
#[async_trait]
pub trait CalendarSource: Send + Sync {
    /// Calendar entries matching `query`.
    async fn calendar(&self, query: &CalendarQuery) -> Result<CalendarResponse, FetchError>;

    /// This week's Shabbat entries.
    async fn shabbat(&self, query: &ShabbatQuery) -> Result<CalendarResponse, FetchError>;
}

#[async_trait]
impl CalendarSource for HebcalClient {
    async fn calendar(&self, query: &CalendarQuery) -> Result<CalendarResponse, FetchError> {
        HebcalClient::calendar(self, query).await
    }

    async fn shabbat(&self, query: &ShabbatQuery) -> Result<CalendarResponse, FetchError> {
        HebcalClient::shabbat(self, query).await
    }
}
