// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests of the Luach facade against mocked feeds.

mod city;
mod holidays;
mod month;
mod shabbat;
