// SPDX-FileCopyrightText: 2026 calgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! REST client for the calgrid event store, implementing the core's
//! [`calgrid_core::EventStore`] trait against the `/events` API.

mod client;
mod config;
mod http;

pub use crate::client::RestEventStore;
pub use crate::config::StoreConfig;
