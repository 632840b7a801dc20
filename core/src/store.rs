// SPDX-FileCopyrightText: 2026 calgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use async_trait::async_trait;

use crate::event::{Event, EventDraft, EventId};

/// Event store errors.
#[non_exhaustive]
#[derive(Debug)]
pub enum StoreError {
    /// Network or protocol failure.
    Transport(String),

    /// Response body could not be decoded.
    Decode(String),

    /// No event exists with the given id. Callers treat this as empty,
    /// not fatal.
    NotFound(EventId),

    /// Error reported by the store, carrying its machine-readable message.
    Api { status: u16, message: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "transport error: {e}"),
            Self::Decode(e) => write!(f, "invalid store response: {e}"),
            Self::NotFound(id) => write!(f, "event {id} not found"),
            Self::Api { status, message } => write!(f, "store rejected request ({status}): {message}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// The remote event store the calendar reads from and writes to.
/// Instants cross this boundary in the reference zone.
#[async_trait]
pub trait EventStore {
    async fn list_events(&self) -> Result<Vec<Event>, StoreError>;

    async fn get_event(&self, id: EventId) -> Result<Event, StoreError>;

    async fn create_event(&self, draft: EventDraft) -> Result<Event, StoreError>;

    async fn update_event(&self, id: EventId, draft: EventDraft) -> Result<(), StoreError>;

    async fn delete_event(&self, id: EventId) -> Result<(), StoreError>;
}
