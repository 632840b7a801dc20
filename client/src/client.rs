// SPDX-FileCopyrightText: 2026 calgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! REST client for the remote event store.

use async_trait::async_trait;
use calgrid_core::{Event, EventDraft, EventId, EventStore, StoreError};
use chrono::{DateTime, Utc};
use reqwest::Method;

use crate::config::StoreConfig;
use crate::http::HttpClient;

/// Client for the `/events` REST API. Instants cross the wire as RFC 3339
/// reference-zone timestamps.
#[derive(Debug)]
pub struct RestEventStore {
    http: HttpClient,
}

impl RestEventStore {
    /// Creates a new store client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    fn map_not_found(id: EventId, err: StoreError) -> StoreError {
        match err {
            StoreError::Api { status: 404, .. } => StoreError::NotFound(id),
            other => other,
        }
    }
}

/// Wire representation of an event.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventDto {
    id: EventId,
    title: String,
    #[serde(default)]
    description: Option<String>,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    #[serde(default)]
    location: Option<String>,
}

impl From<EventDto> for Event {
    fn from(dto: EventDto) -> Self {
        Event {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            start: dto.start_time,
            end: dto.end_time,
            location: dto.location,
        }
    }
}

/// Wire representation of a create/update payload.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct EventPayload<'a> {
    title: &'a str,
    description: Option<&'a str>,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    location: Option<&'a str>,
}

impl<'a> From<&'a EventDraft> for EventPayload<'a> {
    fn from(draft: &'a EventDraft) -> Self {
        EventPayload {
            title: &draft.title,
            description: draft.description.as_deref(),
            start_time: draft.start,
            end_time: draft.end,
            location: draft.location.as_deref(),
        }
    }
}

#[async_trait]
impl EventStore for RestEventStore {
    async fn list_events(&self) -> Result<Vec<Event>, StoreError> {
        let resp = self
            .http
            .execute(self.http.request(Method::GET, "/events"))
            .await?;
        let dtos: Vec<EventDto> = resp
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn get_event(&self, id: EventId) -> Result<Event, StoreError> {
        let resp = self
            .http
            .execute(self.http.request(Method::GET, &format!("/events/{id}")))
            .await
            .map_err(|e| Self::map_not_found(id, e))?;
        let dto: EventDto = resp
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(dto.into())
    }

    async fn create_event(&self, draft: EventDraft) -> Result<Event, StoreError> {
        let resp = self
            .http
            .execute(
                self.http
                    .request(Method::POST, "/events")
                    .json(&EventPayload::from(&draft)),
            )
            .await?;
        let dto: EventDto = resp
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(dto.into())
    }

    async fn update_event(&self, id: EventId, draft: EventDraft) -> Result<(), StoreError> {
        self.http
            .execute(
                self.http
                    .request(Method::PUT, &format!("/events/{id}"))
                    .json(&EventPayload::from(&draft)),
            )
            .await
            .map_err(|e| Self::map_not_found(id, e))?;
        Ok(())
    }

    async fn delete_event(&self, id: EventId) -> Result<(), StoreError> {
        self.http
            .execute(self.http.request(Method::DELETE, &format!("/events/{id}")))
            .await
            .map_err(|e| Self::map_not_found(id, e))?;
        Ok(())
    }
}
