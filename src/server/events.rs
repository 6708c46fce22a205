//! The Slack Events API endpoint.

use axum::{Json, extract::State};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::{base::types::EventEnvelope, interaction::issue_request::handle_issue_request, runtime::Runtime};

use super::error::WebhookError;

/// Body of every successful webhook response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Ack {
    Challenge { challenge: Value },
    Status { status: &'static str },
}

impl Ack {
    pub fn ok() -> Self {
        Self::Status { status: "ok" }
    }

    pub fn duplicate() -> Self {
        Self::Status { status: "duplicate" }
    }
}

/// Handles one delivery from Slack.
///
/// The handshake is answered before the token is checked. Events are
/// de-duplicated by `event_ts` (or the envelope's `event_id`), and only
/// human-authored `message` events go on to issue creation. Processing is
/// awaited, but its failures never change the response.
#[instrument(skip_all)]
pub async fn events_handler(State(runtime): State<Runtime>, Json(envelope): Json<EventEnvelope>) -> Result<Json<Ack>, WebhookError> {
    if let Some(challenge) = &envelope.challenge {
        info!("Answering URL verification challenge.");
        return Ok(Json(Ack::Challenge { challenge: challenge.clone() }));
    }

    if envelope.token() != Some(runtime.config.slack_verification_token.as_str()) {
        warn!("Rejected event with an invalid verification token.");
        return Err(WebhookError::InvalidToken);
    }

    let Some(event) = &envelope.event else {
        return Ok(Json(Ack::ok()));
    };

    match event.event_ts().or(envelope.event_id()) {
        Some(id) => {
            if !runtime.dedup.insert_if_absent(id) {
                info!("Duplicate event detected; skipping {}.", id);
                return Ok(Json(Ack::duplicate()));
            }
        }
        None => warn!("Event has no identifier; processing without dedup."),
    }

    let Some(message) = event.message() else {
        debug!("Ignoring `{}` event (bot: {}).", event.kind(), event.is_bot());
        return Ok(Json(Ack::ok()));
    };

    let Some(text) = message.text.as_deref() else {
        debug!("Skipping message event without text (edit or delete).");
        return Ok(Json(Ack::ok()));
    };

    let Some(channel_id) = message.channel.as_deref() else {
        warn!("Message event has no channel; nothing to reply to.");
        return Ok(Json(Ack::ok()));
    };

    handle_issue_request(
        message.user.as_deref().unwrap_or_default(),
        text,
        channel_id,
        &runtime.tracker,
        &runtime.chat,
    )
    .await;

    Ok(Json(Ack::ok()))
}
