use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// The event envelope Slack posts to the events endpoint.
///
/// Every field is optional on the wire; the handshake only carries
/// `challenge`, and unrelated callbacks may omit `event`. Fields are kept as
/// raw JSON so that any event shape is accepted and acknowledged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub challenge: Option<Value>,
    pub token: Option<Value>,
    pub event_id: Option<Value>,
    pub event: Option<SlackEvent>,
}

impl EventEnvelope {
    pub fn token(&self) -> Option<&str> {
        self.token.as_ref().and_then(Value::as_str)
    }

    pub fn event_id(&self) -> Option<&str> {
        self.event_id.as_ref().and_then(Value::as_str)
    }
}

/// A single event inside the envelope, as Slack sent it.
///
/// Slack's event types disagree on field shapes (`channel` is an id on
/// messages but an object on `channel_created`), so only the fields every
/// event shares are read here. [`SlackEvent::message`] gives the typed view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlackEvent(pub Value);

impl SlackEvent {
    fn str_field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub fn kind(&self) -> &str {
        self.str_field("type").unwrap_or_default()
    }

    pub fn event_ts(&self) -> Option<&str> {
        self.str_field("event_ts")
    }

    pub fn is_bot(&self) -> bool {
        self.0.get("bot_id").is_some_and(|v| !v.is_null())
    }

    /// Whether this is a human-authored message the bridge should act on.
    pub fn is_user_message(&self) -> bool {
        self.kind() == "message" && !self.is_bot()
    }

    /// The message fields, if this is a user message.
    pub fn message(&self) -> Option<InboundMessage> {
        if !self.is_user_message() {
            return None;
        }

        Some(InboundMessage {
            user: self.str_field("user").map(str::to_string),
            text: self.str_field("text").map(str::to_string),
            channel: self.str_field("channel").map(str::to_string),
        })
    }
}

/// The parts of a user `message` event the bridge works with.
///
/// Edits and deletions (`message_changed`, `message_deleted`) arrive as
/// `message` events without a top-level `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundMessage {
    pub user: Option<String>,
    pub text: Option<String>,
    pub channel: Option<String>,
}

/// Issue fields after validation: all three present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueFields {
    pub summary: String,
    pub priority: String,
    pub reporter: String,
}

/// What the tracker hands back for a newly created issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedIssue {
    pub key: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "self", default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn object_shaped_fields_are_accepted() {
        let envelope: EventEnvelope = serde_json::from_value(json!({
            "token": "t",
            "event": { "type": "channel_created", "event_ts": "1.0", "channel": { "id": "C1" } }
        }))
        .unwrap();

        let event = envelope.event.unwrap();
        assert_eq!(event.kind(), "channel_created");
        assert_eq!(event.event_ts(), Some("1.0"));
        assert!(event.message().is_none());
    }

    #[test]
    fn user_message_exposes_its_fields() {
        let event = SlackEvent(json!({ "type": "message", "user": "U1", "text": "hi", "channel": "C1" }));

        assert_eq!(
            event.message(),
            Some(InboundMessage {
                user: Some("U1".to_string()),
                text: Some("hi".to_string()),
                channel: Some("C1".to_string()),
            })
        );
    }

    #[test]
    fn bot_messages_are_not_user_messages() {
        let event = SlackEvent(json!({ "type": "message", "bot_id": "B1", "text": "hi" }));

        assert!(event.is_bot());
        assert!(event.message().is_none());
    }

    #[test]
    fn non_string_token_reads_as_absent() {
        let envelope: EventEnvelope = serde_json::from_value(json!({ "token": 42 })).unwrap();

        assert_eq!(envelope.token(), None);
    }
}
