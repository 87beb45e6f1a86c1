//! Envelope and request types for the scheduling webhook API.
//!
//! Every endpoint answers a JSON envelope with at least a `success`
//! boolean; collection payloads nest under a named key (`events`, `team`,
//! `event`, `comments`) and failures carry `error`.

use serde::{Deserialize, Serialize};

use crate::error::{DocketError, DocketResult};
use crate::event::{Comment, Event, EventStatus, EventType};
use crate::user::User;

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TeamResponse {
    pub success: bool,
    #[serde(default)]
    pub team: Option<Vec<User>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EventsResponse {
    pub success: bool,
    #[serde(default)]
    pub events: Option<Vec<Event>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EventResponse {
    pub success: bool,
    #[serde(default)]
    pub event: Option<Event>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommentsResponse {
    pub success: bool,
    #[serde(default)]
    pub comments: Option<Vec<Comment>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response to a mutation. Some workflows echo the affected event back;
/// when present it is the authoritative copy to patch local state with.
#[derive(Debug, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub event: Option<Event>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SyncResponse {
    pub success: bool,
    #[serde(default)]
    pub synced: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Payload for creating an event; mirrors the original creation form.
#[derive(Debug, Clone, Serialize)]
pub struct NewEvent {
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub event_date: String,
    pub event_time: String,
    pub status: EventStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    /// The original form always submits this constant.
    pub category: String,
    pub created_by: i64,
}

impl NewEvent {
    /// Required-field check, performed before any request is issued.
    pub fn validate(&self) -> DocketResult<()> {
        if self.title.trim().is_empty() {
            return Err(DocketError::Validation("title is required".into()));
        }
        if self.event_date.trim().is_empty() {
            return Err(DocketError::Validation("event date is required".into()));
        }
        if self.event_time.trim().is_empty() {
            return Err(DocketError::Validation("event time is required".into()));
        }
        Ok(())
    }
}

/// Partial event update; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
}

impl EventPatch {
    pub fn status(status: EventStatus) -> Self {
        EventPatch { status: Some(status), ..Default::default() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub user_id: i64,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- envelopes ---

    #[test]
    fn login_failure_carries_error() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"success": false, "error": "Usuário não encontrado"}"#).unwrap();
        assert!(!resp.success);
        assert!(resp.user.is_none());
        assert_eq!(resp.error.as_deref(), Some("Usuário não encontrado"));
    }

    #[test]
    fn events_payload_nests_under_named_key() {
        let resp: EventsResponse = serde_json::from_str(
            r#"{"success": true, "events": [{
                "id": 1, "title": "x", "type": "reuniao",
                "event_date": "2026-08-03", "event_time": "10:00", "status": "pendente"
            }]}"#,
        )
        .unwrap();
        assert_eq!(resp.events.unwrap().len(), 1);
    }

    #[test]
    fn sync_count_is_optional() {
        let resp: SyncResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(resp.success);
        assert!(resp.synced.is_none());
    }

    // --- request bodies ---

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = EventPatch::status(EventStatus::Done);
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"status": "concluido"}));
    }

    #[test]
    fn new_event_serializes_wire_names() {
        let new = NewEvent {
            title: "Audiência".into(),
            event_type: EventType::Hearing,
            event_date: "2026-08-10".into(),
            event_time: "14:00".into(),
            status: EventStatus::Pending,
            location: None,
            client_name: Some("João Silva".into()),
            category: "cliente".into(),
            created_by: 3,
        };
        let json = serde_json::to_value(&new).unwrap();
        assert_eq!(json["type"], "audiencia");
        assert_eq!(json["status"], "pendente");
        assert_eq!(json["created_by"], 3);
        assert!(json.get("location").is_none());
    }

    #[test]
    fn new_event_validation_requires_fields() {
        let mut new = NewEvent {
            title: "x".into(),
            event_type: EventType::Meeting,
            event_date: "2026-08-10".into(),
            event_time: "14:00".into(),
            status: EventStatus::Pending,
            location: None,
            client_name: None,
            category: "cliente".into(),
            created_by: 1,
        };
        assert!(new.validate().is_ok());

        new.title = "  ".into();
        assert!(new.validate().is_err());
    }
}
