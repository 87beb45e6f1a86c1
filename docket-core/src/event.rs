//! Agenda event types, as consumed from the scheduling webhook.
//!
//! `event_date` stays a literal `YYYY-MM-DD` string end to end: the system
//! compares dates as strings and applies no time-zone conversion, so
//! neither do we. `event_time` is a local time-of-day string, shown as its
//! first five characters (`HH:MM`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::user::Role;

/// An event on the firm's agenda.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub event_date: String,
    pub event_time: String,
    pub status: EventStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default)]
    pub assignees: Vec<Assignee>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Event {
    /// Time-of-day as shown in lists (`HH:MM`).
    pub fn short_time(&self) -> &str {
        self.event_time.get(..5).unwrap_or(&self.event_time)
    }
}

/// A user summary attached to an event as a responsible party.
///
/// Related to the roster only by matching on `id`; the event carries its
/// own snapshot of name, role and avatar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignee {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Assignee {
    pub fn avatar_label(&self) -> String {
        match &self.avatar {
            Some(a) => a.clone(),
            None => self.name.chars().take(2).collect(),
        }
    }
}

/// A comment on an event. Append-only; identified by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_avatar: Option<String>,
    pub content: String,
    /// Opaque server timestamp, displayed as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Comment {
    pub fn author(&self) -> &str {
        self.user_name.as_deref().unwrap_or("Usuário")
    }

    pub fn avatar_label(&self) -> String {
        if let Some(a) = &self.user_avatar {
            return a.clone();
        }
        match &self.user_name {
            Some(name) => name.chars().take(2).collect(),
            None => "??".to_string(),
        }
    }
}

/// Event category.
///
/// Wire values are the backend's Portuguese identifiers. Unknown values
/// are preserved verbatim and display with the Meeting mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventType {
    Hearing,
    Meeting,
    Diligence,
    Deadline,
    Internal,
    Sales,
    Other(String),
}

impl EventType {
    /// The closed enumeration, in the order forms present it.
    pub const ALL: [EventType; 6] = [
        EventType::Hearing,
        EventType::Meeting,
        EventType::Diligence,
        EventType::Deadline,
        EventType::Internal,
        EventType::Sales,
    ];

    pub fn from_wire(value: impl Into<String>) -> EventType {
        let value = value.into();
        match value.as_str() {
            "audiencia" => EventType::Hearing,
            "reuniao" => EventType::Meeting,
            "diligencia" => EventType::Diligence,
            "prazo" => EventType::Deadline,
            "interno" => EventType::Internal,
            "comercial" => EventType::Sales,
            _ => EventType::Other(value),
        }
    }

    /// Parse a wire value, rejecting anything outside the enumeration.
    pub fn parse_known(value: &str) -> Option<EventType> {
        match EventType::from_wire(value) {
            EventType::Other(_) => None,
            known => Some(known),
        }
    }

    pub fn as_wire(&self) -> &str {
        match self {
            EventType::Hearing => "audiencia",
            EventType::Meeting => "reuniao",
            EventType::Diligence => "diligencia",
            EventType::Deadline => "prazo",
            EventType::Internal => "interno",
            EventType::Sales => "comercial",
            EventType::Other(value) => value,
        }
    }

    /// Display label. Unknown types fall back to the Meeting label.
    pub fn label(&self) -> &str {
        match self {
            EventType::Hearing => "Audiência",
            EventType::Meeting | EventType::Other(_) => "Reunião",
            EventType::Diligence => "Diligência",
            EventType::Deadline => "Prazo",
            EventType::Internal => "Interno",
            EventType::Sales => "Comercial",
        }
    }
}

impl Serialize for EventType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(EventType::from_wire(String::deserialize(deserializer)?))
    }
}

/// Event status.
///
/// Same wire conventions as [`EventType`]; unknown values display with the
/// Pending mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventStatus {
    Pending,
    Confirmed,
    Done,
    Urgent,
    Cancelled,
    Other(String),
}

impl EventStatus {
    pub const ALL: [EventStatus; 5] = [
        EventStatus::Pending,
        EventStatus::Confirmed,
        EventStatus::Done,
        EventStatus::Urgent,
        EventStatus::Cancelled,
    ];

    pub fn from_wire(value: impl Into<String>) -> EventStatus {
        let value = value.into();
        match value.as_str() {
            "pendente" => EventStatus::Pending,
            "confirmado" => EventStatus::Confirmed,
            "concluido" => EventStatus::Done,
            "urgente" => EventStatus::Urgent,
            "cancelado" => EventStatus::Cancelled,
            _ => EventStatus::Other(value),
        }
    }

    /// Parse a wire value, rejecting anything outside the enumeration.
    pub fn parse_known(value: &str) -> Option<EventStatus> {
        match EventStatus::from_wire(value) {
            EventStatus::Other(_) => None,
            known => Some(known),
        }
    }

    pub fn as_wire(&self) -> &str {
        match self {
            EventStatus::Pending => "pendente",
            EventStatus::Confirmed => "confirmado",
            EventStatus::Done => "concluido",
            EventStatus::Urgent => "urgente",
            EventStatus::Cancelled => "cancelado",
            EventStatus::Other(value) => value,
        }
    }

    /// Display label. Unknown statuses fall back to the Pending label.
    pub fn label(&self) -> &str {
        match self {
            EventStatus::Pending | EventStatus::Other(_) => "Pendente",
            EventStatus::Confirmed => "Confirmado",
            EventStatus::Done => "Concluído",
            EventStatus::Urgent => "Urgente",
            EventStatus::Cancelled => "Cancelado",
        }
    }
}

impl Serialize for EventStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for EventStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(EventStatus::from_wire(String::deserialize(deserializer)?))
    }
}
