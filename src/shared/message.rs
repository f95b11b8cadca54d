/**
 * Chat Message Data Structures
 *
 * This module defines the wire format of the trip chat channel and the
 * record shape handed to the persistence layer.
 *
 * Clients send loosely-shaped JSON text frames. The server only trusts the
 * body, sender and agent flag; the timestamp and trip identifier are always
 * assigned at receipt time.
 */
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Sender used when a frame does not name one
pub const UNKNOWN_SENDER: &str = "unknown";

/// A chat message as broadcast to every participant of a trip
///
/// # Fields
/// * `message` - The message body
/// * `sender` - The sender's identifier
/// * `is_agent` - Whether the sender is an automated assistant (`isAgent` on the wire)
/// * `timestamp` - Server receipt time, RFC3339 in UTC
/// * `trip_id` - The trip whose chat channel received the message
///
/// # Example
/// ```rust
/// use tripwizards::shared::ChatMessage;
///
/// let message = ChatMessage::new("trip-1", "See you at the airport", "alice", false);
/// assert_eq!(message.trip_id, "trip-1");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// The message text content
    pub message: String,
    /// The sender's identifier
    pub sender: String,
    /// True when an assistant produced the message
    #[serde(rename = "isAgent")]
    pub is_agent: bool,
    /// ISO 8601 timestamp (RFC3339 format, UTC)
    pub timestamp: String,
    /// Trip the message belongs to
    pub trip_id: String,
}

/// Fields a client is allowed to supply in an inbound frame
///
/// Anything else in the frame, including `timestamp` and `trip_id`, is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct InboundFrame {
    #[serde(default)]
    pub message: String,
    #[serde(default = "default_sender")]
    pub sender: String,
    #[serde(rename = "isAgent", default)]
    pub is_agent: bool,
}

fn default_sender() -> String {
    UNKNOWN_SENDER.to_string()
}

impl InboundFrame {
    /// Parse a text frame received on the chat channel
    ///
    /// Missing fields fall back to their defaults. A frame that is not a JSON
    /// object, or whose known fields carry the wrong JSON type, is rejected.
    pub fn parse(text: &str) -> Result<Self, SharedError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(SharedError::malformed_frame("chat frame must be a JSON object"));
        }
        Ok(serde_json::from_value(value)?)
    }
}

impl ChatMessage {
    /// Create a message stamped with the current UTC time
    pub fn new(
        trip_id: impl Into<String>,
        message: impl Into<String>,
        sender: impl Into<String>,
        is_agent: bool,
    ) -> Self {
        Self {
            message: message.into(),
            sender: sender.into(),
            is_agent,
            timestamp: get_timestamp(),
            trip_id: trip_id.into(),
        }
    }

    /// Stamp an inbound frame with the receiving trip and the current time
    pub fn stamp(frame: InboundFrame, trip_id: &str) -> Self {
        Self::new(trip_id, frame.message, frame.sender, frame.is_agent)
    }

    /// Parse and stamp a raw text frame in one step
    pub fn from_frame(text: &str, trip_id: &str) -> Result<Self, SharedError> {
        InboundFrame::parse(text).map(|frame| Self::stamp(frame, trip_id))
    }

    /// Serialize for an outbound text frame
    pub fn to_frame(&self) -> Result<String, SharedError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Shape of a chat message in the `chat_messages` collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageRecord {
    pub trip_id: String,
    pub message: String,
    pub sender: String,
    pub is_agent: bool,
    pub timestamp: String,
}

impl From<&ChatMessage> for ChatMessageRecord {
    fn from(message: &ChatMessage) -> Self {
        Self {
            trip_id: message.trip_id.clone(),
            message: message.message.clone(),
            sender: message.sender.clone(),
            is_agent: message.is_agent,
            timestamp: message.timestamp.clone(),
        }
    }
}

/// Current time as an RFC3339 string with a `Z` suffix
fn get_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
