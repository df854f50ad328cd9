//! Chat message model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Language, MessageKind, Sender};

/// A single entry of the conversation thread.
///
/// Messages are immutable once appended to the history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Identifier used to key the message in a rendering layer
    pub id: String,

    /// Text shown in the thread (primary language for bot replies)
    pub content: String,

    pub sender: Sender,

    /// Time the message was appended (UTC)
    pub timestamp: Timestamp,

    #[serde(rename = "type", default)]
    pub kind: MessageKind,

    /// Reply in the conversation's primary language, when the backend sent one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_primary: Option<String>,

    /// Reply in the secondary language, when the backend sent one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_secondary: Option<String>,
}

impl Message {
    /// Creates a plain text message stamped with the current time.
    pub fn text(id: String, sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            sender,
            timestamp: Timestamp::now(),
            kind: MessageKind::Text,
            content_primary: None,
            content_secondary: None,
        }
    }

    /// Sets the message kind.
    pub fn with_kind(mut self, kind: MessageKind) -> Self {
        self.kind = kind;
        self
    }

    /// Attaches both language renditions of a bot reply.
    pub fn with_translations(mut self, primary: String, secondary: String) -> Self {
        self.content_primary = Some(primary);
        self.content_secondary = Some(secondary);
        self
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }

    /// Text to read aloud for `lang`, given the conversation's primary
    /// language. Falls back to `content` when no rendition exists.
    pub fn text_for(&self, lang: Language, primary: Language) -> &str {
        let rendition = if lang == primary {
            self.content_primary.as_deref()
        } else {
            self.content_secondary.as_deref()
        };
        rendition.unwrap_or(&self.content)
    }
}
