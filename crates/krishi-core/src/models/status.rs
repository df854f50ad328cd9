//! Status and tag enumerations for messages and care steps.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unlock state of a single care step.
///
/// Steps only ever move forward: `Locked` → `Active` → `Completed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// Previous day has not been completed yet
    Locked,

    /// The day the farmer is currently working on
    Active,

    /// Day is done; never reverts
    Completed,
}

impl StepStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Locked => "locked",
            StepStatus::Active => "active",
            StepStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// ```rust
    /// use krishi_core::models::StepStatus;
    ///
    /// assert_eq!(StepStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(StepStatus::Active.with_icon(), "➤ Active");
    /// assert_eq!(StepStatus::Locked.with_icon(), "🔒 Locked");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepStatus::Completed => "✓ Completed",
            StepStatus::Active => "➤ Active",
            StepStatus::Locked => "🔒 Locked",
        }
    }
}

/// Who wrote a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Kind of content a message carries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Text,
    Image,
    Voice,
}

/// Languages the assistant answers in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Malayalam,
    English,
}

impl Language {
    /// BCP 47 tag handed to the speech engine.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Malayalam => "ml-IN",
            Language::English => "en-IN",
        }
    }

    /// The other language of the bilingual pair.
    pub fn other(&self) -> Language {
        match self {
            Language::Malayalam => Language::English,
            Language::English => Language::Malayalam,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ml" | "ml-in" | "malayalam" => Ok(Language::Malayalam),
            "en" | "en-in" | "english" => Ok(Language::English),
            _ => Err(format!("Invalid language: {s}")),
        }
    }
}
