//! Transient bilingual notices shown after dashboard actions.

use std::fmt;

use crate::{
    error::{ErrorKind, KrishiError},
    tracker::day_title,
};

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Short message with a bilingual title and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success / വിജയം".to_string(),
            description: description.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn failure(description: impl Into<String>) -> Self {
        Self {
            title: "Error / പിശക്".to_string(),
            description: description.into(),
            kind: NoticeKind::Error,
        }
    }

    pub fn plan_created(crop_name: &str) -> Self {
        Self::success(format!(
            "Started plan for {crop_name} / {crop_name} പദ്ധതി ആരംഭിച്ചു"
        ))
    }

    pub fn crop_added() -> Self {
        Self::success("Crop added successfully / വിള വിജയകരമായി ചേർത്തു")
    }

    /// Notice after a day is completed, naming the day's dialog title.
    pub fn day_completed(day: u8) -> Self {
        Self {
            title: format!("Day {day} completed! / ദിവസം {day} പൂർത്തിയായി!"),
            description: day_title(day),
            kind: NoticeKind::Success,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

impl From<&KrishiError> for Notice {
    fn from(err: &KrishiError) -> Self {
        let description = match err {
            KrishiError::InvalidInput { field, .. } if field == "crop_name" => {
                "Please select a crop / ദയവായി ഒരു വിള തിരഞ്ഞെടുക്കുക".to_string()
            }
            KrishiError::InvalidInput { .. } => {
                "Please fill all required fields / ആവശ്യമായ എല്ലാ വിവരങ്ങളും നൽകുക".to_string()
            }
            KrishiError::DuplicatePlan { crop_name } => {
                format!("A plan for {crop_name} already exists / ഈ വിളയ്ക്ക് പദ്ധതി നിലവിലുണ്ട്")
            }
            KrishiError::StepNotActive {
                active_day: None, ..
            } => "All days are already completed / എല്ലാ ദിവസങ്ങളും പൂർത്തിയായി".to_string(),
            other if other.kind() == ErrorKind::Transport => {
                "Could not reach the assistant / സഹായിയുമായി ബന്ധപ്പെടാൻ കഴിഞ്ഞില്ല".to_string()
            }
            other => other.to_string(),
        };
        Self::failure(description)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self.kind {
            NoticeKind::Success => "✅",
            NoticeKind::Error => "⚠️",
        };
        writeln!(f, "{icon} **{}**", self.title)?;
        writeln!(f, "{}", self.description)
    }
}
