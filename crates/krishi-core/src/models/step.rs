//! Care step model definition.

use serde::{Deserialize, Serialize};

use super::StepStatus;

/// One day's task within a crop care plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    /// Day of the plan (1..=7)
    pub day: u8,

    /// Bilingual task description
    pub task: String,

    pub status: StepStatus,

    /// Display URL of the photo attached as evidence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    /// Advice returned when evidence was attached
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Step {
    pub fn new(day: u8, task: impl Into<String>, status: StepStatus) -> Self {
        Self {
            day,
            task: task.into(),
            status,
            photo_url: None,
            suggestion: None,
        }
    }

    pub fn completed(&self) -> bool {
        self.status == StepStatus::Completed
    }

    pub fn active(&self) -> bool {
        self.status == StepStatus::Active
    }

    pub fn locked(&self) -> bool {
        self.status == StepStatus::Locked
    }
}
