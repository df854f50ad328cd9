//! Parameter structures for tracker operations.
//!
//! These structures carry no interface-specific derives so the CLI can wrap
//! them with its own clap argument types and convert via `From`.

use std::path::PathBuf;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Parameters for creating a new care plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlan {
    /// Crop the plan is for (required, unique)
    pub crop_name: String,
    /// First day of the plan; today's local date when omitted
    pub start_date: Option<Date>,
}

/// Identifies one day of one plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepRef {
    pub plan_id: String,
    pub day: u8,
}

/// Parameters for attaching a photo to a plan day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachEvidence {
    pub step: StepRef,
    /// Path of the photo on disk
    pub photo: PathBuf,
}

/// Fields of the "add crop" form.
///
/// `name`, `crop_type` and `area` are required; the rest is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCrop {
    pub name: String,
    pub crop_type: String,
    pub area: String,
    pub quantity: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub expected_yield: Option<String>,
    pub photo: Option<PathBuf>,
}
