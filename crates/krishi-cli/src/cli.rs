//! Tracker session commands.
//!
//! Each line of a tracker session is parsed with clap into [`SessionLine`].
//! The argument structs below carry the clap attributes and convert into the
//! interface-free parameter types of `krishi_core::params` via `From`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jiff::civil::Date;
use krishi_core::params::{AttachEvidence, CreatePlan, NewCrop, StepRef};

/// One command typed into the tracker session.
#[derive(Parser)]
#[command(name = "tracker", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Manage care plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Complete plan days
    #[command(alias = "s")]
    Step {
        #[command(subcommand)]
        command: StepCommands,
    },
    /// Manage the crop collection
    #[command(alias = "c")]
    Crop {
        #[command(subcommand)]
        command: CropCommands,
    },
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Start a 7-day care plan for a crop
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List all plans
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show one plan
    #[command(alias = "s")]
    Show {
        /// ID of the plan
        id: String,
    },
}

#[derive(Subcommand)]
pub enum StepCommands {
    /// Mark the active day as completed
    #[command(alias = "c")]
    Complete(StepArgs),
    /// Attach a photo to the active day, completing it
    #[command(alias = "e")]
    Evidence(EvidenceArgs),
}

#[derive(Subcommand)]
pub enum CropCommands {
    /// Add a crop to the collection
    #[command(alias = "a")]
    Add(AddCropArgs),
    /// List all crops
    #[command(aliases = ["l", "ls"])]
    List,
}

/// Start a care plan
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Crop the plan is for
    pub crop_name: String,
    /// First day of the plan (YYYY-MM-DD); today when omitted
    #[arg(long)]
    pub start: Option<Date>,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan {
            crop_name: val.crop_name,
            start_date: val.start,
        }
    }
}

/// Identify one day of a plan
#[derive(Args)]
pub struct StepArgs {
    /// ID of the plan
    pub plan_id: String,
    /// Day of the plan (1-7)
    pub day: u8,
}

impl From<StepArgs> for StepRef {
    fn from(val: StepArgs) -> Self {
        StepRef {
            plan_id: val.plan_id,
            day: val.day,
        }
    }
}

/// Attach photo evidence to a plan day
#[derive(Args)]
pub struct EvidenceArgs {
    #[command(flatten)]
    pub step: StepArgs,
    /// Path of the photo
    pub photo: PathBuf,
}

impl From<EvidenceArgs> for AttachEvidence {
    fn from(val: EvidenceArgs) -> Self {
        AttachEvidence {
            step: val.step.into(),
            photo: val.photo,
        }
    }
}

/// Fields of a new crop
#[derive(Args)]
pub struct AddCropArgs {
    /// Crop name
    pub name: String,
    /// Crop type, e.g. Vegetable, Cereal, Spice
    #[arg(long = "type", default_value = "")]
    pub crop_type: String,
    /// Cultivated area, e.g. "2 acres"
    #[arg(long, default_value = "")]
    pub area: String,
    #[arg(long)]
    pub quantity: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Expected yield
    #[arg(long = "yield")]
    pub expected_yield: Option<String>,
    /// Photo of the crop
    #[arg(long)]
    pub photo: Option<PathBuf>,
}

impl From<AddCropArgs> for NewCrop {
    fn from(val: AddCropArgs) -> Self {
        NewCrop {
            name: val.name,
            crop_type: val.crop_type,
            area: val.area,
            quantity: val.quantity,
            price: val.price,
            description: val.description,
            expected_yield: val.expected_yield,
            photo: val.photo,
        }
    }
}

/// Splits a session line into words, keeping double-quoted text together.
pub fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut in_word = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if in_word {
        words.push(current);
    }
    words
}
