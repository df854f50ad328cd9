//! Data models for conversations, care plans and crops.
//!
//! Models are plain data. State transitions live in [`crate::tracker`] and
//! [`crate::chat`]; markdown `Display` implementations live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use krishi_core::models::{Step, StepStatus};
//!
//! let step = Step::new(1, "Soil Preparation", StepStatus::Active);
//! assert!(step.active());
//! assert!(!step.locked());
//! ```

pub mod crop;
pub mod message;
pub mod plan;
pub mod status;
pub mod step;

pub use crop::Crop;
pub use message::Message;
pub use plan::{CropPlan, PLAN_DAYS};
pub use status::{Language, MessageKind, Sender, StepStatus};
pub use step::Step;
