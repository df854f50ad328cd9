//! Core library for the Krishi Mitra farming assistant.
//!
//! The crate holds two independent state containers:
//!
//! - **Conversation Manager** ([`chat`]): bilingual chat history backed by a
//!   remote model over HTTP, with speech output and voice input behind
//!   injectable capabilities.
//! - **Crop Plan Tracker** ([`tracker`]): seven-day care plans in which each
//!   day unlocks only after the previous one is completed, plus the crop
//!   collection.
//!
//! Supporting modules normalise model output into markdown ([`markdown`]),
//! provide the dashboard's sample weather and prices ([`market`]) and render
//! everything as markdown ([`display`]).
//!
//! # Quick Start
//!
//! ```rust
//! use krishi_core::{
//!     display::Notice,
//!     params::{CreatePlan, StepRef},
//!     CropPlanTracker,
//! };
//!
//! let mut tracker = CropPlanTracker::new();
//! let plan = tracker.create_plan(&CreatePlan {
//!     crop_name: "Banana".to_string(),
//!     start_date: None,
//! })?;
//!
//! let plan = tracker.complete_step(&StepRef { plan_id: plan.id, day: 1 })?;
//! println!("{}", Notice::day_completed(1));
//! println!("{plan}");
//! # Ok::<(), krishi_core::KrishiError>(())
//! ```

pub mod chat;
pub mod display;
pub mod error;
pub mod ids;
pub mod markdown;
pub mod market;
pub mod models;
pub mod params;
pub mod tracker;

// Re-export commonly used types
pub use chat::{ConversationBuilder, ConversationManager, HttpBackend};
pub use display::{Notice, NoticeKind};
pub use error::{ErrorKind, KrishiError, Result};
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use markdown::normalize_to_markdown;
pub use models::{Crop, CropPlan, Language, Message, Step, StepStatus};
pub use tracker::CropPlanTracker;
