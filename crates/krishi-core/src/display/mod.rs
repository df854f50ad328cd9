//! Markdown rendering of conversations, plans, crops and notices.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and dashboard panels are shown through newtype wrappers so the CLI never
//! builds markdown by hand.
//!
//! ## Module Organization
//!
//! - [`collections`]: wrappers for transcripts, plans, crops, weather, prices
//! - [`notice`]: bilingual transient notices ([`Notice`])
//! - [`datetime`]: time-of-day formatting for message timestamps
//! - [`models`]: `Display` implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use krishi_core::display::{Notice, Plans};
//! use krishi_core::CropPlanTracker;
//!
//! let tracker = CropPlanTracker::new().with_demo_data();
//! let output = Plans(tracker.plans().to_vec()).to_string();
//! assert!(output.contains("Tomato"));
//!
//! let notice = Notice::day_completed(4);
//! assert!(notice.to_string().contains("Day 4 completed!"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod notice;

pub use collections::{Crops, Plans, PriceTrend, Transcript, WeatherOutlook};
pub use datetime::ClockTime;
pub use notice::{Notice, NoticeKind};
