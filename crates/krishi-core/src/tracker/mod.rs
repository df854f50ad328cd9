//! Crop plan tracker: care plans with a strict day-unlock gate, plus the crop
//! collection shown on the dashboard.
//!
//! All state is process-lifetime and in-memory. Every mutation swaps in a new
//! `Arc<Vec<_>>`, so a snapshot obtained from [`CropPlanTracker::plans`] or
//! [`CropPlanTracker::crops`] never changes under its holder.
//!
//! # Submodules
//!
//! - [`advice`]: default tasks, dialog titles and per-day advice tables
//! - [`progress`]: the locked → active → completed transitions of a plan
//! - [`crops`]: crop collection and the type → icon table
//! - [`photos`]: display URLs for photo evidence
//!
//! # Examples
//!
//! ```rust
//! use krishi_core::{params::{CreatePlan, StepRef}, CropPlanTracker};
//!
//! let mut tracker = CropPlanTracker::new();
//! let plan = tracker
//!     .create_plan(&CreatePlan { crop_name: "Rice".to_string(), start_date: None })
//!     .unwrap();
//! assert_eq!(plan.active_day(), Some(1));
//!
//! let plan = tracker
//!     .complete_step(&StepRef { plan_id: plan.id.clone(), day: 1 })
//!     .unwrap();
//! assert_eq!(plan.active_day(), Some(2));
//! ```

use std::sync::Arc;

use jiff::{civil::Date, Zoned};
use log::{debug, info};

pub mod advice;
pub mod crops;
pub mod photos;
pub mod progress;


pub use advice::{day_title, suggestion_for_day};
pub use crops::icon_for_crop_type;
pub use progress::Evidence;

use crate::{
    error::{KrishiError, Result},
    ids::{IdGenerator, SequentialIds},
    models::{Crop, CropPlan, StepStatus},
    params::{AttachEvidence, CreatePlan, StepRef},
};

/// In-memory state container for plans and crops.
pub struct CropPlanTracker {
    plans: Arc<Vec<CropPlan>>,
    crops: Arc<Vec<Crop>>,
    ids: Arc<dyn IdGenerator>,
}

impl CropPlanTracker {
    /// Creates an empty tracker numbering plans and crops from 1.
    pub fn new() -> Self {
        Self::with_ids(Arc::new(SequentialIds::new()))
    }

    /// Creates an empty tracker using the given id generator.
    pub fn with_ids(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            plans: Arc::new(Vec::new()),
            crops: Arc::new(Vec::new()),
            ids,
        }
    }

    /// Seeds the dashboard's sample crops and a tomato plan on day 4.
    pub fn with_demo_data(mut self) -> Self {
        let samples = [
            ("തക്കാളി / Tomato", "Vegetable", "2 acres", "Good", "🍅", "500 kg", "₹30/kg"),
            ("നെല്ല് / Rice", "Cereal", "5 acres", "Excellent", "🌾", "2000 kg", "₹25/kg"),
            ("കുരുമുളക് / Pepper", "Spice", "1 acre", "Average", "🌶️", "50 kg", "₹400/kg"),
        ];
        let crops: Vec<Crop> = samples
            .iter()
            .map(|(name, crop_type, area, estimate, icon, quantity, price)| Crop {
                id: self.ids.next_id(),
                name: (*name).to_string(),
                crop_type: (*crop_type).to_string(),
                area: (*area).to_string(),
                yield_estimate: (*estimate).to_string(),
                icon: (*icon).to_string(),
                quantity: Some((*quantity).to_string()),
                price: Some((*price).to_string()),
                description: None,
                photo_url: None,
            })
            .collect();

        let mut tomato = CropPlan::fresh(
            self.ids.next_id(),
            "തക്കാളി / Tomato".to_string(),
            jiff::civil::date(2024, 1, 1),
        );
        for step in &mut tomato.steps {
            step.status = match step.day {
                1..=3 => StepStatus::Completed,
                4 => StepStatus::Active,
                _ => StepStatus::Locked,
            };
        }

        self.crops = Arc::new(crops);
        self.plans = Arc::new(vec![tomato]);
        self
    }

    /// Snapshot of all plans in creation order.
    pub fn plans(&self) -> Arc<Vec<CropPlan>> {
        Arc::clone(&self.plans)
    }

    /// Snapshot of all crops in insertion order.
    pub fn crops(&self) -> Arc<Vec<Crop>> {
        Arc::clone(&self.crops)
    }

    pub fn plan(&self, plan_id: &str) -> Option<&CropPlan> {
        self.plans.iter().find(|p| p.id == plan_id)
    }

    /// Creates a plan for a crop that has none yet.
    ///
    /// # Errors
    ///
    /// Returns `KrishiError::InvalidInput` for an empty crop name and
    /// `KrishiError::DuplicatePlan` when the crop already has a plan. The plan
    /// collection is unchanged on error.
    pub fn create_plan(&mut self, params: &CreatePlan) -> Result<CropPlan> {
        let crop_name = params.crop_name.trim();
        if crop_name.is_empty() {
            return Err(KrishiError::invalid_input("crop_name").with_reason("please select a crop"));
        }
        if self.plans.iter().any(|p| p.crop_name == crop_name) {
            return Err(KrishiError::DuplicatePlan {
                crop_name: crop_name.to_string(),
            });
        }

        let start_date = params.start_date.unwrap_or_else(today);
        let plan = CropPlan::fresh(self.ids.next_id(), crop_name.to_string(), start_date);

        let mut plans = Vec::with_capacity(self.plans.len() + 1);
        plans.extend(self.plans.iter().cloned());
        plans.push(plan.clone());
        self.plans = Arc::new(plans);

        info!("Created plan {} for {}", plan.id, plan.crop_name);
        Ok(plan)
    }

    /// Marks the plan's active day as completed and unlocks the next day.
    ///
    /// # Errors
    ///
    /// `PlanNotFound` for an unknown plan, `InvalidInput` for a day outside
    /// 1..=7 and `StepNotActive` when `day` is not the active day.
    pub fn complete_step(&mut self, params: &StepRef) -> Result<CropPlan> {
        let updated = self
            .find_plan(&params.plan_id)?
            .with_day_completed(params.day, None)?;
        self.replace_plan(updated.clone());

        debug!("Plan {} day {} completed", params.plan_id, params.day);
        Ok(updated)
    }

    /// Attaches a photo to the active day, which completes it with the day's
    /// advice and unlocks the next day.
    ///
    /// # Errors
    ///
    /// Same as [`CropPlanTracker::complete_step`], plus `FileSystem` when the
    /// photo cannot be resolved.
    pub fn attach_evidence(&mut self, params: &AttachEvidence) -> Result<CropPlan> {
        let plan = self.find_plan(&params.step.plan_id)?;
        let evidence = Evidence {
            photo_url: photos::photo_url(&params.photo)?,
            suggestion: suggestion_for_day(params.step.day).to_string(),
        };
        let updated = plan.with_day_completed(params.step.day, Some(evidence))?;
        self.replace_plan(updated.clone());

        debug!(
            "Plan {} day {} completed with photo evidence",
            params.step.plan_id, params.step.day
        );
        Ok(updated)
    }

    fn find_plan(&self, plan_id: &str) -> Result<&CropPlan> {
        self.plan(plan_id).ok_or_else(|| KrishiError::PlanNotFound {
            id: plan_id.to_string(),
        })
    }

    fn replace_plan(&mut self, updated: CropPlan) {
        let plans: Vec<CropPlan> = self
            .plans
            .iter()
            .map(|p| {
                if p.id == updated.id {
                    updated.clone()
                } else {
                    p.clone()
                }
            })
            .collect();
        self.plans = Arc::new(plans);
    }
}

impl Default for CropPlanTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn today() -> Date {
    Zoned::now().date()
}
