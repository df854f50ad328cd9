//! Day unlock state machine for a single crop plan.
//!
//! ```text
//! locked --(day d-1 completed)--> active --(complete / evidence)--> completed
//! ```
//!
//! Transitions never mutate a plan in place: each one returns the next plan
//! value, which the tracker swaps into a new collection snapshot.

use jiff::civil::Date;

use super::advice;
use crate::{
    error::{KrishiError, Result},
    models::{CropPlan, Step, StepStatus, PLAN_DAYS},
};

/// Photo evidence recorded on a completed step.
#[derive(Debug, Clone, PartialEq)]
pub struct Evidence {
    pub photo_url: String,
    pub suggestion: String,
}

impl CropPlan {
    /// Builds a plan with day 1 active and every later day locked.
    pub fn fresh(id: String, crop_name: String, start_date: Date) -> Self {
        let steps = (1..=PLAN_DAYS)
            .map(|day| {
                let status = if day == 1 {
                    StepStatus::Active
                } else {
                    StepStatus::Locked
                };
                Step::new(day, advice::care_task(day), status)
            })
            .collect();

        Self {
            id,
            crop_name,
            start_date,
            steps,
        }
    }

    /// Returns the plan after completing `day`, optionally with evidence.
    ///
    /// Only the active day can be completed; any other day is rejected with
    /// [`KrishiError::StepNotActive`] and `self` is left untouched.
    pub fn with_day_completed(&self, day: u8, evidence: Option<Evidence>) -> Result<CropPlan> {
        if !(1..=PLAN_DAYS).contains(&day) {
            return Err(KrishiError::invalid_input("day")
                .with_reason(format!("must be between 1 and {PLAN_DAYS}, got {day}")));
        }

        let active_day = self.active_day();
        if active_day != Some(day) {
            return Err(KrishiError::StepNotActive {
                plan_id: self.id.clone(),
                day,
                active_day,
            });
        }

        let steps = self
            .steps
            .iter()
            .map(|step| {
                if step.day == day {
                    let mut done = step.clone();
                    done.status = StepStatus::Completed;
                    if let Some(evidence) = &evidence {
                        done.photo_url = Some(evidence.photo_url.clone());
                        done.suggestion = Some(evidence.suggestion.clone());
                    }
                    done
                } else if step.day == day + 1 {
                    let mut next = step.clone();
                    next.status = StepStatus::Active;
                    next
                } else {
                    step.clone()
                }
            })
            .collect();

        Ok(CropPlan {
            id: self.id.clone(),
            crop_name: self.crop_name.clone(),
            start_date: self.start_date,
            steps,
        })
    }
}
