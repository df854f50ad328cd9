//! Crop care plan model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Step;

/// Number of days in every care plan.
pub const PLAN_DAYS: u8 = 7;

/// A tracked care sequence for one named crop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropPlan {
    pub id: String,

    /// Crop the plan belongs to; unique across plans
    pub crop_name: String,

    /// First day of the plan
    pub start_date: Date,

    /// Ordered steps, day 1 first
    pub steps: Vec<Step>,
}

impl CropPlan {
    /// Day of the currently active step, `None` once every day is done.
    pub fn active_day(&self) -> Option<u8> {
        self.steps.iter().find(|s| s.active()).map(|s| s.day)
    }

    pub fn step(&self, day: u8) -> Option<&Step> {
        self.steps.iter().find(|s| s.day == day)
    }

    pub fn completed_steps(&self) -> usize {
        self.steps.iter().filter(|s| s.completed()).count()
    }

    pub fn is_finished(&self) -> bool {
        self.steps.iter().all(Step::completed)
    }

    /// Checks the unlock gate across all steps.
    ///
    /// Day `n` is locked iff day `n - 1` is not completed, at most one step is
    /// active, and a step is active iff it is neither locked nor completed.
    pub fn is_consistent(&self) -> bool {
        let mut previous_completed = true;
        let mut active = 0;
        for (index, step) in self.steps.iter().enumerate() {
            if usize::from(step.day) != index + 1 {
                return false;
            }
            if step.locked() == previous_completed {
                return false;
            }
            if step.active() {
                active += 1;
            }
            if step.photo_url.is_some() && !step.completed() {
                return false;
            }
            if step.photo_url.is_some() != step.suggestion.is_some() {
                return false;
            }
            previous_completed = step.completed();
        }
        active == usize::from(!self.is_finished())
    }
}
