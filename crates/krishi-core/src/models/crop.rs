//! Crop model definition.

use serde::{Deserialize, Serialize};

/// A crop the farmer is growing, as listed on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Crop {
    pub id: String,

    pub name: String,

    /// Category such as "Vegetable" or "Spice"
    pub crop_type: String,

    /// Cultivated area, free text ("2 acres")
    pub area: String,

    /// Expected yield, "New" when not given
    pub yield_estimate: String,

    /// Icon derived from the crop type
    pub icon: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}
