//! Crop collection operations for the tracker.

use log::info;

use super::{photos, CropPlanTracker};
use crate::{
    error::{KrishiError, Result},
    models::Crop,
    params::NewCrop,
};

const FALLBACK_ICON: &str = "🌱";

/// Icon shown next to a crop of the given type.
pub fn icon_for_crop_type(crop_type: &str) -> &'static str {
    match crop_type {
        "Vegetable" => "🥬",
        "Cereal" => "🌾",
        "Fruit" => "🍎",
        "Spice" => "🌶️",
        "Pulse" => "🫘",
        "Oilseed" => "🌻",
        "Cash Crop" => "💰",
        "Flower" => "🌸",
        _ => FALLBACK_ICON,
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(KrishiError::invalid_input(field).with_reason("is required"));
    }
    Ok(value)
}

fn optional(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl CropPlanTracker {
    /// Adds a crop from the dashboard form.
    ///
    /// # Errors
    ///
    /// Returns `KrishiError::InvalidInput` naming the first empty required
    /// field, or `KrishiError::FileSystem` when the photo cannot be read. The
    /// collection is unchanged on error.
    pub fn add_crop(&mut self, fields: &NewCrop) -> Result<Crop> {
        let name = required("name", &fields.name)?;
        let crop_type = required("type", &fields.crop_type)?;
        let area = required("area", &fields.area)?;

        let photo_url = fields
            .photo
            .as_deref()
            .map(photos::photo_url)
            .transpose()?;

        let crop = Crop {
            id: self.ids.next_id(),
            name: name.to_string(),
            crop_type: crop_type.to_string(),
            area: area.to_string(),
            yield_estimate: optional(fields.expected_yield.as_ref())
                .unwrap_or_else(|| "New".to_string()),
            icon: icon_for_crop_type(crop_type).to_string(),
            quantity: optional(fields.quantity.as_ref()),
            price: optional(fields.price.as_ref()),
            description: optional(fields.description.as_ref()),
            photo_url,
        };

        let mut crops = Vec::with_capacity(self.crops.len() + 1);
        crops.extend(self.crops.iter().cloned());
        crops.push(crop.clone());
        self.crops = crops.into();

        info!("Added crop {} ({})", crop.name, crop.id);
        Ok(crop)
    }
}
