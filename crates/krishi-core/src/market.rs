//! Mocked weather outlook and market prices for the dashboard.
//!
//! The figures are fixed sample data; no external source is queried.

use serde::Serialize;

/// Weather for one day relative to today.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherDay {
    pub label: &'static str,
    pub temperature_c: i8,
    pub condition: &'static str,
}

/// Market price for one day relative to today, in rupees per kilogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub label: &'static str,
    pub rupees_per_kg: u32,
}

const DAY_LABELS: [&str; 4] = ["2 days ago", "Yesterday", "Today", "Tomorrow"];

/// Four-day weather window centred on today.
pub fn weather_outlook() -> Vec<WeatherDay> {
    let readings = [(26, "Cloudy"), (27, "Cloudy"), (28, "Partly Cloudy"), (29, "Sunny")];
    DAY_LABELS
        .into_iter()
        .zip(readings)
        .map(|(label, (temperature_c, condition))| WeatherDay {
            label,
            temperature_c,
            condition,
        })
        .collect()
}

/// Price trend for a crop, matched case-insensitively against the English
/// part of the name ("Tomato", "നെല്ല് / Rice"). `None` for unknown crops.
pub fn price_trend(crop: &str) -> Option<Vec<PricePoint>> {
    let english = crop.rsplit('/').next().unwrap_or(crop).trim().to_lowercase();
    let prices: [u32; 4] = match english.as_str() {
        "tomato" => [25, 28, 30, 32],
        "rice" => [23, 24, 25, 25],
        "pepper" => [390, 395, 400, 410],
        _ => return None,
    };

    Some(
        DAY_LABELS
            .into_iter()
            .zip(prices)
            .map(|(label, rupees_per_kg)| PricePoint {
                label,
                rupees_per_kg,
            })
            .collect(),
    )
}
