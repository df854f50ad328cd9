//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper handles the empty case with a one-line message so callers can
//! print the wrapper without checking its length first.

use std::fmt;

use crate::{
    market::{PricePoint, WeatherDay},
    models::{Crop, CropPlan, Message},
};

/// Newtype wrapper for displaying a conversation history.
///
/// ```rust
/// use krishi_core::display::Transcript;
/// use krishi_core::models::{Message, Sender};
///
/// let transcript = Transcript(vec![Message::text("1".into(), Sender::User, "Hello")]);
/// assert!(transcript.to_string().contains("Hello"));
/// ```
pub struct Transcript(pub Vec<Message>);

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No messages yet.");
        }
        for message in &self.0 {
            write!(f, "{message}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying care plans.
pub struct Plans(pub Vec<CropPlan>);

impl Plans {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CropPlan> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Plans {
    type Item = &'a CropPlan;
    type IntoIter = std::slice::Iter<'a, CropPlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Plans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for plan in &self.0 {
                write!(f, "{plan}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the crop collection.
pub struct Crops(pub Vec<Crop>);

impl fmt::Display for Crops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No crops found.")
        } else {
            for crop in &self.0 {
                write!(f, "{crop}")?;
            }
            Ok(())
        }
    }
}

/// Weather panel of the dashboard.
pub struct WeatherOutlook(pub Vec<WeatherDay>);

impl fmt::Display for WeatherOutlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Weather / കാലാവസ്ഥ")?;
        writeln!(f)?;
        for day in &self.0 {
            writeln!(
                f,
                "- **{}**: {}°C, {}",
                day.label, day.temperature_c, day.condition
            )?;
        }
        Ok(())
    }
}

/// Price panel of the dashboard for one crop.
pub struct PriceTrend<'a> {
    pub crop: &'a str,
    pub points: Vec<PricePoint>,
}

impl fmt::Display for PriceTrend<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Market price: {}", self.crop)?;
        writeln!(f)?;
        if self.points.is_empty() {
            return writeln!(f, "No price data.");
        }
        for point in &self.points {
            writeln!(f, "- **{}**: ₹{}/kg", point.label, point.rupees_per_kg)?;
        }
        Ok(())
    }
}
