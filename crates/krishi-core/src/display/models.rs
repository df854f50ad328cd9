//! Display implementations for domain models.
//!
//! All output is markdown meant for a terminal renderer.

use std::fmt;

use super::datetime::ClockTime;
use crate::{
    markdown::normalize_to_markdown,
    models::{Crop, CropPlan, Language, Message, Sender, Step, StepStatus, PLAN_DAYS},
};

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Malayalam => write!(f, "മലയാളം"),
            Language::English => write!(f, "English"),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let author = match self.sender {
            Sender::User => "You",
            Sender::Bot => "Krishi Mitra",
        };
        writeln!(f, "**{author}** ({})", ClockTime(&self.timestamp))?;
        writeln!(f)?;

        // Bot replies arrive as loosely formatted text
        if self.is_bot() {
            writeln!(f, "{}", normalize_to_markdown(&self.content))?;
        } else {
            writeln!(f, "{}", self.content)?;
        }

        if let Some(secondary) = &self.content_secondary {
            writeln!(f)?;
            for line in normalize_to_markdown(secondary).lines() {
                writeln!(f, "> {line}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **Day {}**: {} ({})",
            self.day,
            self.task,
            self.status.with_icon()
        )?;

        if let Some(suggestion) = &self.suggestion {
            writeln!(f, "  - Advice: {suggestion}")?;
        }
        if let Some(photo) = &self.photo_url {
            writeln!(f, "  - Photo: {photo}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CropPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) ({}/{PLAN_DAYS})",
            self.crop_name,
            self.id,
            self.completed_steps()
        )?;
        writeln!(f)?;
        writeln!(f, "- Started: {}", self.start_date)?;
        match self.active_day() {
            Some(day) => writeln!(f, "- Active day: {day}")?,
            None => writeln!(f, "- All days completed")?,
        }
        writeln!(f)?;

        for step in &self.steps {
            write!(f, "{step}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} {} (ID: {})", self.icon, self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Type**: {}", self.crop_type)?;
        writeln!(f, "- **Area**: {}", self.area)?;
        writeln!(f, "- **Yield**: {}", self.yield_estimate)?;
        if let Some(quantity) = &self.quantity {
            writeln!(f, "- **Quantity**: {quantity}")?;
        }
        if let Some(price) = &self.price {
            writeln!(f, "- **Price**: {price}")?;
        }
        if let Some(photo) = &self.photo_url {
            writeln!(f, "- **Photo**: {photo}")?;
        }
        if let Some(description) = &self.description {
            writeln!(f)?;
            writeln!(f, "{description}")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn sample_plan() -> CropPlan {
        let mut steps: Vec<Step> = (1..=PLAN_DAYS)
            .map(|day| Step::new(day, format!("Task {day}"), StepStatus::Locked))
            .collect();
        steps[0].status = StepStatus::Completed;
        steps[0].photo_url = Some("file:///tmp/leaf.jpg".to_string());
        steps[0].suggestion = Some("Use neem spray.".to_string());
        steps[1].status = StepStatus::Active;
        CropPlan {
            id: "3".to_string(),
            crop_name: "Rice".to_string(),
            start_date: date(2024, 6, 1),
            steps,
        }
    }

    #[test]
    fn test_plan_display() {
        let output = sample_plan().to_string();
        assert!(output.starts_with("## Rice (ID: 3) (1/7)"));
        assert!(output.contains("- Started: 2024-06-01"));
        assert!(output.contains("- Active day: 2"));
        assert!(output.contains("- **Day 1**: Task 1 (✓ Completed)"));
        assert!(output.contains("  - Advice: Use neem spray."));
        assert!(output.contains("- **Day 2**: Task 2 (➤ Active)"));
        assert!(output.contains("- **Day 7**: Task 7 (🔒 Locked)"));
    }

    #[test]
    fn test_message_display_quotes_secondary() {
        let message = Message::text("1".to_string(), Sender::Bot, "Tips: - water - mulch")
            .with_translations("Tips: - water - mulch".to_string(), "നനയ്ക്കുക".to_string());
        let output = message.to_string();

        assert!(output.starts_with("**Krishi Mitra** ("));
        assert!(output.contains("**Tips:**\n- water\n- mulch"));
        assert!(output.contains("> നനയ്ക്കുക"));
    }

    #[test]
    fn test_user_message_is_verbatim() {
        let output = Message::text("2".to_string(), Sender::User, "Tips: - water").to_string();
        assert!(output.starts_with("**You** ("));
        assert!(output.contains("Tips: - water"));
    }

    #[test]
    fn test_crop_display_optional_fields() {
        let crop = Crop {
            id: "1".to_string(),
            name: "Pepper".to_string(),
            crop_type: "Spice".to_string(),
            area: "1 acre".to_string(),
            yield_estimate: "New".to_string(),
            icon: "🌶️".to_string(),
            quantity: None,
            price: Some("₹400/kg".to_string()),
            description: None,
            photo_url: None,
        };
        let output = crop.to_string();
        assert!(output.contains("## 🌶️ Pepper (ID: 1)"));
        assert!(output.contains("- **Price**: ₹400/kg"));
        assert!(!output.contains("Quantity"));
    }
}
