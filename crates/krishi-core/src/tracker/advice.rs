//! Static day tables: default care tasks, dialog titles and photo advice.

const CARE_TASKS: [&str; 7] = [
    "മണ്ണ് തയ്യാറാക്കൽ / Soil Preparation",
    "വിത്ത് വിതയ്ക്കൽ / Seed Sowing",
    "പ്രാരംഭ നനയ്ക്കൽ / Initial Watering",
    "കീടനാശിനി പരിശോധന / Pest Inspection",
    "വളപ്രയോഗം / Fertilizer Application",
    "വളർച്ച നിരീക്ഷണം / Growth Monitoring",
    "വിളവെടുപ്പ് ആസൂത്രണം / Harvest Planning",
];

const DAY_TITLES: [&str; 7] = [
    "Disease Detection / രോഗം കണ്ടെത്തൽ",
    "Pest Type / കീടത്തിന്റെ തരം",
    "Treatment Suggestion / ചികിത്സ നിർദേശം",
    "Progress Check / പുരോഗതി പരിശോധന",
    "Additional Care / അധിക പരിചരണം",
    "Recovery Monitoring / രോഗശാന്തി നിരീക്ഷണം",
    "Final Status / അന്തിമ നില",
];

const SUGGESTIONS: [&str; 7] = [
    "Leaf spots detected. Use organic fungicide. / ഇലകളിൽ പാടുകൾ കണ്ടെത്തി. ഓർഗാനിക് ഫംഗിസൈഡ് ഉപയോഗിക്കുക.",
    "Aphids likely. Consider neem spray. / അഫിഡ്സ് സാധ്യത. വേപ്പിൻ എണ്ണ സ്പ്രേ പരിഗണിക്കുക.",
    "Apply balanced NPK as suggested. / നിർദേശിച്ചതുപോലെ ബാലൻസ്ഡ് NPK നൽകുക.",
    "Growth looks steady. Reduce watering. / വളർച്ച സ്ഥിരം. വെള്ളം കുറയ്ക്കുക.",
    "Mulching recommended. / മൾച്ചിംഗ് ശുപാർശ ചെയ്യുന്നു.",
    "Recovery on track. Monitor pests. / രോഗശാന്തി ശരിയായ രീതിയിൽ. കീടങ്ങൾ നിരീക്ഷിക്കുക.",
    "Ready for harvest planning. / വിളവെടുപ്പ് ആസൂത്രണത്തിന് തയ്യാറാണ്.",
];

const DEFAULT_SUGGESTION: &str = "Keep monitoring. / നിരീക്ഷണം തുടരുക.";

fn lookup(table: &'static [&'static str; 7], day: u8) -> Option<&'static str> {
    usize::from(day)
        .checked_sub(1)
        .and_then(|index| table.get(index))
        .copied()
}

/// Task assigned to `day` in a freshly created plan.
pub fn care_task(day: u8) -> String {
    lookup(&CARE_TASKS, day)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Day {day}"))
}

/// Title of the evidence dialog for `day`.
pub fn day_title(day: u8) -> String {
    lookup(&DAY_TITLES, day)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Day {day}"))
}

/// Advice attached to a step when a photo is uploaded for `day`.
pub fn suggestion_for_day(day: u8) -> &'static str {
    lookup(&SUGGESTIONS, day).unwrap_or(DEFAULT_SUGGESTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_table() {
        assert!(suggestion_for_day(2).starts_with("Aphids likely"));
        assert!(suggestion_for_day(7).starts_with("Ready for harvest"));
        assert_eq!(suggestion_for_day(0), DEFAULT_SUGGESTION);
        assert_eq!(suggestion_for_day(8), DEFAULT_SUGGESTION);
    }

    #[test]
    fn test_day_titles_fall_back() {
        assert!(day_title(4).starts_with("Progress Check"));
        assert_eq!(day_title(9), "Day 9");
    }

    #[test]
    fn test_care_tasks() {
        assert!(care_task(1).ends_with("Soil Preparation"));
        assert!(care_task(7).ends_with("Harvest Planning"));
    }
}
