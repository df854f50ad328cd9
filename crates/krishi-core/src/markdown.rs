//! Reshapes loosely structured model output into renderable markdown.
//!
//! The language model often answers with inline enumerations ("1) water
//! 2) weed") and bare "Label:" lines. [`normalize_to_markdown`] puts every list
//! marker at the start of its own line, bolds label lines and collapses blank
//! runs. The transform is deterministic and idempotent: a second pass over
//! its output returns the same string.

/// Normalizes free text into markdown.
///
/// - `1)` and `1.` markers followed by text start a new `1. ` line
/// - `-` and `•` markers followed by text start a new `- ` line
/// - a line starting with a letter and ending in `:` becomes `**line**`,
///   preceded by a blank line
/// - consecutive blank lines collapse to one; whitespace inside a line is
///   collapsed to single spaces
///
/// ```rust
/// use krishi_core::markdown::normalize_to_markdown;
///
/// assert_eq!(
///     normalize_to_markdown("Tips:\n1) Water daily 2) Add mulch"),
///     "**Tips:**\n1. Water daily\n2. Add mulch"
/// );
/// ```
pub fn normalize_to_markdown(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    for raw in text.trim().lines() {
        split_list_markers(raw, &mut lines);
    }

    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        let previous_is_text = out.last().is_some_and(|l| !l.is_empty());
        if line.is_empty() {
            if previous_is_text {
                out.push(line);
            }
        } else if is_heading(&line) {
            if previous_is_text {
                out.push(String::new());
            }
            out.push(format!("**{line}**"));
        } else {
            out.push(line);
        }
    }

    while out.last().is_some_and(String::is_empty) {
        out.pop();
    }
    out.join("\n")
}

/// Splits one raw line at every list marker that is followed by more text.
fn split_list_markers(raw: &str, lines: &mut Vec<String>) {
    let words: Vec<&str> = raw.split_whitespace().collect();
    if words.is_empty() {
        lines.push(String::new());
        return;
    }

    let mut current = String::new();
    for (index, word) in words.iter().enumerate() {
        let has_follower = index + 1 < words.len();
        match list_marker(word) {
            Some(marker) if has_follower => {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                current.push_str(&marker);
            }
            _ => {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
            }
        }
    }
    lines.push(current);
}

/// Canonical form of a list marker word, if it is one.
fn list_marker(word: &str) -> Option<String> {
    if word == "-" || word == "•" {
        return Some("-".to_string());
    }
    let digits = word
        .strip_suffix(')')
        .or_else(|| word.strip_suffix('.'))?;
    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        Some(format!("{digits}."))
    } else {
        None
    }
}

fn is_heading(line: &str) -> bool {
    line.ends_with(':') && line.starts_with(|c: char| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_heading_then_item() {
        assert_eq!(normalize_to_markdown("Heading:\nitem"), "**Heading:**\nitem");
    }

    #[test]
    fn test_heading_gets_blank_line_before() {
        assert_eq!(
            normalize_to_markdown("Rice needs care.\nWatering:\nKeep fields wet"),
            "Rice needs care.\n\n**Watering:**\nKeep fields wet"
        );
    }

    #[test]
    fn test_numbered_markers_are_canonical() {
        assert_eq!(
            normalize_to_markdown("Steps: 1) plough 2. sow 3) water"),
            "**Steps:**\n1. plough\n2. sow\n3. water"
        );
    }

    #[test]
    fn test_bullets_are_canonical() {
        assert_eq!(
            normalize_to_markdown("Use • neem oil - ash"),
            "Use\n- neem oil\n- ash"
        );
    }

    #[test]
    fn test_hyphenated_words_are_kept() {
        assert_eq!(
            normalize_to_markdown("Choose well-drained soil"),
            "Choose well-drained soil"
        );
    }

    #[test]
    fn test_decimal_is_not_a_marker() {
        assert_eq!(normalize_to_markdown("Apply 2.5 kg"), "Apply 2.5 kg");
    }

    #[test]
    fn test_trailing_marker_stays_inline() {
        assert_eq!(normalize_to_markdown("Read chapter 3."), "Read chapter 3.");
    }

    #[test]
    fn test_blank_runs_collapse() {
        assert_eq!(normalize_to_markdown("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize_to_markdown("\n\n  a  \n\n"), "a");
    }

    #[test]
    fn test_bold_heading_is_not_rewrapped() {
        assert_eq!(
            normalize_to_markdown("**Pests:**\n- aphids"),
            "**Pests:**\n- aphids"
        );
    }

    #[test]
    fn test_list_item_ending_in_colon_is_not_heading() {
        assert_eq!(normalize_to_markdown("1. Options:"), "1. Options:");
    }

    #[test]
    fn test_malayalam_text_passes_through() {
        let text = "നെല്ല് കൃഷി\n- വെള്ളം";
        assert_eq!(normalize_to_markdown(text), text);
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(text in "[a-zA-Z0-9 :.)•\\-\\n*]{0,120}") {
            let once = normalize_to_markdown(&text);
            let twice = normalize_to_markdown(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn output_has_no_blank_runs(text in "[a-z1-3 :.)\\-\\n]{0,80}") {
            let out = normalize_to_markdown(&text);
            prop_assert!(!out.contains("\n\n\n"));
            prop_assert!(!out.starts_with('\n'));
            prop_assert!(!out.ends_with('\n'));
        }
    }
}
