//! Inquiry message analysis
//!
//! Extracts project type, quantity, budget, urgency, and detail signals
//! from a free-text inquiry with a single case-insensitive pass. Pure and
//! deterministic; an empty message yields all defaults.

use regex::Regex;

use super::types::{MessageAnalysis, ProjectType, UrgencyLevel};

/// Ordered project-type keyword groups; the first group with a substring
/// match wins, so "wedding gala" classifies as wedding, not evening.
const PROJECT_KEYWORDS: &[(ProjectType, &[&str])] = &[
    (
        ProjectType::Wedding,
        &["wedding", "bride", "bridal", "groom", "ceremony"],
    ),
    (
        ProjectType::Evening,
        &["evening", "gala", "formal", "black tie", "cocktail"],
    ),
    (
        ProjectType::RedCarpet,
        &["red carpet", "premiere", "awards", "celebrity"],
    ),
    (
        ProjectType::Corporate,
        &["corporate", "business", "office", "professional"],
    ),
    (
        ProjectType::Casual,
        &["casual", "everyday", "weekend", "comfortable"],
    ),
    (
        ProjectType::Custom,
        &["custom", "bespoke", "tailored", "made to measure"],
    ),
    (
        ProjectType::Alteration,
        &["alteration", "adjustment", "fitting", "resize"],
    ),
    (
        ProjectType::Consultation,
        &["consultation", "advice", "styling", "wardrobe"],
    ),
];

/// Ordered urgency keyword groups, most urgent first.
const URGENCY_KEYWORDS: &[(UrgencyLevel, &[&str])] = &[
    (
        UrgencyLevel::Urgent,
        &["urgent", "asap", "rush", "emergency"],
    ),
    (UrgencyLevel::High, &["next week", "this month", "soon"]),
    (
        UrgencyLevel::Normal,
        &["next month", "few months", "planning"],
    ),
    (UrgencyLevel::Low, &["next year", "future", "eventually"]),
];

const DETAIL_KEYWORDS: &[&str] = &["fabric", "color", "style"];

/// Analyzer with pre-compiled extraction patterns
pub struct MessageAnalyzer {
    quantity_re: Regex,
    budget_res: Vec<Regex>,
}

impl MessageAnalyzer {
    pub fn new() -> Self {
        let quantity_re =
            Regex::new(r"(?i)(\d+)\s*(?:pieces?|items?|dress(?:es)?|suits?|outfits?|garments?)")
                .expect("valid regex");

        // Tried in order; the first pattern with a match wins.
        let budget_res = [
            r"\$\s*([0-9][0-9,]*)",
            r"£\s*([0-9][0-9,]*)",
            r"€\s*([0-9][0-9,]*)",
            r"(?i)budget[^0-9]*([0-9][0-9,]*)",
            r"(?i)spend[^0-9]*([0-9][0-9,]*)",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("valid regex"))
        .collect();

        Self {
            quantity_re,
            budget_res,
        }
    }

    /// Analyze an inquiry message.
    ///
    /// The inquiry type is accepted for parity with the lead intake surface
    /// but does not currently alter the analysis.
    pub fn analyze(&self, message: &str, _inquiry_type: &str) -> MessageAnalysis {
        let lower = message.to_lowercase();

        MessageAnalysis {
            project_type: detect_project_type(&lower),
            quantity: self.extract_quantity(message),
            mentioned_budget: self.extract_budget(message),
            urgency_level: detect_urgency(&lower),
            message_length: message.chars().count(),
            has_specific_details: DETAIL_KEYWORDS.iter().any(|k| lower.contains(k)),
        }
    }

    /// Extract the mentioned piece count, defaulting to 1.
    ///
    /// Shared by the analysis pass and the quantity multiplier so both see
    /// the same count.
    pub fn extract_quantity(&self, message: &str) -> u32 {
        self.quantity_re
            .captures(message)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(1)
    }

    /// Extract a mentioned budget figure, defaulting to 0.
    fn extract_budget(&self, message: &str) -> i64 {
        for re in &self.budget_res {
            if let Some(caps) = re.captures(message) {
                if let Some(m) = caps.get(1) {
                    let digits: String = m.as_str().chars().filter(|c| c.is_ascii_digit()).collect();
                    if let Ok(value) = digits.parse::<i64>() {
                        return value;
                    }
                }
            }
        }
        0
    }
}

impl Default for MessageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn detect_project_type(lower: &str) -> ProjectType {
    for (project_type, keywords) in PROJECT_KEYWORDS {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *project_type;
        }
    }
    ProjectType::General
}

fn detect_urgency(lower: &str) -> UrgencyLevel {
    for (level, keywords) in URGENCY_KEYWORDS {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *level;
        }
    }
    UrgencyLevel::Normal
}
