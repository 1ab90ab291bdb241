//! Core types for the revenue estimation engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Project category detected from an inquiry message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Wedding,
    Evening,
    RedCarpet,
    Corporate,
    Casual,
    Custom,
    Alteration,
    Consultation,
    /// Default when no keyword group matches
    General,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wedding => "wedding",
            Self::Evening => "evening",
            Self::RedCarpet => "red_carpet",
            Self::Corporate => "corporate",
            Self::Casual => "casual",
            Self::Custom => "custom",
            Self::Alteration => "alteration",
            Self::Consultation => "consultation",
            Self::General => "general",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wedding" => Ok(Self::Wedding),
            "evening" => Ok(Self::Evening),
            "red_carpet" => Ok(Self::RedCarpet),
            "corporate" => Ok(Self::Corporate),
            "casual" => Ok(Self::Casual),
            "custom" => Ok(Self::Custom),
            "alteration" => Ok(Self::Alteration),
            "consultation" => Ok(Self::Consultation),
            "general" => Ok(Self::General),
            _ => Err(format!("Unknown project type: {}", s)),
        }
    }
}

/// How soon the customer needs the work done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Urgent,
    High,
    #[default]
    Normal,
    Low,
}

impl UrgencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::High => "high",
            Self::Normal => "normal",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UrgencyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "urgent" => Ok(Self::Urgent),
            "high" => Ok(Self::High),
            "normal" => Ok(Self::Normal),
            "low" => Ok(Self::Low),
            _ => Err(format!("Unknown urgency level: {}", s)),
        }
    }
}

/// Where the base value of an estimate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingSource {
    /// Derived from the brand's own product pricing statistics
    BrandProducts,
    /// Derived from the brand-category base-value table
    CategoryAverage,
    /// Message-only fallback used when brand data could not be fetched
    IndustryFallback,
}

impl PricingSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BrandProducts => "brand_products",
            Self::CategoryAverage => "category_average",
            Self::IndustryFallback => "industry_fallback",
        }
    }
}

impl fmt::Display for PricingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PricingSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brand_products" => Ok(Self::BrandProducts),
            "category_average" => Ok(Self::CategoryAverage),
            "industry_fallback" => Ok(Self::IndustryFallback),
            _ => Err(format!("Unknown pricing source: {}", s)),
        }
    }
}

/// Signals extracted from a single pass over the inquiry message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageAnalysis {
    pub project_type: ProjectType,
    /// Number of pieces mentioned, 1 when unspecified
    pub quantity: u32,
    /// Budget figure mentioned in the message, 0 when absent
    pub mentioned_budget: i64,
    pub urgency_level: UrgencyLevel,
    pub message_length: usize,
    /// True when the message mentions fabric, color, or style
    pub has_specific_details: bool,
}

/// Scalar adjustments applied to the base value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Multipliers {
    pub project: f64,
    pub quantity: f64,
    pub urgency: f64,
    pub luxury: f64,
    pub corporate: f64,
}

impl Multipliers {
    /// Product of all five multipliers
    pub fn product(&self) -> f64 {
        self.project * self.quantity * self.urgency * self.luxury * self.corporate
    }

    pub fn neutral() -> Self {
        Self {
            project: 1.0,
            quantity: 1.0,
            urgency: 1.0,
            luxury: 1.0,
            corporate: 1.0,
        }
    }
}

/// Optional metadata about the customer behind an inquiry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub referral_source: Option<String>,
}

/// Value breakdown exposed to callers.
///
/// The corporate multiplier participates in the final-value arithmetic but
/// is intentionally not a field here; `final_value` always equals
/// `base_value` times all five multipliers, rounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueBreakdown {
    pub base_value: i64,
    pub project_multiplier: f64,
    pub quantity_multiplier: f64,
    pub urgency_multiplier: f64,
    pub luxury_multiplier: f64,
    pub final_value: i64,
}

/// Result of estimating the revenue potential of a lead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadEstimate {
    pub estimated_value: i64,
    /// Always within [20, 95]
    pub confidence_score: i64,
    pub pricing_source: PricingSource,
    pub breakdown: ValueBreakdown,
    pub recommended_follow_up: String,
}
