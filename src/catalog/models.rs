/*!
 * Data model for the interview-problem dataset.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// One curated interview problem with its popularity statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Problem number on the source site
    pub id: u32,
    /// Canonical problem URL
    pub url: String,
    /// Display title
    pub title: String,
    /// Difficulty tier (easy / medium / hard)
    pub difficulty: String,
    /// Acceptance rate in percent
    pub acceptance: f64,
    /// How often the problem is reported for this company, in percent
    pub frequency: f64,
}

/// Emoji indicator for a difficulty tier, empty for unknown tiers.
pub fn difficulty_indicator(difficulty: &str) -> &'static str {
    match difficulty.to_lowercase().as_str() {
        "easy" => "\u{1F7E2}",
        "medium" => "\u{1F7E1}",
        "hard" => "\u{1F534}",
        _ => "",
    }
}

/// Reporting window a problem list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Timeframe {
    ThirtyDays,
    ThreeMonths,
    SixMonths,
    MoreThanSixMonths,
    All,
}

impl Timeframe {
    /// Lookup order when no timeframe is requested: most recent data first,
    /// all-time as the fallback.
    pub const PRIORITY: [Timeframe; 5] = [
        Timeframe::ThirtyDays,
        Timeframe::ThreeMonths,
        Timeframe::SixMonths,
        Timeframe::MoreThanSixMonths,
        Timeframe::All,
    ];

    /// Canonical hyphenated key, used in dataset filenames and API paths
    pub fn as_key(self) -> &'static str {
        match self {
            Timeframe::ThirtyDays => "thirty-days",
            Timeframe::ThreeMonths => "three-months",
            Timeframe::SixMonths => "six-months",
            Timeframe::MoreThanSixMonths => "more-than-six-months",
            Timeframe::All => "all",
        }
    }

    /// Human-readable label for rendered output
    pub fn display(self) -> &'static str {
        match self {
            Timeframe::ThirtyDays => "last 30 days",
            Timeframe::ThreeMonths => "last 3 months",
            Timeframe::SixMonths => "last 6 months",
            Timeframe::MoreThanSixMonths => "more than 6 months",
            Timeframe::All => "all",
        }
    }

    /// Short alias used in usage hints
    pub fn short_alias(self) -> &'static str {
        match self {
            Timeframe::ThirtyDays => "30d",
            Timeframe::ThreeMonths => "3mo",
            Timeframe::SixMonths => "6mo",
            Timeframe::MoreThanSixMonths => ">6mo",
            Timeframe::All => "all",
        }
    }

    /// Parse a canonical key, as found in dataset filenames.
    pub fn from_key(key: &str) -> Option<Timeframe> {
        Timeframe::PRIORITY
            .into_iter()
            .find(|tf| tf.as_key() == key)
    }

    /// Match the alias vocabulary users type ("30d", "three", ">6mo", ...).
    fn from_alias(input: &str) -> Option<Timeframe> {
        let normalized = input.trim().to_lowercase().replace(' ', "-");
        match normalized.as_str() {
            "30" | "30d" | "30days" | "30-days" | "thirty" | "thirtydays" | "thirty-days" => {
                Some(Timeframe::ThirtyDays)
            }
            "90" | "90d" | "3mo" | "90days" | "90-days" | "three" | "threemonths"
            | "three-months" | "3months" | "3-months" => Some(Timeframe::ThreeMonths),
            "180" | "6mo" | "180days" | "180-days" | "six" | "sixmonths" | "six-months"
            | "6months" | "6-months" => Some(Timeframe::SixMonths),
            ">6mo" | ">6months" | "more-than-six-months" | "more-than-6-months"
            | "morethan6months" => Some(Timeframe::MoreThanSixMonths),
            "all" | "alltime" | "all-time" | "everything" => Some(Timeframe::All),
            _ => None,
        }
    }

    /// Whether `input` is recognizable as a timeframe token at all.
    ///
    /// Used when scanning command arguments, so only exact alias hits count;
    /// arbitrary words must never be eaten as timeframes.
    pub fn is_keyword(input: &str) -> bool {
        Timeframe::from_alias(input).is_some()
    }

    /// Normalize arbitrary input into a timeframe, defaulting to all-time.
    pub fn parse(input: &str) -> Timeframe {
        if input.trim().is_empty() {
            return Timeframe::All;
        }
        Timeframe::from_alias(input).unwrap_or(Timeframe::All)
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}
