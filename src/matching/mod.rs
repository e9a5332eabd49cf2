/*!
 * Fuzzy matching and suggestion engine.
 *
 * This module contains the decision logic for turning imprecise user input
 * into catalogue keys, command verbs, and interview-stage names:
 * - `edit_distance`: Levenshtein distance and confidence scoring
 * - `aliases`: static informal-name to catalogue-key table
 * - `company`: tiered company resolution (auto-correct / suggest / reject)
 * - `command`: typo-tolerant command verb matching
 * - `stage`: canonical-form mapping for interview-stage vocabulary
 */

use once_cell::sync::Lazy;
use std::collections::HashSet;

pub mod aliases;
pub mod command;
pub mod company;
pub mod edit_distance;
pub mod stage;

pub use company::{CompanyResolver, Resolution};

/// Normalize free text into catalogue-key form: lowercase, trimmed, internal
/// whitespace collapsed to single hyphens.
pub fn normalize_key(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Human-readable display form of a catalogue key: title-cased words joined
/// with spaces ("jane-street" -> "Jane Street").
pub fn display_name(key: &str) -> String {
    key.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// Job-posting vocabulary that users paste along with company names
// ("google swe intern" should match google).
static JOB_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "new", "grad", "graduate", "swe", "software", "engineer", "engineering", "intern",
        "internship", "full", "time", "senior", "junior", "principal", "staff", "frontend",
        "backend", "fullstack", "data", "scientist", "analyst", "product", "manager", "pm",
        "devops", "site", "reliability", "sre", "mobile", "ios", "android", "web", "developer",
        "tech", "lead", "summer", "winter", "fall", "spring", "entry", "level", "experienced",
        "remote", "hybrid", "office",
    ])
});

/// Strip job-related filler words and stray punctuation from a company phrase
/// before resolution.
pub fn clean_company_input(input: &str) -> String {
    let lowered = input.to_lowercase();
    let words: Vec<&str> = lowered
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| ".,!?()[]{}".contains(c)))
        .filter(|word| !word.is_empty() && !JOB_WORDS.contains(word))
        .collect();

    words.join(" ")
}
