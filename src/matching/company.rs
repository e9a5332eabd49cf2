/*!
 * Company resolution with tiered confidence policy.
 *
 * Resolution runs alias lookup, exact and substring matching, then fuzzy
 * scoring against every catalogue key. The scored ranking feeds a decision
 * ladder: ambiguity detection first, then auto-correction, then a medium
 * "did you mean" tier, then rejection with the best suggestions found.
 *
 * Short alphabetic inputs ("AMD", "TD") are treated as likely tickers and
 * get stricter auto-correct rules: silently substituting a different
 * company for a deliberate abbreviation is worse than asking.
 */

use log::debug;
use std::cmp::Ordering;
use std::sync::Arc;

use crate::enrichment::EnrichmentClient;

use super::aliases::resolve_alias;
use super::edit_distance::{confidence, levenshtein};
use super::{display_name, normalize_key};

/// Maximum number of suggestions carried by an ambiguous or rejected outcome
pub const MAX_SUGGESTIONS: usize = 3;

/// Candidates within this confidence window of the best match block
/// auto-correction
const AMBIGUITY_BAND: f64 = 0.2;

/// Confidence above which the best match is silently substituted
const AUTO_CORRECT_CONFIDENCE: f64 = 0.8;

/// Confidence above which the best match is offered as a suggestion
const MEDIUM_CONFIDENCE: f64 = 0.6;

/// Enriched candidates below this confidence are discarded outright
const ENRICHMENT_FLOOR: f64 = 0.5;

/// Enriched candidates above this confidence resolve directly
const ENRICHMENT_RESOLVE: f64 = 0.7;

/// Outcome of a company resolution attempt.
///
/// Suggestion lists are ranked best-first and never exceed
/// [`MAX_SUGGESTIONS`] entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Input resolved to a single catalogue key
    Resolved(String),
    /// Several catalogue keys are plausible; the caller should ask
    Ambiguous(Vec<String>),
    /// No acceptable match; suggestions may still hint at what was meant
    Rejected(Vec<String>),
}

#[derive(Debug, Clone)]
struct ScoredCandidate {
    key: String,
    confidence: f64,
    distance: usize,
}

/// Resolves free-text company names against the catalogue, optionally
/// consulting an external enrichment service for inputs nothing local
/// matches.
#[derive(Default)]
pub struct CompanyResolver {
    enrichment: Option<Arc<dyn EnrichmentClient>>,
}

impl CompanyResolver {
    pub fn new() -> Self {
        Self { enrichment: None }
    }

    /// Attach an enrichment client consulted as a last resort for rejected
    /// inputs.
    pub fn with_enrichment(client: Arc<dyn EnrichmentClient>) -> Self {
        Self {
            enrichment: Some(client),
        }
    }

    /// Resolve `input` against the catalogue.
    ///
    /// The catalogue should be sorted by the caller so that substring and
    /// tie-break behavior is deterministic.
    pub fn resolve(&self, input: &str, catalogue: &[String]) -> Resolution {
        resolve(input, catalogue)
    }

    /// Resolve `input`, falling back to the enrichment service when the
    /// local catalogue rejects it.
    ///
    /// Enrichment failures degrade to the unenriched outcome; they are never
    /// surfaced to the user.
    pub async fn resolve_with_enrichment(&self, input: &str, catalogue: &[String]) -> Resolution {
        let outcome = resolve(input, catalogue);

        let Resolution::Rejected(_) = &outcome else {
            return outcome;
        };
        let Some(client) = &self.enrichment else {
            return outcome;
        };

        let names = match client.search(input).await {
            Ok(names) => names,
            Err(err) => {
                debug!("Enrichment lookup for '{}' failed: {}", input, err);
                return outcome;
            }
        };
        if names.is_empty() {
            return outcome;
        }

        // Score every enriched name against the catalogue and keep the best
        // score seen per key.
        let mut enriched: Vec<ScoredCandidate> = Vec::new();
        for name in &names {
            let candidate = normalize_key(name);
            if candidate.is_empty() {
                continue;
            }
            for key in catalogue {
                let scored = score_key(&candidate, key);
                if scored.confidence <= ENRICHMENT_FLOOR {
                    continue;
                }
                match enriched.iter_mut().find(|c| c.key == scored.key) {
                    Some(existing) if better(&scored, existing) => *existing = scored,
                    Some(_) => {}
                    None => enriched.push(scored),
                }
            }
        }
        sort_candidates(&mut enriched);

        match enriched.first() {
            Some(best) if best.confidence > ENRICHMENT_RESOLVE => {
                Resolution::Resolved(best.key.clone())
            }
            Some(_) => Resolution::Rejected(
                enriched
                    .iter()
                    .take(MAX_SUGGESTIONS)
                    .map(|c| c.key.clone())
                    .collect(),
            ),
            None => outcome,
        }
    }
}

/// Resolve a company name against the catalogue without enrichment.
pub fn resolve(input: &str, catalogue: &[String]) -> Resolution {
    let input = input.trim();
    if input.is_empty() || catalogue.is_empty() {
        return Resolution::Rejected(Vec::new());
    }

    let normalized = normalize_key(input);

    // Alias check, verified against the catalogue
    if let Some(alias) = resolve_alias(input) {
        if catalogue.iter().any(|key| key == alias) {
            return Resolution::Resolved(alias.to_string());
        }
    }

    // Exact match
    if let Some(key) = catalogue.iter().find(|key| **key == normalized) {
        return Resolution::Resolved(key.clone());
    }

    // Substring match: first hit over the (sorted) catalogue
    if let Some(key) = catalogue.iter().find(|key| key.contains(&normalized)) {
        return Resolution::Resolved(key.clone());
    }

    let candidates = score_catalogue(&normalized, catalogue);
    let best = candidates[0].clone();
    let ticker_like = is_ticker_like(input);

    // Count leading candidates within the ambiguity band of the best match.
    // Confidence is sorted descending, so the banded candidates form a
    // prefix; three is enough to decide.
    let within_band = candidates
        .iter()
        .take(MAX_SUGGESTIONS)
        .filter(|c| best.confidence - c.confidence <= AMBIGUITY_BAND)
        .count();

    if (within_band >= 2 && best.confidence >= 0.3)
        || (ticker_like && within_band >= 2 && best.confidence >= 0.2)
    {
        let suggestions = if ticker_like {
            // Tickers get every plausible candidate, not just the band
            candidates
                .iter()
                .take(MAX_SUGGESTIONS)
                .filter(|c| c.confidence >= 0.2)
                .map(|c| c.key.clone())
                .collect()
        } else {
            candidates
                .iter()
                .take(MAX_SUGGESTIONS)
                .filter(|c| best.confidence - c.confidence <= AMBIGUITY_BAND)
                .map(|c| c.key.clone())
                .collect()
        };
        return Resolution::Ambiguous(suggestions);
    }

    // Auto-correct tier; tickers only auto-correct on near-certainty
    if best.confidence > AUTO_CORRECT_CONFIDENCE
        || (best.distance <= 2 && !ticker_like)
        || best.distance == 0
        || (ticker_like && best.confidence > 0.9)
    {
        return Resolution::Resolved(best.key);
    }

    // Medium confidence: suggest instead of substituting
    if best.confidence >= MEDIUM_CONFIDENCE {
        if ticker_like {
            let suggestions = candidates
                .iter()
                .take(MAX_SUGGESTIONS)
                .filter(|c| c.confidence >= 0.2)
                .map(|c| c.key.clone())
                .collect();
            return Resolution::Ambiguous(suggestions);
        }

        let mut suggestions = vec![best.key];
        for candidate in candidates.iter().skip(1) {
            if suggestions.len() >= MAX_SUGGESTIONS {
                break;
            }
            if candidate.confidence >= 0.5 {
                suggestions.push(candidate.key.clone());
            }
        }
        return Resolution::Ambiguous(suggestions);
    }

    Resolution::Rejected(
        candidates
            .iter()
            .take(MAX_SUGGESTIONS)
            .map(|c| c.key.clone())
            .collect(),
    )
}

/// Short alphabetic inputs are likely deliberate abbreviations rather than
/// typos.
fn is_ticker_like(input: &str) -> bool {
    let len = input.chars().count();
    (2..=5).contains(&len) && input.chars().any(|c| c.is_ascii_alphabetic())
}

/// Score one catalogue key against the input, taking the better of the raw
/// key and its human-readable display form.
fn score_key(input: &str, key: &str) -> ScoredCandidate {
    let slug_confidence = confidence(input, key);
    let slug_distance = levenshtein(input, key);

    let display = display_name(key);
    let display_confidence = confidence(input, &display);
    let display_distance = levenshtein(input, &display);

    if display_confidence > slug_confidence {
        ScoredCandidate {
            key: key.to_string(),
            confidence: display_confidence,
            distance: display_distance,
        }
    } else {
        ScoredCandidate {
            key: key.to_string(),
            confidence: slug_confidence,
            distance: slug_distance,
        }
    }
}

fn score_catalogue(input: &str, catalogue: &[String]) -> Vec<ScoredCandidate> {
    let mut candidates: Vec<ScoredCandidate> =
        catalogue.iter().map(|key| score_key(input, key)).collect();
    sort_candidates(&mut candidates);
    candidates
}

fn sort_candidates(candidates: &mut [ScoredCandidate]) {
    candidates.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
            .then(a.distance.cmp(&b.distance))
    });
}

fn better(a: &ScoredCandidate, b: &ScoredCandidate) -> bool {
    a.confidence > b.confidence || (a.confidence == b.confidence && a.distance < b.distance)
}
