/*!
 * Unit tests for tiered company resolution
 */

use prepbot::matching::company::{resolve, MAX_SUGGESTIONS};
use prepbot::matching::{clean_company_input, normalize_key, CompanyResolver, Resolution};

use crate::common::sample_catalogue;

fn catalogue(keys: &[&str]) -> Vec<String> {
    let mut keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
    keys.sort();
    keys
}

#[test]
fn test_resolve_withEmptyInput_shouldRejectWithoutSuggestions() {
    let result = resolve("", &catalogue(&["google"]));
    assert_eq!(result, Resolution::Rejected(Vec::new()));
    let result = resolve("   ", &catalogue(&["google"]));
    assert_eq!(result, Resolution::Rejected(Vec::new()));
}

#[test]
fn test_resolve_withEmptyCatalogue_shouldReject() {
    assert_eq!(resolve("google", &[]), Resolution::Rejected(Vec::new()));
}

#[test]
fn test_resolve_withExactKey_shouldResolve() {
    let cat = sample_catalogue();
    for key in &cat {
        assert_eq!(
            resolve(key, &cat),
            Resolution::Resolved(key.clone()),
            "exact lookup of '{key}' must resolve to itself"
        );
    }
}

#[test]
fn test_resolve_withWhitespaceAndCase_shouldNormalize() {
    let cat = catalogue(&["jane-street", "google"]);
    assert_eq!(
        resolve("  Jane   Street ", &cat),
        Resolution::Resolved("jane-street".to_string())
    );
}

#[test]
fn test_resolve_withAlias_shouldMapToCanonicalKey() {
    let cat = catalogue(&["facebook", "google", "amazon"]);
    assert_eq!(resolve("meta", &cat), Resolution::Resolved("facebook".to_string()));
    assert_eq!(resolve("FB", &cat), Resolution::Resolved("facebook".to_string()));
    assert_eq!(resolve("alphabet", &cat), Resolution::Resolved("google".to_string()));
    assert_eq!(resolve("amzn", &cat), Resolution::Resolved("amazon".to_string()));
}

#[test]
fn test_resolve_withAliasTargetMissingFromCatalogue_shouldNotResolveViaAlias() {
    // "meta" maps to facebook, but facebook has no data here
    let cat = catalogue(&["google", "amazon"]);
    assert_ne!(
        resolve("meta", &cat),
        Resolution::Resolved("facebook".to_string())
    );
}

#[test]
fn test_resolve_withSubstring_shouldTakeFirstSortedHit() {
    let cat = catalogue(&["google", "amazon"]);
    assert_eq!(resolve("googl", &cat), Resolution::Resolved("google".to_string()));
}

#[test]
fn test_resolve_withExactShortKey_shouldNotPreferSuperstring() {
    // "box" is an exact key; the substring tier must never see it
    let cat = catalogue(&["dropbox", "box"]);
    assert_eq!(resolve("box", &cat), Resolution::Resolved("box".to_string()));
}

#[test]
fn test_resolve_withSingleTypo_shouldAutoCorrect() {
    let cat = catalogue(&["microsoft", "airbnb", "stripe"]);
    assert_eq!(
        resolve("microsfot", &cat),
        Resolution::Resolved("microsoft".to_string())
    );
}

#[test]
fn test_resolve_withTwoCloseCandidates_shouldBeAmbiguous() {
    let cat = catalogue(&["goggle", "google"]);
    match resolve("gogle", &cat) {
        Resolution::Ambiguous(suggestions) => {
            assert_eq!(suggestions.len(), 2);
            assert!(suggestions.contains(&"google".to_string()));
            assert!(suggestions.contains(&"goggle".to_string()));
        }
        other => panic!("expected ambiguity, got {other:?}"),
    }
}

#[test]
fn test_resolve_withTickerInput_shouldSuggestInsteadOfSubstituting() {
    let cat = catalogue(&["nutanix", "nvidia"]);
    match resolve("nvda", &cat) {
        Resolution::Ambiguous(suggestions) => {
            assert!(!suggestions.is_empty());
            assert_eq!(suggestions[0], "nvidia");
        }
        Resolution::Resolved(key) => panic!("ticker must not silently resolve to '{key}'"),
        Resolution::Rejected(_) => panic!("close ticker must not be rejected outright"),
    }
}

#[test]
fn test_resolve_withGarbage_shouldRejectWithCappedSuggestions() {
    let cat = sample_catalogue();
    match resolve("xyz", &cat) {
        Resolution::Rejected(suggestions) => {
            assert!(suggestions.len() <= MAX_SUGGESTIONS);
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn test_resolve_suggestions_shouldNeverExceedCap() {
    let cat = catalogue(&["alpha", "alphabet", "alphawave", "alphasense", "alpine"]);
    let result = resolve("alph", &cat);
    let suggestions = match result {
        Resolution::Resolved(_) => Vec::new(),
        Resolution::Ambiguous(s) | Resolution::Rejected(s) => s,
    };
    assert!(suggestions.len() <= MAX_SUGGESTIONS);
}

#[test]
fn test_cleanCompanyInput_withJobWords_shouldKeepOnlyCompany() {
    assert_eq!(clean_company_input("google swe intern"), "google");
    assert_eq!(clean_company_input("Jane Street new grad"), "jane street");
    assert_eq!(clean_company_input("stripe (backend)"), "stripe");
}

#[test]
fn test_cleanCompanyInput_withOnlyJobWords_shouldBeEmpty() {
    assert_eq!(clean_company_input("senior backend engineer"), "");
}

#[test]
fn test_normalizeKey_withSpacedName_shouldHyphenate() {
    assert_eq!(normalize_key("  Jane  Street "), "jane-street");
    assert_eq!(normalize_key("google"), "google");
}

#[tokio::test]
async fn test_resolver_withoutEnrichment_shouldReturnLocalOutcome() {
    let resolver = CompanyResolver::new();
    let cat = sample_catalogue();
    let outcome = resolver.resolve_with_enrichment("google", &cat).await;
    assert_eq!(outcome, Resolution::Resolved("google".to_string()));
}
