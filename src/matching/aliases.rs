/*!
 * Static alias table mapping informal company names to catalogue keys.
 *
 * Covers the tickers and rebrands users actually type (e.g. "meta" for
 * facebook, "amzn" for amazon). The table is loaded once and never mutated;
 * whether an aliased key exists in the catalogue is checked by the resolver
 * at lookup time.
 */

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::normalize_key;

static COMPANY_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("meta", "facebook"),
        ("fb", "facebook"),
        ("alphabet", "google"),
        ("amzn", "amazon"),
        ("msft", "microsoft"),
        ("aapl", "apple"),
        ("nflx", "netflix"),
    ])
});

/// Look up a known alias for the given input.
///
/// The input is normalized before lookup, so "Meta" and " FB " both hit.
pub fn resolve_alias(input: &str) -> Option<&'static str> {
    let normalized = normalize_key(input);
    COMPANY_ALIASES.get(normalized.as_str()).copied()
}
