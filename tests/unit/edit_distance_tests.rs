/*!
 * Unit tests for edit distance and confidence scoring
 */

use prepbot::matching::edit_distance::{confidence, levenshtein};

#[test]
fn test_levenshtein_withIdenticalStrings_shouldBeZero() {
    assert_eq!(levenshtein("google", "google"), 0);
    assert_eq!(levenshtein("", ""), 0);
}

#[test]
fn test_levenshtein_withCaseDifference_shouldBeZero() {
    assert_eq!(levenshtein("Google", "google"), 0);
    assert_eq!(levenshtein("AMAZON", "amazon"), 0);
}

#[test]
fn test_levenshtein_withEmptyString_shouldBeOtherLength() {
    assert_eq!(levenshtein("", "abc"), 3);
    assert_eq!(levenshtein("abc", ""), 3);
}

#[test]
fn test_levenshtein_withKnownPairs_shouldMatchExpected() {
    assert_eq!(levenshtein("kitten", "sitting"), 3);
    assert_eq!(levenshtein("gogle", "google"), 1);
    assert_eq!(levenshtein("flaw", "lawn"), 2);
}

#[test]
fn test_levenshtein_withSwappedArguments_shouldBeSymmetric() {
    assert_eq!(levenshtein("stripe", "strip"), levenshtein("strip", "stripe"));
    assert_eq!(levenshtein("meta", "beta"), levenshtein("beta", "meta"));
}

#[test]
fn test_confidence_withEqualStrings_shouldBeOne() {
    assert_eq!(confidence("netflix", "netflix"), 1.0);
    assert_eq!(confidence("Netflix", "netflix"), 1.0);
}

#[test]
fn test_confidence_withBothEmpty_shouldBeOne() {
    assert_eq!(confidence("", ""), 1.0);
}

#[test]
fn test_confidence_withSingleTypo_shouldStayHigh() {
    let c = confidence("gogle", "google");
    assert!(c > 0.8, "expected high confidence, got {c}");
}

#[test]
fn test_confidence_withUnrelatedStrings_shouldBeLow() {
    let c = confidence("xyz", "microsoft");
    assert!(c < 0.2, "expected low confidence, got {c}");
}

#[test]
fn test_confidence_shouldNeverGoNegative() {
    assert!(confidence("ab", "zzzzzzzzzz") >= 0.0);
}
