/*!
 * Unit tests for typo-tolerant command matching
 */

use prepbot::bot::VALID_COMMANDS;
use prepbot::matching::command::resolve;

#[test]
fn test_resolve_withExactCommand_shouldBeValid() {
    for command in VALID_COMMANDS {
        let matched = resolve(command, &VALID_COMMANDS);
        assert!(matched.is_valid, "'{command}' must be valid");
        assert_eq!(matched.command, command);
        assert!(matched.suggestion.is_empty());
    }
}

#[test]
fn test_resolve_withUppercaseCommand_shouldBeValid() {
    let matched = resolve("PROBLEMS", &VALID_COMMANDS);
    assert!(matched.is_valid);
    assert_eq!(matched.command, "problems");
}

#[test]
fn test_resolve_withSingleTypo_shouldSuggest() {
    let matched = resolve("problms", &VALID_COMMANDS);
    assert!(!matched.is_valid);
    assert!(matched.command.is_empty());
    assert_eq!(matched.suggestion, "problems");
}

#[test]
fn test_resolve_withTransposedLetters_shouldSuggest() {
    let matched = resolve("hlep", &VALID_COMMANDS);
    assert!(!matched.is_valid);
    assert_eq!(matched.suggestion, "help");
}

#[test]
fn test_resolve_withNoise_shouldStaySilent() {
    let matched = resolve("xylophone", &VALID_COMMANDS);
    assert!(!matched.is_valid);
    assert!(matched.suggestion.is_empty());
}

#[test]
fn test_resolve_withEmptyInput_shouldNotBeValid() {
    let matched = resolve("", &VALID_COMMANDS);
    assert!(!matched.is_valid);
}
