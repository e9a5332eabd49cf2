/*!
 * Typo-tolerant command verb matching.
 *
 * Unlike company resolution there is no ambiguity handling: the command
 * vocabulary is tiny, so a single best-guess suggestion is enough. Inputs
 * too far from every command get no suggestion at all and are meant to be
 * silently ignored by the caller, so the bot does not answer unrelated
 * chatter like "!omg".
 */

use super::edit_distance::{confidence, levenshtein};

/// Result of matching an input verb against the command vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandMatch {
    /// The validated command, empty unless `is_valid`
    pub command: String,
    /// Whether the input was an exact (case-insensitive) command
    pub is_valid: bool,
    /// Best-guess correction for a near miss, empty when the input is
    /// unrecognizable noise
    pub suggestion: String,
}

/// Match `input` against the valid command verbs.
pub fn resolve(input: &str, valid_commands: &[&str]) -> CommandMatch {
    let input = input.trim().to_lowercase();

    for command in valid_commands {
        if input == *command {
            return CommandMatch {
                command: input,
                is_valid: true,
                suggestion: String::new(),
            };
        }
    }

    let mut best: Option<(&str, f64, usize)> = None;
    for command in valid_commands {
        let conf = confidence(&input, command);
        let dist = levenshtein(&input, command);

        let replace = match best {
            None => true,
            Some((_, best_conf, best_dist)) => {
                conf > best_conf || (conf == best_conf && dist < best_dist)
            }
        };
        if replace {
            best = Some((command, conf, dist));
        }
    }

    if let Some((command, conf, dist)) = best {
        if dist <= 2 || conf > 0.6 {
            return CommandMatch {
                command: String::new(),
                is_valid: false,
                suggestion: command.to_string(),
            };
        }
    }

    CommandMatch {
        command: String::new(),
        is_valid: false,
        suggestion: String::new(),
    }
}
