/*!
 * Canonical-form mapping for interview-stage vocabulary.
 *
 * Same suggestion pattern as command matching, over the even smaller stage
 * catalogue (apply, reject, oa, phone, onsite, offer).
 */

use crate::process::models::ProcessStage;

use super::edit_distance::{confidence, levenshtein};

/// Outcome of normalizing a user-typed stage name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageResolution {
    /// Input is a valid stage
    Valid(ProcessStage),
    /// Input is a near miss; the caller should ask before recording
    Suggestion(ProcessStage),
    /// Input does not resemble any stage
    Unknown,
}

/// Normalize `input` against the interview-stage vocabulary.
pub fn resolve(input: &str) -> StageResolution {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return StageResolution::Unknown;
    }

    for stage in ProcessStage::ALL {
        if input == stage.as_str() {
            return StageResolution::Valid(stage);
        }
    }

    let mut best: Option<(ProcessStage, f64, usize)> = None;
    for stage in ProcessStage::ALL {
        let conf = confidence(&input, stage.as_str());
        let dist = levenshtein(&input, stage.as_str());

        let replace = match best {
            None => true,
            Some((_, best_conf, best_dist)) => {
                conf > best_conf || (conf == best_conf && dist < best_dist)
            }
        };
        if replace {
            best = Some((stage, conf, dist));
        }
    }

    match best {
        Some((stage, conf, dist)) if dist <= 2 || conf > 0.6 => StageResolution::Suggestion(stage),
        _ => StageResolution::Unknown,
    }
}
