/*!
 * Edit-distance scoring for fuzzy name matching.
 *
 * Provides case-insensitive Levenshtein distance and a derived confidence
 * score in `[0, 1]` used by the company and command resolvers to rank
 * candidates.
 */

/// Calculate the Levenshtein (edit) distance between two strings.
///
/// Comparisons are case-insensitive. The distance is the minimum number of
/// single-character insertions, deletions, or substitutions required to
/// transform one string into the other.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rolling rows instead of the full matrix
    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);

            curr_row[j + 1] = (prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1) // insertion
                .min(prev_row[j] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}

/// Calculate a match confidence score between 0.0 and 1.0.
///
/// Case-insensitive equality scores 1.0. Otherwise the score is the inverse
/// of the edit distance normalized by the longer string's length, floored at
/// 0.0. Two empty strings are caught by the equality check; the zero-length
/// branch below is unreachable in practice but kept so the division is
/// provably guarded.
pub fn confidence(input: &str, target: &str) -> f64 {
    if input.to_lowercase() == target.to_lowercase() {
        return 1.0;
    }

    let distance = levenshtein(input, target);
    let max_len = input.chars().count().max(target.chars().count());

    if max_len == 0 {
        return 0.0;
    }

    let confidence = 1.0 - distance as f64 / max_len as f64;
    confidence.max(0.0)
}
