/*!
 * Common test utilities for the prepbot test suite
 */

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

use prepbot::catalog::{Problem, ProblemStore, Timeframe};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Builds a problem with the given number and frequency
pub fn problem(id: u32, frequency: f64) -> Problem {
    Problem {
        id,
        url: format!("https://leetcode.com/problems/problem-{id}/"),
        title: format!("Problem {id}"),
        difficulty: "Medium".to_string(),
        acceptance: 50.0,
        frequency,
    }
}

/// Builds `count` problems with descending frequency
pub fn problems(count: u32) -> Vec<Problem> {
    (1..=count).map(|n| problem(n, 100.0 - n as f64)).collect()
}

/// Catalogue fixture used across bot and resolver tests:
/// - google and amazon have full all-time data (25 and 5 problems)
/// - airbnb only has all-time data
/// - goggle exists to force ambiguity with google
pub fn sample_store() -> ProblemStore {
    ProblemStore::from_entries(vec![
        ("google", Timeframe::All, problems(25)),
        ("google", Timeframe::ThirtyDays, problems(5)),
        ("amazon", Timeframe::All, problems(5)),
        ("airbnb", Timeframe::All, problems(3)),
        ("goggle", Timeframe::All, problems(2)),
        ("facebook", Timeframe::All, problems(4)),
    ])
}

/// Company keys of the sample store, sorted
pub fn sample_catalogue() -> Vec<String> {
    sample_store().companies()
}
