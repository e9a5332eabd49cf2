/*!
 * CSV dataset loading.
 *
 * The dataset is a directory tree of `<company>/<timeframe>.csv` files with
 * six columns: id, url, title, difficulty, acceptance, frequency. Titles may
 * be quoted (some contain commas), so the parser is quote-aware. Malformed
 * rows are skipped rather than failing the whole load.
 */

use anyhow::{Context, Result};
use log::{debug, warn};
use std::collections::HashMap;
use std::path::Path;
use walkdir::WalkDir;

use super::models::{Problem, Timeframe};
use super::store::ProblemStore;

/// Load the full dataset from a directory tree.
pub fn load_dir(data_dir: &Path) -> Result<ProblemStore> {
    if !data_dir.is_dir() {
        anyhow::bail!("data directory not found: {}", data_dir.display());
    }

    let mut data: HashMap<String, HashMap<Timeframe, Vec<Problem>>> = HashMap::new();

    for entry in WalkDir::new(data_dir).min_depth(2).max_depth(2) {
        let entry = entry.context("failed to walk data directory")?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(|e| e.to_str()) != Some("csv")
        {
            continue;
        }

        let company = match path.parent().and_then(|p| p.file_name()).and_then(|n| n.to_str()) {
            Some(name) => name.to_lowercase(),
            None => continue,
        };
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        let Some(timeframe) = Timeframe::from_key(stem) else {
            warn!("Skipping {}: unknown timeframe '{}'", path.display(), stem);
            continue;
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let problems = parse_csv(&content);
        debug!(
            "Loaded {} problems for {}/{}",
            problems.len(),
            company,
            timeframe
        );
        data.entry(company).or_default().insert(timeframe, problems);
    }

    if data.is_empty() {
        warn!("No problem data found under {}", data_dir.display());
    }

    Ok(ProblemStore::new(data))
}

/// Parse one CSV file into a frequency-sorted problem list.
pub(crate) fn parse_csv(content: &str) -> Vec<Problem> {
    let mut problems: Vec<Problem> = content
        .lines()
        .skip(1) // header
        .filter_map(parse_row)
        .collect();

    problems.sort_by(|a, b| {
        b.frequency
            .partial_cmp(&a.frequency)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    problems
}

fn parse_row(line: &str) -> Option<Problem> {
    let line = line.trim_end_matches('\r');
    if line.trim().is_empty() {
        return None;
    }

    let fields = split_csv_line(line);
    if fields.len() < 6 {
        return None;
    }

    let id: u32 = fields[0].trim().parse().ok()?;
    Some(Problem {
        id,
        url: fields[1].trim().to_string(),
        title: fields[2].trim().to_string(),
        difficulty: fields[3].trim().to_string(),
        acceptance: parse_percentage(&fields[4]),
        frequency: parse_percentage(&fields[5]),
    })
}

/// Split a CSV line into fields, honoring double-quoted fields and `""`
/// escapes.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                field.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

fn parse_percentage(value: &str) -> f64 {
    value
        .trim()
        .trim_end_matches('%')
        .parse()
        .unwrap_or_default()
}
