/*!
 * Read-only store for problem lists keyed by company and timeframe.
 *
 * Loaded once at startup and never mutated afterwards, so it can be shared
 * across the bot handler and the HTTP API without synchronization.
 */

use std::collections::HashMap;

use super::models::{Problem, Timeframe};

/// Immutable problem dataset, keyed by catalogue key then timeframe.
#[derive(Debug, Default)]
pub struct ProblemStore {
    data: HashMap<String, HashMap<Timeframe, Vec<Problem>>>,
}

impl ProblemStore {
    pub fn new(data: HashMap<String, HashMap<Timeframe, Vec<Problem>>>) -> Self {
        Self { data }
    }

    /// Build a store from `(company, timeframe, problems)` entries. Intended
    /// for tests.
    pub fn from_entries(entries: Vec<(&str, Timeframe, Vec<Problem>)>) -> Self {
        let mut data: HashMap<String, HashMap<Timeframe, Vec<Problem>>> = HashMap::new();
        for (company, timeframe, problems) in entries {
            data.entry(company.to_string())
                .or_default()
                .insert(timeframe, problems);
        }
        Self { data }
    }

    /// All catalogue keys, sorted for deterministic iteration.
    pub fn companies(&self) -> Vec<String> {
        let mut companies: Vec<String> = self.data.keys().cloned().collect();
        companies.sort();
        companies
    }

    pub fn company_count(&self) -> usize {
        self.data.len()
    }

    pub fn company_exists(&self, company: &str) -> bool {
        self.data.contains_key(&canonical(company))
    }

    /// Problem list for an exact `(company, timeframe)` pair, `None` when no
    /// data exists for the pair.
    pub fn problems(&self, company: &str, timeframe: Timeframe) -> Option<&[Problem]> {
        self.data
            .get(&canonical(company))
            .and_then(|timeframes| timeframes.get(&timeframe))
            .map(Vec::as_slice)
    }

    /// First non-empty problem list in timeframe priority order, together
    /// with the timeframe it came from.
    pub fn problems_with_priority(&self, company: &str) -> Option<(&[Problem], Timeframe)> {
        let timeframes = self.data.get(&canonical(company))?;
        Timeframe::PRIORITY.into_iter().find_map(|tf| {
            timeframes
                .get(&tf)
                .filter(|problems| !problems.is_empty())
                .map(|problems| (problems.as_slice(), tf))
        })
    }

    /// Timeframes with data for a company, in priority order.
    pub fn available_timeframes(&self, company: &str) -> Vec<Timeframe> {
        match self.data.get(&canonical(company)) {
            Some(timeframes) => Timeframe::PRIORITY
                .into_iter()
                .filter(|tf| timeframes.contains_key(tf))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Full dataset snapshot, used by the HTTP API's dump endpoint.
    pub fn all(&self) -> &HashMap<String, HashMap<Timeframe, Vec<Problem>>> {
        &self.data
    }
}

fn canonical(company: &str) -> String {
    company.trim().to_lowercase()
}
