/*!
 * Unit tests for dataset loading
 */

use prepbot::catalog::{load_dir, Timeframe};

use crate::common::{create_temp_dir, create_test_file};

const HEADER: &str = "ID,URL,Title,Difficulty,Acceptance %,Frequency %\n";

#[test]
fn test_loadDir_withCompanyDirectories_shouldIndexByCompanyAndTimeframe() {
    let dir = create_temp_dir().unwrap();
    let root = dir.path().to_path_buf();

    let csv = format!(
        "{HEADER}1,https://leetcode.com/problems/two-sum/,Two Sum,Easy,47.5,95.2\n\
         2,https://leetcode.com/problems/lru-cache/,LRU Cache,Medium,40.1,88.0\n"
    );
    create_test_file(&root.join("Google"), "all.csv", &csv).unwrap();
    create_test_file(&root.join("Google"), "thirty-days.csv", &csv).unwrap();
    create_test_file(&root.join("amazon"), "all.csv", &csv).unwrap();

    let store = load_dir(&root).unwrap();
    assert_eq!(store.companies(), vec!["amazon", "google"]);
    assert_eq!(
        store.available_timeframes("google"),
        vec![Timeframe::ThirtyDays, Timeframe::All]
    );
    let problems = store.problems("google", Timeframe::All).unwrap();
    assert_eq!(problems.len(), 2);
}

#[test]
fn test_loadDir_shouldSortByFrequencyDescending() {
    let dir = create_temp_dir().unwrap();
    let root = dir.path().to_path_buf();

    let csv = format!(
        "{HEADER}1,https://example.com/a,A,Easy,50.0,10.0\n\
         2,https://example.com/b,B,Hard,50.0,90.0\n\
         3,https://example.com/c,C,Medium,50.0,55.5\n"
    );
    create_test_file(&root.join("google"), "all.csv", &csv).unwrap();

    let store = load_dir(&root).unwrap();
    let problems = store.problems("google", Timeframe::All).unwrap();
    let frequencies: Vec<f64> = problems.iter().map(|p| p.frequency).collect();
    assert_eq!(frequencies, vec![90.0, 55.5, 10.0]);
}

#[test]
fn test_loadDir_withQuotedTitle_shouldPreserveCommas() {
    let dir = create_temp_dir().unwrap();
    let root = dir.path().to_path_buf();

    let csv = format!(
        "{HEADER}1,https://example.com/a,\"Insert, Delete, GetRandom\",Medium,50.0,80.0\n"
    );
    create_test_file(&root.join("google"), "all.csv", &csv).unwrap();

    let store = load_dir(&root).unwrap();
    let problems = store.problems("google", Timeframe::All).unwrap();
    assert_eq!(problems[0].title, "Insert, Delete, GetRandom");
}

#[test]
fn test_loadDir_withMalformedRows_shouldSkipThem() {
    let dir = create_temp_dir().unwrap();
    let root = dir.path().to_path_buf();

    let csv = format!(
        "{HEADER}1,https://example.com/a,A,Easy,50.0,90.0\n\
         not-a-number,https://example.com/b,B,Hard,50.0,80.0\n\
         3,https://example.com/c\n\
         4,https://example.com/d,D,Medium,50.0,70.0\n"
    );
    create_test_file(&root.join("google"), "all.csv", &csv).unwrap();

    let store = load_dir(&root).unwrap();
    let problems = store.problems("google", Timeframe::All).unwrap();
    assert_eq!(problems.len(), 2);
}

#[test]
fn test_loadDir_withUnknownTimeframeFile_shouldIgnoreIt() {
    let dir = create_temp_dir().unwrap();
    let root = dir.path().to_path_buf();

    let csv = format!("{HEADER}1,https://example.com/a,A,Easy,50.0,90.0\n");
    create_test_file(&root.join("google"), "all.csv", &csv).unwrap();
    create_test_file(&root.join("google"), "weekly.csv", &csv).unwrap();

    let store = load_dir(&root).unwrap();
    assert_eq!(store.available_timeframes("google"), vec![Timeframe::All]);
}

#[test]
fn test_loadDir_withEmptyDirectory_shouldYieldEmptyStore() {
    let dir = create_temp_dir().unwrap();
    let store = load_dir(dir.path()).unwrap();
    assert_eq!(store.company_count(), 0);
}
