//! Peak-hour identification from historical productivity samples.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Hours assumed productive when no history is available.
pub const DEFAULT_PEAK_HOURS: [u32; 5] = [9, 10, 11, 14, 15];

/// Number of peak hours selected from history.
const PEAK_HOUR_COUNT: usize = 5;

/// One historical day's observation: which hours felt productive and how
/// productive the day was overall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductivitySample {
    /// Hours of day (0-23) recorded as productive.
    pub peak_hours: Vec<u32>,
    /// Productivity score for the day (arbitrary positive scale).
    pub productivity_score: f64,
}

impl ProductivitySample {
    /// Create a sample from hours and a score.
    pub fn new(peak_hours: Vec<u32>, productivity_score: f64) -> Self {
        Self {
            peak_hours,
            productivity_score,
        }
    }
}

/// Identify the user's peak hours from history.
///
/// Every hour appearing in a sample accrues that sample's productivity
/// score; the 5 hours with the highest average win, ties broken by hour
/// ascending so the result is deterministic. Empty history falls back to
/// [`DEFAULT_PEAK_HOURS`]. The returned hours are sorted ascending.
pub fn peak_hours(history: &[ProductivitySample]) -> Vec<u32> {
    if history.is_empty() {
        return DEFAULT_PEAK_HOURS.to_vec();
    }

    let mut totals: HashMap<u32, (f64, u32)> = HashMap::new();
    for sample in history {
        for &hour in &sample.peak_hours {
            if hour < 24 {
                let entry = totals.entry(hour).or_insert((0.0, 0));
                entry.0 += sample.productivity_score;
                entry.1 += 1;
            }
        }
    }

    if totals.is_empty() {
        return DEFAULT_PEAK_HOURS.to_vec();
    }

    let mut averaged: Vec<(u32, f64)> = totals
        .into_iter()
        .map(|(hour, (sum, count))| (hour, sum / count as f64))
        .collect();
    averaged.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap().then(a.0.cmp(&b.0)));

    let mut hours: Vec<u32> = averaged
        .into_iter()
        .take(PEAK_HOUR_COUNT)
        .map(|(hour, _)| hour)
        .collect();
    hours.sort_unstable();
    hours
}
