//! Composite scoring: weighted blend of the three base methodologies.
//!
//! Weights: Eisenhower 0.4, Eat-the-Frog 0.3, Pareto 0.3. The blended list,
//! sorted descending, is the canonical recommendation ordering handed to
//! the scheduler.

use std::collections::HashMap;

use super::{Methodology, PrioritizationResult};
use crate::task::{CalculatedPriority, Task};

const EISENHOWER_WEIGHT: f64 = 0.4;
const FROG_WEIGHT: f64 = 0.3;
const PARETO_WEIGHT: f64 = 0.3;

/// Map a composite score to its priority band.
pub fn priority_band(score: f64) -> CalculatedPriority {
    if score >= 8.0 {
        CalculatedPriority::Urgent
    } else if score >= 6.0 {
        CalculatedPriority::High
    } else if score >= 4.0 {
        CalculatedPriority::Medium
    } else {
        CalculatedPriority::Low
    }
}

fn score_index(results: &[PrioritizationResult]) -> HashMap<&str, f64> {
    results
        .iter()
        .map(|r| (r.task_id.as_str(), r.score))
        .collect()
}

/// Blend the three methodology result sets into one ranked list.
///
/// A task missing from a result set contributes 0 for that methodology.
pub fn blend(
    tasks: &[Task],
    eisenhower: &[PrioritizationResult],
    eat_the_frog: &[PrioritizationResult],
    pareto: &[PrioritizationResult],
) -> Vec<PrioritizationResult> {
    let eisenhower_scores = score_index(eisenhower);
    let frog_scores = score_index(eat_the_frog);
    let pareto_scores = score_index(pareto);

    let mut results: Vec<PrioritizationResult> = tasks
        .iter()
        .map(|task| {
            let id = task.id.as_str();
            let e = eisenhower_scores.get(id).copied().unwrap_or(0.0);
            let f = frog_scores.get(id).copied().unwrap_or(0.0);
            let p = pareto_scores.get(id).copied().unwrap_or(0.0);
            let score = e * EISENHOWER_WEIGHT + f * FROG_WEIGHT + p * PARETO_WEIGHT;

            PrioritizationResult {
                task_id: task.id.clone(),
                original_priority: task.priority,
                calculated_priority: priority_band(score),
                score,
                reasoning: format!(
                    "Blend of Eisenhower {:.1}, Eat-the-Frog {:.1}, Pareto {:.1}",
                    e, f, p
                ),
                methodology: Methodology::Composite,
                category: None,
            }
        })
        .collect();

    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap());
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prioritize::prioritize;
    use crate::task::Priority;
    use chrono::{Duration, Utc};

    #[test]
    fn test_priority_bands() {
        assert_eq!(priority_band(9.5), CalculatedPriority::Urgent);
        assert_eq!(priority_band(8.0), CalculatedPriority::Urgent);
        assert_eq!(priority_band(7.9), CalculatedPriority::High);
        assert_eq!(priority_band(6.0), CalculatedPriority::High);
        assert_eq!(priority_band(5.9), CalculatedPriority::Medium);
        assert_eq!(priority_band(4.0), CalculatedPriority::Medium);
        assert_eq!(priority_band(3.9), CalculatedPriority::Low);
        assert_eq!(priority_band(0.0), CalculatedPriority::Low);
    }

    #[test]
    fn test_blend_weights() {
        let now = Utc::now();
        let tasks = vec![Task::new("1", "Solo")];
        let report = prioritize(&tasks, now);

        let e = report.eisenhower[0].score;
        let f = report.eat_the_frog[0].score;
        let p = report.pareto[0].score;
        let expected = e * 0.4 + f * 0.3 + p * 0.3;
        assert!((report.composite[0].score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_missing_result_set_entry_contributes_zero() {
        let tasks = vec![Task::new("1", "Orphan")];
        let results = blend(&tasks, &[], &[], &[]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 0.0);
        assert_eq!(results[0].calculated_priority, CalculatedPriority::Low);
    }

    #[test]
    fn test_high_value_urgent_task_lands_in_urgent_band() {
        let now = Utc::now();
        let tasks = vec![Task::new("1", "Ship the release")
            .with_priority(Priority::High)
            .with_complexity(5)
            .with_impact(5)
            .with_estimated_minutes(480)
            .with_due_date(now + Duration::hours(4))];

        let report = prioritize(&tasks, now);
        assert_eq!(
            report.composite[0].calculated_priority,
            CalculatedPriority::Urgent
        );
    }
}
