//! Pareto (80/20) scoring: population-percentile impact bucketing.
//!
//! The top ceil(N*0.2) of tasks by impact are the "Vital Few", the next
//! tier up to a cumulative ceil(N*0.5) the "Important Many", and the rest
//! the "Trivial Many". Bucket boundaries are over the ranked population,
//! not fixed score thresholds.

use chrono::{DateTime, Duration, Utc};

use super::{Methodology, PrioritizationResult};
use crate::task::{CalculatedPriority, Priority, RatingClass, Task};

/// Impact on a 1-10 scale from impact rating, priority, complexity, due date.
pub fn impact_score(task: &Task, now: DateTime<Utc>) -> f64 {
    let mut score: f64 = 5.0;

    score += match task.impact_class() {
        RatingClass::High => 3.0,
        RatingClass::Medium => 1.0,
        RatingClass::Low => -1.0,
    };

    score += match task.priority {
        Priority::High => 1.0,
        Priority::Medium => 0.0,
        Priority::Low => -1.0,
    };

    if task.complexity_class() == RatingClass::High {
        score += 1.0;
    }

    if let Some(due) = task.due_date {
        if due - now <= Duration::days(1) {
            score += 1.0;
        }
    }

    score.clamp(1.0, 10.0)
}

/// Score all tasks, returned ranked by impact descending.
///
/// Ties in impact keep the input order (stable sort).
pub fn score_tasks(tasks: &[Task], now: DateTime<Utc>) -> Vec<PrioritizationResult> {
    let n = tasks.len();
    if n == 0 {
        return Vec::new();
    }

    let vital_cutoff = (n as f64 * 0.2).ceil() as usize;
    let important_cutoff = (n as f64 * 0.5).ceil() as usize;

    let mut ranked: Vec<(&Task, f64)> = tasks
        .iter()
        .map(|task| (task, impact_score(task, now)))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());

    ranked
        .into_iter()
        .enumerate()
        .map(|(index, (task, score))| {
            let (label, calculated) = if index < vital_cutoff {
                ("Vital Few", CalculatedPriority::Urgent)
            } else if index < important_cutoff {
                ("Important Many", CalculatedPriority::High)
            } else if score > 5.0 {
                ("Trivial Many", CalculatedPriority::Medium)
            } else {
                ("Trivial Many", CalculatedPriority::Low)
            };

            PrioritizationResult {
                task_id: task.id.clone(),
                original_priority: task.priority,
                calculated_priority: calculated,
                score,
                reasoning: format!(
                    "Impact {:.0}/10, top {:.0}% of {} tasks -> {}",
                    score,
                    ((index + 1) as f64 / n as f64) * 100.0,
                    n,
                    label
                ),
                methodology: Methodology::Pareto,
                category: Some(label.to_string()),
            }
        })
        .collect()
}
