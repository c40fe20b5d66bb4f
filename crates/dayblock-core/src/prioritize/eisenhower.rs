//! Eisenhower matrix scoring: urgency/importance quadrant classification.

use chrono::{DateTime, Utc};

use super::{Methodology, PrioritizationResult};
use crate::task::{CalculatedPriority, EnergyLevel, Priority, RatingClass, Task};

/// Quadrant labels in priority order.
const DO_FIRST: &str = "Do First";
const SCHEDULE: &str = "Schedule";
const DELEGATE: &str = "Delegate";
const ELIMINATE: &str = "Eliminate";

/// Urgency on a 1-10 scale derived from days until the due date.
///
/// A task without a due date scores 3 rather than the minimum: having no
/// plan at all should not rank above tasks that at least carry one.
pub fn urgency_score(task: &Task, now: DateTime<Utc>) -> f64 {
    let Some(due) = task.due_date else {
        return 3.0;
    };

    let days_until = (due - now).num_days();
    if due < now {
        10.0
    } else {
        match days_until {
            0 => 9.0,
            1 => 8.0,
            2..=3 => 7.0,
            4..=7 => 5.0,
            8..=14 => 3.0,
            _ => 2.0,
        }
    }
}

/// Importance on a 1-10 scale from priority, complexity, impact, energy.
pub fn importance_score(task: &Task) -> f64 {
    let mut score: f64 = 5.0;

    score += match task.priority {
        Priority::High => 3.0,
        Priority::Medium => 1.0,
        Priority::Low => -1.0,
    };

    if task.complexity_class() == RatingClass::High {
        score += 2.0;
    }
    if task.impact_class() == RatingClass::High {
        score += 2.0;
    }
    if task.energy == EnergyLevel::High {
        score += 1.0;
    }

    score.clamp(1.0, 10.0)
}

fn quadrant(importance: f64, urgency: f64) -> (&'static str, CalculatedPriority) {
    match (importance >= 7.0, urgency >= 7.0) {
        (true, true) => (DO_FIRST, CalculatedPriority::Urgent),
        (true, false) => (SCHEDULE, CalculatedPriority::High),
        (false, true) => (DELEGATE, CalculatedPriority::Medium),
        (false, false) => (ELIMINATE, CalculatedPriority::Low),
    }
}

/// Score each task under the Eisenhower matrix, in input order.
pub fn score_tasks(tasks: &[Task], now: DateTime<Utc>) -> Vec<PrioritizationResult> {
    tasks
        .iter()
        .map(|task| {
            let urgency = urgency_score(task, now);
            let importance = importance_score(task);
            let (label, calculated) = quadrant(importance, urgency);
            let score = importance * 0.6 + urgency * 0.4;

            PrioritizationResult {
                task_id: task.id.clone(),
                original_priority: task.priority,
                calculated_priority: calculated,
                score,
                reasoning: format!(
                    "Importance {:.0}/10, urgency {:.0}/10 -> {}",
                    importance, urgency, label
                ),
                methodology: Methodology::Eisenhower,
                category: Some(label.to_string()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn make_task(id: &str) -> Task {
        Task::new(id, format!("Task {}", id))
    }

    #[test]
    fn test_urgency_table() {
        let now = Utc::now();
        let overdue = make_task("1").with_due_date(now - Duration::hours(1));
        assert_eq!(urgency_score(&overdue, now), 10.0);

        let today = make_task("2").with_due_date(now + Duration::hours(6));
        assert_eq!(urgency_score(&today, now), 9.0);

        let tomorrow = make_task("3").with_due_date(now + Duration::days(1) + Duration::hours(1));
        assert_eq!(urgency_score(&tomorrow, now), 8.0);

        let three_days = make_task("4").with_due_date(now + Duration::days(3));
        assert_eq!(urgency_score(&three_days, now), 7.0);

        let week = make_task("5").with_due_date(now + Duration::days(6));
        assert_eq!(urgency_score(&week, now), 5.0);

        let fortnight = make_task("6").with_due_date(now + Duration::days(12));
        assert_eq!(urgency_score(&fortnight, now), 3.0);

        let later = make_task("7").with_due_date(now + Duration::days(40));
        assert_eq!(urgency_score(&later, now), 2.0);

        let no_due = make_task("8");
        assert_eq!(urgency_score(&no_due, now), 3.0);
    }

    #[test]
    fn test_importance_additives() {
        let base = make_task("1");
        // base 5 + medium priority 1
        assert_eq!(importance_score(&base), 6.0);

        let stacked = make_task("2")
            .with_priority(Priority::High)
            .with_complexity(5)
            .with_impact(5)
            .with_energy(EnergyLevel::High);
        // 5 + 3 + 2 + 2 + 1 = 13, clamped to 10
        assert_eq!(importance_score(&stacked), 10.0);

        let weak = make_task("3")
            .with_priority(Priority::Low)
            .with_complexity(1)
            .with_impact(1);
        assert_eq!(importance_score(&weak), 4.0);
    }

    #[test]
    fn test_quadrant_assignment() {
        let now = Utc::now();

        // Important and urgent: Do First
        let do_first = make_task("1")
            .with_priority(Priority::High)
            .with_impact(5)
            .with_due_date(now + Duration::hours(2));
        let results = score_tasks(&[do_first], now);
        assert_eq!(results[0].category.as_deref(), Some("Do First"));
        assert_eq!(results[0].calculated_priority, CalculatedPriority::Urgent);

        // Important but not urgent: Schedule
        let schedule = make_task("2")
            .with_priority(Priority::High)
            .with_impact(5)
            .with_due_date(now + Duration::days(30));
        let results = score_tasks(&[schedule], now);
        assert_eq!(results[0].category.as_deref(), Some("Schedule"));
        assert_eq!(results[0].calculated_priority, CalculatedPriority::High);

        // Urgent but not important: Delegate
        let delegate = make_task("3")
            .with_priority(Priority::Low)
            .with_impact(1)
            .with_complexity(1)
            .with_due_date(now + Duration::hours(2));
        let results = score_tasks(&[delegate], now);
        assert_eq!(results[0].category.as_deref(), Some("Delegate"));
        assert_eq!(results[0].calculated_priority, CalculatedPriority::Medium);

        // Neither: Eliminate
        let eliminate = make_task("4")
            .with_priority(Priority::Low)
            .with_impact(1)
            .with_complexity(1);
        let results = score_tasks(&[eliminate], now);
        assert_eq!(results[0].category.as_deref(), Some("Eliminate"));
        assert_eq!(results[0].calculated_priority, CalculatedPriority::Low);
    }

    #[test]
    fn test_score_is_weighted_blend() {
        let now = Utc::now();
        let task = make_task("1")
            .with_priority(Priority::High)
            .with_impact(5)
            .with_complexity(5)
            .with_due_date(now + Duration::hours(2));

        let results = score_tasks(&[task], now);
        // importance 10 (clamped), urgency 9
        assert!((results[0].score - (10.0 * 0.6 + 9.0 * 0.4)).abs() < 1e-9);
    }
}
