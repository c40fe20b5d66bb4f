//! Eat-the-Frog scoring: tackle the hardest task first.
//!
//! Tasks are ranked by a 1-10 difficulty estimate; the single hardest task
//! is "The Frog" and gets the urgent slot, the next tiers step down from
//! there. The recorded score is `10 - rank index` so the hardest task scores
//! highest regardless of its raw difficulty.

use super::{Methodology, PrioritizationResult};
use crate::task::{CalculatedPriority, EnergyLevel, RatingClass, Task};

/// Difficulty on a 1-10 scale from complexity, energy, and duration.
pub fn difficulty_score(task: &Task) -> f64 {
    let mut score: f64 = 5.0;

    score += match task.complexity_class() {
        RatingClass::High => 3.0,
        RatingClass::Medium => 1.0,
        RatingClass::Low => -1.0,
    };

    score += match task.energy {
        EnergyLevel::High => 2.0,
        EnergyLevel::Medium => 1.0,
        EnergyLevel::Low => -1.0,
    };

    let minutes = task.duration_minutes();
    if minutes > 240 {
        score += 2.0;
    } else if minutes > 120 {
        score += 1.0;
    } else if minutes < 30 {
        score -= 1.0;
    }

    score.clamp(1.0, 10.0)
}

fn rank_bucket(index: usize) -> (&'static str, CalculatedPriority) {
    match index {
        0 => ("The Frog", CalculatedPriority::Urgent),
        1..=2 => ("Major Tasks", CalculatedPriority::High),
        3..=5 => ("Medium Tasks", CalculatedPriority::Medium),
        _ => ("Quick Wins", CalculatedPriority::Low),
    }
}

/// Score all tasks, returned in rank order (hardest first).
///
/// Ties in difficulty keep the input order (stable sort).
pub fn score_tasks(tasks: &[Task]) -> Vec<PrioritizationResult> {
    let mut ranked: Vec<(&Task, f64)> = tasks
        .iter()
        .map(|task| (task, difficulty_score(task)))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());

    ranked
        .into_iter()
        .enumerate()
        .map(|(index, (task, difficulty))| {
            let (label, calculated) = rank_bucket(index);
            PrioritizationResult {
                task_id: task.id.clone(),
                original_priority: task.priority,
                calculated_priority: calculated,
                score: 10.0 - index as f64,
                reasoning: format!(
                    "Difficulty {:.0}/10, rank #{} -> {}",
                    difficulty,
                    index + 1,
                    label
                ),
                methodology: Methodology::EatTheFrog,
                category: Some(label.to_string()),
            }
        })
        .collect()
}
