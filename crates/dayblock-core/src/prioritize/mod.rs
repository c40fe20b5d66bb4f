//! Priority scorer: competing prioritization methodologies and their blend.
//!
//! Four methodologies are computed per scoring pass:
//! - Eisenhower matrix (urgency/importance quadrants)
//! - Eat-the-Frog (hardest task first)
//! - Pareto 80/20 (population-percentile impact bucketing)
//! - Composite (weighted blend of the three, the canonical recommendation
//!   ordering handed to the scheduler)
//!
//! Scoring is a pure function of the task list and an explicit `now`
//! reference; repeated calls over the same input produce identical reports.

pub mod composite;
pub mod eat_the_frog;
pub mod eisenhower;
pub mod pareto;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::{CalculatedPriority, Priority, Task};

/// Prioritization methodology that produced a result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Methodology {
    Eisenhower,
    EatTheFrog,
    Pareto,
    Composite,
}

/// Scorer output for one task under one methodology.
///
/// Produced fresh on every scoring pass and never mutated; `task_id` is a
/// reference to the caller's task, not ownership of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrioritizationResult {
    pub task_id: String,
    pub original_priority: Priority,
    pub calculated_priority: CalculatedPriority,
    /// Methodology-specific score scale (1-10 for the individual
    /// methodologies, weighted blend for composite).
    pub score: f64,
    pub reasoning: String,
    pub methodology: Methodology,
    /// Quadrant or bucket label, where the methodology has one.
    #[serde(default)]
    pub category: Option<String>,
}

/// Full output of one scoring pass: all four result sets.
///
/// `composite` is pre-sorted descending by score and is the recommendation
/// ordering consumed by the scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityReport {
    pub eisenhower: Vec<PrioritizationResult>,
    pub eat_the_frog: Vec<PrioritizationResult>,
    pub pareto: Vec<PrioritizationResult>,
    pub composite: Vec<PrioritizationResult>,
}

/// Score all tasks under every methodology.
///
/// An empty task list yields an empty report for all methodologies; it is
/// not an error.
pub fn prioritize(tasks: &[Task], now: DateTime<Utc>) -> PriorityReport {
    let eisenhower = eisenhower::score_tasks(tasks, now);
    let eat_the_frog = eat_the_frog::score_tasks(tasks);
    let pareto = pareto::score_tasks(tasks, now);
    let composite = composite::blend(tasks, &eisenhower, &eat_the_frog, &pareto);

    PriorityReport {
        eisenhower,
        eat_the_frog,
        pareto,
        composite,
    }
}

impl PriorityReport {
    /// Copy composite scores onto fresh task copies as `ai_score` in [0,1].
    ///
    /// The only writer of `Task::ai_score`. Tasks absent from the composite
    /// set are returned unchanged.
    pub fn apply_scores(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .map(|task| {
                match self
                    .composite
                    .iter()
                    .find(|r| r.task_id == task.id)
                {
                    Some(result) => task
                        .clone()
                        .with_ai_score((result.score / 10.0).clamp(0.0, 1.0)),
                    None => task.clone(),
                }
            })
            .collect()
    }

    /// Result for one task under one methodology, if present.
    pub fn result_for(&self, methodology: Methodology, task_id: &str) -> Option<&PrioritizationResult> {
        let set = match methodology {
            Methodology::Eisenhower => &self.eisenhower,
            Methodology::EatTheFrog => &self.eat_the_frog,
            Methodology::Pareto => &self.pareto,
            Methodology::Composite => &self.composite,
        };
        set.iter().find(|r| r.task_id == task_id)
    }
}
