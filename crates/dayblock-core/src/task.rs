//! Task types shared by the priority scorer and the block scheduler.
//!
//! Numeric ratings (complexity, impact) are soft-validated: out-of-range
//! values coming from legacy data are clamped by the accessors, never
//! rejected. The enumerated fields are closed types so unknown wire values
//! fail at deserialization instead of propagating as free text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-declared baseline priority.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// Priority produced by a scoring methodology.
///
/// Extends [`Priority`] with an `Urgent` tier that only the scorer assigns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum CalculatedPriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Energy a task demands to be executed well.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    /// Low energy (e.g., end of day)
    Low,
    /// Medium energy (default)
    Medium,
    /// High energy (e.g., morning)
    High,
}

impl Default for EnergyLevel {
    fn default() -> Self {
        EnergyLevel::Medium
    }
}

/// Life-area context a task belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskContext {
    Work,
    Personal,
    Creative,
    Administrative,
    Learning,
}

impl Default for TaskContext {
    fn default() -> Self {
        TaskContext::Work
    }
}

/// Coarse low/medium/high class for a 1-5 rating.
///
/// The scoring formulas reason about "high complexity" or "low impact";
/// 1-2 maps to low, 3 to medium, 4-5 to high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingClass {
    Low,
    Medium,
    High,
}

impl RatingClass {
    /// Classify a clamped 1-5 rating.
    pub fn of(rating: u8) -> Self {
        match rating {
            0..=2 => RatingClass::Low,
            3 => RatingClass::Medium,
            _ => RatingClass::High,
        }
    }
}

fn default_rating() -> u8 {
    3
}

/// A unit of work to be scored and scheduled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Estimated duration in minutes; treated as 30 when absent.
    #[serde(default)]
    pub estimated_minutes: Option<u32>,
    /// Complexity rating 1-5 (1 = trivial, 5 = very complex).
    #[serde(default = "default_rating")]
    pub complexity: u8,
    /// Impact rating 1-5 (1 = low value, 5 = high value).
    #[serde(default = "default_rating")]
    pub impact: u8,
    #[serde(default)]
    pub context: TaskContext,
    #[serde(default)]
    pub energy: EnergyLevel,
    /// Most recently computed composite priority in [0,1].
    ///
    /// Written only by [`crate::prioritize::PriorityReport::apply_scores`],
    /// read by the scheduler.
    #[serde(default)]
    pub ai_score: Option<f64>,
}

impl Task {
    /// Create a task with default attributes.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            priority: Priority::Medium,
            completed: false,
            due_date: None,
            estimated_minutes: None,
            complexity: 3,
            impact: 3,
            context: TaskContext::Work,
            energy: EnergyLevel::Medium,
            ai_score: None,
        }
    }

    /// Set the baseline priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the due date.
    pub fn with_due_date(mut self, due: DateTime<Utc>) -> Self {
        self.due_date = Some(due);
        self
    }

    /// Set the estimated duration in minutes.
    pub fn with_estimated_minutes(mut self, minutes: u32) -> Self {
        self.estimated_minutes = Some(minutes);
        self
    }

    /// Set the complexity rating (clamped on read, not here).
    pub fn with_complexity(mut self, complexity: u8) -> Self {
        self.complexity = complexity;
        self
    }

    /// Set the impact rating.
    pub fn with_impact(mut self, impact: u8) -> Self {
        self.impact = impact;
        self
    }

    /// Set the task context.
    pub fn with_context(mut self, context: TaskContext) -> Self {
        self.context = context;
        self
    }

    /// Set the required energy level.
    pub fn with_energy(mut self, energy: EnergyLevel) -> Self {
        self.energy = energy;
        self
    }

    /// Mark the task completed.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Set the composite priority score.
    pub fn with_ai_score(mut self, score: f64) -> Self {
        self.ai_score = Some(score);
        self
    }

    /// Estimated duration in minutes, defaulting to 30 and never zero.
    pub fn duration_minutes(&self) -> u32 {
        match self.estimated_minutes {
            Some(0) | None => 30,
            Some(m) => m,
        }
    }

    /// Complexity clamped to 1-5.
    pub fn complexity_rating(&self) -> u8 {
        self.complexity.clamp(1, 5)
    }

    /// Impact clamped to 1-5.
    pub fn impact_rating(&self) -> u8 {
        self.impact.clamp(1, 5)
    }

    /// Complexity as a low/medium/high class.
    pub fn complexity_class(&self) -> RatingClass {
        RatingClass::of(self.complexity_rating())
    }

    /// Impact as a low/medium/high class.
    pub fn impact_class(&self) -> RatingClass {
        RatingClass::of(self.impact_rating())
    }
}

/// Parse a task list from a JSON array.
pub fn tasks_from_json(data: &str) -> crate::error::Result<Vec<Task>> {
    Ok(serde_json::from_str(data)?)
}
