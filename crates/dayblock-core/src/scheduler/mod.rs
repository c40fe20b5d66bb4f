//! Greedy time-block scheduler.
//!
//! Places incomplete tasks into free hour ranges without overlap:
//! - Tasks are ordered by composite score, then due date, then impact
//! - Energy buckets are processed high -> medium -> low so high-energy work
//!   gets first access to the user's peak hours
//! - High-energy tasks prefer a peak-hour start and fall back to any free
//!   slot after a full scan; medium/low take the first free slot
//!
//! Placement works at hour granularity: a task's slot length is
//! ceil(estimated_minutes / 60) hours and blocks start on whole hours.
//! Downstream consumers assume whole-hour boundaries, so the granularity
//! must not be refined to minutes without changing them too.

pub mod peak;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub use peak::{peak_hours, ProductivitySample, DEFAULT_PEAK_HOURS};

use crate::error::ValidationError;
use crate::ids::{IdSource, UuidSource};
use crate::task::{EnergyLevel, Task, TaskContext};

/// A free hour-of-day range for the target day, half-open.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HourRange {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl HourRange {
    /// Create an hour range.
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Check that the range is non-empty and within a day.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start_hour >= self.end_hour || self.end_hour > 24 {
            return Err(ValidationError::InvalidHourRange {
                start_hour: self.start_hour,
                end_hour: self.end_hour,
            });
        }
        Ok(())
    }
}

/// Type of placed block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BlockType {
    /// Focused work requiring sustained attention
    DeepWork,
    /// Administrative or low-demand work
    Admin,
    /// Recovery break
    Break,
}

/// Whether a block may be moved by the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Flexibility {
    Fixed,
    Flexible,
}

/// A placed interval on the calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeBlock {
    pub id: String,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Tasks covered by this block; empty for breaks.
    pub task_ids: Vec<String>,
    pub block_type: BlockType,
    pub energy_required: EnergyLevel,
    pub flexibility: Flexibility,
    pub ai_generated: bool,
}

impl TimeBlock {
    /// Create a block, validating that the interval is non-empty.
    pub fn new(
        id: String,
        title: String,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        block_type: BlockType,
    ) -> Result<Self, ValidationError> {
        if end_time <= start_time {
            return Err(ValidationError::InvalidTimeRange {
                start: start_time,
                end: end_time,
            });
        }
        Ok(Self {
            id,
            title,
            start_time,
            end_time,
            task_ids: Vec::new(),
            block_type,
            energy_required: EnergyLevel::Medium,
            flexibility: Flexibility::Flexible,
            ai_generated: false,
        })
    }

    /// Block duration in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Half-open overlap test against another block.
    pub fn overlaps(&self, other: &TimeBlock) -> bool {
        self.overlaps_range(other.start_time, other.end_time)
    }

    /// Half-open overlap test against a time range.
    pub fn overlaps_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start_time < end && self.end_time > start
    }
}

/// Result of one scheduling pass.
///
/// Tasks that fit nowhere are not errors; their ids are surfaced in
/// `unscheduled` so callers can detect the omission instead of diffing
/// the block list against the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Placed blocks, ascending by start time, pairwise non-overlapping.
    pub blocks: Vec<TimeBlock>,
    /// Ids of incomplete tasks no free slot could hold.
    pub unscheduled: Vec<String>,
}

/// Greedy scheduler for time blocks.
pub struct BlockScheduler {
    ids: Box<dyn IdSource>,
}

impl BlockScheduler {
    /// Create a scheduler with UUID block ids.
    pub fn new() -> Self {
        Self {
            ids: Box::new(UuidSource),
        }
    }

    /// Create a scheduler with a caller-supplied id source (deterministic
    /// runs, tests).
    pub fn with_id_source(ids: Box<dyn IdSource>) -> Self {
        Self { ids }
    }

    /// Place tasks into the available hour ranges of `day`.
    ///
    /// `history` drives peak-hour identification; pass an empty slice to
    /// use the default peak hours. Completed tasks are filtered out here,
    /// not by the caller. Hour ranges that are empty or extend past 24 are
    /// skipped rather than rejected.
    pub fn schedule(
        &mut self,
        tasks: &[Task],
        available: &[HourRange],
        history: &[ProductivitySample],
        day: DateTime<Utc>,
    ) -> DaySchedule {
        let peaks = peak_hours(history);

        let mut pending: Vec<&Task> = tasks.iter().filter(|t| !t.completed).collect();
        pending.sort_by(|a, b| compare_tasks(a, b));

        let mut blocks: Vec<TimeBlock> = Vec::new();
        let mut unscheduled: Vec<String> = Vec::new();

        for bucket in [EnergyLevel::High, EnergyLevel::Medium, EnergyLevel::Low] {
            for task in pending.iter().filter(|t| t.energy == bucket) {
                match self.place_task(task, available, &peaks, day, &blocks) {
                    Some(block) => blocks.push(block),
                    None => unscheduled.push(task.id.clone()),
                }
            }
        }

        blocks.sort_by_key(|b| b.start_time);
        DaySchedule {
            blocks,
            unscheduled,
        }
    }

    /// Find a free slot for one task; None when nothing fits.
    fn place_task(
        &mut self,
        task: &Task,
        available: &[HourRange],
        peaks: &[u32],
        day: DateTime<Utc>,
        placed: &[TimeBlock],
    ) -> Option<TimeBlock> {
        let slots = hours_needed(task);
        let mut first_free: Option<(DateTime<Utc>, DateTime<Utc>)> = None;

        for range in available {
            let end_hour = range.end_hour.min(24);
            if end_hour <= range.start_hour || end_hour - range.start_hour < slots {
                continue;
            }

            for start_hour in range.start_hour..=(end_hour - slots) {
                let start = hour_on_day(day, start_hour)?;
                let end = start + Duration::hours(slots as i64);

                if placed.iter().any(|b| b.overlaps_range(start, end)) {
                    continue;
                }

                if task.energy == EnergyLevel::High {
                    if peaks.contains(&start_hour) {
                        return Some(self.build_block(task, start, end));
                    }
                    if first_free.is_none() {
                        first_free = Some((start, end));
                    }
                } else {
                    return Some(self.build_block(task, start, end));
                }
            }
        }

        first_free.map(|(start, end)| self.build_block(task, start, end))
    }

    fn build_block(&mut self, task: &Task, start: DateTime<Utc>, end: DateTime<Utc>) -> TimeBlock {
        let block_type = match task.energy {
            EnergyLevel::High => BlockType::DeepWork,
            EnergyLevel::Medium => {
                if task.context == TaskContext::Administrative {
                    BlockType::Admin
                } else {
                    BlockType::DeepWork
                }
            }
            EnergyLevel::Low => BlockType::Admin,
        };

        TimeBlock {
            id: self.ids.next_id(),
            title: task.title.clone(),
            start_time: start,
            end_time: end,
            task_ids: vec![task.id.clone()],
            block_type,
            energy_required: task.energy,
            flexibility: Flexibility::Flexible,
            ai_generated: true,
        }
    }
}

impl Default for BlockScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Scheduling order: composite score descending, due date ascending
/// (tasks with a due date before those without), impact descending.
fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    let score_a = a.ai_score.unwrap_or(0.0);
    let score_b = b.ai_score.unwrap_or(0.0);

    score_b
        .partial_cmp(&score_a)
        .unwrap_or(Ordering::Equal)
        .then_with(|| match (a.due_date, b.due_date) {
            (Some(da), Some(db)) => da.cmp(&db),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| b.impact_rating().cmp(&a.impact_rating()))
}

/// Slot length in whole hours (see module docs on hour granularity).
fn hours_needed(task: &Task) -> u32 {
    let minutes = task.duration_minutes();
    (minutes + 59) / 60
}

/// The instant at `hour` o'clock on the day containing `day`.
fn hour_on_day(day: DateTime<Utc>, hour: u32) -> Option<DateTime<Utc>> {
    let midnight = day.date_naive().and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight) + Duration::hours(hour as i64))
}
