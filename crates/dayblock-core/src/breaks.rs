//! Recovery-break insertion between scheduled blocks.
//!
//! Scans an ascending block sequence and inserts a break after each session
//! that meets the configured threshold, provided the break fits in the gap
//! before the next block. A break that would overlap its successor is
//! silently skipped; that is expected, not an error.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::ids::{IdSource, UuidSource};
use crate::scheduler::{BlockType, Flexibility, TimeBlock};
use crate::task::EnergyLevel;

/// Break insertion configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BreakConfig {
    /// Minimum session length (minutes) that earns a recovery break.
    pub session_threshold_minutes: i64,
    /// Break length after sessions longer than two hours.
    pub long_break_minutes: i64,
    /// Break length after shorter qualifying sessions.
    pub short_break_minutes: i64,
}

impl Default for BreakConfig {
    fn default() -> Self {
        Self {
            session_threshold_minutes: 90,
            long_break_minutes: 15,
            short_break_minutes: 5,
        }
    }
}

/// Inserts recovery breaks into a scheduled block sequence.
pub struct BreakPlanner {
    config: BreakConfig,
    ids: Box<dyn IdSource>,
}

impl BreakPlanner {
    /// Create a planner with default config and UUID ids.
    pub fn new() -> Self {
        Self {
            config: BreakConfig::default(),
            ids: Box::new(UuidSource),
        }
    }

    /// Create with custom config.
    pub fn with_config(config: BreakConfig) -> Self {
        Self {
            config,
            ids: Box::new(UuidSource),
        }
    }

    /// Replace the id source (deterministic runs, tests).
    pub fn with_id_source(mut self, ids: Box<dyn IdSource>) -> Self {
        self.ids = ids;
        self
    }

    /// Insert breaks between adjacent blocks where they fit.
    ///
    /// Returns the original blocks plus any inserted break blocks, sorted
    /// ascending by start time. A session of at least the threshold earns
    /// a break; sessions over two hours earn the long break.
    pub fn insert_breaks(&mut self, blocks: &[TimeBlock]) -> Vec<TimeBlock> {
        let mut result: Vec<TimeBlock> = blocks.to_vec();

        for pair in blocks.windows(2) {
            let session_minutes = pair[0].duration_minutes();
            if session_minutes < self.config.session_threshold_minutes {
                continue;
            }

            let break_minutes = if session_minutes > 120 {
                self.config.long_break_minutes
            } else {
                self.config.short_break_minutes
            };

            let break_start = pair[0].end_time;
            let break_end = break_start + Duration::minutes(break_minutes);
            if break_end > pair[1].start_time {
                // Would overlap the next block; skip this gap.
                continue;
            }

            result.push(TimeBlock {
                id: self.ids.next_id(),
                title: "Break".to_string(),
                start_time: break_start,
                end_time: break_end,
                task_ids: Vec::new(),
                block_type: BlockType::Break,
                energy_required: EnergyLevel::Low,
                flexibility: Flexibility::Flexible,
                ai_generated: true,
            });
        }

        result.sort_by_key(|b| b.start_time);
        result
    }
}

impl Default for BreakPlanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialSource;
    use chrono::{DateTime, TimeZone, Utc};

    fn make_planner() -> BreakPlanner {
        BreakPlanner::new().with_id_source(Box::new(SequentialSource::new("break")))
    }

    fn make_block(id: &str, start: DateTime<Utc>, minutes: i64) -> TimeBlock {
        TimeBlock {
            id: id.to_string(),
            title: format!("Block {}", id),
            start_time: start,
            end_time: start + Duration::minutes(minutes),
            task_ids: vec![format!("task-{}", id)],
            block_type: BlockType::DeepWork,
            energy_required: EnergyLevel::High,
            flexibility: Flexibility::Flexible,
            ai_generated: true,
        }
    }

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 11, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_short_session_gets_no_break() {
        let mut planner = make_planner();
        let blocks = vec![
            make_block("1", base(), 60),
            make_block("2", base() + Duration::hours(2), 60),
        ];

        let result = planner.insert_breaks(&blocks);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_qualifying_session_gets_short_break() {
        let mut planner = make_planner();
        // 90-minute session, next block two hours later.
        let blocks = vec![
            make_block("1", base(), 90),
            make_block("2", base() + Duration::hours(4), 60),
        ];

        let result = planner.insert_breaks(&blocks);
        assert_eq!(result.len(), 3);

        let brk = &result[1];
        assert_eq!(brk.block_type, BlockType::Break);
        assert_eq!(brk.title, "Break");
        assert_eq!(brk.energy_required, EnergyLevel::Low);
        assert!(brk.task_ids.is_empty());
        assert!(brk.ai_generated);
        assert_eq!(brk.start_time, blocks[0].end_time);
        assert_eq!(brk.duration_minutes(), 5);
    }

    #[test]
    fn test_long_session_gets_long_break() {
        let mut planner = make_planner();
        let blocks = vec![
            make_block("1", base(), 150),
            make_block("2", base() + Duration::hours(5), 60),
        ];

        let result = planner.insert_breaks(&blocks);
        assert_eq!(result.len(), 3);
        assert_eq!(result[1].duration_minutes(), 15);
    }

    #[test]
    fn test_exactly_two_hours_is_still_short_break() {
        let mut planner = make_planner();
        let blocks = vec![
            make_block("1", base(), 120),
            make_block("2", base() + Duration::hours(4), 60),
        ];

        let result = planner.insert_breaks(&blocks);
        assert_eq!(result[1].duration_minutes(), 5);
    }

    #[test]
    fn test_break_skipped_when_it_would_overlap_next_block() {
        let mut planner = make_planner();
        // 150-minute session immediately followed by the next block.
        let first = make_block("1", base(), 150);
        let second = make_block("2", first.end_time, 60);

        let result = planner.insert_breaks(&[first, second]);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|b| b.block_type != BlockType::Break));
    }

    #[test]
    fn test_break_fits_exactly_into_gap() {
        let mut planner = make_planner();
        // 90-minute session with exactly 5 minutes before the next block.
        let first = make_block("1", base(), 90);
        let second = make_block("2", first.end_time + Duration::minutes(5), 60);

        let result = planner.insert_breaks(&[first.clone(), second.clone()]);
        assert_eq!(result.len(), 3);
        let brk = &result[1];
        assert_eq!(brk.start_time, first.end_time);
        assert_eq!(brk.end_time, second.start_time);
        assert!(!brk.overlaps(&first));
        assert!(!brk.overlaps(&second));
    }

    #[test]
    fn test_output_stays_sorted() {
        let mut planner = make_planner();
        let blocks = vec![
            make_block("1", base(), 120),
            make_block("2", base() + Duration::hours(3), 120),
            make_block("3", base() + Duration::hours(6), 60),
        ];

        let result = planner.insert_breaks(&blocks);
        assert_eq!(result.len(), 5);
        for pair in result.windows(2) {
            assert!(pair[0].start_time <= pair[1].start_time);
        }
    }

    #[test]
    fn test_empty_and_single_block_inputs() {
        let mut planner = make_planner();
        assert!(planner.insert_breaks(&[]).is_empty());

        // The last session has no successor, so no trailing break.
        let result = planner.insert_breaks(&[make_block("1", base(), 180)]);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_custom_threshold() {
        let mut planner = BreakPlanner::with_config(BreakConfig {
            session_threshold_minutes: 30,
            ..Default::default()
        })
        .with_id_source(Box::new(SequentialSource::new("break")));

        let blocks = vec![
            make_block("1", base(), 45),
            make_block("2", base() + Duration::hours(2), 45),
        ];

        let result = planner.insert_breaks(&blocks);
        assert_eq!(result.len(), 3);
        assert_eq!(result[1].duration_minutes(), 5);
    }
}
