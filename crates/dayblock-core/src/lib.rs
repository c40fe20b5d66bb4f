//! # Dayblock Core Library
//!
//! This library provides the prioritization and time-block scheduling engine
//! for the Dayblock productivity app. It implements a CLI-first philosophy
//! where the full pipeline is available to a standalone CLI binary, with any
//! GUI layer being a thin shell over the same core library.
//!
//! ## Architecture
//!
//! - **Priority Scorer**: ranks tasks under the Eisenhower, Eat-the-Frog and
//!   Pareto methodologies and blends them into one composite recommendation
//! - **Time-Block Scheduler**: greedily places the highest-value incomplete
//!   tasks into free hour ranges, matching high-energy work to peak hours
//! - **Break Inserter**: adds recovery breaks after long sessions
//!
//! All three stages are pure, synchronous functions over caller-owned data:
//! no I/O, no persistence, no ambient clock or randomness. "Now", the target
//! day and the block id generator are injected by the caller, so identical
//! inputs always produce identical outputs.
//!
//! ## Key Components
//!
//! - [`prioritize::prioritize`]: one scoring pass over a task list
//! - [`BlockScheduler`]: greedy interval placement
//! - [`BreakPlanner`]: recovery-break insertion

pub mod breaks;
pub mod error;
pub mod ids;
pub mod prioritize;
pub mod scheduler;
pub mod task;

pub use breaks::{BreakConfig, BreakPlanner};
pub use error::{CoreError, Result, ValidationError};
pub use ids::{IdSource, SequentialSource, UuidSource};
pub use prioritize::{prioritize, Methodology, PrioritizationResult, PriorityReport};
pub use scheduler::{
    peak_hours, BlockScheduler, BlockType, DaySchedule, Flexibility, HourRange,
    ProductivitySample, TimeBlock, DEFAULT_PEAK_HOURS,
};
pub use task::{tasks_from_json, CalculatedPriority, EnergyLevel, Priority, Task, TaskContext};
