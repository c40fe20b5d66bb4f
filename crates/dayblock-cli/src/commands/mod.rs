pub mod prioritize;
pub mod schedule;

use chrono::{DateTime, Utc};
use dayblock_core::task::{tasks_from_json, Task};

/// Load a task list from a JSON file.
pub fn load_tasks(path: &str) -> Result<Vec<Task>, Box<dyn std::error::Error>> {
    let data = std::fs::read_to_string(path)?;
    Ok(tasks_from_json(&data)?)
}

/// Parse an RFC 3339 timestamp argument.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    let parsed = DateTime::parse_from_rfc3339(value)
        .map_err(|e| format!("invalid timestamp {value:?}: {e}"))?;
    Ok(parsed.with_timezone(&Utc))
}
