use clap::Args;

use chrono::Utc;
use dayblock_core::breaks::BreakPlanner;
use dayblock_core::ids::SequentialSource;
use dayblock_core::prioritize::prioritize;
use dayblock_core::scheduler::{BlockScheduler, HourRange, ProductivitySample, TimeBlock};

use super::{load_tasks, parse_instant};

#[derive(Args)]
pub struct ScheduleArgs {
    /// Path to a JSON file with the task list
    pub tasks: String,
    /// Available hour ranges, e.g. "9-12,13-17"
    #[arg(long)]
    pub hours: String,
    /// Path to a JSON file with productivity history samples
    #[arg(long)]
    pub history: Option<String>,
    /// Target day (RFC 3339); defaults to today
    #[arg(long)]
    pub day: Option<String>,
    /// Emit JSON instead of a readable listing
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ScheduleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = load_tasks(&args.tasks)?;
    let available = parse_hours(&args.hours)?;

    let history: Vec<ProductivitySample> = match &args.history {
        Some(path) => {
            let data = std::fs::read_to_string(path)?;
            serde_json::from_str(&data)?
        }
        None => Vec::new(),
    };

    // A pinned day makes the whole run reproducible, so pin the block ids
    // too instead of minting UUIDs.
    let (day, mut scheduler, mut planner) = match &args.day {
        Some(value) => (
            parse_instant(value)?,
            BlockScheduler::with_id_source(Box::new(SequentialSource::new("block"))),
            BreakPlanner::new().with_id_source(Box::new(SequentialSource::new("break"))),
        ),
        None => (Utc::now(), BlockScheduler::new(), BreakPlanner::new()),
    };

    let report = prioritize(&tasks, day);
    let scored = report.apply_scores(&tasks);
    let schedule = scheduler.schedule(&scored, &available, &history, day);
    let blocks = planner.insert_breaks(&schedule.blocks);

    if args.json {
        let out = serde_json::json!({
            "blocks": blocks,
            "unscheduled": schedule.unscheduled,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_blocks(&blocks);
        if !schedule.unscheduled.is_empty() {
            println!("unscheduled: {}", schedule.unscheduled.join(", "));
        }
    }
    Ok(())
}

/// Parse "9-12,13-17" into validated hour ranges.
fn parse_hours(input: &str) -> Result<Vec<HourRange>, Box<dyn std::error::Error>> {
    let mut ranges = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        let (start, end) = part
            .split_once('-')
            .ok_or_else(|| format!("invalid hour range {part:?}, expected START-END"))?;
        let range = HourRange::new(start.trim().parse()?, end.trim().parse()?);
        range.validate()?;
        ranges.push(range);
    }
    Ok(ranges)
}

fn print_blocks(blocks: &[TimeBlock]) {
    for block in blocks {
        println!(
            "{} - {}  {:<10} {}",
            block.start_time.format("%H:%M"),
            block.end_time.format("%H:%M"),
            format!("{:?}", block.block_type),
            block.title
        );
    }
}
