use clap::{Args, ValueEnum};

use chrono::Utc;
use dayblock_core::prioritize::{prioritize, PrioritizationResult, PriorityReport};

use super::{load_tasks, parse_instant};

#[derive(Args)]
pub struct PrioritizeArgs {
    /// Path to a JSON file with the task list
    pub tasks: String,
    /// Evaluation instant (RFC 3339); defaults to now
    #[arg(long)]
    pub now: Option<String>,
    /// Print only one methodology's results
    #[arg(long, value_enum)]
    pub methodology: Option<MethodologyArg>,
    /// Emit JSON instead of a readable listing
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MethodologyArg {
    Eisenhower,
    EatTheFrog,
    Pareto,
    Composite,
}

pub fn run(args: PrioritizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = load_tasks(&args.tasks)?;
    let now = match &args.now {
        Some(value) => parse_instant(value)?,
        None => Utc::now(),
    };

    let report = prioritize(&tasks, now);

    match args.methodology {
        Some(methodology) => {
            let results = select(&report, methodology);
            if args.json {
                println!("{}", serde_json::to_string_pretty(results)?);
            } else {
                print_results(results);
            }
        }
        None => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("composite ranking:");
                print_results(&report.composite);
            }
        }
    }
    Ok(())
}

fn select(report: &PriorityReport, methodology: MethodologyArg) -> &[PrioritizationResult] {
    match methodology {
        MethodologyArg::Eisenhower => &report.eisenhower,
        MethodologyArg::EatTheFrog => &report.eat_the_frog,
        MethodologyArg::Pareto => &report.pareto,
        MethodologyArg::Composite => &report.composite,
    }
}

fn print_results(results: &[PrioritizationResult]) {
    for result in results {
        let category = result.category.as_deref().unwrap_or("-");
        println!(
            "{:<12} score {:>5.2}  {:<10} {}",
            result.task_id,
            result.score,
            category,
            result.reasoning
        );
    }
}
