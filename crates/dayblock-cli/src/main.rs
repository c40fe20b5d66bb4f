use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "dayblock", version, about = "Dayblock CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score tasks with the prioritization methodologies
    Prioritize(commands::prioritize::PrioritizeArgs),
    /// Build a day schedule of time blocks from tasks
    Schedule(commands::schedule::ScheduleArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Prioritize(args) => commands::prioritize::run(args),
        Commands::Schedule(args) => commands::schedule::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
