#![forbid(unsafe_code)]
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use log::{debug, error};
use tardiness::SchedulerOptions;

mod commands;
mod report;

#[derive(Debug, Parser)]
#[command(author, version)]
/// Single machine scheduler minimizing total weighted tardiness
struct App {
    #[command(flatten)]
    verbose: Verbosity,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the tabu search on a job list and print every iteration
    Schedule(Schedule),
    /// Write a random job list
    Generate(Generate),
    /// Run the tabu search on every job list in a folder
    Benchmark(Benchmark),
}

#[derive(Args, Debug, Clone, Copy)]
pub struct SearchArgs {
    /// Number of tabu search iterations
    #[arg(short, long, default_value_t = 200)]
    pub iterations: u32,

    /// Length of the tabu list
    #[arg(short, long, default_value_t = 11)]
    pub tabu_size: usize,
}

impl From<SearchArgs> for SchedulerOptions {
    fn from(args: SearchArgs) -> Self {
        SchedulerOptions {
            number_of_iterations: args.iterations,
            tabu_list_size: args.tabu_size,
        }
    }
}

#[derive(Args, Debug)]
pub struct Schedule {
    /// Job list file, the built-in 15 job instance is used if omitted
    pub path: Option<PathBuf>,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Only print the best schedule
    #[arg(short, long)]
    pub best_only: bool,
}

#[derive(Args, Debug)]
pub struct Generate {
    /// Target file for the job list
    #[arg(required = true)]
    pub output: PathBuf,

    /// Number of jobs to generate
    #[arg(short, long, default_value_t = 15)]
    pub count: usize,

    /// Seed for the random generator
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct Benchmark {
    /// Folder containing job list files
    #[arg(required = true)]
    pub job_list_folder: PathBuf,

    /// File the results are written to
    #[arg(required = true)]
    pub output: PathBuf,

    #[command(flatten)]
    pub search: SearchArgs,
}

fn main() {
    let args: App = App::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    debug!("{args:?}");

    if let Err(err) = match args.command {
        Commands::Schedule(schedule) => commands::schedule(schedule),
        Commands::Generate(generate) => commands::generate(generate),
        Commands::Benchmark(benchmark) => commands::benchmark(benchmark),
    } {
        error!("An error occurred: {:#}", err);
        std::process::exit(1);
    }
}
