use std::path::PathBuf;

use anyhow::Result;
use log::info;
use tardiness::{scheduler, Schedule, SchedulerOptions};

use super::load_jobs;
use crate::Benchmark;

pub fn benchmark(benchmark: Benchmark) -> Result<()> {
    if !benchmark.job_list_folder.is_dir() {
        anyhow::bail!("job_list_folder is not a directory")
    }

    let mut paths: Vec<PathBuf> = benchmark
        .job_list_folder
        .read_dir()?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<Result<_, _>>()?;
    paths.retain(|path| path.is_file());
    paths.sort();

    let options = SchedulerOptions::from(benchmark.search);
    let mut scheduling_results = Vec::with_capacity(paths.len());

    for path in paths {
        let jobs = load_jobs(&path)?;
        let result = scheduler(&jobs, Schedule::identity(jobs.len()), options)?;

        info!("{path:?}: {} -> {}", result.initial_fitness, result.fitness);
        scheduling_results.push(format!(
            "{path:?}: {} ({})",
            result.fitness, result.best_iteration
        ));
    }

    std::fs::write(benchmark.output, scheduling_results.join("\n"))?;

    Ok(())
}
