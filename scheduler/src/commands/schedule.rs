use std::io::{self, Write};

use anyhow::Result;
use log::info;
use tardiness::{instance_gen::default_jobs, SchedulerOptions, TabuSearch};

use super::load_jobs;
use crate::{report::Report, Schedule};

pub fn schedule(schedule: Schedule) -> Result<()> {
    let jobs = match &schedule.path {
        Some(path) => load_jobs(path)?,
        None => {
            info!("no job list given, using the built-in instance");
            default_jobs()
        }
    };
    let options = SchedulerOptions::from(schedule.search);

    let mut search = TabuSearch::new(&jobs, tardiness::Schedule::identity(jobs.len()), options)?;
    let report = Report::new(&jobs, options.number_of_iterations);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !schedule.best_only {
        writeln!(out, "{}", report.initial(&jobs, search.current_fitness()))?;
    }

    let mut written: io::Result<()> = Ok(());
    let result = search.run(|iteration| {
        if !schedule.best_only && written.is_ok() {
            written = writeln!(
                out,
                "{}",
                report.iteration_line(iteration.index, &iteration.job_ids, iteration.fitness)
            );
        }
    });
    written?;

    writeln!(out, "\nBest schedule:")?;
    writeln!(
        out,
        "{}",
        report.iteration_line(result.best_iteration, &result.job_ids, result.fitness)
    )?;
    out.flush()?;

    Ok(())
}
