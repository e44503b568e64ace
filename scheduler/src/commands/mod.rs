use std::{fs, path::Path};

use anyhow::{Context, Result};
use job_list_parser::parse_job_list;
use log::{debug, trace};
use tardiness::Job;

mod benchmark;
mod generate;
mod schedule;

pub use benchmark::benchmark;
pub use generate::generate;
pub use schedule::schedule;

pub(crate) fn load_jobs(path: &Path) -> Result<Vec<Job>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read job list {path:?}"))?;
    trace!("input file contents: {contents}");

    let job_list =
        parse_job_list(contents.as_str()).with_context(|| format!("failed to parse {path:?}"))?;
    debug!("parsed {} jobs from {path:?}", job_list.jobs.len());

    Ok(Job::from_job_list(&job_list))
}
