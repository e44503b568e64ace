use std::{
    fs::File,
    io::{BufWriter, Write},
};

use anyhow::Result;
use job_list_parser::structs::{JobList, JobRecord};
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use tardiness::instance_gen::generate_jobs;

use crate::Generate;

pub fn generate(generate: Generate) -> Result<()> {
    if generate.count < 2 {
        anyhow::bail!("at least two jobs are needed, got {}", generate.count)
    }

    let mut rng = match generate.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let job_list = JobList {
        jobs: generate_jobs(generate.count, &mut rng)
            .iter()
            .map(JobRecord::from)
            .collect(),
    };

    let mut writer = BufWriter::new(File::create(&generate.output)?);
    write!(writer, "{job_list}")?;
    writer.flush()?;

    info!(
        "Wrote {} jobs to: {:?}",
        job_list.jobs.len(),
        generate.output
    );

    Ok(())
}
