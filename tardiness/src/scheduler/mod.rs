use crate::{
    error::ConfigurationError,
    job::{Fitness, Job},
    schedule::Schedule,
};

pub mod tabu_search;

pub use tabu_search::TabuSearch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerOptions {
    pub number_of_iterations: u32,
    pub tabu_list_size: usize,
}

impl Default for SchedulerOptions {
    fn default() -> Self {
        Self {
            number_of_iterations: 200,
            tabu_list_size: 11,
        }
    }
}

impl SchedulerOptions {
    /// The tabu list must stay shorter than `n * (n - 1) / 2`, and there has to be
    /// at least one adjacent pair to swap.
    pub fn validate(&self, job_count: usize) -> Result<(), ConfigurationError> {
        check_tabu_list_size(self.tabu_list_size, job_count)
    }
}

pub(crate) fn check_tabu_list_size(
    tabu_list_size: usize,
    job_count: usize,
) -> Result<(), ConfigurationError> {
    if job_count < 2 {
        return Err(ConfigurationError::TooFewJobs(job_count));
    }

    let limit = job_count * (job_count - 1) / 2;
    if tabu_list_size >= limit {
        return Err(ConfigurationError::TabuListTooLong {
            tabu_list_size,
            job_count,
            limit,
        });
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Initialized,
    Iterating,
    Done,
}

/// Report of a single round, handed to whoever displays progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iteration {
    /// Round number, starting at 1.
    pub index: u32,
    /// Job ids of the current schedule after the move.
    pub job_ids: Vec<u32>,
    pub fitness: Fitness,
    pub swapped_position: usize,
    /// Ids of the swapped jobs in their order before the move.
    pub swapped_jobs: (u32, u32),
    /// The move was tabu and got selected anyway.
    pub aspiration: bool,
    pub best_fitness: Fitness,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizedSchedule {
    pub schedule: Schedule,
    pub job_ids: Vec<u32>,
    pub fitness: Fitness,
    /// Round in which the best schedule was reached, 0 for the initial one.
    pub best_iteration: u32,
    pub initial_fitness: Fitness,
    pub iterations: u32,
}

/// Runs a full tabu search without reporting intermediate rounds.
pub fn scheduler(
    jobs: &[Job],
    initial: Schedule,
    options: SchedulerOptions,
) -> Result<OptimizedSchedule, ConfigurationError> {
    let mut search = TabuSearch::new(jobs, initial, options)?;
    Ok(search.run(|_| {}))
}
