use thiserror::Error;

use crate::job::JobIndex;

/// Rejected search parameters, raised once before the first round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("at least two jobs are required to perform a swap, got {0}")]
    TooFewJobs(usize),
    #[error("tabu list size {tabu_list_size} must be smaller than {limit} for {job_count} jobs")]
    TabuListTooLong {
        tabu_list_size: usize,
        job_count: usize,
        limit: usize,
    },
    #[error("tabu list is sized for {tabu_job_count} jobs but the instance has {job_count}")]
    TabuListJobCountMismatch {
        tabu_job_count: usize,
        job_count: usize,
    },
    #[error("initial schedule holds {schedule_len} jobs but the instance has {job_count}")]
    ScheduleLengthMismatch {
        schedule_len: usize,
        job_count: usize,
    },
}

/// An order that is not a permutation of the job table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    #[error("expected {expected} jobs in schedule, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("job index {0} is out of range")]
    OutOfRange(JobIndex),
    #[error("job index {0} is scheduled more than once")]
    Duplicate(JobIndex),
}
