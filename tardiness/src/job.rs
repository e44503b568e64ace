use job_list_parser::structs::{JobList, JobRecord};

/// Position of a job in the immutable job table of an instance.
pub type JobIndex = usize;

/// Total weighted tardiness of a schedule. Lower is better.
pub type Fitness = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub id: u32,
    pub processing_time: u32,
    pub due_date: i64,
    pub weight: u32,
}

impl Job {
    pub fn new(id: u32, processing_time: u32, due_date: i64, weight: u32) -> Self {
        Self {
            id,
            processing_time,
            due_date,
            weight,
        }
    }

    /// `max(0, completion_time - due_date)`
    #[inline]
    pub fn tardiness(&self, completion_time: i64) -> i64 {
        (completion_time - self.due_date).max(0)
    }

    #[inline]
    pub fn weighted_tardiness(&self, completion_time: i64) -> Fitness {
        self.tardiness(completion_time) * self.weight as Fitness
    }

    pub fn from_job_list(job_list: &JobList) -> Vec<Job> {
        job_list.jobs.iter().map(Job::from).collect()
    }
}

impl From<&JobRecord> for Job {
    fn from(record: &JobRecord) -> Self {
        Job::new(
            record.id,
            record.processing_time,
            record.due_date,
            record.weight,
        )
    }
}

impl From<&Job> for JobRecord {
    fn from(job: &Job) -> Self {
        JobRecord {
            id: job.id,
            processing_time: job.processing_time,
            due_date: job.due_date,
            weight: job.weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn early_job_has_no_tardiness() {
        let job = Job::new(1, 3, 10, 5);

        assert_eq!(job.tardiness(3), 0);
        assert_eq!(job.tardiness(10), 0);
        assert_eq!(job.weighted_tardiness(7), 0);
    }

    #[test]
    fn late_job_is_weighted() {
        let job = Job::new(2, 5, 2, 4);

        assert_eq!(job.tardiness(8), 6);
        assert_eq!(job.weighted_tardiness(8), 24);
    }

    #[test]
    fn zero_weight_contributes_nothing() {
        let job = Job::new(3, 5, 0, 0);

        assert_eq!(job.tardiness(100), 100);
        assert_eq!(job.weighted_tardiness(100), 0);
    }

    #[test]
    fn negative_due_date() {
        let job = Job::new(4, 1, -3, 2);

        assert_eq!(job.weighted_tardiness(1), 8);
    }

    #[test]
    fn job_list_conversion() {
        let job_list = JobList {
            jobs: vec![JobRecord {
                id: 7,
                processing_time: 1,
                due_date: 194,
                weight: 21,
            }],
        };

        let jobs = Job::from_job_list(&job_list);

        assert_eq!(jobs, vec![Job::new(7, 1, 194, 21)]);
        assert_eq!(JobRecord::from(&jobs[0]), job_list.jobs[0]);
    }
}
