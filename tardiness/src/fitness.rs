use log::trace;

use crate::{
    job::{Fitness, Job},
    schedule::Schedule,
};

/// Computes total weighted tardiness over a fixed job table.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'a> {
    jobs: &'a [Job],
}

impl<'a> FitnessEvaluator<'a> {
    pub fn new(jobs: &'a [Job]) -> Self {
        Self { jobs }
    }

    /// Full left to right scan, O(n).
    pub fn evaluate_full(&self, schedule: &Schedule) -> Fitness {
        let mut time: i64 = 0;

        schedule
            .iter()
            .map(|job| {
                let job = &self.jobs[job];
                time += job.processing_time as i64;
                job.weighted_tardiness(time)
            })
            .sum()
    }

    /// Fitness after swapping the jobs at `position` and `position + 1`, in O(1).
    ///
    /// `time_before_position` is the completion time of the job preceding
    /// `position` and `fitness_before` the fitness of `schedule` as it is. Only
    /// the two swapped jobs change their completion time: the pair starts at the
    /// same time and ends at the same time in either order.
    pub fn evaluate_swap(
        &self,
        schedule: &Schedule,
        position: usize,
        time_before_position: i64,
        fitness_before: Fitness,
    ) -> Fitness {
        let (a, b) = schedule.adjacent_pair(position);
        let (a, b) = (&self.jobs[a], &self.jobs[b]);
        let (pa, pb) = (a.processing_time as i64, b.processing_time as i64);

        let removed = a.weighted_tardiness(time_before_position + pa)
            + b.weighted_tardiness(time_before_position + pa + pb);
        let added = b.weighted_tardiness(time_before_position + pb)
            + a.weighted_tardiness(time_before_position + pb + pa);

        let fitness = fitness_before - removed + added;
        trace!(
            "swap at {position} ({} <-> {}): {fitness_before} -> {fitness}",
            a.id,
            b.id
        );
        fitness
    }

    /// Completion time of every job, in schedule order.
    pub fn completion_times(&self, schedule: &Schedule) -> Vec<i64> {
        schedule
            .iter()
            .scan(0_i64, |time, job| {
                *time += self.jobs[job].processing_time as i64;
                Some(*time)
            })
            .collect()
    }
}
