use log::{debug, info};

use crate::{
    error::ConfigurationError,
    fitness::FitnessEvaluator,
    job::{Fitness, Job},
    schedule::Schedule,
    tabu_list::{SimpleTabuList, TabuList},
};

use super::{check_tabu_list_size, Iteration, OptimizedSchedule, SchedulerOptions, SearchState};

#[derive(Debug, Clone, Copy)]
struct Candidate {
    position: usize,
    fitness: Fitness,
    tabu: bool,
}

/// Tabu search over the adjacent swap neighborhood.
///
/// Every round evaluates all `n - 1` adjacent swaps of the current schedule and
/// applies the best admissible one, even if it makes the schedule worse. A swap
/// is admissible if its pair is not tabu or if it beats the best fitness seen so
/// far. When every swap is tabu and none of them beats the best, the least bad
/// tabu swap is taken, so a round always moves.
pub struct TabuSearch<'a, T = SimpleTabuList>
where
    T: TabuList,
{
    jobs: &'a [Job],
    evaluator: FitnessEvaluator<'a>,
    options: SchedulerOptions,
    tabu_list: T,
    state: SearchState,
    iteration: u32,

    schedule: Schedule,
    fitness: Fitness,
    initial_fitness: Fitness,

    best_schedule: Schedule,
    best_fitness: Fitness,
    best_iteration: u32,
}

impl<'a> TabuSearch<'a, SimpleTabuList> {
    pub fn new(
        jobs: &'a [Job],
        initial: Schedule,
        options: SchedulerOptions,
    ) -> Result<Self, ConfigurationError> {
        let tabu_list = SimpleTabuList::new(jobs.len(), options.tabu_list_size);
        Self::with_tabu_list(jobs, initial, options, tabu_list)
    }
}

impl<'a, T> TabuSearch<'a, T>
where
    T: TabuList,
{
    pub fn with_tabu_list(
        jobs: &'a [Job],
        initial: Schedule,
        options: SchedulerOptions,
        tabu_list: T,
    ) -> Result<Self, ConfigurationError> {
        options.validate(jobs.len())?;
        check_tabu_list_size(tabu_list.capacity(), jobs.len())?;
        if tabu_list.job_count() != jobs.len() {
            return Err(ConfigurationError::TabuListJobCountMismatch {
                tabu_job_count: tabu_list.job_count(),
                job_count: jobs.len(),
            });
        }
        if initial.len() != jobs.len() {
            return Err(ConfigurationError::ScheduleLengthMismatch {
                schedule_len: initial.len(),
                job_count: jobs.len(),
            });
        }

        let evaluator = FitnessEvaluator::new(jobs);
        let fitness = evaluator.evaluate_full(&initial);

        info!("options: {options:?}");
        info!("initial schedule: {:?}", initial.job_ids(jobs));
        info!("initial fitness: {fitness}");

        Ok(Self {
            jobs,
            evaluator,
            options,
            tabu_list,
            state: SearchState::Initialized,
            iteration: 0,
            best_schedule: initial.clone(),
            schedule: initial,
            fitness,
            initial_fitness: fitness,
            best_fitness: fitness,
            best_iteration: 0,
        })
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Number of rounds performed so far.
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    pub fn current_schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn current_fitness(&self) -> Fitness {
        self.fitness
    }

    pub fn best_schedule(&self) -> &Schedule {
        &self.best_schedule
    }

    pub fn best_fitness(&self) -> Fitness {
        self.best_fitness
    }

    pub fn best_iteration(&self) -> u32 {
        self.best_iteration
    }

    pub fn tabu_list(&self) -> &T {
        &self.tabu_list
    }

    /// Performs one round, or returns `None` once all rounds are used up.
    pub fn step(&mut self) -> Option<Iteration> {
        if self.iteration >= self.options.number_of_iterations {
            self.state = SearchState::Done;
            return None;
        }

        let candidate = self.select_move()?;
        self.state = SearchState::Iterating;
        self.iteration += 1;

        let (a, b) = self.schedule.adjacent_pair(candidate.position);
        self.schedule.swap_adjacent(candidate.position);
        // stored as the pair now stands, which is what undoing the move would test
        self.tabu_list.record(b, a);
        self.fitness = candidate.fitness;

        if candidate.tabu {
            debug!(
                "iteration {}: tabu swap at {} taken by aspiration",
                self.iteration, candidate.position
            );
        }

        if self.fitness < self.best_fitness {
            self.best_schedule = self.schedule.clone();
            self.best_fitness = self.fitness;
            self.best_iteration = self.iteration;
            debug!(
                "iteration {}: new best fitness {}",
                self.iteration, self.best_fitness
            );
        }

        let job_ids = self.schedule.job_ids(self.jobs);
        debug!("iteration {}: {job_ids:?} ({})", self.iteration, self.fitness);

        if self.iteration == self.options.number_of_iterations {
            self.state = SearchState::Done;
        }

        Some(Iteration {
            index: self.iteration,
            job_ids,
            fitness: self.fitness,
            swapped_position: candidate.position,
            swapped_jobs: (self.jobs[a].id, self.jobs[b].id),
            aspiration: candidate.tabu,
            best_fitness: self.best_fitness,
        })
    }

    /// Runs all remaining rounds, passing each report to `on_iteration`.
    pub fn run<F>(&mut self, mut on_iteration: F) -> OptimizedSchedule
    where
        F: FnMut(&Iteration),
    {
        while let Some(iteration) = self.step() {
            on_iteration(&iteration);
        }
        self.state = SearchState::Done;

        info!(
            "best schedule: {:?}",
            self.best_schedule.job_ids(self.jobs)
        );
        info!(
            "best fitness: {} (iteration {})",
            self.best_fitness, self.best_iteration
        );

        self.result()
    }

    pub fn result(&self) -> OptimizedSchedule {
        OptimizedSchedule {
            schedule: self.best_schedule.clone(),
            job_ids: self.best_schedule.job_ids(self.jobs),
            fitness: self.best_fitness,
            best_iteration: self.best_iteration,
            initial_fitness: self.initial_fitness,
            iterations: self.iteration,
        }
    }

    /// Best admissible swap, ties going to the leftmost position.
    fn select_move(&self) -> Option<Candidate> {
        let mut best_admissible: Option<Candidate> = None;
        let mut best_tabu: Option<Candidate> = None;
        let mut time: i64 = 0;

        for position in 0..self.schedule.len().saturating_sub(1) {
            let (a, b) = self.schedule.adjacent_pair(position);
            let fitness = self
                .evaluator
                .evaluate_swap(&self.schedule, position, time, self.fitness);
            let tabu = self.tabu_list.contains(a, b);

            let slot = if !tabu || fitness < self.best_fitness {
                &mut best_admissible
            } else {
                &mut best_tabu
            };
            if slot.map_or(true, |current| fitness < current.fitness) {
                *slot = Some(Candidate {
                    position,
                    fitness,
                    tabu,
                });
            }

            time += self.jobs[a].processing_time as i64;
        }

        best_admissible.or(best_tabu)
    }
}
