pub mod error;
pub mod fitness;
pub mod instance_gen;
pub mod job;
pub mod schedule;
pub mod scheduler;
pub mod tabu_list;

pub use error::{ConfigurationError, InstanceError};
pub use fitness::FitnessEvaluator;
pub use job::{Fitness, Job, JobIndex};
pub use schedule::Schedule;
pub use scheduler::{scheduler, OptimizedSchedule, SchedulerOptions, TabuSearch};
