use crate::job::JobIndex;

pub mod simple_tabu_list;

pub use simple_tabu_list::SimpleTabuList;

/// Short-term memory of ordered adjacent pairs that may not be swapped.
pub trait TabuList {
    /// Check if the pair `(a, b)`, `a` directly before `b`, is forbidden.
    fn contains(&self, a: JobIndex, b: JobIndex) -> bool;
    /// Add the ordered pair, evicting the oldest record once the list is full.
    fn record(&mut self, a: JobIndex, b: JobIndex);
    /// Number of records currently held.
    fn len(&self) -> usize;
    /// Maximum number of records.
    fn capacity(&self) -> usize;
    /// Number of jobs whose pairs can be recorded.
    fn job_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
