use crate::{
    error::InstanceError,
    job::{Job, JobIndex},
};

/// A processing order over the job table.
///
/// Holds indices, never the jobs themselves, so a swap only exchanges two slots.
/// The order is always a permutation of `0..len`; the only way to change it is
/// [`Schedule::swap_adjacent`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Schedule {
    order: Vec<JobIndex>,
}

impl Schedule {
    /// Jobs in table order.
    pub fn identity(job_count: usize) -> Self {
        Self {
            order: (0..job_count).collect(),
        }
    }

    pub fn from_order(order: Vec<JobIndex>, job_count: usize) -> Result<Self, InstanceError> {
        if order.len() != job_count {
            return Err(InstanceError::WrongLength {
                expected: job_count,
                actual: order.len(),
            });
        }

        let mut seen = vec![false; job_count];
        for &job in &order {
            match seen.get_mut(job) {
                Some(true) => return Err(InstanceError::Duplicate(job)),
                Some(slot) => *slot = true,
                None => return Err(InstanceError::OutOfRange(job)),
            }
        }

        Ok(Self { order })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn as_slice(&self) -> &[JobIndex] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = JobIndex> + '_ {
        self.order.iter().copied()
    }

    pub fn job_at(&self, position: usize) -> JobIndex {
        self.order[position]
    }

    /// Jobs at `position` and `position + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `position + 1` is out of bounds.
    #[inline]
    pub fn adjacent_pair(&self, position: usize) -> (JobIndex, JobIndex) {
        (self.order[position], self.order[position + 1])
    }

    /// Exchanges the jobs at `position` and `position + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `position + 1` is out of bounds.
    #[inline]
    pub fn swap_adjacent(&mut self, position: usize) {
        self.order.swap(position, position + 1);
    }

    /// Job identifiers in processing order, for reporting.
    pub fn job_ids(&self, jobs: &[Job]) -> Vec<u32> {
        self.order.iter().map(|&job| jobs[job].id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_order() {
        let schedule = Schedule::identity(4);

        assert_eq!(schedule.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(schedule.len(), 4);
        assert!(!schedule.is_empty());
    }

    #[test]
    fn swap_adjacent_exchanges_pair() {
        let mut schedule = Schedule::identity(4);

        schedule.swap_adjacent(1);

        assert_eq!(schedule.as_slice(), &[0, 2, 1, 3]);
        assert_eq!(schedule.adjacent_pair(1), (2, 1));
        assert_eq!(schedule.job_at(3), 3);
    }

    #[test]
    #[should_panic]
    fn swap_past_end_panics() {
        let mut schedule = Schedule::identity(3);
        schedule.swap_adjacent(2);
    }

    #[test]
    fn from_order_accepts_permutation() {
        let schedule = Schedule::from_order(vec![2, 0, 1], 3).unwrap();

        assert_eq!(schedule.as_slice(), &[2, 0, 1]);
    }

    #[test]
    fn from_order_rejects_duplicates() {
        assert_eq!(
            Schedule::from_order(vec![0, 1, 1], 3),
            Err(InstanceError::Duplicate(1))
        );
    }

    #[test]
    fn from_order_rejects_out_of_range() {
        assert_eq!(
            Schedule::from_order(vec![0, 3, 1], 3),
            Err(InstanceError::OutOfRange(3))
        );
    }

    #[test]
    fn from_order_rejects_wrong_length() {
        assert_eq!(
            Schedule::from_order(vec![0, 1], 3),
            Err(InstanceError::WrongLength {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn job_ids_follow_order() {
        let jobs = vec![Job::new(10, 1, 1, 1), Job::new(20, 1, 1, 1)];
        let mut schedule = Schedule::identity(2);
        schedule.swap_adjacent(0);

        assert_eq!(schedule.job_ids(&jobs), vec![20, 10]);
    }
}
