use rand::Rng;

use crate::job::Job;

/// The 15 job reference instance (`instances/reference_15.txt`).
pub fn default_jobs() -> Vec<Job> {
    [
        (2, 16, 67, 45),
        (3, 6, 105, 35),
        (15, 12, 8, 80),
        (6, 19, 124, 28),
        (5, 9, 77, 1),
        (10, 20, 202, 70),
        (8, 13, 157, 14),
        (7, 1, 194, 21),
        (13, 5, 5, 69),
        (14, 18, 7, 62),
        (1, 4, 36, 21),
        (4, 5, 53, 73),
        (12, 19, 61, 23),
        (9, 12, 25, 76),
        (11, 20, 43, 51),
    ]
    .into_iter()
    .map(|(id, pj, dj, wj)| Job::new(id, pj, dj, wj))
    .collect()
}

/// Random instance with ids `1..=job_count`.
///
/// Due dates fall within the total processing time so that roughly half of the
/// jobs end up late in an arbitrary order.
pub fn generate_jobs<R: Rng>(job_count: usize, rng: &mut R) -> Vec<Job> {
    // processing times 1..=20
    let processing_times: Vec<u32> = (0..job_count).map(|_| rng.gen_range(1..=20)).collect();
    let horizon: i64 = processing_times.iter().map(|&p| p as i64).sum();

    processing_times
        .into_iter()
        .enumerate()
        .map(|(index, processing_time)| {
            let due_date = rng.gen_range(0..=horizon);
            let weight = rng.gen_range(1..=80);
            Job::new(index as u32 + 1, processing_time, due_date, weight)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn reference_instance() {
        let jobs = default_jobs();

        assert_eq!(jobs.len(), 15);
        assert_eq!(jobs[0], Job::new(2, 16, 67, 45));
        assert_eq!(
            jobs.iter().map(|job| job.id).collect::<HashSet<_>>(),
            (1..=15).collect::<HashSet<u32>>()
        );
    }

    #[test]
    fn generated_jobs_are_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let jobs = generate_jobs(30, &mut rng);
        let horizon: i64 = jobs.iter().map(|job| job.processing_time as i64).sum();

        assert_eq!(jobs.len(), 30);
        for (index, job) in jobs.iter().enumerate() {
            assert_eq!(job.id, index as u32 + 1);
            assert!((1..=20).contains(&job.processing_time));
            assert!((1..=80).contains(&job.weight));
            assert!((0..=horizon).contains(&job.due_date));
        }
    }

    #[test]
    fn same_seed_same_instance() {
        let first = generate_jobs(10, &mut StdRng::seed_from_u64(3));
        let second = generate_jobs(10, &mut StdRng::seed_from_u64(3));

        assert_eq!(first, second);
    }
}
