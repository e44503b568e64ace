use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use job_list_parser::parse_job_list;
use rand::{rngs::StdRng, SeedableRng};
use tardiness::{
    instance_gen::generate_jobs, scheduler, FitnessEvaluator, Job, Schedule, SchedulerOptions,
};

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler");
    group.sample_size(50);
    group.sampling_mode(criterion::SamplingMode::Flat);

    let contents = std::fs::read_to_string("../instances/reference_15.txt").unwrap();
    let reference = Job::from_job_list(&parse_job_list(contents.as_str()).unwrap());
    let mut rng = StdRng::seed_from_u64(2013);

    let instances = vec![
        ("reference_15", reference),
        ("random_100", generate_jobs(100, &mut rng)),
        ("random_1000", generate_jobs(1000, &mut rng)),
    ];

    for (name, jobs) in &instances {
        let configs = vec![
            SchedulerOptions {
                number_of_iterations: 200,
                tabu_list_size: 11,
            },
            SchedulerOptions {
                number_of_iterations: 1000,
                tabu_list_size: 25,
            },
        ];

        for config in configs {
            group.bench_with_input(
                BenchmarkId::new(
                    format!("tabu_search_{}", config.tabu_list_size),
                    format!("{name}/{}", config.number_of_iterations),
                ),
                &config,
                |b, config| b.iter(|| scheduler(jobs, Schedule::identity(jobs.len()), *config)),
            );
        }
    }
    group.finish();
}

pub fn fitness_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness");
    let jobs = generate_jobs(1000, &mut StdRng::seed_from_u64(7));
    let evaluator = FitnessEvaluator::new(&jobs);
    let schedule = Schedule::identity(jobs.len());
    let fitness = evaluator.evaluate_full(&schedule);

    group.bench_function("evaluate_full_1000", |b| {
        b.iter(|| evaluator.evaluate_full(&schedule))
    });
    group.bench_function("evaluate_swap_1000", |b| {
        b.iter(|| evaluator.evaluate_swap(&schedule, 500, 5000, fitness))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark, fitness_benchmark);
criterion_main!(benches);
