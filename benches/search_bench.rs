//! Criterion benchmarks for the Pareto search engine.
//!
//! Measures front extraction at several population sizes and a short
//! end-to-end search on the bundled actuator problem.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fluxfront::pareto::extract_front;
use fluxfront::{
    ActuatorProblem, DesignProblem, Fitness, Individual, SearchConfig, SearchRunner,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Builds an evaluated population of the given size over the actuator space.
fn evaluated_population(n: usize) -> Vec<Individual> {
    let problem = ActuatorProblem::default();
    let space = ActuatorProblem::design_space();
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|_| {
            let genome = space.sample(&mut rng);
            let mut ind = Individual::new(genome);
            ind.fitness = Fitness::Evaluated(problem.evaluate(&genome));
            ind.feasible = problem.is_feasible(&genome);
            ind
        })
        .collect()
}

fn bench_extract_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_front");

    for &n in &[50, 200, 800] {
        let population = evaluated_population(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &population, |b, pop| {
            b.iter(|| {
                let front = extract_front(black_box(pop));
                black_box(front)
            })
        });
    }
    group.finish();
}

fn bench_search_actuator(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_actuator");
    group.sample_size(10);

    for (pop, gen) in [(40usize, 10usize), (80, 25)] {
        let problem = ActuatorProblem::default();
        let config = SearchConfig::new(ActuatorProblem::design_space())
            .with_population_size(pop)
            .with_offspring_size(pop)
            .with_generations(gen)
            .with_parallel(false)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_g{}", pop, gen), pop),
            &(problem, config),
            |b, (p, cfg)| {
                b.iter(|| {
                    let result = SearchRunner::run(black_box(p), black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_extract_front, bench_search_actuator);
criterion_main!(benches);
