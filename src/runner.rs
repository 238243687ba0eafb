//! Generational search loop execution.
//!
//! [`SearchRunner`] orchestrates the complete run:
//! initialization → evaluate → filter → rank → vary, repeated for the
//! configured number of generations, and returns the final Pareto front.

use crate::config::{ConstraintMode, SearchConfig};
use crate::error::{Result, SearchError};
use crate::operators::{blend_crossover, gaussian_mutate};
use crate::pareto::extract_front;
use crate::types::{DesignProblem, Fitness, Individual};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Per-generation snapshot collected into [`SearchResult::history`].
#[derive(Debug, Clone, Copy)]
pub struct GenerationStats {
    /// Generation index (0 = initial population).
    pub generation: usize,
    /// Size of the front after ranking this generation.
    pub front_size: usize,
    /// Lowest cost on the front, or `f64::INFINITY` if the front is empty.
    pub best_cost: f64,
    /// Highest flux on the front, or `f64::NEG_INFINITY` if the front is
    /// empty.
    pub best_flux: f64,
    /// Infeasible members of this generation's cohort.
    pub infeasible: usize,
}

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The final Pareto front. Never empty: an empty front is surfaced as
    /// [`SearchError::EmptyFront`] instead. Every member is feasible and
    /// carries finite objectives.
    pub front: Vec<Individual>,
    /// Number of generations executed after the initial one.
    pub generations: usize,
    /// Total number of evaluator calls across the run.
    pub evaluations: usize,
    /// Per-generation statistics, starting with the initial population.
    pub history: Vec<GenerationStats>,
}

/// Executes the generational search loop.
///
/// # Usage
///
/// ```
/// use fluxfront::{ActuatorProblem, SearchConfig, SearchRunner};
///
/// let problem = ActuatorProblem::default();
/// let config = SearchConfig::new(ActuatorProblem::design_space())
///     .with_generations(10)
///     .with_seed(42);
/// let result = SearchRunner::run(&problem, &config).unwrap();
/// assert!(!result.front.is_empty());
/// ```
pub struct SearchRunner;

impl SearchRunner {
    /// Runs the search and returns the final Pareto front.
    ///
    /// The front is recomputed every generation from the union of the
    /// previous front and the new cohort, never incrementally patched, so
    /// the best cost and the best flux on the front can only improve.
    pub fn run<P: DesignProblem>(problem: &P, config: &SearchConfig) -> Result<SearchResult> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut evaluations = 0usize;
        let mut history = Vec::with_capacity(config.generations + 1);
        let mut empty_streak = 0usize;

        // INIT: sample mu genomes.
        let mut cohort: Vec<Individual> = (0..config.population_size)
            .map(|_| Individual::new(config.space.sample(&mut rng)))
            .collect();

        evaluations += process_cohort(problem, &mut cohort, config);
        let mut front = extract_front(&cohort);
        record_generation(0, &front, &cohort, &mut history, &mut empty_streak, config)?;
        problem.on_generation(0, &front);

        for gen in 1..=config.generations {
            // VARY: parents are the current front, plus the previous
            // cohort's infeasible members under FilterBeforeRank (they
            // parent for exactly one cycle and can never enter the front).
            let mut parents: Vec<&Individual> = front.iter().collect();
            if config.constraint_mode == ConstraintMode::FilterBeforeRank {
                parents.extend(cohort.iter().filter(|ind| !ind.feasible));
            }
            if parents.is_empty() {
                return Err(SearchError::EmptyFront {
                    generation: gen,
                    consecutive: empty_streak,
                });
            }

            cohort = produce_offspring(&parents, config, &mut rng);

            evaluations += process_cohort(problem, &mut cohort, config);

            // RANK over the union of current front and offspring; every
            // offspring of this generation is evaluated before the front
            // seeding the next VARY step is computed.
            let mut merged = front.clone();
            merged.extend(cohort.iter().cloned());
            front = extract_front(&merged);

            record_generation(gen, &front, &cohort, &mut history, &mut empty_streak, config)?;
            problem.on_generation(gen, &front);
        }

        if front.is_empty() {
            return Err(SearchError::EmptyFront {
                generation: config.generations,
                consecutive: empty_streak,
            });
        }

        Ok(SearchResult {
            front,
            generations: config.generations,
            evaluations,
            history,
        })
    }
}

/// Tags feasibility and evaluates every individual lacking cached fitness.
///
/// Under [`ConstraintMode::Strict`] infeasible individuals are not evaluated
/// at all. Non-finite objectives mark the individual infeasible; dominance
/// comparisons with NaN or infinite values are undefined, so they are
/// normalized out here before ranking ever sees them.
///
/// Returns the number of evaluator calls made.
fn process_cohort<P: DesignProblem>(
    problem: &P,
    cohort: &mut [Individual],
    config: &SearchConfig,
) -> usize {
    for ind in cohort.iter_mut() {
        ind.feasible = problem.is_feasible(&ind.genome);
    }

    let strict = config.constraint_mode == ConstraintMode::Strict;
    let needs_eval =
        |ind: &Individual| !ind.fitness.is_evaluated() && (!strict || ind.feasible);

    // Pure-reproduction clones re-enter with cached fitness; remember which
    // members are evaluated this cohort so the non-finite warning fires once
    // per evaluation, not once per generation for a stale carrier.
    let fresh: Vec<bool> = cohort.iter().map(|ind| needs_eval(ind)).collect();
    let evaluated = fresh.iter().filter(|&&f| f).count();

    if config.parallel {
        cohort
            .par_iter_mut()
            .filter(|ind| needs_eval(ind))
            .for_each(|ind| {
                ind.fitness = Fitness::Evaluated(problem.evaluate(&ind.genome));
            });
    } else {
        for ind in cohort.iter_mut().filter(|ind| needs_eval(ind)) {
            ind.fitness = Fitness::Evaluated(problem.evaluate(&ind.genome));
        }
    }

    for (ind, was_fresh) in cohort.iter_mut().zip(&fresh) {
        if let Some(obj) = ind.objectives() {
            if ind.feasible && !obj.is_finite() {
                if *was_fresh {
                    log::warn!(
                        "evaluator returned non-finite objectives (cost={}, flux={}); \
                         marking genome infeasible",
                        obj.cost,
                        obj.flux
                    );
                }
                ind.feasible = false;
            }
        }
    }

    evaluated
}

/// Produces `lambda` offspring from the parent pool.
///
/// Parent pairs are drawn uniformly. With probability `crossover_prob` the
/// pair is blended into two fresh unevaluated children; otherwise the
/// parents are cloned and keep their cached fitness. Each offspring is then
/// mutated with probability `mutation_prob`, which always yields a fresh
/// unevaluated individual.
fn produce_offspring<R: Rng>(
    parents: &[&Individual],
    config: &SearchConfig,
    rng: &mut R,
) -> Vec<Individual> {
    let mut offspring = Vec::with_capacity(config.offspring_size);
    while offspring.len() < config.offspring_size {
        let p1 = parents[rng.random_range(0..parents.len())];
        let p2 = parents[rng.random_range(0..parents.len())];

        let (mut c1, mut c2) = if rng.random_range(0.0..1.0) < config.crossover_prob {
            let (g1, g2) =
                blend_crossover(&p1.genome, &p2.genome, config.blend_alpha, &config.space, rng);
            (Individual::new(g1), Individual::new(g2))
        } else {
            (p1.clone(), p2.clone())
        };

        for child in [&mut c1, &mut c2] {
            if rng.random_range(0.0..1.0) < config.mutation_prob {
                let mutated = gaussian_mutate(
                    &child.genome,
                    config.mutation_sigma,
                    config.gene_mutation_prob,
                    &config.space,
                    rng,
                );
                *child = Individual::new(mutated);
            }
        }

        offspring.push(c1);
        if offspring.len() < config.offspring_size {
            offspring.push(c2);
        }
    }
    offspring
}

/// Records per-generation statistics and enforces the empty-front policy.
fn record_generation(
    generation: usize,
    front: &[Individual],
    cohort: &[Individual],
    history: &mut Vec<GenerationStats>,
    empty_streak: &mut usize,
    config: &SearchConfig,
) -> Result<()> {
    let best_cost = front
        .iter()
        .filter_map(|ind| ind.cost())
        .fold(f64::INFINITY, f64::min);
    let best_flux = front
        .iter()
        .filter_map(|ind| ind.flux())
        .fold(f64::NEG_INFINITY, f64::max);
    let infeasible = cohort.iter().filter(|ind| !ind.feasible).count();

    history.push(GenerationStats {
        generation,
        front_size: front.len(),
        best_cost,
        best_flux,
        infeasible,
    });

    log::debug!(
        "generation {generation}: front={} best_cost={best_cost:.4} \
         best_flux={best_flux:.4} infeasible={infeasible}",
        front.len()
    );

    if front.is_empty() {
        *empty_streak += 1;
        log::warn!(
            "generation {generation}: every genome infeasible \
             ({empty_streak} consecutive empty generations)"
        );
        // Under Strict no infeasible parents remain, so the run cannot
        // recover; abort immediately.
        if config.constraint_mode == ConstraintMode::Strict
            || *empty_streak > config.max_empty_generations
        {
            return Err(SearchError::EmptyFront {
                generation,
                consecutive: *empty_streak,
            });
        }
    } else {
        *empty_streak = 0;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
