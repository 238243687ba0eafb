//! Search configuration.
//!
//! [`SearchConfig`] holds all parameters that control the generational loop.

use crate::error::{Result, SearchError};
use crate::genome::DesignSpace;

/// How infeasible genomes are handled each generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstraintMode {
    /// Evaluate everything; filter infeasible genomes out before dominance
    /// ranking. They can never enter the front, but they remain eligible as
    /// variation parents for one generation, which preserves schema
    /// diversity. This is the default.
    #[default]
    FilterBeforeRank,

    /// Do not evaluate infeasible genomes at all; they keep a permanently
    /// dominated status and never parent offspring.
    Strict,
}

/// Configuration for a multi-objective search run.
///
/// # Builder Pattern
///
/// ```
/// use fluxfront::{ActuatorProblem, SearchConfig};
///
/// let config = SearchConfig::new(ActuatorProblem::design_space())
///     .with_population_size(120)
///     .with_generations(40)
///     .with_crossover_prob(0.85)
///     .with_seed(42);
/// assert_eq!(config.population_size, 120);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Number of genomes sampled for the initial population (`mu`).
    ///
    /// Typical range: 40–200.
    pub population_size: usize,

    /// Number of offspring produced per generation (`lambda`).
    pub offspring_size: usize,

    /// Number of generations after the initial one (`ngen`).
    ///
    /// Zero is legal: the run samples, evaluates, and returns the front of
    /// the initial population.
    pub generations: usize,

    /// Probability of applying blend crossover to a parent pair (0.0–1.0).
    ///
    /// When crossover is not applied, the parents are cloned and their
    /// cached fitness carries over.
    pub crossover_prob: f64,

    /// Probability of mutating an offspring (0.0–1.0).
    pub mutation_prob: f64,

    /// Per-gene perturbation probability within a mutated offspring
    /// (0.0–1.0).
    pub gene_mutation_prob: f64,

    /// Blend crossover extension factor. 0.5 extends the parent interval by
    /// half its width on both sides.
    pub blend_alpha: f64,

    /// Mutation noise standard deviation as a fraction of each gene's bound
    /// width. Typical range: 0.05–0.3.
    pub mutation_sigma: f64,

    /// Declared bounds for every gene.
    pub space: DesignSpace,

    /// Handling of infeasible genomes. See [`ConstraintMode`].
    pub constraint_mode: ConstraintMode,

    /// Consecutive all-infeasible generations tolerated before the run is
    /// aborted with [`SearchError::EmptyFront`].
    pub max_empty_generations: usize,

    /// Whether to evaluate cohorts in parallel using rayon.
    ///
    /// Evaluation never consumes the random source, so parallel and
    /// sequential runs with the same seed produce identical fronts.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl SearchConfig {
    /// Creates a configuration over the given design space with default
    /// search parameters.
    pub fn new(space: DesignSpace) -> Self {
        Self {
            population_size: 80,
            offspring_size: 80,
            generations: 50,
            crossover_prob: 0.9,
            mutation_prob: 0.2,
            gene_mutation_prob: 0.3,
            blend_alpha: 0.5,
            mutation_sigma: 0.1,
            space,
            constraint_mode: ConstraintMode::default(),
            max_empty_generations: 3,
            parallel: true,
            seed: None,
        }
    }

    /// Sets the initial population size (`mu`).
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the offspring count per generation (`lambda`).
    pub fn with_offspring_size(mut self, n: usize) -> Self {
        self.offspring_size = n;
        self
    }

    /// Sets the generation count (`ngen`).
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_prob(mut self, p: f64) -> Self {
        self.crossover_prob = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-offspring mutation probability.
    pub fn with_mutation_prob(mut self, p: f64) -> Self {
        self.mutation_prob = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-gene mutation probability.
    pub fn with_gene_mutation_prob(mut self, p: f64) -> Self {
        self.gene_mutation_prob = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the blend crossover extension factor.
    pub fn with_blend_alpha(mut self, alpha: f64) -> Self {
        self.blend_alpha = alpha.max(0.0);
        self
    }

    /// Sets the mutation noise scale.
    pub fn with_mutation_sigma(mut self, sigma: f64) -> Self {
        self.mutation_sigma = sigma.max(0.0);
        self
    }

    /// Sets the constraint handling mode.
    pub fn with_constraint_mode(mut self, mode: ConstraintMode) -> Self {
        self.constraint_mode = mode;
        self
    }

    /// Sets the empty-front tolerance.
    pub fn with_max_empty_generations(mut self, n: usize) -> Self {
        self.max_empty_generations = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Called by the runner before any generation runs; failures here are
    /// fatal and reported immediately.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(SearchError::ZeroPopulation);
        }
        if self.offspring_size == 0 {
            return Err(SearchError::ZeroOffspring);
        }
        for (name, value) in [
            ("crossover_prob", self.crossover_prob),
            ("mutation_prob", self.mutation_prob),
            ("gene_mutation_prob", self.gene_mutation_prob),
        ] {
            if !(0.0..=1.0).contains(&value) || value.is_nan() {
                return Err(SearchError::InvalidProbability { name, value });
            }
        }
        for (name, value) in [
            ("blend_alpha", self.blend_alpha),
            ("mutation_sigma", self.mutation_sigma),
        ] {
            if !(value >= 0.0) {
                return Err(SearchError::NegativeParameter { name, value });
            }
        }
        self.space.validate()
    }
}
