//! Error types for the search engine.

use thiserror::Error;

/// Errors surfaced by configuration validation and the search loop.
///
/// Configuration variants are raised by [`crate::SearchConfig::validate`]
/// before any generation runs. [`EmptyFront`](SearchError::EmptyFront) is the
/// only runtime failure: per-genome evaluation problems (non-finite
/// objectives) are recovered locally by marking the genome infeasible and
/// never propagate.
#[derive(Error, Debug)]
pub enum SearchError {
    /// A gene's lower bound exceeds its upper bound.
    #[error("inverted bounds for gene '{gene}': min ({min}) must be <= max ({max})")]
    InvertedBounds {
        /// Name of the offending gene.
        gene: &'static str,
        /// The declared lower bound.
        min: f64,
        /// The declared upper bound.
        max: f64,
    },

    /// The population size is zero.
    #[error("population_size must be at least 1")]
    ZeroPopulation,

    /// The offspring size is zero.
    #[error("offspring_size must be at least 1")]
    ZeroOffspring,

    /// A probability parameter lies outside `[0, 1]`.
    #[error("invalid probability for '{name}': {value} must be in [0, 1]")]
    InvalidProbability {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A parameter that must be non-negative is negative.
    #[error("invalid value for '{name}': {value} must be non-negative")]
    NegativeParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Every genome in a generation was infeasible for too long, or the run
    /// would otherwise return an empty Pareto front.
    ///
    /// An empty front is almost always a configuration bug (bounds that make
    /// the constraints unsatisfiable), so it is surfaced rather than returned.
    #[error(
        "empty Pareto front at generation {generation} \
         ({consecutive} consecutive empty generations)"
    )]
    EmptyFront {
        /// Generation index at which the run gave up.
        generation: usize,
        /// Number of consecutive generations with an empty front.
        consecutive: usize,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SearchError>;
