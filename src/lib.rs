//! Multi-objective evolutionary search for electromagnetic actuator designs.
//!
//! Searches a mixed-integer design space (winding turns plus four
//! continuous geometric dimensions) for the set of non-dominated trade-offs
//! between two conflicting objectives: material cost (minimized) and
//! magnetic flux (maximized), subject to geometric feasibility constraints.
//!
//! # Architecture
//!
//! - [`Genome`] / [`DesignSpace`]: typed fixed-shape candidate designs with
//!   declared per-gene bounds; sampling and clamping live here.
//! - [`DesignProblem`]: the pluggable evaluator (cost/flux formulas and
//!   the feasibility predicate). [`ActuatorProblem`] is a bundled
//!   first-order implementation.
//! - [`operators`]: blend (BLX-alpha) crossover and Gaussian mutation,
//!   pure and bound-respecting.
//! - [`pareto`]: non-dominated front extraction over feasible, evaluated
//!   individuals.
//! - [`SearchRunner`]: the generational loop (initialize → evaluate →
//!   filter → rank → vary) returning the final Pareto front.
//!
//! The front is recomputed every generation from the union of the previous
//! front and the new offspring cohort, so it is strictly elitist: the best
//! cost and the best flux on the front never regress. Runs with the same
//! configuration and seed produce bit-identical fronts, with or without
//! parallel evaluation.
//!
//! # Example
//!
//! ```
//! use fluxfront::{ActuatorProblem, SearchConfig, SearchRunner};
//!
//! # fn main() -> fluxfront::Result<()> {
//! let problem = ActuatorProblem::default();
//! let config = SearchConfig::new(ActuatorProblem::design_space())
//!     .with_generations(20)
//!     .with_seed(42);
//!
//! let result = SearchRunner::run(&problem, &config)?;
//! for ind in &result.front {
//!     println!(
//!         "turns={:3} cost={:6.2} flux={:.5}",
//!         ind.genome.turns,
//!         ind.cost().unwrap(),
//!         ind.flux().unwrap()
//!     );
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `serde`: serialization derives on genomes, bounds, objectives, and
//!   configuration.

mod actuator;
mod config;
mod error;
mod genome;
pub mod operators;
pub mod pareto;
mod runner;
mod types;

pub use actuator::ActuatorProblem;
pub use config::{ConstraintMode, SearchConfig};
pub use error::{Result, SearchError};
pub use genome::{Bounds, DesignSpace, Genome, IntBounds};
pub use runner::{GenerationStats, SearchResult, SearchRunner};
pub use types::{DesignProblem, Fitness, Individual, Objectives};
