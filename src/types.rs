//! Core types and the problem trait for the multi-objective search.
//!
//! [`DesignProblem`] is the contract between the generic engine and a
//! domain-specific evaluator: implement it to plug in cost/flux formulas
//! and feasibility constraints.

use crate::genome::Genome;

/// The objective vector of a candidate design: material cost (minimized)
/// and magnetic flux (maximized).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objectives {
    /// Material cost. Lower is better.
    pub cost: f64,
    /// Magnetic flux. Higher is better.
    pub flux: f64,
}

impl Objectives {
    /// Creates an objective vector.
    pub fn new(cost: f64, flux: f64) -> Self {
        Self { cost, flux }
    }

    /// True if both objectives are finite.
    ///
    /// Non-finite vectors are never compared for dominance; the owning
    /// genome is treated as infeasible instead.
    pub fn is_finite(&self) -> bool {
        self.cost.is_finite() && self.flux.is_finite()
    }

    /// Pareto dominance: `self` dominates `other` iff it is no worse in both
    /// objectives and strictly better in at least one.
    ///
    /// Equal vectors dominate neither. Callers must ensure both vectors are
    /// finite ([`is_finite`](Self::is_finite)); comparisons involving NaN
    /// return `false` here.
    pub fn dominates(&self, other: &Objectives) -> bool {
        self.cost <= other.cost
            && self.flux >= other.flux
            && (self.cost < other.cost || self.flux > other.flux)
    }
}

/// Evaluation state of an individual.
///
/// Variation always constructs fresh [`Unevaluated`](Fitness::Unevaluated)
/// individuals; a cached objective vector is carried over only by pure
/// reproduction (a clone that neither crossover nor mutation touched).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fitness {
    /// No objectives computed yet.
    #[default]
    Unevaluated,
    /// Cached objective vector.
    Evaluated(Objectives),
}

impl Fitness {
    /// Returns the cached objectives, if evaluated.
    pub fn objectives(&self) -> Option<Objectives> {
        match self {
            Fitness::Unevaluated => None,
            Fitness::Evaluated(obj) => Some(*obj),
        }
    }

    /// True if objectives have been computed.
    pub fn is_evaluated(&self) -> bool {
        matches!(self, Fitness::Evaluated(_))
    }
}

/// A genome together with its evaluation state and feasibility tag.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    /// The candidate design.
    pub genome: Genome,
    /// Cached objectives, or [`Fitness::Unevaluated`].
    pub fitness: Fitness,
    /// Set by the feasibility filter each generation. Starts `true`.
    pub feasible: bool,
}

impl Individual {
    /// Wraps a freshly created genome: unevaluated, presumed feasible until
    /// filtered.
    pub fn new(genome: Genome) -> Self {
        Self {
            genome,
            fitness: Fitness::Unevaluated,
            feasible: true,
        }
    }

    /// Cached objectives, if any.
    pub fn objectives(&self) -> Option<Objectives> {
        self.fitness.objectives()
    }

    /// Cached cost, if evaluated.
    pub fn cost(&self) -> Option<f64> {
        self.objectives().map(|o| o.cost)
    }

    /// Cached flux, if evaluated.
    pub fn flux(&self) -> Option<f64> {
        self.objectives().map(|o| o.flux)
    }

    /// True if this individual may enter a Pareto front: feasible, evaluated,
    /// and with finite objectives.
    pub fn is_front_eligible(&self) -> bool {
        self.feasible
            && self
                .objectives()
                .map(|o| o.is_finite())
                .unwrap_or(false)
    }
}

/// Defines a multi-objective design problem.
///
/// Both methods must be pure functions of the gene values: the engine may
/// call them concurrently on independent genomes, and seed-determinism
/// relies on evaluation never consuming the random source.
pub trait DesignProblem: Send + Sync {
    /// Computes the `(cost, flux)` objective vector for a genome.
    ///
    /// Returning a non-finite value marks the genome infeasible; it is never
    /// a fatal error.
    fn evaluate(&self, genome: &Genome) -> Objectives;

    /// Domain feasibility predicate, checked with the same geometric
    /// parameters as [`evaluate`](Self::evaluate).
    ///
    /// The default accepts everything.
    fn is_feasible(&self, _genome: &Genome) -> bool {
        true
    }

    /// Called after each generation's front has been extracted.
    ///
    /// Useful for logging or progress reporting. The default is a no-op.
    fn on_generation(&self, _generation: usize, _front: &[Individual]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_cost_improvement_dominates() {
        // (cost=8, flux=5) dominates (cost=10, flux=5)
        let a = Objectives::new(8.0, 5.0);
        let b = Objectives::new(10.0, 5.0);
        assert!(a.dominates(&b));
        assert!(!b.dominates(&a));
    }

    #[test]
    fn test_strict_flux_improvement_dominates() {
        let a = Objectives::new(10.0, 7.0);
        let b = Objectives::new(10.0, 5.0);
        assert!(a.dominates(&b));
        assert!(!b.dominates(&a));
    }

    #[test]
    fn test_equal_vectors_dominate_neither() {
        let a = Objectives::new(3.0, 3.0);
        assert!(!a.dominates(&a));
    }

    #[test]
    fn test_trade_off_dominates_neither() {
        let cheap = Objectives::new(8.0, 6.0);
        let strong = Objectives::new(12.0, 7.0);
        assert!(!cheap.dominates(&strong));
        assert!(!strong.dominates(&cheap));
    }

    #[test]
    fn test_nan_is_not_finite() {
        assert!(!Objectives::new(f64::NAN, 1.0).is_finite());
        assert!(!Objectives::new(1.0, f64::INFINITY).is_finite());
        assert!(Objectives::new(1.0, 2.0).is_finite());
    }

    #[test]
    fn test_front_eligibility() {
        let genome = Genome {
            turns: 10,
            theta: 0.5,
            slot_width: 0.01,
            slot_height: 0.02,
            stack_length: 0.1,
        };

        let unevaluated = Individual::new(genome);
        assert!(!unevaluated.is_front_eligible());

        let mut evaluated = Individual::new(genome);
        evaluated.fitness = Fitness::Evaluated(Objectives::new(1.0, 2.0));
        assert!(evaluated.is_front_eligible());

        let mut infeasible = evaluated.clone();
        infeasible.feasible = false;
        assert!(!infeasible.is_front_eligible());

        let mut nan = evaluated.clone();
        nan.fitness = Fitness::Evaluated(Objectives::new(1.0, f64::NAN));
        assert!(!nan.is_front_eligible());
    }
}
