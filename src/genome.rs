//! Candidate-design representation: the genome and its declared bounds.
//!
//! A [`Genome`] is a typed, fixed-shape record rather than a gene vector, so
//! gene order and gene types can never be confused at crossover or mutation
//! sites. The [`DesignSpace`] declares a closed `[min, max]` bound per gene
//! and owns sampling and clamping.

use crate::error::{Result, SearchError};
use rand::Rng;

/// Closed bound `[min, max]` for a continuous gene.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
}

impl Bounds {
    /// Creates a bound. Inversion is caught later by [`DesignSpace::validate`].
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the interval.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Projects `value` onto the interval.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Draws uniformly from `[min, max]`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.min..=self.max)
    }
}

/// Closed bound `[min, max]` for an integer gene, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntBounds {
    /// Inclusive lower bound.
    pub min: u32,
    /// Inclusive upper bound.
    pub max: u32,
}

impl IntBounds {
    /// Creates an integer bound.
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Width of the interval in the gene's continuous relaxation.
    ///
    /// An inverted bound (rejected by [`DesignSpace::validate`]) reports a
    /// width of zero rather than underflowing.
    pub fn width(&self) -> f64 {
        self.max.saturating_sub(self.min) as f64
    }

    /// Rounds `value` to the nearest integer and projects it onto the bound.
    pub fn clamp_round(&self, value: f64) -> u32 {
        if value.is_nan() {
            return self.min;
        }
        let rounded = value.round();
        if rounded < self.min as f64 {
            self.min
        } else if rounded > self.max as f64 {
            self.max
        } else {
            rounded as u32
        }
    }

    /// Draws a uniform integer from `[min, max]` inclusive.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.random_range(self.min..=self.max)
    }
}

/// A candidate actuator design.
///
/// One integer gene (`turns`) and four continuous genes. Field names follow
/// the physical quantities: `turns` is the winding turn count `N`, `theta`
/// the angular span of a pole, `slot_width` / `slot_height` the slot cross
/// section, `stack_length` the axial lamination stack length.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genome {
    /// Winding turn count (integer gene).
    pub turns: u32,
    /// Angular span of the pole face, radians.
    pub theta: f64,
    /// Slot width, meters.
    pub slot_width: f64,
    /// Slot height, meters.
    pub slot_height: f64,
    /// Axial stack length, meters.
    pub stack_length: f64,
}

/// Declared bounds for every gene of a [`Genome`].
///
/// The design space is the representation-level contract: values outside it
/// are always corrected by [`clamp`](DesignSpace::clamp), never rejected.
/// Domain feasibility is a separate concern handled by
/// [`DesignProblem::is_feasible`](crate::DesignProblem::is_feasible).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DesignSpace {
    /// Bounds for [`Genome::turns`].
    pub turns: IntBounds,
    /// Bounds for [`Genome::theta`].
    pub theta: Bounds,
    /// Bounds for [`Genome::slot_width`].
    pub slot_width: Bounds,
    /// Bounds for [`Genome::slot_height`].
    pub slot_height: Bounds,
    /// Bounds for [`Genome::stack_length`].
    pub stack_length: Bounds,
}

impl DesignSpace {
    /// Draws each gene independently and uniformly within its bounds.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Genome {
        Genome {
            turns: self.turns.sample(rng),
            theta: self.theta.sample(rng),
            slot_width: self.slot_width.sample(rng),
            slot_height: self.slot_height.sample(rng),
            stack_length: self.stack_length.sample(rng),
        }
    }

    /// Projects every out-of-range gene to its nearest bound.
    pub fn clamp(&self, genome: Genome) -> Genome {
        Genome {
            turns: genome.turns.clamp(self.turns.min, self.turns.max),
            theta: self.theta.clamp(genome.theta),
            slot_width: self.slot_width.clamp(genome.slot_width),
            slot_height: self.slot_height.clamp(genome.slot_height),
            stack_length: self.stack_length.clamp(genome.stack_length),
        }
    }

    /// Rejects inverted bounds (`min > max`) on any gene.
    pub fn validate(&self) -> Result<()> {
        if self.turns.min > self.turns.max {
            return Err(SearchError::InvertedBounds {
                gene: "turns",
                min: self.turns.min as f64,
                max: self.turns.max as f64,
            });
        }
        for (gene, bounds) in [
            ("theta", &self.theta),
            ("slot_width", &self.slot_width),
            ("slot_height", &self.slot_height),
            ("stack_length", &self.stack_length),
        ] {
            if bounds.min > bounds.max {
                return Err(SearchError::InvertedBounds {
                    gene,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }
        Ok(())
    }

    /// True if every gene of `genome` lies within its declared bounds.
    pub fn contains(&self, genome: &Genome) -> bool {
        genome.turns >= self.turns.min
            && genome.turns <= self.turns.max
            && genome.theta >= self.theta.min
            && genome.theta <= self.theta.max
            && genome.slot_width >= self.slot_width.min
            && genome.slot_width <= self.slot_width.max
            && genome.slot_height >= self.slot_height.min
            && genome.slot_height <= self.slot_height.max
            && genome.stack_length >= self.stack_length.min
            && genome.stack_length <= self.stack_length.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn space() -> DesignSpace {
        DesignSpace {
            turns: IntBounds::new(10, 120),
            theta: Bounds::new(0.1, 1.0),
            slot_width: Bounds::new(0.002, 0.02),
            slot_height: Bounds::new(0.005, 0.05),
            stack_length: Bounds::new(0.02, 0.2),
        }
    }

    #[test]
    fn test_sample_within_bounds() {
        let space = space();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let g = space.sample(&mut rng);
            assert!(space.contains(&g), "sampled genome out of bounds: {g:?}");
        }
    }

    #[test]
    fn test_integer_sampling_inclusive() {
        let space = DesignSpace {
            turns: IntBounds::new(3, 4),
            ..space()
        };
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 2];
        for _ in 0..100 {
            let g = space.sample(&mut rng);
            assert!(g.turns == 3 || g.turns == 4);
            seen[(g.turns - 3) as usize] = true;
        }
        assert!(seen[0] && seen[1], "both endpoints should be reachable");
    }

    #[test]
    fn test_clamp_projects_to_nearest_bound() {
        let space = space();
        let wild = Genome {
            turns: 500,
            theta: -2.0,
            slot_width: 1.0,
            slot_height: 0.03,
            stack_length: 0.0,
        };
        let clamped = space.clamp(wild);
        assert_eq!(clamped.turns, 120);
        assert!((clamped.theta - 0.1).abs() < 1e-12);
        assert!((clamped.slot_width - 0.02).abs() < 1e-12);
        assert!((clamped.slot_height - 0.03).abs() < 1e-12);
        assert!((clamped.stack_length - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_clamp_round_handles_nan() {
        let bounds = IntBounds::new(5, 10);
        assert_eq!(bounds.clamp_round(f64::NAN), 5);
        assert_eq!(bounds.clamp_round(7.4), 7);
        assert_eq!(bounds.clamp_round(7.6), 8);
        assert_eq!(bounds.clamp_round(-3.0), 5);
        assert_eq!(bounds.clamp_round(99.0), 10);
    }

    #[test]
    fn test_validate_ok() {
        assert!(space().validate().is_ok());
    }

    #[test]
    fn test_inverted_int_width_is_zero() {
        assert_eq!(IntBounds::new(10, 4).width(), 0.0);
        assert_eq!(IntBounds::new(10, 120).width(), 110.0);
    }

    #[test]
    fn test_validate_inverted_continuous_bounds() {
        let bad = DesignSpace {
            theta: Bounds::new(1.0, 0.1),
            ..space()
        };
        match bad.validate() {
            Err(SearchError::InvertedBounds { gene, .. }) => assert_eq!(gene, "theta"),
            other => panic!("expected InvertedBounds, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_inverted_integer_bounds() {
        let bad = DesignSpace {
            turns: IntBounds::new(50, 10),
            ..space()
        };
        match bad.validate() {
            Err(SearchError::InvertedBounds { gene, .. }) => assert_eq!(gene, "turns"),
            other => panic!("expected InvertedBounds, got {other:?}"),
        }
    }
}
