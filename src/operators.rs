//! Variation operators: blend crossover and Gaussian mutation.
//!
//! Both operators are pure functions over genomes: they never consult
//! feasibility, never discard a result, and always clamp every gene back
//! into its declared bounds. Parents are not modified; fresh genomes are
//! returned and the caller wraps them as unevaluated individuals.

use crate::genome::{DesignSpace, Genome};
use rand::Rng;
use rand_distr::StandardNormal;

/// Blend (BLX-alpha) crossover.
///
/// For each gene, with parent values `x1` and `x2`, both children draw
/// independently and uniformly from the parents' interval extended by
/// `alpha` times its width on both sides. The integer gene uses the same
/// interval and rounds to the nearest integer. All genes are clamped to
/// `space` afterwards.
pub fn blend_crossover<R: Rng>(
    p1: &Genome,
    p2: &Genome,
    alpha: f64,
    space: &DesignSpace,
    rng: &mut R,
) -> (Genome, Genome) {
    let child = |rng: &mut R| Genome {
        turns: space
            .turns
            .clamp_round(blx(p1.turns as f64, p2.turns as f64, alpha, rng)),
        theta: space.theta.clamp(blx(p1.theta, p2.theta, alpha, rng)),
        slot_width: space
            .slot_width
            .clamp(blx(p1.slot_width, p2.slot_width, alpha, rng)),
        slot_height: space
            .slot_height
            .clamp(blx(p1.slot_height, p2.slot_height, alpha, rng)),
        stack_length: space
            .stack_length
            .clamp(blx(p1.stack_length, p2.stack_length, alpha, rng)),
    };
    let c1 = child(rng);
    let c2 = child(rng);
    (c1, c2)
}

/// Draws one blended gene value from the extended parent interval.
fn blx<R: Rng>(x1: f64, x2: f64, alpha: f64, rng: &mut R) -> f64 {
    let lo = x1.min(x2);
    let hi = x1.max(x2);
    let range = hi - lo;
    if range < 1e-15 {
        // Degenerate interval: identical parent genes pass through.
        lo
    } else {
        rng.random_range((lo - alpha * range)..(hi + alpha * range))
    }
}

/// Gaussian mutation.
///
/// Each gene is perturbed independently with probability `indpb` by additive
/// Gaussian noise with mean 0 and standard deviation `sigma` scaled by that
/// gene's bound width, so one `sigma` serves genes of different physical
/// scales. The integer gene receives the rounded perturbation. All genes are
/// clamped to `space`.
pub fn gaussian_mutate<R: Rng>(
    genome: &Genome,
    sigma: f64,
    indpb: f64,
    space: &DesignSpace,
    rng: &mut R,
) -> Genome {
    let mut out = *genome;
    if rng.random_range(0.0..1.0) < indpb {
        let noise: f64 = rng.sample(StandardNormal);
        out.turns = space
            .turns
            .clamp_round(out.turns as f64 + noise * sigma * space.turns.width());
    }
    if rng.random_range(0.0..1.0) < indpb {
        let noise: f64 = rng.sample(StandardNormal);
        out.theta = space
            .theta
            .clamp(out.theta + noise * sigma * space.theta.width());
    }
    if rng.random_range(0.0..1.0) < indpb {
        let noise: f64 = rng.sample(StandardNormal);
        out.slot_width = space
            .slot_width
            .clamp(out.slot_width + noise * sigma * space.slot_width.width());
    }
    if rng.random_range(0.0..1.0) < indpb {
        let noise: f64 = rng.sample(StandardNormal);
        out.slot_height = space
            .slot_height
            .clamp(out.slot_height + noise * sigma * space.slot_height.width());
    }
    if rng.random_range(0.0..1.0) < indpb {
        let noise: f64 = rng.sample(StandardNormal);
        out.stack_length = space
            .stack_length
            .clamp(out.stack_length + noise * sigma * space.stack_length.width());
    }
    out
}
