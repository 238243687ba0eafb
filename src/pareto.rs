//! Non-dominated front extraction.
//!
//! # Algorithm
//!
//! Pairwise dominance comparison over the eligible members of the input.
//!
//! # Complexity
//!
//! O(n²) in the population size, which is more than adequate at the
//! population sizes this engine runs (tens to a few hundred). For much
//! larger populations the pairwise scan can be swapped for an
//! O(n log n) sweep over cost-sorted individuals without changing the
//! contract.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic
//!   Algorithm: NSGA-II"

use crate::types::{Individual, Objectives};

/// Extracts the non-dominated front of `population`.
///
/// Only eligible individuals (feasible, evaluated, with finite objectives)
/// participate; everything else is excluded from both the output and the
/// comparisons. Ties (equal objective vectors) dominate neither, so
/// duplicates of a non-dominated point are all kept.
///
/// The output preserves the input order of the survivors, which makes the
/// result deterministic given a deterministic input order.
pub fn extract_front(population: &[Individual]) -> Vec<Individual> {
    let eligible: Vec<(usize, Objectives)> = population
        .iter()
        .enumerate()
        .filter(|(_, ind)| ind.is_front_eligible())
        .filter_map(|(i, ind)| ind.objectives().map(|obj| (i, obj)))
        .collect();

    let mut front = Vec::new();
    for &(i, oi) in &eligible {
        let dominated = eligible
            .iter()
            .any(|&(j, oj)| j != i && oj.dominates(&oi));
        if !dominated {
            front.push(population[i].clone());
        }
    }
    front
}
