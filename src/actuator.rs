//! Bundled electromagnetic actuator design problem.
//!
//! A first-order analytic model: material cost from copper and iron volume
//! pricing, flux from the winding MMF over the air-gap reluctance. The
//! formulas are smooth and finite over the whole design space; they are a
//! sizing-study surrogate, not a validated magnetic model.

use crate::genome::{Bounds, DesignSpace, Genome, IntBounds};
use crate::types::{DesignProblem, Objectives};
use std::f64::consts::PI;

/// Vacuum permeability, H/m.
const MU0: f64 = 4.0e-7 * PI;

/// Geometric and material parameters shared by the evaluator and the
/// feasibility constraints.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActuatorProblem {
    /// Stator bore radius, meters.
    pub bore_radius: f64,
    /// Number of stator slots.
    pub slot_count: u32,
    /// Winding wire diameter, meters.
    pub wire_diameter: f64,
    /// Radial air gap, meters.
    pub air_gap: f64,
    /// Drive current, amperes.
    pub current: f64,
    /// Copper density, kg/m³.
    pub copper_density: f64,
    /// Lamination steel density, kg/m³.
    pub iron_density: f64,
    /// Copper price, currency units per kg.
    pub copper_price: f64,
    /// Lamination steel price, currency units per kg.
    pub iron_price: f64,
}

impl Default for ActuatorProblem {
    fn default() -> Self {
        Self {
            bore_radius: 0.05,
            slot_count: 12,
            wire_diameter: 0.0005,
            air_gap: 0.001,
            current: 5.0,
            copper_density: 8960.0,
            iron_density: 7870.0,
            copper_price: 9.0,
            iron_price: 1.2,
        }
    }
}

impl ActuatorProblem {
    /// Default gene bounds for this geometry.
    pub fn design_space() -> DesignSpace {
        DesignSpace {
            turns: IntBounds::new(10, 120),
            theta: Bounds::new(0.1, 1.0),
            slot_width: Bounds::new(0.002, 0.02),
            slot_height: Bounds::new(0.005, 0.05),
            stack_length: Bounds::new(0.02, 0.2),
        }
    }

    /// Slot-width ceiling: half the per-slot angular pitch at the bore.
    pub fn max_slot_width(&self) -> f64 {
        PI * self.bore_radius / self.slot_count as f64
    }

    /// Copper mass of the winding, kg.
    fn copper_mass(&self, genome: &Genome) -> f64 {
        let wire_area = PI / 4.0 * self.wire_diameter * self.wire_diameter;
        let turn_length = 2.0 * (genome.stack_length + genome.theta * self.bore_radius);
        genome.turns as f64 * turn_length * wire_area * self.copper_density
    }

    /// Lamination stack mass, kg. The stack is an annulus of the bore
    /// radius plus the slot height.
    fn iron_mass(&self, genome: &Genome) -> f64 {
        let outer = self.bore_radius + genome.slot_height;
        let annulus = PI * (outer * outer - self.bore_radius * self.bore_radius);
        annulus * genome.stack_length * self.iron_density
    }
}

impl DesignProblem for ActuatorProblem {
    /// Cost is copper plus iron mass at their prices; flux is the winding
    /// MMF divided by the air-gap reluctance over the pole face
    /// `theta * bore_radius * stack_length`.
    fn evaluate(&self, genome: &Genome) -> Objectives {
        let cost = self.copper_price * self.copper_mass(genome)
            + self.iron_price * self.iron_mass(genome);

        let pole_area = genome.theta * self.bore_radius * genome.stack_length;
        let mmf = genome.turns as f64 * self.current;
        let flux = MU0 * mmf * pole_area / self.air_gap;

        Objectives::new(cost, flux)
    }

    /// Two geometric constraints: the slot must fit within its angular
    /// pitch at the bore, and the winding must fit within the slot height.
    fn is_feasible(&self, genome: &Genome) -> bool {
        genome.slot_width <= self.max_slot_width()
            && genome.turns as f64 * self.wire_diameter <= genome.slot_height
    }
}
