//! # Pile Reaction Stage
//!
//! Distributes the group load and moment to the two piles and compares the
//! heavier reaction with the estimated ultimate pile capacity.

use serde::{Deserialize, Serialize};

use super::geometry::{CapDimensions, LoadSummary};
use super::warnings::DesignWarning;
use crate::equations::pile_cap::{max_pile_reaction, pile_safety_factor, ultimate_pile_capacity};
use crate::settings::DesignSettings;

/// Pile reaction check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PileReactions {
    /// Reaction of the heavier pile R_max (kN)
    pub max_pile_reaction_kn: f64,
    /// Estimated ultimate pile capacity Qu (kN)
    pub ultimate_pile_capacity_kn: f64,
    /// Qu / R_max; infinite when R_max is zero
    pub safety_factor: f64,
}

impl PileReactions {
    /// OK when SF > 1
    pub fn passes(&self) -> bool {
        self.safety_factor > 1.0
    }

    pub fn warnings(&self) -> Vec<DesignWarning> {
        if self.passes() {
            Vec::new()
        } else {
            vec![DesignWarning::PileCapacityExceeded {
                reaction_kn: self.max_pile_reaction_kn,
                capacity_kn: self.ultimate_pile_capacity_kn,
            }]
        }
    }
}

/// Run the pile reaction stage.
pub fn distribute(
    loads: &LoadSummary,
    dims: &CapDimensions,
    pile_capacity_kn: f64,
    settings: &DesignSettings,
) -> PileReactions {
    let reaction = max_pile_reaction(loads.group_load_kn, loads.mux_knm, dims.pile_spacing_m);
    let capacity = ultimate_pile_capacity(pile_capacity_kn, settings.pile_capacity_factor);

    PileReactions {
        max_pile_reaction_kn: reaction,
        ultimate_pile_capacity_kn: capacity,
        safety_factor: pile_safety_factor(capacity, reaction),
    }
}
