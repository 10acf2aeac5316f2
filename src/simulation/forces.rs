//! Force contributors for the n-body engine
//!
//! Each term implements [`ForceLaw`] and adds its contribution into a per-body
//! buffer. Terms only ever read the system, so every body sees the same
//! snapshot of positions within one step.

use crate::simulation::states::{NVec2, System};

/// Collection of force terms; contributions are summed into a single net
/// force vector per body
pub struct ForceSet {
    terms: Vec<Box<dyn ForceLaw + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: ForceLaw + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute net forces for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_forces(&self, sys: &System, out: &mut [NVec2]) {
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        for term in &self.terms {
            term.force(sys, out);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for force sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait ForceLaw {
    fn force(&self, sys: &System, out: &mut [NVec2]);
}

/// Direct pairwise Newtonian gravity, O(n^2).
/// Coincident pairs contribute zero force.
pub struct NewtonianGravity;

impl ForceLaw for NewtonianGravity {
    fn force(&self, sys: &System, out: &mut [NVec2]) {
        for (body, f) in sys.bodies.iter().zip(out.iter_mut()) {
            f.x += body.net_force_x(&sys.bodies);
            f.y += body.net_force_y(&sys.bodies);
        }
    }
}
