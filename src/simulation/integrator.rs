//! Fixed-step time integrator for the n-body system
//!
//! One semi-implicit Euler step, driven by a `ForceSet` and `Parameters`.
//! Forces for every body are taken from the same pre-step snapshot before
//! any body moves.

use log::warn;

use super::forces::ForceSet;
use super::params::Parameters;
use super::states::{NVec2, System};
use crate::configuration::config::DegeneratePolicy;
use crate::error::{Error, Result};

/// Advance the system by one step of `params.h0` and increment `sys.t`.
///
/// Fails without touching the system when two bodies coincide and the
/// policy is [`DegeneratePolicy::Reject`].
pub fn euler_step(sys: &mut System, forces: &ForceSet, params: &Parameters) -> Result<()> {
    let n = sys.bodies.len();
    let dt = params.h0;

    if let Some((i, j)) = sys.find_coincident() {
        let (first, second) = (sys.bodies[i].label(), sys.bodies[j].label());
        match params.degenerate {
            DegeneratePolicy::Reject => {
                return Err(Error::CoincidentBodies {
                    first: first.to_string(),
                    second: second.to_string(),
                });
            }
            DegeneratePolicy::Ignore => {
                warn!("t = {}: bodies {} and {} coincide, their mutual force is ignored", sys.t, first, second);
            }
        }
    }

    // Force phase: read-only pass over the current snapshot
    let mut net = vec![NVec2::zeros(); n];
    forces.accumulate_forces(&*sys, &mut net);

    // Update phase: each body only mutates itself
    for (b, f) in sys.bodies.iter_mut().zip(net.iter()) {
        b.advance(dt, f.x, f.y);
    }

    sys.t += dt;
    Ok(())
}
