//! Numerical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - total simulated time and fixed step size,
//! - the policy applied when two bodies share a position

use crate::configuration::config::DegeneratePolicy;
use crate::error::{Error, Result};

pub const DEFAULT_T_END: f64 = 39_447_000.0;
pub const DEFAULT_H0: f64 = 25_000.0;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // total time
    pub h0: f64, // step size
    pub degenerate: DegeneratePolicy, // coincident bodies
}

impl Parameters {
    /// Validated parameters; the step must be positive or the loop never ends
    pub fn new(t_end: f64, h0: f64, degenerate: DegeneratePolicy) -> Result<Self> {
        if !t_end.is_finite() {
            return Err(Error::InvalidParameter(format!("total time must be finite, got {}", t_end)));
        }
        if !(h0 > 0.0 && h0.is_finite()) {
            return Err(Error::InvalidParameter(format!("time step must be positive, got {}", h0)));
        }
        Ok(Self { t_end, h0, degenerate })
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            t_end: DEFAULT_T_END,
            h0: DEFAULT_H0,
            degenerate: DegeneratePolicy::default(),
        }
    }
}
