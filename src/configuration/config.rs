//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario, the YAML counterpart of the plain-text body list:
//!
//! - [`ParametersConfig`] – optional run length, step size and degenerate policy
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! radius: 2.5e11
//!
//! parameters:            # every entry is optional
//!   t_end: 39447000.0    # total simulation time
//!   h0: 25000.0          # fixed step size
//!   degenerate: reject   # or "ignore"
//!
//! bodies:
//!   - x: [ 1.496e11, 0.0 ]
//!     v: [ 0.0, 2.98e4 ]
//!     m: 5.974e24
//!     label: earth.gif
//! ```
//!
//! The loader maps this configuration into the runtime `Scenario`; bodies
//! go through the same validation as the text format.

use serde::Deserialize;

/// What to do when two bodies occupy the same position
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    #[default]
    #[serde(rename = "reject")] // Abort the run with an error naming both bodies
    Reject,

    #[serde(rename = "ignore")] // The pair exerts no force on each other, a warning is logged
    Ignore,
}

/// Run parameters for a scenario, each falls back to the CLI or the defaults
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ParametersConfig {
    pub t_end: Option<f64>, // total time
    pub h0: Option<f64>, // time step size
    pub degenerate: Option<DegeneratePolicy>,
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position in meters
    pub v: [f64; 2], // initial velocity in meters per second
    pub m: f64, // mass in kilograms
    pub label: String, // display tag, names the image used by the viewer
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub radius: f64, // half-width of the displayed scene
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}
