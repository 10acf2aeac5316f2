pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use error::{Error, Result};

pub use simulation::states::{Body, System, NVec2, G};
pub use simulation::params::Parameters;
pub use simulation::forces::{ForceLaw, ForceSet, NewtonianGravity};
pub use simulation::integrator::euler_step;
pub use simulation::scenario::{Phase, Scenario};
pub use simulation::report::{format_exp, format_report};

pub use configuration::config::{BodyConfig, DegeneratePolicy, ParametersConfig, ScenarioConfig};
pub use configuration::input::{read_bodies, BodyList};

pub use visualization::{NullRenderer, Renderer};
#[cfg(feature = "vis")]
pub use visualization::nbody_vis2d::run_2d;
