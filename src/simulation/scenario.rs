//! Build and drive fully-initialized simulation scenarios
//!
//! A [`Scenario`] is the runtime bundle of a run:
//! - numerical parameters (`Parameters`)
//! - system state (`System`, bodies at t = 0 after loading)
//! - active force set (`ForceSet`)
//! - the display radius, carried for rendering and the report only
//!
//! Its life is `Loading -> Running(t) -> Finished`. Loading is the
//! constructor: a scenario only exists once its input was read and
//! validated. It is running while `t < t_end` and finished afterwards.

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use log::{debug, info, trace};

use crate::configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};
use crate::configuration::input::{read_bodies, BodyList};
use crate::error::{Error, Result};
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::integrator::euler_step;
use crate::simulation::params::{Parameters, DEFAULT_H0, DEFAULT_T_END};
use crate::simulation::report::format_report;
use crate::simulation::states::{Body, NVec2, System};
use crate::visualization::Renderer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Running { elapsed: f64 },
    Finished,
}

pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: ForceSet,
    pub radius: f64,
}

impl Scenario {
    /// Bundle loaded bodies with run parameters and Newtonian gravity
    pub fn build_scenario(list: BodyList, parameters: Parameters) -> Self {
        let forces = ForceSet::new().with(NewtonianGravity);
        Self {
            parameters,
            system: System::new(list.bodies),
            forces,
            radius: list.radius,
        }
    }

    /// Build from a YAML scenario. Entries in `overrides` win over the
    /// scenario's own parameters, which win over the defaults.
    pub fn from_config(cfg: ScenarioConfig, overrides: &ParametersConfig) -> Result<Self> {
        if !(cfg.radius > 0.0 && cfg.radius.is_finite()) {
            return Err(Error::InvalidParameter(format!("radius must be positive, got {}", cfg.radius)));
        }
        let bodies = cfg
            .bodies
            .into_iter()
            .map(|bc: BodyConfig| Body::new(NVec2::from(bc.x), NVec2::from(bc.v), bc.m, bc.label))
            .collect::<Result<Vec<Body>>>()?;

        let parameters = resolve_parameters(overrides, &cfg.parameters)?;
        Ok(Self::build_scenario(BodyList { radius: cfg.radius, bodies }, parameters))
    }

    /// Load a scenario file: `.yaml`/`.yml` as a YAML scenario, anything
    /// else as the plain-text body list
    pub fn load(path: impl AsRef<Path>, overrides: &ParametersConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::InputNotFound(path.to_path_buf()),
            _ => Error::IOError(e),
        })?;
        let reader = BufReader::new(file);

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        let scenario = if is_yaml {
            let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
            Self::from_config(cfg, overrides)?
        } else {
            let list = read_bodies(reader)?;
            let parameters = resolve_parameters(overrides, &ParametersConfig::default())?;
            Self::build_scenario(list, parameters)
        };

        info!(
            "loaded {} bodies from {} (radius {:e})",
            scenario.system.bodies.len(),
            path.display(),
            scenario.radius
        );
        Ok(scenario)
    }

    pub fn phase(&self) -> Phase {
        if self.system.t < self.parameters.t_end {
            Phase::Running { elapsed: self.system.t }
        } else {
            Phase::Finished
        }
    }

    /// Take one step if still running. Returns whether a step was taken.
    pub fn step(&mut self, renderer: &mut dyn Renderer) -> Result<bool> {
        if self.phase() == Phase::Finished {
            return Ok(false);
        }
        euler_step(&mut self.system, &self.forces, &self.parameters)?;
        trace!("t = {}", self.system.t);
        renderer.frame(self.system.t, &self.system.bodies);
        Ok(true)
    }

    /// Run until finished, returning the number of steps taken
    pub fn run(&mut self, renderer: &mut dyn Renderer) -> Result<usize> {
        debug!(
            "running to t = {} with dt = {} ({:?} on coincident bodies)",
            self.parameters.t_end, self.parameters.h0, self.parameters.degenerate
        );
        renderer.start(self.radius);
        let mut steps = 0;
        while self.step(renderer)? {
            steps += 1;
        }
        info!("finished after {} steps at t = {}", steps, self.system.t);
        Ok(steps)
    }

    /// Final state in input order
    pub fn report(&self) -> String {
        format_report(&self.system, self.radius)
    }
}

fn resolve_parameters(overrides: &ParametersConfig, file: &ParametersConfig) -> Result<Parameters> {
    Parameters::new(
        overrides.t_end.or(file.t_end).unwrap_or(DEFAULT_T_END),
        overrides.h0.or(file.h0).unwrap_or(DEFAULT_H0),
        overrides.degenerate.or(file.degenerate).unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::config::DegeneratePolicy;

    fn yaml(parameters: &str) -> ScenarioConfig {
        let text = format!(
            "radius: 10.0\n{}bodies:\n  - x: [1.0, 0.0]\n    v: [0.0, 1.0]\n    m: 2.0\n    label: a\n",
            parameters
        );
        serde_yaml::from_str(&text).unwrap()
    }

    #[test]
    fn overrides_beat_file_beat_defaults() {
        let cfg = yaml("parameters:\n  t_end: 100.0\n  h0: 5.0\n");
        let overrides = ParametersConfig {
            h0: Some(1.0),
            ..Default::default()
        };
        let s = Scenario::from_config(cfg, &overrides).unwrap();
        assert_eq!(s.parameters.t_end, 100.0);
        assert_eq!(s.parameters.h0, 1.0);
        assert_eq!(s.parameters.degenerate, DegeneratePolicy::Reject);

        let s = Scenario::from_config(yaml(""), &ParametersConfig::default()).unwrap();
        assert_eq!(s.parameters.t_end, DEFAULT_T_END);
        assert_eq!(s.parameters.h0, DEFAULT_H0);
    }

    #[test]
    fn yaml_bodies_are_validated() {
        let mut cfg = yaml("");
        cfg.bodies[0].m = 0.0;
        assert!(matches!(
            Scenario::from_config(cfg, &ParametersConfig::default()),
            Err(Error::NonPositiveMass { .. })
        ));

        let mut cfg = yaml("");
        cfg.radius = -1.0;
        assert!(Scenario::from_config(cfg, &ParametersConfig::default()).is_err());
    }

    #[test]
    fn phase_follows_elapsed_time() {
        let overrides = ParametersConfig {
            t_end: Some(2.0),
            h0: Some(1.0),
            ..Default::default()
        };
        let mut s = Scenario::from_config(yaml(""), &overrides).unwrap();
        let mut r = crate::visualization::NullRenderer;
        assert_eq!(s.phase(), Phase::Running { elapsed: 0.0 });
        assert!(s.step(&mut r).unwrap());
        assert_eq!(s.phase(), Phase::Running { elapsed: 1.0 });
        assert!(s.step(&mut r).unwrap());
        assert_eq!(s.phase(), Phase::Finished);
        assert!(!s.step(&mut r).unwrap());
        assert_eq!(s.system.t, 2.0);
    }
}
