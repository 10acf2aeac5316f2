//! Core state types for the 2D n-body simulation.
//!
//! - `Body`   a point mass with position, velocity, mass and display label
//! - `System` the ordered collection of bodies and the elapsed time `t`
//!
//! Pairwise gravity is defined on `Body` itself so that a single body can be
//! asked what the rest of the system does to it.

use nalgebra::Vector2;

use crate::error::{Error, Result};

pub type NVec2 = Vector2<f64>;

/// Gravitational constant in N m^2 / kg^2
pub const G: f64 = 6.67e-11;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    x: NVec2, // position
    v: NVec2, // velocity
    m: f64, // mass, always > 0
    label: String, // display tag, not used by physics
}

impl Body {
    /// Build a body, rejecting a mass that is zero, negative or not finite
    pub fn new(x: NVec2, v: NVec2, m: f64, label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        if !(m > 0.0 && m.is_finite()) {
            return Err(Error::NonPositiveMass { label, mass: m });
        }
        Ok(Self { x, v, m, label })
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Momentum m * v
    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    /// Euclidean distance between the two positions
    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.x - self.x).norm()
    }

    /// Magnitude of the gravitational force `other` exerts on this body.
    ///
    /// Coincident bodies exert no force on each other, the driver decides
    /// whether such a configuration is acceptable at all.
    pub fn force_from(&self, other: &Body) -> f64 {
        let d = self.distance_to(other);
        if d == 0.0 {
            return 0.0;
        }
        G * self.m * other.m / (d * d)
    }

    /// x component of `force_from`, positive when `other` lies to the right
    pub fn force_from_x(&self, other: &Body) -> f64 {
        self.component_from(other, other.x.x - self.x.x)
    }

    /// y component of `force_from`, positive when `other` lies above
    pub fn force_from_y(&self, other: &Body) -> f64 {
        self.component_from(other, other.x.y - self.x.y)
    }

    fn component_from(&self, other: &Body, delta: f64) -> f64 {
        let d = self.distance_to(other);
        if d == 0.0 {
            return 0.0;
        }
        self.force_from(other) * delta / d
    }

    /// Sum of `force_from_x` over every body in `bodies` except this one.
    /// Self is skipped by identity, a distinct body with equal state still counts.
    pub fn net_force_x(&self, bodies: &[Body]) -> f64 {
        self.others(bodies).map(|b| self.force_from_x(b)).sum()
    }

    /// Sum of `force_from_y` over every body in `bodies` except this one
    pub fn net_force_y(&self, bodies: &[Body]) -> f64 {
        self.others(bodies).map(|b| self.force_from_y(b)).sum()
    }

    fn others<'a>(&'a self, bodies: &'a [Body]) -> impl Iterator<Item = &'a Body> + 'a {
        bodies.iter().filter(move |b| !std::ptr::eq(*b, self))
    }

    /// Semi-implicit Euler step under the net force (fx, fy):
    /// v_n+1 = v_n + dt * F / m, then x_n+1 = x_n + dt * v_n+1
    pub fn advance(&mut self, dt: f64, fx: f64, fy: f64) {
        let a = NVec2::new(fx, fy) / self.m;
        self.v += dt * a;
        self.x += dt * self.v;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub bodies: Vec<Body>, // bodies in input order
    pub t: f64, // elapsed time
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    /// First pair of bodies (by index) that share a position, if any
    pub fn find_coincident(&self) -> Option<(usize, usize)> {
        let n = self.bodies.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.bodies[i].x == self.bodies[j].x {
                    return Some((i, j));
                }
            }
        }
        None
    }
}
