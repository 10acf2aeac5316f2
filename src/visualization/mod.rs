//! Display hooks for the simulation loop.
//!
//! The driver reports to a [`Renderer`] but never reads anything back, so a
//! run without a display produces the same numbers as one with it.

use crate::simulation::states::Body;

#[cfg(feature = "vis")]
pub mod nbody_vis2d;

/// Receives the scene once at start and every body after each step
pub trait Renderer {
    /// Called once before the first step with the half-width of the scene
    fn start(&mut self, _radius: f64) {}

    /// Called once after every step
    fn frame(&mut self, _t: f64, _bodies: &[Body]) {}
}

/// Headless renderer
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {}

/// Path of the image drawn for a body, looked up by its label
pub fn image_path(label: &str) -> String {
    format!("images/{}", label)
}

pub const BACKGROUND_IMAGE: &str = "images/starfield.jpg";
