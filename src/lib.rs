//! Transient 2D heat diffusion on a rectangular plate.
//!
//! An explicit finite-difference core plus a deterministic false-color
//! heat-map renderer. The library owns the numerics; a host UI supplies
//! parameter values, calls [`Simulation::tick`] on its own schedule and
//! consumes the rendered frames.

pub mod colormap;
pub mod d2;
pub mod params;
pub mod render;
pub mod sim;

pub use params::{ConfigError, Params};
pub use sim::{Frame, Simulation, Tick};
