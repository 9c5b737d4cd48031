use std::f64::consts::PI;

use ndarray::{Array, Array2};

use crate::params::Params;

pub mod boundary;
pub mod stencil;

pub use boundary::apply_boundary;
pub use stencil::{stability_number, step};

/// Build a fresh field filled with the analytic initial condition
/// `u(x, y) = cos(πy / 2Ly) · sin(πx / Lx)`, with `x = i·dx`, `y = j·dy`.
pub fn initial_condition(params: &Params) -> Array2<f64> {
    Array::from_shape_fn((params.nx(), params.ny()), |(i, j)| {
        let x = i as f64 * params.dx;
        let y = j as f64 * params.dy;
        (PI * y / (2.0 * params.ly)).cos() * (PI * x / params.lx).sin()
    })
}
