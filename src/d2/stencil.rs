use ndarray::{Array, Array2};

use crate::params::Params;

/// `rx + ry` for the given parameters, the CFL-like stability number of
/// the explicit scheme. The scheme is stable iff it is at most 0.5.
pub fn stability_number(params: &Params) -> f64 {
    let rx = params.alpha * params.dt / (params.dx * params.dx);
    let ry = params.alpha * params.dt / (params.dy * params.dy);
    rx + ry
}

/// Advance the field by one explicit time step with the 5-point Laplacian
/// stencil.
///
/// Returns a fresh array and never mutates the input, so the caller can
/// still read the pre-step state. Boundary cells are copied through
/// unchanged; the boundary rules overwrite them right after.
pub fn step(u: &Array2<f64>, params: &Params) -> Array2<f64> {
    let (nx, ny) = u.dim();

    assert!(nx >= 2);
    assert!(ny >= 2);

    let rx = params.alpha * params.dt / (params.dx * params.dx);
    let ry = params.alpha * params.dt / (params.dy * params.dy);

    Array::from_shape_fn((nx, ny), |(i, j)| {
        if i == 0 || i == nx - 1 || j == 0 || j == ny - 1 {
            u[[i, j]]
        } else {
            u[[i, j]]
                + rx * (u[[i + 1, j]] - 2.0 * u[[i, j]] + u[[i - 1, j]])
                + ry * (u[[i, j + 1]] - 2.0 * u[[i, j]] + u[[i, j - 1]])
        }
    })
}
