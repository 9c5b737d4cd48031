use std::f64::consts::PI;

use ndarray::Array2;

use crate::params::Params;

/// Apply all four boundary rules in place, in the fixed order
/// bottom, left, right, top.
///
/// The order is part of the contract: the left/right Neumann rules read
/// rows the bottom Dirichlet rule may already have patched, and the top
/// rule runs last, so both top corners are governed by the top rule.
/// Repeated application with the same parameters is a no-op after the
/// first call.
pub fn apply_boundary(u: &mut Array2<f64>, params: &Params) {
    let (nx, ny) = u.dim();

    assert!(nx >= 2);
    assert!(ny >= 2);

    // Bottom (j = 0), Dirichlet: u = sin(πx / Lx)
    for i in 0..nx {
        let x = i as f64 * params.dx;
        u[[i, 0]] = (PI * x / params.lx).sin();
    }

    // Left (i = 0), Neumann via first-order one-sided difference
    for j in 0..ny {
        u[[0, j]] = u[[1, j]] - params.flux_left * params.dx;
    }

    // Right (i = nx - 1)
    for j in 0..ny {
        u[[nx - 1, j]] = u[[nx - 2, j]] + params.flux_right * params.dx;
    }

    // Top (j = ny - 1)
    for i in 0..nx {
        u[[i, ny - 1]] = u[[i, ny - 2]] + params.flux_top * params.dy;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::d2::initial_condition;
    use approx::assert_abs_diff_eq;

    fn fluxed() -> Params {
        let mut p = Params::default();
        p.flux_left = 0.3;
        p.flux_right = -0.7;
        p.flux_top = 1.2;
        p
    }

    #[test]
    fn test_bottom_row_is_dirichlet_sine() {
        let p = fluxed();
        let mut u = initial_condition(&p);
        apply_boundary(&mut u, &p);

        let nx = p.nx();
        for i in 0..nx {
            let x = i as f64 * p.dx;
            assert_abs_diff_eq!(u[[i, 0]], (PI * x / p.lx).sin());
        }
    }

    #[test]
    fn test_left_right_neumann_relations() {
        let p = fluxed();
        let mut u = initial_condition(&p);
        apply_boundary(&mut u, &p);

        let (nx, ny) = u.dim();
        // The top row is rewritten after the side rules, so check below it.
        for j in 0..ny - 1 {
            assert_abs_diff_eq!(u[[0, j]], u[[1, j]] - p.flux_left * p.dx);
            assert_abs_diff_eq!(u[[nx - 1, j]], u[[nx - 2, j]] + p.flux_right * p.dx);
        }
    }

    #[test]
    fn test_top_row_neumann_relation() {
        let p = fluxed();
        let mut u = initial_condition(&p);
        apply_boundary(&mut u, &p);

        let (nx, ny) = u.dim();
        for i in 0..nx {
            assert_abs_diff_eq!(u[[i, ny - 1]], u[[i, ny - 2]] + p.flux_top * p.dy);
        }
    }

    #[test]
    fn test_top_rule_wins_at_top_corners() {
        let p = fluxed();
        let mut u = initial_condition(&p);
        apply_boundary(&mut u, &p);

        let (nx, ny) = u.dim();
        // Corner values come from the top rule applied to the side-patched
        // row below, not from the side rules applied to the top row.
        assert_abs_diff_eq!(u[[0, ny - 1]], u[[0, ny - 2]] + p.flux_top * p.dy);
        assert_abs_diff_eq!(
            u[[0, ny - 1]],
            u[[1, ny - 2]] - p.flux_left * p.dx + p.flux_top * p.dy
        );
        assert_abs_diff_eq!(
            u[[nx - 1, ny - 1]],
            u[[nx - 2, ny - 2]] + p.flux_right * p.dx + p.flux_top * p.dy
        );
    }

    #[test]
    fn test_apply_twice_is_idempotent() {
        let p = fluxed();
        let mut once = initial_condition(&p);
        apply_boundary(&mut once, &p);

        let mut twice = once.clone();
        apply_boundary(&mut twice, &p);

        assert_eq!(once, twice);
    }
}
