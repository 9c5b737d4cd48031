use thiserror::Error;

/// All tunable parameters of one simulation run.
///
/// `lx`/`ly` are the plate extents, `dx`/`dy` the spatial steps, `alpha`
/// the thermal diffusivity, `dt` the time step and `total_time` the run
/// length. The three `flux_*` coefficients feed the Neumann boundary
/// rules and may be any real number; everything else must be positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params {
    pub lx: f64,
    pub ly: f64,
    pub dx: f64,
    pub dy: f64,
    pub alpha: f64,
    pub dt: f64,
    pub total_time: f64,
    pub flux_left: f64,
    pub flux_right: f64,
    pub flux_top: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            lx: 2.0,
            ly: 1.5,
            dx: 0.05,
            dy: 0.05,
            alpha: 0.1,
            dt: 0.001,
            total_time: 5.0,
            flux_left: 0.0,
            flux_right: 0.0,
            flux_top: 0.0,
        }
    }
}

/// Rejected configuration. Reported before any step runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("parameter '{field}' must be positive")]
    NotPositive { field: &'static str },
    /// The spatial step exceeds the plate extent, leaving fewer than two
    /// grid points on the axis and no interior for the stencil.
    #[error("spatial step exceeds plate extent on the {axis} axis")]
    StepExceedsExtent { axis: &'static str },
}

impl Params {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("lx", self.lx),
            ("ly", self.ly),
            ("dx", self.dx),
            ("dy", self.dy),
            ("alpha", self.alpha),
            ("dt", self.dt),
            ("total_time", self.total_time),
        ];

        for &(field, value) in &positive {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field });
            }
        }

        if self.dx > self.lx {
            return Err(ConfigError::StepExceedsExtent { axis: "x" });
        }

        if self.dy > self.ly {
            return Err(ConfigError::StepExceedsExtent { axis: "y" });
        }

        Ok(())
    }

    /// Number of grid points along x: `floor(lx/dx) + 1`.
    pub fn nx(&self) -> usize {
        (self.lx / self.dx).floor() as usize + 1
    }

    /// Number of grid points along y: `floor(ly/dy) + 1`.
    pub fn ny(&self) -> usize {
        (self.ly / self.dy).floor() as usize + 1
    }

    /// True when `other` keeps the same grid shape, i.e. the change is
    /// hot-swappable and needs no reallocation.
    pub fn same_grid(&self, other: &Params) -> bool {
        self.lx == other.lx && self.ly == other.ly && self.dx == other.dx && self.dy == other.dy
    }
}
