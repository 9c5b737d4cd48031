use log::{debug, warn};
use ndarray::Array2;

use crate::colormap::field_range;
use crate::d2::{apply_boundary, initial_condition, stability_number, step};
use crate::params::{ConfigError, Params};

/// Outcome of one [`Simulation::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// The simulation is halted; nothing happened.
    Idle,
    /// One step executed. `stable` is false when `rx + ry` exceeded 0.5
    /// for this step; the step still ran, but the scheme may diverge.
    Stepped { stable: bool },
    /// The run reached `total_time`. Time wrapped back to 0 and the
    /// simulation halted; it does not restart on its own.
    Completed,
}

/// A field snapshot plus its value range, consumed once per rendered frame.
pub struct Frame<'a> {
    pub field: &'a Array2<f64>,
    pub min: f64,
    pub max: f64,
}

/// Owns the field, the clock and the run flag; the host calls [`tick`]
/// on its own schedule and nothing is assumed about the cadence.
///
/// [`tick`]: Simulation::tick
pub struct Simulation {
    params: Params,
    field: Array2<f64>,
    time: f64,
    running: bool,
}

impl Simulation {
    /// Validate `params` and build the starting field (initial condition
    /// plus one boundary application).
    pub fn new(params: Params) -> Result<Self, ConfigError> {
        params.validate()?;

        let mut field = initial_condition(&params);
        apply_boundary(&mut field, &params);

        Ok(Self {
            params,
            field,
            time: 0.0,
            running: true,
        })
    }

    /// Advance by one explicit step: stencil update, boundary rules, then
    /// the clock. Each step produces a fresh field, so the previous one
    /// stays readable until the swap.
    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }

        let r = stability_number(&self.params);
        let stable = r <= 0.5;
        if !stable {
            warn!(
                "explicit scheme unstable: rx + ry = {:.3} > 0.5 at t = {:.3}",
                r, self.time
            );
        }

        let mut next = step(&self.field, &self.params);
        apply_boundary(&mut next, &self.params);
        self.field = next;
        self.time += self.params.dt;

        if self.time >= self.params.total_time {
            self.time = 0.0;
            self.running = false;
            return Tick::Completed;
        }

        Tick::Stepped { stable }
    }

    /// Swap in a new parameter set. A grid-shape change (`lx`, `ly`, `dx`,
    /// `dy`) reallocates the field and restarts the run; any other change
    /// is hot-swapped and takes effect on the next step.
    pub fn reconfigure(&mut self, params: Params) -> Result<(), ConfigError> {
        params.validate()?;

        if self.params.same_grid(&params) {
            debug!("hot-swapping parameters");
            self.params = params;
        } else {
            debug!(
                "grid shape changed, reallocating {}x{}",
                params.nx(),
                params.ny()
            );
            self.params = params;
            self.reset();
        }

        Ok(())
    }

    /// Rebuild the field from the initial condition and restart the clock.
    pub fn reset(&mut self) {
        self.field = initial_condition(&self.params);
        apply_boundary(&mut self.field, &self.params);
        self.time = 0.0;
        self.running = true;
    }

    pub fn frame(&self) -> Frame<'_> {
        let (min, max) = field_range(&self.field);
        Frame {
            field: &self.field,
            min,
            max,
        }
    }

    pub fn field(&self) -> &Array2<f64> {
        &self.field
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Cooperative pause/resume: a cleared flag stops further steps but
    /// never aborts one in flight.
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }
}
