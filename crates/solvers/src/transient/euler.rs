//! Forward Euler integrator for initial value problems.
//!
//! Advances `dx/dt = f(x, t)` from `x(t0) = x0` across a half-open span
//! `[t0, tf)` with a fixed step `h`:
//!
//! ```text
//! x_{n+1} = x_n + h * f(x_n, t_n)
//! t_n     = t0 + n * h
//! ```
//!
//! The method is first order: the global error at a fixed time shrinks
//! linearly with `h`. Large steps produce inaccurate or diverging results;
//! those are returned as computed, never corrected.
//!
//! # Example
//!
//! ```
//! use ivp_solvers::transient::euler;
//!
//! let growth = |x: &f64, _t: f64| 0.5 * x;
//! let trajectory = euler::integrate_unobserved(&growth, 1.0, [0.0, 1.0], 0.25)?;
//!
//! assert_eq!(trajectory.times, vec![0.0, 0.25, 0.5, 0.75]);
//! assert_eq!(trajectory.states[1], 1.125);
//! # Ok::<(), euler::InvalidArgument>(())
//! ```
//!
//! # Observer Events
//!
//! The integrator emits one [`Event`] per sample, starting with the initial
//! state at step 0. Observers can return [`Action::StopEarly`] to keep the
//! current sample and stop.

mod action;
mod error;
mod event;
mod grid;
mod solution;


pub use action::Action;
pub use error::InvalidArgument;
pub use event::Event;
pub use grid::Grid;
pub use solution::{Status, Trajectory};

use ivp_core::{Observer, OdeFunction, StepIntegrable};

/// Step size used when the caller has no particular accuracy target.
pub const DEFAULT_STEP: f64 = 1e-3;

/// Integrates `dx/dt = f(x, t)` over `[span[0], span[1])` using forward Euler.
///
/// # Algorithm
///
/// 1. Build the sample [`Grid`] for the span and step.
/// 2. For each sample `n`, starting from `x_0 = initial` at `t_0 = span[0]`:
///    - Emit an [`Event`] to the observer.
///    - Record `(t_n, x_n)`.
///    - If the observer returned [`Action::StopEarly`], stop.
///    - Unless this is the last sample, step `x_{n+1} = x_n + h * f(x_n, t_n)`.
/// 3. Return the trajectory.
///
/// The derivative is evaluated once per step, never after the last sample.
///
/// # Errors
///
/// Returns an [`InvalidArgument`] if the step or span is degenerate. See
/// [`Grid::new`] for the exact conditions.
pub fn integrate<S, F, Obs>(
    f: &F,
    initial: S,
    span: [f64; 2],
    step: f64,
    mut observer: Obs,
) -> Result<Trajectory<S>, InvalidArgument>
where
    S: StepIntegrable<f64>,
    F: OdeFunction<S>,
    Obs: for<'a> Observer<Event<'a, S>, Action>,
{
    let grid = Grid::new(span, step)?;

    let mut times = Vec::with_capacity(grid.len());
    let mut states = Vec::with_capacity(grid.len());

    let mut state = initial;
    let mut n = 0;

    loop {
        let time = grid.time(n);
        let action = observer.observe(&Event {
            step: n,
            time,
            state: &state,
        });

        let stopped = matches!(action, Some(Action::StopEarly));
        let next = if stopped || n + 1 == grid.len() {
            None
        } else {
            Some(state.step(f.derivative(&state, time), grid.step()))
        };

        times.push(time);
        states.push(state);

        match next {
            Some(next) => {
                state = next;
                n += 1;
            }
            None => {
                let status = if stopped {
                    Status::StoppedByObserver
                } else {
                    Status::Complete
                };
                return Ok(Trajectory {
                    status,
                    times,
                    states,
                });
            }
        }
    }
}

/// Integrates `dx/dt = f(x, t)` using forward Euler without observation.
///
/// This is a convenience wrapper around [`integrate`] that discards events.
///
/// # Errors
///
/// Returns an [`InvalidArgument`] if the step or span is degenerate.
pub fn integrate_unobserved<S, F>(
    f: &F,
    initial: S,
    span: [f64; 2],
    step: f64,
) -> Result<Trajectory<S>, InvalidArgument>
where
    S: StepIntegrable<f64>,
    F: OdeFunction<S>,
{
    integrate(f, initial, span, step, ())
}
