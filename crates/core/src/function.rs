use crate::{DerivativeOf, StepIntegrable};

/// The right-hand side of an ordinary differential equation `dx/dt = f(x, t)`.
///
/// An `OdeFunction` maps the current state and independent variable to the
/// instantaneous rate of change of the state. It is supplied by the caller and
/// borrowed by integrators for the duration of a call.
///
/// Closures of the form `Fn(&S, f64) -> DerivativeOf<S, f64>` implement this
/// trait automatically:
///
/// ```
/// use ivp_core::OdeFunction;
///
/// let decay = |x: &f64, _t: f64| -0.5 * x;
/// let x: f64 = 4.0;
/// assert_eq!(decay.derivative(&x, 0.0), -2.0);
/// ```
pub trait OdeFunction<S>
where
    S: StepIntegrable<f64>,
{
    /// Evaluates the derivative of `state` at time `t`.
    fn derivative(&self, state: &S, t: f64) -> DerivativeOf<S, f64>;
}

impl<S, F> OdeFunction<S> for F
where
    S: StepIntegrable<f64>,
    F: Fn(&S, f64) -> DerivativeOf<S, f64>,
{
    fn derivative(&self, state: &S, t: f64) -> DerivativeOf<S, f64> {
        self(state, t)
    }
}
