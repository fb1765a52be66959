//! Capability traits for generic observers.
//!
//! These traits abstract over integrator-specific event and action types,
//! enabling observers to work generically across integrators.
//!
//! # Event traits
//!
//! - [`HasTime`] — events that carry a step number and a time
//! - [`HasState`] — events that carry a state
//!
//! # State traits
//!
//! - [`Magnitude`] — states with a scalar size, used to detect divergence
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use ivp_core::Observer;
//! use ivp_observers::traits::{CanStopEarly, HasTime};
//!
//! struct StopAfterSteps {
//!     stop_after: usize,
//! }
//!
//! impl<E: HasTime, A: CanStopEarly> Observer<E, A> for StopAfterSteps {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.step() >= self.stop_after).then(A::stop_early)
//!     }
//! }
//! ```

use ivp_solvers::transient::euler;

/// An event that carries a step number and a time.
pub trait HasTime {
    /// Returns the step number, starting at 0 for the initial sample.
    fn step(&self) -> usize;

    /// Returns the time of the sample.
    fn time(&self) -> f64;
}

/// An event that carries a state.
pub trait HasState {
    /// The state type carried by the event.
    type State;

    /// Returns the state of the sample.
    fn state(&self) -> &Self::State;
}

/// A state with a scalar size.
///
/// The magnitude is the largest absolute component. It is `NaN` if any
/// component is `NaN`.
pub trait Magnitude {
    /// Returns the largest absolute component of the state.
    fn magnitude(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the integrator early.
    fn stop_early() -> Self;
}

// --- Event impls for euler::Event ---

impl<S> HasTime for euler::Event<'_, S> {
    fn step(&self) -> usize {
        self.step
    }

    fn time(&self) -> f64 {
        self.time
    }
}

impl<S> HasState for euler::Event<'_, S> {
    type State = S;

    fn state(&self) -> &S {
        self.state
    }
}

// --- Magnitude impls ---

fn max_abs<'a>(values: impl IntoIterator<Item = &'a f64>) -> f64 {
    values.into_iter().fold(0.0, |max, value| {
        if value.is_nan() || max.is_nan() {
            f64::NAN
        } else {
            max.max(value.abs())
        }
    })
}

impl Magnitude for f64 {
    fn magnitude(&self) -> f64 {
        self.abs()
    }
}

impl<const N: usize> Magnitude for [f64; N] {
    fn magnitude(&self) -> f64 {
        max_abs(self)
    }
}

impl Magnitude for Vec<f64> {
    fn magnitude(&self) -> f64 {
        max_abs(self)
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_magnitude_is_absolute_value() {
        assert_eq!((-3.5_f64).magnitude(), 3.5);
    }

    #[test]
    fn vector_magnitude_is_largest_component() {
        assert_eq!([1.0, -7.0, 2.0].magnitude(), 7.0);
        assert_eq!(vec![0.5, 0.25].magnitude(), 0.5);
    }

    #[test]
    fn magnitude_propagates_nan() {
        assert!([1.0, f64::NAN, 2.0].magnitude().is_nan());
        assert!(vec![f64::NAN].magnitude().is_nan());
    }

    #[test]
    fn magnitude_of_infinite_component_is_infinite() {
        assert_eq!([f64::NEG_INFINITY, 0.0].magnitude(), f64::INFINITY);
    }

    #[test]
    fn euler_event_exposes_time_and_state() {
        let state = 4.0;
        let event = euler::Event {
            step: 3,
            time: 0.75,
            state: &state,
        };

        assert_eq!(HasTime::step(&event), 3);
        assert_eq!(event.time(), 0.75);
        assert_eq!(*event.state(), 4.0);
    }
}
