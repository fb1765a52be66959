use ivp_core::Observer;

use crate::traits::{CanStopEarly, HasState, HasTime, Magnitude};

/// Stops integration once the state grows past `limit` or stops being finite.
///
/// The guard only observes; the offending sample is recorded unchanged and the
/// step and time at which it tripped are kept for inspection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivergenceGuard {
    limit: f64,
    tripped: Option<(usize, f64)>,
}

impl DivergenceGuard {
    /// Creates a guard that trips when the state magnitude exceeds `limit`.
    ///
    /// Use `f64::INFINITY` to trip only on non-finite states.
    #[must_use]
    pub fn new(limit: f64) -> Self {
        Self {
            limit,
            tripped: None,
        }
    }

    /// Returns the `(step, time)` at which the guard tripped, if it did.
    #[must_use]
    pub fn tripped(&self) -> Option<(usize, f64)> {
        self.tripped
    }
}

impl<E, A> Observer<E, A> for DivergenceGuard
where
    E: HasTime + HasState,
    E::State: Magnitude,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let magnitude = event.state().magnitude();
        if magnitude.is_finite() && magnitude <= self.limit {
            return None;
        }

        self.tripped.get_or_insert((event.step(), event.time()));
        Some(A::stop_early())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ivp_solvers::transient::euler::{self, Action, Event, Status};

    #[test]
    fn stops_on_unstable_growth() {
        // h k = -3 multiplies the state by -2 each step.
        let decay = |x: &f64, _t: f64| -x;
        let mut guard = DivergenceGuard::new(100.0);
        let observer = |event: &Event<'_, f64>| -> Option<Action> { guard.observe(event) };

        let trajectory = euler::integrate(&decay, 1.0, [0.0, 60.0], 3.0, observer)
            .expect("should solve");

        assert_eq!(trajectory.status, Status::StoppedByObserver);
        assert_eq!(trajectory.states.last(), Some(&-128.0));
        assert_eq!(guard.tripped(), Some((7, 21.0)));
    }

    #[test]
    fn stops_on_non_finite_state() {
        let blowup = |x: &[f64; 2], _t: f64| [x[0] * 1e300, 0.0];
        let mut guard = DivergenceGuard::new(f64::INFINITY);
        let observer = |event: &Event<'_, [f64; 2]>| -> Option<Action> { guard.observe(event) };

        let trajectory = euler::integrate(&blowup, [1e10, 0.0], [0.0, 10.0], 1.0, observer)
            .expect("should solve");

        assert_eq!(trajectory.status, Status::StoppedByObserver);
        assert!(trajectory.states.last().unwrap()[0].is_infinite());
        assert_eq!(guard.tripped().map(|(step, _)| step), Some(1));
    }

    #[test]
    fn leaves_stable_runs_alone() {
        let decay = |x: &f64, _t: f64| -x;
        let mut guard = DivergenceGuard::new(10.0);
        let observer = |event: &Event<'_, f64>| -> Option<Action> { guard.observe(event) };

        let trajectory = euler::integrate(&decay, 1.0, [0.0, 5.0], 0.1, observer)
            .expect("should solve");

        assert_eq!(trajectory.status, Status::Complete);
        assert_eq!(guard.tripped(), None);
    }
}
