use ivp_core::Observer;

use crate::traits::{CanStopEarly, HasTime};

/// Stops integration once an event's time reaches `time`.
///
/// The sample at which the stop happens is still recorded by the integrator,
/// so the trajectory ends at the first sample with `t >= time`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopAt {
    time: f64,
}

impl StopAt {
    /// Creates an observer that stops at the given time.
    #[must_use]
    pub fn new(time: f64) -> Self {
        Self { time }
    }

    /// Returns the time at which integration stops.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }
}

impl<E: HasTime, A: CanStopEarly> Observer<E, A> for StopAt {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.time() >= self.time).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ivp_solvers::transient::euler::{self, Status};

    #[test]
    fn stops_at_first_sample_past_time() {
        let f = |_x: &f64, _t: f64| 1.0;

        let trajectory =
            euler::integrate(&f, 0.0, [0.0, 10.0], 0.5, StopAt::new(2.2)).expect("should solve");

        assert_eq!(trajectory.status, Status::StoppedByObserver);
        assert_relative_eq!(trajectory.final_time().unwrap(), 2.5);
        assert_eq!(trajectory.len(), 6);
    }

    #[test]
    fn reports_configured_time() {
        assert_eq!(StopAt::new(2.2).time(), 2.2);
    }

    #[test]
    fn completes_when_time_is_never_reached() {
        let f = |_x: &f64, _t: f64| 1.0;

        let trajectory =
            euler::integrate(&f, 0.0, [0.0, 1.0], 0.5, StopAt::new(5.0)).expect("should solve");

        assert_eq!(trajectory.status, Status::Complete);
        assert_eq!(trajectory.len(), 2);
    }
}
