/// Indicates how the integrator terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Recorded every sample of the grid.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an Euler integration.
///
/// `times` and `states` always have the same length, and `states[n]` is the
/// approximate solution at `times[n]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<S> {
    /// How the integrator terminated.
    pub status: Status,

    /// Sample times, strictly increasing and evenly spaced.
    pub times: Vec<f64>,

    /// Approximate states at each sample time.
    pub states: Vec<S>,
}

impl<S> Trajectory<S> {
    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if the trajectory holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Returns an iterator over `(time, state)` samples in time order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, &S)> {
        self.times.iter().copied().zip(&self.states)
    }

    /// Returns the last recorded sample.
    #[must_use]
    pub fn last(&self) -> Option<(f64, &S)> {
        Some((*self.times.last()?, self.states.last()?))
    }

    /// Returns the time of the last recorded sample.
    #[must_use]
    pub fn final_time(&self) -> Option<f64> {
        self.times.last().copied()
    }

    /// Returns the state of the last recorded sample.
    #[must_use]
    pub fn final_state(&self) -> Option<&S> {
        self.states.last()
    }

    /// Consumes the trajectory and returns its time and state sequences.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<S>) {
        (self.times, self.states)
    }
}
