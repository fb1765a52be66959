/// Control actions supported by the Euler integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Record the current sample, then stop and return the trajectory so far.
    StopEarly,
}
