/// Event emitted by the Euler integrator for each sample.
///
/// Step 0 is the initial state at the start of the span.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug)]
pub struct Event<'a, S> {
    /// The step number (0 for the initial sample).
    pub step: usize,

    /// Time of this sample.
    pub time: f64,

    /// State at this sample.
    pub state: &'a S,
}
