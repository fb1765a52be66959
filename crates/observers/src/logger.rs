use std::{
    fmt::Debug,
    io::{self, Write},
};

use ivp_core::Observer;

use crate::traits::{HasState, HasTime};

/// Writes one line per event to a writer.
///
/// Each line has the form `step=<n> t=<time> x=<state:?>`. The logger never
/// requests an action. The first write error is kept, later events are
/// skipped, and the error is returned by [`LineLogger::finish`].
///
/// # Example
///
/// ```
/// use ivp_observers::LineLogger;
/// use ivp_solvers::transient::euler::{self, Action, Event};
/// use ivp_core::Observer;
///
/// let f = |x: &f64, _t: f64| -x;
/// let mut logger = LineLogger::new(Vec::new());
///
/// euler::integrate(&f, 1.0, [0.0, 1.0], 0.5, |event: &Event<'_, f64>| -> Option<Action> {
///     logger.observe(event)
/// })?;
///
/// let log = String::from_utf8(logger.finish()?)?;
/// assert_eq!(log, "step=0 t=0 x=1.0\nstep=1 t=0.5 x=0.5\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct LineLogger<W> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> LineLogger<W> {
    /// Creates a logger that writes to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Flushes the writer and returns it.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered while writing or flushing.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<E, A, W> Observer<E, A> for LineLogger<W>
where
    E: HasTime + HasState,
    E::State: Debug,
    W: Write,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.error.is_none() {
            let result = writeln!(
                self.writer,
                "step={} t={} x={:?}",
                event.step(),
                event.time(),
                event.state()
            );
            if let Err(err) = result {
                self.error = Some(err);
            }
        }
        None
    }
}
