use super::InvalidArgument;

/// Relative distance from an integer within which a step count is snapped.
const SNAP_TOLERANCE: f64 = 8.0 * f64::EPSILON;

/// An evenly spaced time grid over a half-open span `[start, end)`.
///
/// Sample `n` lies at `start + n * step` for `n` in `0..len`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    start: f64,
    step: f64,
    len: usize,
}

impl Grid {
    /// Creates a grid covering `[span[0], span[1])` with the given step.
    ///
    /// The number of samples is `floor((end - start) / step)`. A quotient
    /// within rounding error of an integer counts as that integer, so a span
    /// of `[0.0, 0.3)` with a step of `0.1` has three samples.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidArgument`] if the step is not finite and positive,
    /// the span is not finite and increasing, the step is longer than the
    /// span, or the step is too small to separate consecutive times at the
    /// span's magnitude.
    pub fn new(span: [f64; 2], step: f64) -> Result<Self, InvalidArgument> {
        let [start, end] = span;

        if !step.is_finite() || step <= 0.0 {
            return Err(InvalidArgument::Step(step));
        }
        if !start.is_finite() || !end.is_finite() || end <= start {
            return Err(InvalidArgument::Span { start, end });
        }

        let scale = start.abs().max(end.abs());
        if step <= scale * f64::EPSILON {
            return Err(InvalidArgument::Resolution { step, scale });
        }

        let length = end - start;
        let ratio = length / step;

        let nearest = ratio.round();
        let count = if (ratio - nearest).abs() <= SNAP_TOLERANCE * nearest.max(1.0) {
            nearest
        } else {
            ratio.floor()
        };
        if count < 1.0 {
            return Err(InvalidArgument::StepExceedsSpan { step, length });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let len = count as usize;

        Ok(Self { start, step, len })
    }

    /// Returns the spacing between consecutive samples.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the grid has no samples, which a validated grid never does.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the time of sample `n`.
    ///
    /// Times are computed from the start rather than accumulated, so rounding
    /// error does not grow with `n`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn time(&self, n: usize) -> f64 {
        self.start + n as f64 * self.step
    }

    /// Returns an iterator over all sample times.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(|n| self.time(n))
    }
}
