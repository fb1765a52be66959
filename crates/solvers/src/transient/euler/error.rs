use thiserror::Error;

/// Invalid arguments passed to the Euler integrator.
///
/// These are the only failures the integrator reports. Inaccurate or
/// diverging results from a large step size are a property of the method and
/// are returned as computed.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvalidArgument {
    #[error("step size must be finite and positive, got {0}")]
    Step(f64),

    #[error("time span must be finite with end > start, got [{start}, {end})")]
    Span { start: f64, end: f64 },

    #[error("step size {step} exceeds the time span length {length}")]
    StepExceedsSpan { step: f64, length: f64 },

    #[error("step size {step} cannot separate consecutive times near {scale}")]
    Resolution { step: f64, scale: f64 },
}
