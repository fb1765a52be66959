use std::io;

use ivp_solvers::transient::euler::InvalidArgument;

/// Errors that can occur while loading or reporting a scenario.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("usage: ivp-report <scenario.toml>")]
    Usage,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid scenario: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid scenario: {0}")]
    Scenario(&'static str),

    #[error("invalid scenario: refinements must be at most {max}, got {requested}")]
    TooManyRefinements { requested: u32, max: u32 },

    #[error("invalid integration arguments: {0}")]
    Integrate(#[from] InvalidArgument),

    #[error("refined run with step {step} has no sample at the comparison time")]
    MissingSample { step: f64 },
}
