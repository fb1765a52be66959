use std::{fs, path::Path};

use ivp_solvers::transient::euler::DEFAULT_STEP;
use serde::Deserialize;

use crate::{error::ReportError, model::Model};

/// An initial value problem and how to report on it.
///
/// Scenarios are read from TOML:
///
/// ```toml
/// initial = 1.0
/// span = [0.0, 11.0]
/// step = 0.1
/// refinements = 3
///
/// [model]
/// kind = "logistic"
/// rate = 0.95
/// capacity = 100.0
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub model: Model,

    /// Initial state at `span[0]`.
    pub initial: f64,

    /// Half-open time span `[start, end)`.
    pub span: [f64; 2],

    #[serde(default = "default_step")]
    pub step: f64,

    /// Number of times to halve the step in the convergence table.
    #[serde(default)]
    pub refinements: u32,

    /// Writes one line per sample to stderr while integrating.
    #[serde(default)]
    pub log: bool,
}

fn default_step() -> f64 {
    DEFAULT_STEP
}

/// Upper bound on refinements; each one doubles the work.
const MAX_REFINEMENTS: u32 = 20;

impl Scenario {
    /// Parses a scenario from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid scenario.
    pub fn from_toml(text: &str) -> Result<Self, ReportError> {
        let scenario: Self = toml::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Reads and parses a scenario file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid scenario.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        Self::from_toml(&fs::read_to_string(path)?)
    }

    fn validate(&self) -> Result<(), ReportError> {
        if self.refinements > MAX_REFINEMENTS {
            return Err(ReportError::TooManyRefinements {
                requested: self.refinements,
                max: MAX_REFINEMENTS,
            });
        }
        if let Model::Logistic { capacity, .. } = self.model {
            if !(capacity.is_finite() && capacity > 0.0) {
                return Err(ReportError::Scenario(
                    "logistic capacity must be finite and positive",
                ));
            }
        }
        Ok(())
    }
}
