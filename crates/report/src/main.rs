//! Runs an initial value problem scenario and reports the forward Euler
//! trajectory against the analytical solution.
//!
//! # Usage
//!
//! ```text
//! cargo run -p ivp-report -- demos/logistic.toml
//! cargo run -p ivp-report -- demos/decay.toml > decay.csv
//! ```
//!
//! See [`scenario::Scenario`] for the file format.

mod error;
mod model;
mod report;
mod scenario;

use std::{
    error::Error,
    io::{self, Write},
};

use error::ReportError;
use scenario::Scenario;

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args().nth(1).ok_or(ReportError::Usage)?;
    let scenario = Scenario::load(&path)?;

    eprintln!("# {} model, step {}", scenario.model.name(), scenario.step);

    let mut out = io::BufWriter::new(io::stdout().lock());
    report::run(&scenario, &mut out, io::stderr())?;
    out.flush()?;

    Ok(())
}
