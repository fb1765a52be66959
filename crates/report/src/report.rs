//! Writes a trajectory table and an error convergence table for a scenario.

use std::io::Write;

use ivp_core::Observer;
use ivp_observers::LineLogger;
use ivp_solvers::transient::euler::{self, Action, Event, Trajectory};

use crate::{error::ReportError, scenario::Scenario};

/// Integrates the scenario and writes both tables to `out`.
///
/// The trajectory table has columns `t,x,exact,abs_error`. When the scenario
/// asks for refinements, a blank line and a convergence table follow with
/// columns `step,final_time,abs_error,ratio`, halving the step on each row and
/// measuring the error at the final sample time of the unrefined run.
///
/// When the scenario enables logging, one line per sample is written to `log`.
///
/// # Errors
///
/// Returns an error if the scenario's step or span is degenerate or writing
/// fails.
pub fn run<W: Write, L: Write>(
    scenario: &Scenario,
    out: &mut W,
    log: L,
) -> Result<(), ReportError> {
    let trajectory = integrate(scenario, log)?;

    write_trajectory(scenario, &trajectory, out)?;

    if scenario.refinements > 0 {
        writeln!(out)?;
        write_convergence(scenario, trajectory.len(), out)?;
    }

    Ok(())
}

fn integrate<L: Write>(scenario: &Scenario, log: L) -> Result<Trajectory<f64>, ReportError> {
    let mut logger = scenario.log.then(|| LineLogger::new(log));

    let trajectory = euler::integrate(
        &scenario.model,
        scenario.initial,
        scenario.span,
        scenario.step,
        |event: &Event<'_, f64>| -> Option<Action> {
            logger.as_mut().and_then(|logger| logger.observe(event))
        },
    )?;

    if let Some(logger) = logger {
        logger.finish()?;
    }

    Ok(trajectory)
}

fn write_trajectory<W: Write>(
    scenario: &Scenario,
    trajectory: &Trajectory<f64>,
    out: &mut W,
) -> Result<(), ReportError> {
    let t0 = scenario.span[0];

    writeln!(out, "t,x,exact,abs_error")?;
    for (t, x) in trajectory.samples() {
        let exact = scenario.model.exact(scenario.initial, t0, t);
        writeln!(out, "{t},{x},{exact},{}", (x - exact).abs())?;
    }

    Ok(())
}

fn write_convergence<W: Write>(
    scenario: &Scenario,
    base_len: usize,
    out: &mut W,
) -> Result<(), ReportError> {
    let t0 = scenario.span[0];
    let last = base_len - 1;

    writeln!(out, "step,final_time,abs_error,ratio")?;

    let mut previous: Option<f64> = None;
    for level in 0..=scenario.refinements {
        let factor = 1_usize << level;
        let step = scenario.step / f64::from(1_u32 << level);

        let refined = euler::integrate_unobserved(
            &scenario.model,
            scenario.initial,
            scenario.span,
            step,
        )?;
        let index = last * factor;
        let (Some(&time), Some(&x)) = (refined.times.get(index), refined.states.get(index)) else {
            return Err(ReportError::MissingSample { step });
        };

        let error = (x - scenario.model.exact(scenario.initial, t0, time)).abs();
        match previous {
            Some(previous) => writeln!(out, "{step},{time},{error},{}", previous / error)?,
            None => writeln!(out, "{step},{time},{error},")?,
        }
        previous = Some(error);
    }

    Ok(())
}
