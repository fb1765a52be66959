//! Time-marching integrators for ordinary differential equations.
//!
//! An [`OdeFunction`] gives the rate of change of a [`StepIntegrable`] state.
//! Integrators in this module start from an initial state and march it across
//! a time span, recording a trajectory of samples.
//!
//! # Integrators
//!
//! - [`euler`] — fixed-step explicit forward Euler
//!
//! [`OdeFunction`]: ivp_core::OdeFunction
//! [`StepIntegrable`]: ivp_core::StepIntegrable

pub mod euler;
