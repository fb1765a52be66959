//! Core traits for initial value problem integration.
//!
//! This crate defines the shared abstractions that integrators and observers
//! build on:
//!
//! - [`OdeFunction`] — the right-hand side `f(x, t)` of `dx/dt = f(x, t)`
//! - [`StepIntegrable`] — a state that can be advanced by `derivative * delta`
//! - [`Observer`] — receives integrator events and optionally returns control
//!   actions

mod function;
mod observer;
mod step;

pub use function::OdeFunction;
pub use observer::Observer;
pub use step::{DerivativeOf, StepIntegrable};
