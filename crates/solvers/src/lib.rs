//! Integrators for initial value problems.
//!
//! # Modules
//!
//! - [`transient`] — time-marching integrators for `dx/dt = f(x, t)`

pub mod transient;
