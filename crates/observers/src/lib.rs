//! Reusable observers for IVP integrators.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any integrator whose events expose a time and a state.
//!
//! # Modules
//!
//! - [`traits`] — capability traits for generic observers
//!   ([`HasTime`], [`HasState`], [`Magnitude`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`StopAt`] — stops once integration reaches a given time
//! - [`DivergenceGuard`] — stops once the state grows past a bound or stops
//!   being finite
//! - [`LineLogger`] — writes one line per event to any [`std::io::Write`]
//!
//! [`Observer`]: ivp_core::Observer
//! [`HasTime`]: traits::HasTime
//! [`HasState`]: traits::HasState
//! [`Magnitude`]: traits::Magnitude
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod divergence;
mod logger;
mod stop_at;

pub use divergence::DivergenceGuard;
pub use logger::LineLogger;
pub use stop_at::StopAt;
