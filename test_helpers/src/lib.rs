//! Test helpers shared across the config12 workspace.
//!
//! - [`env`] mutates the process environment behind RAII guards.
//! - [`lookup`] provides deterministic key/value stand-ins for the engine.

pub mod env;
pub mod lookup;
