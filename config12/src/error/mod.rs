//! Error types produced by the overlay engine.

mod aggregate;
mod constructors;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::{FieldParseError, OverlayError, OverlayResult};

#[cfg(test)]
mod tests;
