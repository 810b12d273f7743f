//! Caller-level policies layered over the engine.
//!
//! The engine itself never logs and never exits. Applications that want
//! either behaviour reach for the helpers here, which report through
//! `tracing`.

use std::process;

use crate::{Describe, Overlay, OverlayResult, ParsePolicy, ProcessEnv, from_environment};

/// Exit status used by [`from_environment_or_exit`].
pub const EXIT_CONFIG: i32 = 78;

/// Overlay the process environment, terminating the process on failure.
///
/// The error is logged at `error` level before exiting with
/// [`EXIT_CONFIG`].
#[must_use]
pub fn from_environment_or_exit<R: Describe>(defaults: &R) -> R {
    match from_environment(defaults) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "failed to load configuration from the environment");
            process::exit(EXIT_CONFIG)
        }
    }
}

/// Overlay the process environment, keeping defaults for fields whose values
/// do not parse.
///
/// Each skipped field is logged at `warn` level.
///
/// # Errors
///
/// Returns [`crate::OverlayError::NotARecord`] when `R` is not a record.
pub fn from_environment_lenient<R: Describe>(defaults: &R) -> OverlayResult<R> {
    let (config, skipped) = Overlay::new(ProcessEnv)
        .policy(ParsePolicy::SkipField)
        .apply(defaults)?
        .into_parts();
    for err in &skipped {
        tracing::warn!(
            field = err.field,
            key = %err.external_key,
            value = %err.raw_value,
            "ignoring unparsable environment value; keeping default"
        );
    }
    Ok(config)
}
