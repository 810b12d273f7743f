//! Deterministic stand-ins for the engine's key/value lookup.
//!
//! These are plain functions and types returning `Option<String>`, so they
//! plug into `config12::lookup::from_fn` without this crate depending on
//! `config12`.

use std::collections::BTreeMap;

use parking_lot::Mutex;

/// Lookup that fails the test if it is ever consulted.
///
/// # Panics
///
/// Always.
pub fn never_called(key: &str) -> Option<String> {
    panic!("lookup unexpectedly called for {key}")
}

/// Lookup for which every key is absent.
#[must_use]
pub const fn not_found(_key: &str) -> Option<String> {
    None
}

/// Fixed key/value table that records each key it is asked for.
///
/// # Examples
///
/// ```
/// use config12_test_helpers::lookup::RecordingLookup;
///
/// let lookup = RecordingLookup::new([("PORT", "8080")]);
/// assert_eq!(lookup.get("PORT").as_deref(), Some("8080"));
/// assert_eq!(lookup.get("HOST"), None);
/// assert_eq!(lookup.calls(), ["PORT", "HOST"]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingLookup {
    values: BTreeMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl RecordingLookup {
    /// Build a lookup answering from `pairs`.
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            calls: Mutex::default(),
        }
    }

    /// Record the request for `key` and return its value, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        self.calls.lock().push(key.to_owned());
        self.values.get(key).cloned()
    }

    /// Keys requested so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}
