//! Key/value sources the engine reads external values from.
//!
//! The engine only needs one capability: given a key, return the value if the
//! key is present. [`ProcessEnv`] reads the process environment; maps and
//! closures (via [`from_fn`]) make deterministic stand-ins for tests.

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::hash::BuildHasher;

/// A flat, string-keyed source of external values.
pub trait Lookup {
    /// Return the value stored under `key`, or `None` when it is absent.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Prepend `prefix` to every key before looking it up.
    ///
    /// # Examples
    ///
    /// ```
    /// use config12::Lookup;
    /// use std::collections::HashMap;
    ///
    /// let env = HashMap::from([("APP_PORT".to_owned(), "8080".to_owned())]);
    /// let scoped = (&env).prefixed("APP_");
    /// assert_eq!(scoped.lookup("PORT").as_deref(), Some("8080"));
    /// ```
    fn prefixed<P>(self, prefix: P) -> Prefixed<Self>
    where
        Self: Sized,
        P: Into<String>,
    {
        Prefixed {
            inner: self,
            prefix: prefix.into(),
        }
    }
}

impl<L: Lookup + ?Sized> Lookup for &L {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl<L: Lookup + ?Sized> Lookup for Box<L> {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl<S: BuildHasher> Lookup for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Lookup for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Reads variables from the process environment.
///
/// Values that are not valid Unicode are converted lossily rather than
/// treated as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Lookup for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        // `var_os` may panic on these, and no such key can be set anyway.
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

/// Lookup backed by a closure. Built with [`from_fn`].
#[derive(Clone)]
pub struct FnLookup<F>(F);

/// Wrap a closure as a [`Lookup`].
///
/// # Examples
///
/// ```
/// use config12::{Lookup, lookup};
///
/// let env = lookup::from_fn(|key| (key == "HOME").then(|| "/root".to_owned()));
/// assert_eq!(env.lookup("HOME").as_deref(), Some("/root"));
/// assert_eq!(env.lookup("PATH"), None);
/// ```
pub const fn from_fn<F>(f: F) -> FnLookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    FnLookup(f)
}

impl<F> Lookup for FnLookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }
}

/// Lookup adapter that scopes every key under a prefix.
#[derive(Debug, Clone)]
pub struct Prefixed<L> {
    inner: L,
    prefix: String,
}

impl<L: Lookup> Lookup for Prefixed<L> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.inner.lookup(&format!("{}{key}", self.prefix))
    }
}
