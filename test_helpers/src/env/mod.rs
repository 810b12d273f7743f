//! Helpers for safely mutating environment variables in tests.
//!
//! Every mutation takes a global re-entrant mutex and returns an
//! [`EnvVarGuard`] that restores the previous state on drop, removing the
//! variable if it was previously unset. Guards for the same key unwind in
//! LIFO order. Hold an [`EnvLock`] when a test needs several mutations to
//! appear atomically to other threads.
//!
//! # Examples
//!
//! ```
//! use config12_test_helpers::env;
//!
//! let _g = env::set_var("CONFIG12_DOC_KEY", "VALUE");
//! assert_eq!(std::env::var("CONFIG12_DOC_KEY").as_deref(), Ok("VALUE"));
//! ```

use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// RAII guard restoring an environment variable to its prior value on drop.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl fmt::Debug for EnvVarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarGuard")
            .field("key", &self.key)
            .field("had_original", &self.original.is_some())
            .finish()
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _lock = ENV_MUTEX.lock();
        match self.original.take() {
            // SAFETY: environment writes are serialised by `ENV_MUTEX`.
            Some(value) => unsafe { env::set_var(&self.key, value) },
            // SAFETY: as above.
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}

/// Exclusive access to the environment for the lifetime of the value.
#[must_use = "dropping releases the environment lock"]
pub struct EnvLock {
    _guard: ReentrantMutexGuard<'static, ()>,
}

impl EnvLock {
    /// Set `key` while this lock is held.
    pub fn set_var<K, V>(&self, key: K, value: V) -> EnvVarGuard
    where
        K: Into<String>,
        V: AsRef<OsStr>,
    {
        set_var(key, value)
    }

    /// Remove `key` while this lock is held.
    pub fn remove_var<K: Into<String>>(&self, key: K) -> EnvVarGuard {
        remove_var(key)
    }
}

/// Take the global environment lock.
///
/// The lock is re-entrant, so the standalone helpers still work on the same
/// thread while it is held.
pub fn lock() -> EnvLock {
    EnvLock {
        _guard: ENV_MUTEX.lock(),
    }
}

/// Set an environment variable, returning a guard that restores it.
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    mutate(key.into(), |name| {
        // SAFETY: environment writes are serialised by `ENV_MUTEX`.
        unsafe { env::set_var(name, value.as_ref()) };
    })
}

/// Remove an environment variable, returning a guard that restores it.
pub fn remove_var<K: Into<String>>(key: K) -> EnvVarGuard {
    mutate(key.into(), |name| {
        // SAFETY: environment writes are serialised by `ENV_MUTEX`.
        unsafe { env::remove_var(name) };
    })
}

fn mutate<F: FnOnce(&str)>(key: String, mutator: F) -> EnvVarGuard {
    let _lock = ENV_MUTEX.lock();
    let original = env::var_os(&key);
    mutator(&key);
    EnvVarGuard { key, original }
}
