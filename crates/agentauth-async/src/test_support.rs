//! Test-only utilities for safely mutating process-global state in tests.
//!
//! # Usage
//!
//! ```rust
//! use agentauth_async::test_support::EnvGuard;
//! use serial_test::serial;
//!
//! #[test]
//! #[serial(env)]
//! fn example() {
//!     let _env = EnvGuard::set("FOO", "bar");
//!     // ... test body ...
//! }
//! ```

/// RAII guard for temporarily setting an environment variable.
///
/// The variable is restored to its previous state (or removed if it was not
/// set) when the guard is dropped.
pub struct EnvGuard {
    key: &'static str,
    prev: Option<String>,
}

impl EnvGuard {
    /// Set an environment variable temporarily.
    ///
    /// The previous value (if any) is captured and restored on drop.
    ///
    /// # Safety
    ///
    /// Uses `unsafe` because `std::env::set_var` can race with concurrent
    /// environment access. Safe under `#[serial(env)]`, which prevents
    /// concurrent execution.
    #[must_use]
    pub fn set(key: &'static str, val: &str) -> Self {
        let prev = std::env::var(key).ok();
        // SAFETY: callers serialize env access via #[serial(env)]
        unsafe { std::env::set_var(key, val) };
        Self { key, prev }
    }

    /// Remove an environment variable temporarily.
    ///
    /// The previous value (if any) is captured and restored on drop.
    ///
    /// # Safety
    ///
    /// Uses `unsafe` because `std::env::remove_var` can race with concurrent
    /// environment access. Safe under `#[serial(env)]`, which prevents
    /// concurrent execution.
    #[must_use]
    pub fn remove(key: &'static str) -> Self {
        let prev = std::env::var(key).ok();
        // SAFETY: callers serialize env access via #[serial(env)]
        unsafe { std::env::remove_var(key) };
        Self { key, prev }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.prev {
            // SAFETY: callers serialize env access via #[serial(env)]
            Some(v) => unsafe { std::env::set_var(self.key, v) },
            // SAFETY: callers serialize env access via #[serial(env)]
            None => unsafe { std::env::remove_var(self.key) },
        }
    }
}
