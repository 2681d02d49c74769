//! Mutex helpers.
//!
//! A mutex becomes poisoned when a thread panics while holding it. The only
//! mutex in this crate guards the raw custom colors awaiting normalization,
//! and a panic there cannot leave them half-written: normalization builds a
//! fresh table and clears the raw entries only after it succeeded. Locking
//! therefore recovers from poison instead of propagating it.
//!
//! | Scenario | Function |
//! |----------|----------|
//! | Production code | [`lock_recover`] |
//! | Test code | `.lock().unwrap()` |

use std::sync::{Mutex, MutexGuard};

/// Lock a mutex, recovering from poison if necessary.
///
/// # Example
///
/// ```rust
/// use std::sync::Mutex;
/// use colorizer::sync::lock_recover;
///
/// let mutex = Mutex::new(42);
/// let guard = lock_recover(&mutex);
/// assert_eq!(*guard, 42);
/// ```
///
/// # Panics
///
/// This function never panics. It always recovers from poison.
#[inline]
pub fn lock_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        log::warn!("recovering from poisoned mutex");
        poisoned.into_inner()
    })
}
