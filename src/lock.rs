//! Per-session bus lock.
//!
//! [`SessionRawMutex`] is an `embassy-sync` raw mutex whose state lives
//! inside the mutex itself. Two sessions never contend with each other, and
//! holding the lock leaves interrupts enabled, so interrupt- or DMA-driven
//! bus implementations keep working during a transaction.
//!
//! Waiters spin. A session shared with an interrupt handler on the same core
//! must use `CriticalSectionRawMutex` instead, or the handler may spin on a
//! lock the interrupted context holds.

use embassy_sync::blocking_mutex::raw::RawMutex;
use portable_atomic::{AtomicBool, Ordering};

/// Spinning raw mutex scoped to one owner.
pub struct SessionRawMutex {
    locked: AtomicBool,
}

impl SessionRawMutex {
    /// Creates an unlocked mutex.
    pub const fn new() -> Self {
        Self {
            locked: AtomicBool::new(false),
        }
    }

    fn acquire(&self) -> Held<'_> {
        while self
            .locked
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            while self.locked.load(Ordering::Relaxed) {
                core::hint::spin_loop();
            }
        }
        Held { locked: &self.locked }
    }
}

impl Default for SessionRawMutex {
    fn default() -> Self {
        Self::new()
    }
}

// Safety: `lock` runs `f` only while `locked` is owned by this call, and
// `Held` clears it on every exit path, unwinding included.
unsafe impl RawMutex for SessionRawMutex {
    const INIT: Self = Self::new();

    fn lock<R>(&self, f: impl FnOnce() -> R) -> R {
        let _held = self.acquire();
        f()
    }
}

struct Held<'a> {
    locked: &'a AtomicBool,
}

impl Drop for Held<'_> {
    fn drop(&mut self) {
        self.locked.store(false, Ordering::Release);
    }
}
