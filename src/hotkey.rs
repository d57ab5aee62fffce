//! Lifetime management for the global show/hide hotkey.
//!
//! A system-wide key grab outlives the process if it is not released, so
//! the guard releases on every exit path: explicitly when the event loop
//! tears down, and again from `Drop` as a backstop. Release is idempotent
//! and safe to call after a failed registration.

use crate::drivers::PlatformError;

/// OS-side half of hotkey handling. The production backend wraps the
/// desktop hotkey manager; tests substitute counters.
pub trait HotkeyBackend {
    fn register(&mut self) -> Result<(), PlatformError>;
    fn unregister(&mut self) -> Result<(), PlatformError>;
}

#[derive(Debug)]
pub struct HotkeyGuard<B: HotkeyBackend> {
    backend: B,
    registered: bool,
}

impl<B: HotkeyBackend> HotkeyGuard<B> {
    /// Attempts registration. Failure (the chord is already claimed by
    /// another process) is logged and leaves the guard inert — the menu
    /// toggle path keeps working.
    pub fn register(mut backend: B) -> Self {
        let registered = match backend.register() {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%err, "global hotkey unavailable, menu toggle still works");
                false
            }
        };
        Self {
            backend,
            registered,
        }
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Releases the grab. Safe to call any number of times, in any state.
    pub fn release(&mut self) {
        if !self.registered {
            return;
        }
        self.registered = false;
        if let Err(err) = self.backend.unregister() {
            tracing::warn!(%err, "failed to release global hotkey");
        }
    }
}

impl<B: HotkeyBackend> Drop for HotkeyGuard<B> {
    fn drop(&mut self) {
        self.release();
    }
}
