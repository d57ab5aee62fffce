//! Process-wide show/hide state machine driven by the global hotkey and
//! the menu.
//!
//! States: `NoWindow` (registry empty), `Shown`, `Hidden`. The toggle acts
//! on the primary window only; when the primary closes and a survivor is
//! promoted, the current state keeps describing the new primary. The state
//! falls back to `NoWindow` only when the last window closes.

use crate::drivers::{PlatformDriver, PlatformError};
use crate::registry::WindowRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityState {
    NoWindow,
    Shown,
    Hidden,
}

#[derive(Debug)]
pub struct VisibilityController {
    state: VisibilityState,
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityController {
    pub fn new() -> Self {
        Self {
            state: VisibilityState::NoWindow,
        }
    }

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    /// One toggle activation, from the hotkey or the menu.
    pub fn toggle<D: PlatformDriver>(
        &mut self,
        registry: &mut WindowRegistry<D::Window>,
        driver: &mut D,
    ) -> Result<(), PlatformError> {
        match self.state {
            VisibilityState::NoWindow => {
                registry.create_window(driver)?;
                self.state = VisibilityState::Shown;
                tracing::debug!("visibility toggle spawned a window");
            }
            VisibilityState::Shown => {
                if let Some(primary) = registry.primary_window() {
                    primary.hide();
                }
                self.state = VisibilityState::Hidden;
            }
            VisibilityState::Hidden => {
                if let Some(primary) = registry.primary_window() {
                    primary.show_and_focus();
                }
                self.state = VisibilityState::Shown;
            }
        }
        Ok(())
    }

    /// A window was created outside the toggle path (startup, menu,
    /// reopen). The first window initializes the state to `Shown`.
    pub fn note_window_created(&mut self) {
        if self.state == VisibilityState::NoWindow {
            self.state = VisibilityState::Shown;
        }
    }

    /// A window closed. Once the registry is empty there is nothing left
    /// to toggle.
    pub fn note_window_closed(&mut self, registry_empty: bool) {
        if registry_empty {
            self.state = VisibilityState::NoWindow;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_round_trips_through_note_hooks() {
        let mut controller = VisibilityController::new();
        assert_eq!(controller.state(), VisibilityState::NoWindow);

        controller.note_window_created();
        assert_eq!(controller.state(), VisibilityState::Shown);
        // A second window does not reset anything.
        controller.note_window_created();
        assert_eq!(controller.state(), VisibilityState::Shown);

        controller.note_window_closed(false);
        assert_eq!(controller.state(), VisibilityState::Shown);
        controller.note_window_closed(true);
        assert_eq!(controller.state(), VisibilityState::NoWindow);
    }
}
