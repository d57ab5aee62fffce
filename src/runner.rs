//! The host: owner of the lifecycle state machines and single consumer of
//! the inbound platform event stream.
//!
//! Whoever owns the OS loop (the desktop entry point in production, plain
//! test code otherwise) translates native callbacks into
//! [`PlatformEvent`]s and feeds them here one at a time. Events are
//! processed to completion in arrival order; the driver is borrowed per
//! call so the platform side can rebuild it around short-lived OS handles.

use crate::bridge;
use crate::drivers::{PlatformDriver, PlatformWindow};
use crate::events::{PlatformEvent, UiEvent};
use crate::menu;
use crate::registry::WindowRegistry;
use crate::visibility::{VisibilityController, VisibilityState};

pub enum ControlFlow {
    Continue,
    Quit,
}

pub struct Host<W: PlatformWindow> {
    registry: WindowRegistry<W>,
    visibility: VisibilityController,
    /// Exit the process when the last window closes. Platform policy:
    /// macOS apps stay resident, everything else quits.
    quit_when_all_closed: bool,
}

impl<W: PlatformWindow> Default for Host<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: PlatformWindow> Host<W> {
    pub fn new() -> Self {
        Self::with_quit_policy(!cfg!(target_os = "macos"))
    }

    pub fn with_quit_policy(quit_when_all_closed: bool) -> Self {
        Self {
            registry: WindowRegistry::new(),
            visibility: VisibilityController::new(),
            quit_when_all_closed,
        }
    }

    pub fn registry(&self) -> &WindowRegistry<W> {
        &self.registry
    }

    pub fn visibility_state(&self) -> VisibilityState {
        self.visibility.state()
    }

    /// Opens the initial window.
    pub fn startup<D>(&mut self, driver: &mut D) -> Result<(), crate::drivers::PlatformError>
    where
        D: PlatformDriver<Window = W>,
    {
        self.registry.create_window(driver)?;
        self.visibility.note_window_created();
        Ok(())
    }

    /// Consumes one inbound event. Never panics and never propagates an
    /// error: degraded OS services are logged and the loop keeps running.
    pub fn handle_event<D>(&mut self, driver: &mut D, event: PlatformEvent) -> ControlFlow
    where
        D: PlatformDriver<Window = W>,
    {
        match event {
            PlatformEvent::ToggleHotkey => {
                if let Err(err) = self.visibility.toggle(&mut self.registry, driver) {
                    tracing::error!(%err, "visibility toggle failed");
                }
            }
            PlatformEvent::Menu(action) => {
                if let Err(err) =
                    menu::dispatch(action, &mut self.registry, &mut self.visibility, driver)
                {
                    tracing::error!(%err, %action, "menu dispatch failed");
                }
            }
            PlatformEvent::UiRequest { window, request } => {
                bridge::dispatch(&mut self.registry, driver, window, request);
            }
            PlatformEvent::FolderPicked { window, path } => {
                bridge::deliver_folder_reply(&mut self.registry, window, path);
            }
            PlatformEvent::WindowClosed(id) => {
                self.registry.remove(id);
                if self.registry.is_empty() {
                    self.visibility.note_window_closed(true);
                    if self.quit_when_all_closed {
                        tracing::debug!("last window closed, quitting");
                        return ControlFlow::Quit;
                    }
                }
            }
            PlatformEvent::FocusChanged { window, focused } => {
                self.registry.set_focused(window, focused);
            }
            PlatformEvent::FullscreenChanged { window, fullscreen } => {
                if self.registry.set_fullscreen(window, fullscreen)
                    && let Some(record) = self.registry.get_mut(window)
                {
                    record.send_event(&UiEvent::FullscreenChange { fullscreen });
                }
            }
            PlatformEvent::Reopen => {
                if self.registry.is_empty() {
                    match self.registry.create_window(driver) {
                        Ok(_) => self.visibility.note_window_created(),
                        Err(err) => tracing::error!(%err, "reopen failed to spawn a window"),
                    }
                }
            }
        }
        ControlFlow::Continue
    }
}
