pub mod desktop;

use thiserror::Error;

use crate::events::{UiEvent, UiReply};
use crate::registry::WindowId;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("window creation failed: {0}")]
    WindowCreate(String),
    #[error("external launch failed: {0}")]
    Launch(String),
    #[error("hotkey registration failed: {0}")]
    Hotkey(String),
}

/// Geometry and identity handed to the driver when the registry spawns a
/// window. Base size, minimum size, and chrome styling are fixed by
/// [`crate::constants`]; only the staggered position varies per window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSpec {
    pub id: WindowId,
    pub position: (i32, i32),
}

/// A live native window as seen by the core. The registry's record owns
/// this handle exclusively; dropping it destroys the native window.
pub trait PlatformWindow {
    fn show(&mut self);
    fn hide(&mut self);
    fn focus(&mut self);
    /// Ask the OS to close the window. Record removal happens later, when
    /// the resulting close event arrives.
    fn request_close(&mut self);
    fn set_always_on_top(&mut self, on_top: bool);
    fn send_event(&mut self, event: &UiEvent);
    fn send_reply(&mut self, reply: &UiReply);
}

/// The seam between the lifecycle state machines and the OS. Production
/// uses [`desktop::DesktopDriver`]; tests implement this with in-memory
/// stubs.
pub trait PlatformDriver {
    type Window: PlatformWindow;

    fn open_window(&mut self, spec: &WindowSpec) -> Result<Self::Window, PlatformError>;

    /// Open the native directory picker for `window`. Fire-and-forget: the
    /// outcome arrives later as [`crate::events::PlatformEvent::FolderPicked`],
    /// so nothing else is blocked while the dialog is up.
    fn open_folder_dialog(&mut self, window: WindowId);

    /// Hand an already-normalized URL to the system browser.
    fn launch_external(&mut self, url: &str) -> Result<(), PlatformError>;
}

impl<T: PlatformDriver + ?Sized> PlatformDriver for &mut T {
    type Window = T::Window;

    fn open_window(&mut self, spec: &WindowSpec) -> Result<Self::Window, PlatformError> {
        (**self).open_window(spec)
    }

    fn open_folder_dialog(&mut self, window: WindowId) {
        (**self).open_folder_dialog(window)
    }

    fn launch_external(&mut self, url: &str) -> Result<(), PlatformError> {
        (**self).launch_external(url)
    }
}
