//! In-memory tracker of all live top-level windows.
//!
//! The registry is the single owner of native window handles: a record is
//! inserted when the driver spawns a window and removed exactly once, in
//! response to the OS close event. Insertion order is meaningful — the
//! oldest surviving record is the "primary" window targeted by the global
//! visibility toggle.

use crate::constants::{PRIMARY_SPAWN_POSITION, SPAWN_OFFSET};
use crate::drivers::{PlatformDriver, PlatformError, PlatformWindow, WindowSpec};
use crate::events::{UiEvent, UiReply};

/// Stable identity of one top-level window, assigned by the registry and
/// never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl WindowId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Everything the host tracks about one live window. `native` is the
/// exclusively-owned OS handle; dropping the record destroys the window.
#[derive(Debug)]
pub struct WindowRecord<W> {
    id: WindowId,
    native: W,
    position: (i32, i32),
    is_visible: bool,
    is_always_on_top: bool,
    is_fullscreen: bool,
}

impl<W: PlatformWindow> WindowRecord<W> {
    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn is_always_on_top(&self) -> bool {
        self.is_always_on_top
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    pub fn native(&self) -> &W {
        &self.native
    }

    pub fn show_and_focus(&mut self) {
        self.native.show();
        self.native.focus();
        self.is_visible = true;
    }

    pub fn hide(&mut self) {
        self.native.hide();
        self.is_visible = false;
    }

    pub fn set_always_on_top(&mut self, on_top: bool) {
        self.native.set_always_on_top(on_top);
        self.is_always_on_top = on_top;
    }

    pub fn request_close(&mut self) {
        self.native.request_close();
    }

    pub fn send_event(&mut self, event: &UiEvent) {
        self.native.send_event(event);
    }

    pub fn send_reply(&mut self, reply: &UiReply) {
        self.native.send_reply(reply);
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.is_fullscreen = fullscreen;
    }
}

/// Insertion-ordered set of [`WindowRecord`]. Focus is tracked from
/// OS-reported focus events, not guessed from call order.
#[derive(Debug)]
pub struct WindowRegistry<W> {
    windows: Vec<WindowRecord<W>>,
    focused: Option<WindowId>,
    next_id: u64,
}

impl<W: PlatformWindow> Default for WindowRegistry<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: PlatformWindow> WindowRegistry<W> {
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            focused: None,
            next_id: 0,
        }
    }

    /// Spawns a native window at the next staggered position and records
    /// it. The driver loads the UI layer's entry document as part of
    /// window creation.
    pub fn create_window<D>(&mut self, driver: &mut D) -> Result<WindowId, PlatformError>
    where
        D: PlatformDriver<Window = W>,
    {
        let id = WindowId(self.next_id);
        let position = self.next_spawn_position();
        let native = driver.open_window(&WindowSpec { id, position })?;
        self.next_id += 1;
        tracing::debug!(window_id = ?id, x = position.0, y = position.1, "opened window");
        self.windows.push(WindowRecord {
            id,
            native,
            position,
            is_visible: true,
            is_always_on_top: false,
            is_fullscreen: false,
        });
        Ok(id)
    }

    /// Removes and returns the record for `id`. Only called in response to
    /// the OS close event; a second call for the same id is a no-op, so a
    /// bridge-initiated close followed by the native event cannot
    /// double-remove.
    pub fn remove(&mut self, id: WindowId) -> Option<WindowRecord<W>> {
        let index = self.windows.iter().position(|record| record.id == id)?;
        if self.focused == Some(id) {
            self.focused = None;
        }
        tracing::debug!(window_id = ?id, remaining = self.windows.len() - 1, "closed window");
        Some(self.windows.remove(index))
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord<W>> {
        self.windows.iter_mut().find(|record| record.id == id)
    }

    /// The OS-reported focused window, if any.
    pub fn focused_window(&mut self) -> Option<&mut WindowRecord<W>> {
        let id = self.focused?;
        self.get_mut(id)
    }

    pub fn focused_id(&self) -> Option<WindowId> {
        self.focused
    }

    /// The first record in insertion order — the target of visibility
    /// toggling. Closing it promotes the next-oldest survivor.
    pub fn primary_window(&mut self) -> Option<&mut WindowRecord<W>> {
        self.windows.first_mut()
    }

    pub fn primary_id(&self) -> Option<WindowId> {
        self.windows.first().map(|record| record.id)
    }

    pub fn set_focused(&mut self, id: WindowId, focused: bool) {
        if focused {
            self.focused = Some(id);
        } else if self.focused == Some(id) {
            self.focused = None;
        }
    }

    /// Records an OS-originated fullscreen transition. Returns false when
    /// the window is already gone.
    pub fn set_fullscreen(&mut self, id: WindowId, fullscreen: bool) -> bool {
        match self.get_mut(id) {
            Some(record) => {
                record.set_fullscreen(fullscreen);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord<W>> {
        self.windows.iter()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn next_spawn_position(&self) -> (i32, i32) {
        match self.windows.last() {
            Some(last) => (
                last.position.0 + SPAWN_OFFSET.0,
                last.position.1 + SPAWN_OFFSET.1,
            ),
            None => PRIMARY_SPAWN_POSITION,
        }
    }
}
