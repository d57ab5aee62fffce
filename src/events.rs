//! The event and message vocabulary between the host, the OS, and each
//! window's UI layer.
//!
//! OS callbacks are not handled in place: the platform side translates them
//! into [`PlatformEvent`] values which the host consumes in arrival order on
//! the single control thread. That keeps the lifecycle state machines free
//! of re-entrant native callbacks and lets tests drive them directly.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::actions::MenuAction;
use crate::registry::WindowId;

/// Inbound event stream consumed by [`crate::runner::Host`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent {
    /// The global show/hide chord was pressed.
    ToggleHotkey,
    /// A menu entry was activated.
    Menu(MenuAction),
    /// A window's UI layer issued a request over its IPC channel.
    UiRequest {
        window: WindowId,
        request: UiRequest,
    },
    /// The folder picker opened for `window` resolved. `None` means the
    /// user dismissed it, which is not an error.
    FolderPicked {
        window: WindowId,
        path: Option<PathBuf>,
    },
    /// The native window is gone. This is the only trigger for record
    /// removal, whether the close started with the user or with the
    /// Command Bridge.
    WindowClosed(WindowId),
    /// OS-reported focus change for one window.
    FocusChanged { window: WindowId, focused: bool },
    /// The window entered or left fullscreen.
    FullscreenChanged { window: WindowId, fullscreen: bool },
    /// The application was re-activated with no visible windows
    /// (macOS dock click).
    Reopen,
}

/// A request from one window's UI layer, addressed to that window.
///
/// Wire format is JSON tagged by `cmd`, e.g.
/// `{"cmd":"open-external-url","url":"example.com"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "kebab-case")]
pub enum UiRequest {
    OpenFolderDialog,
    OpenExternalUrl { url: String },
    ToggleAlwaysOnTop { flag: bool },
    CloseWindow,
}

/// Response delivered back to the requesting window's UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reply", rename_all = "kebab-case")]
pub enum UiReply {
    FolderSelected { path: Option<PathBuf> },
    UrlOpened { ok: bool },
    AlwaysOnTop { ok: bool },
}

/// Named event pushed from the host to a window's UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum UiEvent {
    NewTab,
    CloseTab,
    NextTab,
    PrevTab,
    SwitchToTabIndex { index: u8 },
    ClearTerminal,
    SelectAll,
    FullscreenChange { fullscreen: bool },
}

impl fmt::Display for UiEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiEvent::NewTab => write!(f, "new-tab"),
            UiEvent::CloseTab => write!(f, "close-tab"),
            UiEvent::NextTab => write!(f, "next-tab"),
            UiEvent::PrevTab => write!(f, "prev-tab"),
            UiEvent::SwitchToTabIndex { index } => {
                write!(f, "switch-to-tab-index({index})")
            }
            UiEvent::ClearTerminal => write!(f, "clear-terminal"),
            UiEvent::SelectAll => write!(f, "select-all"),
            UiEvent::FullscreenChange { fullscreen } => {
                write!(f, "fullscreen-change({fullscreen})")
            }
        }
    }
}
