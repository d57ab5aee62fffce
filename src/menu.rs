//! The application menu: a static description built once at startup, and
//! the dispatch of activations to whichever window currently has focus.
//!
//! Menu construction holds no state. All mutable behavior goes through the
//! registry's focus accessor or the visibility controller, so the same
//! model drives a real platform menu and a test harness equally.

use crate::actions::MenuAction;
use crate::constants::MAX_TAB_INDEX;
use crate::drivers::{PlatformDriver, PlatformError};
use crate::registry::WindowRegistry;
use crate::visibility::VisibilityController;

/// Menu behaviors provided natively by the platform menu layer. These act
/// on the native window or webview and never reach the host's handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeRole {
    About,
    Services,
    Hide,
    HideOthers,
    ShowAll,
    Quit,
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    Minimize,
    Maximize,
    Fullscreen,
    BringAllToFront,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Action {
        action: MenuAction,
        /// Accelerator in `Modifiers+Code` form, e.g. `CmdOrCtrl+KeyT`.
        accelerator: Option<String>,
    },
    Role(NativeRole),
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSpec {
    pub title: &'static str,
    pub entries: Vec<MenuEntry>,
}

fn action(action: MenuAction, accelerator: &str) -> MenuEntry {
    MenuEntry::Action {
        action,
        accelerator: Some(accelerator.to_string()),
    }
}

/// Builds the full menu description. Platform-conditional items (the macOS
/// application menu, quit placement) are included only where they apply.
pub fn menu_model() -> Vec<MenuSpec> {
    let mut menus = Vec::new();

    #[cfg(target_os = "macos")]
    menus.push(MenuSpec {
        title: "App",
        entries: vec![
            MenuEntry::Role(NativeRole::About),
            MenuEntry::Separator,
            MenuEntry::Role(NativeRole::Services),
            MenuEntry::Separator,
            MenuEntry::Role(NativeRole::Hide),
            MenuEntry::Role(NativeRole::HideOthers),
            MenuEntry::Role(NativeRole::ShowAll),
            MenuEntry::Separator,
            MenuEntry::Role(NativeRole::Quit),
        ],
    });

    let mut shell = vec![
        action(MenuAction::NewWindow, "CmdOrCtrl+KeyN"),
        action(MenuAction::NewTab, "CmdOrCtrl+KeyT"),
        action(MenuAction::CloseTab, "CmdOrCtrl+KeyW"),
        MenuEntry::Separator,
        action(MenuAction::NextTab, "CmdOrCtrl+Shift+BracketRight"),
        action(MenuAction::PrevTab, "CmdOrCtrl+Shift+BracketLeft"),
        MenuEntry::Separator,
    ];
    for index in 0..=MAX_TAB_INDEX {
        shell.push(action(
            MenuAction::SwitchToTab(index),
            &format!("CmdOrCtrl+Digit{}", index + 1),
        ));
    }
    #[cfg(not(target_os = "macos"))]
    shell.extend([MenuEntry::Separator, MenuEntry::Role(NativeRole::Quit)]);
    menus.push(MenuSpec {
        title: "Shell",
        entries: shell,
    });

    menus.push(MenuSpec {
        title: "Edit",
        entries: vec![
            MenuEntry::Role(NativeRole::Undo),
            MenuEntry::Role(NativeRole::Redo),
            MenuEntry::Separator,
            MenuEntry::Role(NativeRole::Cut),
            MenuEntry::Role(NativeRole::Copy),
            MenuEntry::Role(NativeRole::Paste),
            MenuEntry::Separator,
            action(MenuAction::SelectAll, "CmdOrCtrl+KeyA"),
        ],
    });

    menus.push(MenuSpec {
        title: "View",
        entries: vec![
            action(MenuAction::ClearTerminal, "CmdOrCtrl+KeyK"),
            MenuEntry::Separator,
            MenuEntry::Role(NativeRole::Fullscreen),
        ],
    });

    let mut window = vec![
        MenuEntry::Action {
            action: MenuAction::ToggleVisibility,
            accelerator: None,
        },
        MenuEntry::Separator,
        MenuEntry::Role(NativeRole::Minimize),
        MenuEntry::Role(NativeRole::Maximize),
    ];
    #[cfg(target_os = "macos")]
    window.push(MenuEntry::Role(NativeRole::BringAllToFront));
    menus.push(MenuSpec {
        title: "Window",
        entries: window,
    });

    menus
}

/// Routes one activation. Per-window actions go to the focused window's UI
/// layer; with no focused window they are dropped with a diagnostic.
pub fn dispatch<D: PlatformDriver>(
    activated: MenuAction,
    registry: &mut WindowRegistry<D::Window>,
    visibility: &mut VisibilityController,
    driver: &mut D,
) -> Result<(), PlatformError> {
    match activated {
        MenuAction::NewWindow => {
            registry.create_window(driver)?;
            visibility.note_window_created();
        }
        MenuAction::ToggleVisibility => visibility.toggle(registry, driver)?,
        other => {
            let Some(event) = other.ui_event() else {
                return Ok(());
            };
            match registry.focused_window() {
                Some(focused) => focused.send_event(&event),
                None => {
                    tracing::debug!(%event, "menu action with no focused window");
                }
            }
        }
    }
    Ok(())
}
