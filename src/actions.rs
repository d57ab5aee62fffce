use std::fmt;

use crate::events::UiEvent;

/// One activatable entry in the application menu. Construction of the menu
/// itself lives in [`crate::menu`]; this enum is the stable identity an
/// activation is dispatched by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    // Shell
    NewWindow,
    NewTab,
    CloseTab,
    NextTab,
    PrevTab,
    /// Jump straight to tab `0..=8` (shown to the user as tabs 1..=9).
    SwitchToTab(u8),
    // Edit
    SelectAll,
    // View
    ClearTerminal,
    // Window
    ToggleVisibility,
}

impl MenuAction {
    /// The event pushed to the focused window's UI layer when this action
    /// fires, or `None` for actions handled entirely by the host
    /// (window spawning, visibility toggling).
    pub fn ui_event(self) -> Option<UiEvent> {
        match self {
            MenuAction::NewTab => Some(UiEvent::NewTab),
            MenuAction::CloseTab => Some(UiEvent::CloseTab),
            MenuAction::NextTab => Some(UiEvent::NextTab),
            MenuAction::PrevTab => Some(UiEvent::PrevTab),
            MenuAction::SwitchToTab(index) => Some(UiEvent::SwitchToTabIndex { index }),
            MenuAction::SelectAll => Some(UiEvent::SelectAll),
            MenuAction::ClearTerminal => Some(UiEvent::ClearTerminal),
            MenuAction::NewWindow | MenuAction::ToggleVisibility => None,
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::NewWindow => write!(f, "New Window"),
            MenuAction::NewTab => write!(f, "New Tab"),
            MenuAction::CloseTab => write!(f, "Close Tab"),
            MenuAction::NextTab => write!(f, "Next Tab"),
            MenuAction::PrevTab => write!(f, "Previous Tab"),
            MenuAction::SwitchToTab(index) => write!(f, "Tab {}", index + 1),
            MenuAction::SelectAll => write!(f, "Select All"),
            MenuAction::ClearTerminal => write!(f, "Clear"),
            MenuAction::ToggleVisibility => write!(f, "Toggle Visibility"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_level_actions_have_no_ui_event() {
        assert_eq!(MenuAction::NewWindow.ui_event(), None);
        assert_eq!(MenuAction::ToggleVisibility.ui_event(), None);
    }

    #[test]
    fn switch_to_tab_carries_its_index() {
        assert_eq!(
            MenuAction::SwitchToTab(4).ui_event(),
            Some(UiEvent::SwitchToTabIndex { index: 4 })
        );
        assert_eq!(MenuAction::SwitchToTab(0).to_string(), "Tab 1");
    }
}
