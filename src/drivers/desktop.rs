//! Desktop implementation of the platform seam.
//!
//! Windows are tao windows hosting a wry webview that loads the UI layer's
//! entry document; the application menu is muda; the global show/hide
//! chord is a global-hotkey grab; folder picking is rfd; external URLs go
//! through webbrowser. Everything that happens off the main thread (menu
//! and hotkey callbacks, dialog results, webview IPC) is funneled back
//! into the tao loop as a [`UserEvent`], so the host only ever runs on the
//! single control thread.

use std::collections::HashMap;
use std::path::PathBuf;
use std::thread;

use global_hotkey::hotkey::{Code, HotKey, Modifiers};
use global_hotkey::GlobalHotKeyManager;
use muda::accelerator::Accelerator;
use muda::{Menu, MenuId, MenuItem, PredefinedMenuItem, Submenu};
use tao::dpi::{LogicalPosition, LogicalSize};
use tao::event_loop::{EventLoopProxy, EventLoopWindowTarget};
use tao::window::{Window, WindowBuilder};
use wry::{WebView, WebViewBuilder};

use crate::actions::MenuAction;
use crate::constants::{
    APP_TITLE, WINDOW_HEIGHT, WINDOW_MIN_HEIGHT, WINDOW_MIN_WIDTH, WINDOW_WIDTH,
};
use crate::drivers::{PlatformDriver, PlatformError, PlatformWindow, WindowSpec};
use crate::events::{UiEvent, UiReply, UiRequest};
use crate::hotkey::HotkeyBackend;
use crate::menu::{menu_model, MenuEntry, NativeRole};
use crate::registry::WindowId;

/// The UI layer's entry document, loaded into every new window.
const ENTRY_DOCUMENT: &str = include_str!("../../assets/index.html");

/// Events injected into the tao loop from outside it. Menu and hotkey
/// activations are not here: those arrive on their crates' channels and
/// are drained directly by the loop.
#[derive(Debug)]
pub enum UserEvent {
    /// Raw IPC payload from one window's webview.
    Ui { window: WindowId, body: String },
    /// The webview tried to navigate away from the entry document or open
    /// a popup. The URL is rerouted through the safety guard toward the
    /// system browser; the in-window navigation itself was blocked.
    NavigationIntercepted { window: WindowId, url: String },
    /// A folder picker resolved.
    FolderPicked {
        window: WindowId,
        path: Option<PathBuf>,
    },
    /// A bridge-initiated close request; tao has no native close call, so
    /// this round-trips through the loop and lands on the same removal
    /// path as a user-initiated close.
    CloseWindow(WindowId),
}

pub struct DesktopWindow {
    id: WindowId,
    window: Window,
    webview: WebView,
    proxy: EventLoopProxy<UserEvent>,
}

impl DesktopWindow {
    pub fn tao_id(&self) -> tao::window::WindowId {
        self.window.id()
    }

    pub fn is_native_fullscreen(&self) -> bool {
        self.window.fullscreen().is_some()
    }

    fn emit(&self, channel: &str, json: &str) {
        let script =
            format!("window.dispatchEvent(new CustomEvent('{channel}', {{ detail: {json} }}));");
        if let Err(err) = self.webview.evaluate_script(&script) {
            tracing::warn!(%err, channel, "failed to push to UI layer");
        }
    }
}

impl PlatformWindow for DesktopWindow {
    fn show(&mut self) {
        self.window.set_visible(true);
    }

    fn hide(&mut self) {
        self.window.set_visible(false);
    }

    fn focus(&mut self) {
        self.window.set_focus();
    }

    fn request_close(&mut self) {
        let _ = self.proxy.send_event(UserEvent::CloseWindow(self.id));
    }

    fn set_always_on_top(&mut self, on_top: bool) {
        self.window.set_always_on_top(on_top);
    }

    fn send_event(&mut self, event: &UiEvent) {
        match serde_json::to_string(event) {
            Ok(json) => self.emit("host-event", &json),
            Err(err) => tracing::warn!(%err, "unserializable UI event"),
        }
    }

    fn send_reply(&mut self, reply: &UiReply) {
        match serde_json::to_string(reply) {
            Ok(json) => self.emit("host-reply", &json),
            Err(err) => tracing::warn!(%err, "unserializable UI reply"),
        }
    }
}

/// Driver rebuilt for each turn of the tao loop around the short-lived
/// window target; see `main.rs`.
pub struct DesktopDriver<'a> {
    target: &'a EventLoopWindowTarget<UserEvent>,
    proxy: &'a EventLoopProxy<UserEvent>,
    menu: &'a AppMenu,
}

impl<'a> DesktopDriver<'a> {
    pub fn new(
        target: &'a EventLoopWindowTarget<UserEvent>,
        proxy: &'a EventLoopProxy<UserEvent>,
        menu: &'a AppMenu,
    ) -> Self {
        Self {
            target,
            proxy,
            menu,
        }
    }
}

impl PlatformDriver for DesktopDriver<'_> {
    type Window = DesktopWindow;

    fn open_window(&mut self, spec: &WindowSpec) -> Result<DesktopWindow, PlatformError> {
        #[allow(unused_mut)]
        let mut builder = WindowBuilder::new()
            .with_title(APP_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH as f64, WINDOW_HEIGHT as f64))
            .with_min_inner_size(LogicalSize::new(
                WINDOW_MIN_WIDTH as f64,
                WINDOW_MIN_HEIGHT as f64,
            ))
            .with_position(LogicalPosition::new(
                spec.position.0 as f64,
                spec.position.1 as f64,
            ))
            .with_transparent(true);
        #[cfg(target_os = "macos")]
        {
            use tao::platform::macos::WindowBuilderExtMacOS;
            builder = builder
                .with_titlebar_transparent(true)
                .with_title_hidden(true)
                .with_fullsize_content_view(true);
        }
        let window = builder
            .build(self.target)
            .map_err(|err| PlatformError::WindowCreate(err.to_string()))?;

        #[cfg(target_os = "windows")]
        {
            use tao::platform::windows::WindowExtWindows;
            self.menu.attach_to_hwnd(window.hwnd() as isize);
        }
        #[cfg(not(target_os = "windows"))]
        let _ = self.menu;

        let id = spec.id;
        let ipc_proxy = self.proxy.clone();
        let nav_proxy = self.proxy.clone();
        let popup_proxy = self.proxy.clone();
        let webview_builder = WebViewBuilder::new()
            .with_html(ENTRY_DOCUMENT)
            .with_transparent(true)
            .with_ipc_handler(move |message| {
                let _ = ipc_proxy.send_event(UserEvent::Ui {
                    window: id,
                    body: message.body().to_string(),
                });
            })
            .with_navigation_handler(move |url| {
                // The entry document is inlined, so anything beyond
                // about:/data: is an attempt to leave the app.
                if url.starts_with("about:") || url.starts_with("data:") {
                    return true;
                }
                let _ = nav_proxy.send_event(UserEvent::NavigationIntercepted { window: id, url });
                false
            })
            .with_new_window_req_handler(move |url| {
                let _ =
                    popup_proxy.send_event(UserEvent::NavigationIntercepted { window: id, url });
                false
            });
        #[cfg(not(target_os = "linux"))]
        let webview = webview_builder
            .build(&window)
            .map_err(|err| PlatformError::WindowCreate(err.to_string()))?;
        // tao is gtk-backed on Linux, so the webview attaches to the
        // window's gtk box instead of the raw window handle.
        #[cfg(target_os = "linux")]
        let webview = {
            use tao::platform::unix::WindowExtUnix;
            use wry::WebViewBuilderExtUnix;
            let vbox = window.default_vbox().ok_or_else(|| {
                PlatformError::WindowCreate("window has no gtk container".to_string())
            })?;
            webview_builder
                .build_gtk(vbox)
                .map_err(|err| PlatformError::WindowCreate(err.to_string()))?
        };

        Ok(DesktopWindow {
            id,
            window,
            webview,
            proxy: self.proxy.clone(),
        })
    }

    fn open_folder_dialog(&mut self, window: WindowId) {
        let proxy = self.proxy.clone();
        thread::spawn(move || {
            let path = rfd::FileDialog::new()
                .set_title("Select Directory")
                .pick_folder();
            let _ = proxy.send_event(UserEvent::FolderPicked { window, path });
        });
    }

    fn launch_external(&mut self, url: &str) -> Result<(), PlatformError> {
        webbrowser::open(url).map_err(|err| PlatformError::Launch(err.to_string()))
    }
}

/// Deserializes one raw IPC payload. Malformed payloads are logged and
/// dropped; a misbehaving UI layer cannot take the host down.
pub fn parse_ui_request(body: &str) -> Option<UiRequest> {
    match serde_json::from_str(body) {
        Ok(request) => Some(request),
        Err(err) => {
            tracing::warn!(%err, body, "unparseable UI request");
            None
        }
    }
}

/// The fixed visibility chord, identical on every platform.
pub fn toggle_hotkey() -> HotKey {
    HotKey::new(Some(Modifiers::CONTROL | Modifiers::SHIFT), Code::Space)
}

#[derive(Default)]
pub struct DesktopHotkeyBackend {
    manager: Option<GlobalHotKeyManager>,
}

impl HotkeyBackend for DesktopHotkeyBackend {
    fn register(&mut self) -> Result<(), PlatformError> {
        let manager =
            GlobalHotKeyManager::new().map_err(|err| PlatformError::Hotkey(err.to_string()))?;
        manager
            .register(toggle_hotkey())
            .map_err(|err| PlatformError::Hotkey(err.to_string()))?;
        self.manager = Some(manager);
        Ok(())
    }

    fn unregister(&mut self) -> Result<(), PlatformError> {
        if let Some(manager) = self.manager.take() {
            manager
                .unregister(toggle_hotkey())
                .map_err(|err| PlatformError::Hotkey(err.to_string()))?;
        }
        Ok(())
    }
}

/// The muda menu plus the mapping from item ids back to [`MenuAction`]s.
pub struct AppMenu {
    menu: Menu,
    actions: HashMap<MenuId, MenuAction>,
}

impl AppMenu {
    /// Materializes [`menu_model`] as a muda menu.
    pub fn build() -> Self {
        let menu = Menu::new();
        let mut actions = HashMap::new();
        for spec in menu_model() {
            let submenu = Submenu::new(spec.title, true);
            for entry in spec.entries {
                match entry {
                    MenuEntry::Action {
                        action,
                        accelerator,
                    } => {
                        let accel = accelerator.as_deref().and_then(parse_accelerator);
                        let item = MenuItem::new(action.to_string(), true, accel);
                        actions.insert(item.id().clone(), action);
                        append(&submenu, &item);
                    }
                    MenuEntry::Role(role) => append(&submenu, &native_item(role)),
                    MenuEntry::Separator => append(&submenu, &PredefinedMenuItem::separator()),
                }
            }
            if let Err(err) = menu.append(&submenu) {
                tracing::warn!(%err, title = spec.title, "failed to append submenu");
            }
        }
        Self { menu, actions }
    }

    pub fn action_for(&self, id: &MenuId) -> Option<MenuAction> {
        self.actions.get(id).copied()
    }

    /// Installs the menu bar where installation is application-global.
    /// On Windows the menu attaches per-window instead, inside
    /// [`DesktopDriver::open_window`].
    pub fn install(&self) {
        #[cfg(target_os = "macos")]
        self.menu.init_for_nsapp();
        #[cfg(target_os = "linux")]
        tracing::warn!("menu bar is not attached on this platform backend");
    }

    #[cfg(target_os = "windows")]
    fn attach_to_hwnd(&self, hwnd: isize) {
        if let Err(err) = unsafe { self.menu.init_for_hwnd(hwnd) } {
            tracing::warn!(%err, "failed to attach menu bar");
        }
    }
}

fn append(submenu: &Submenu, item: &dyn muda::IsMenuItem) {
    if let Err(err) = submenu.append(item) {
        tracing::warn!(%err, "failed to append menu item");
    }
}

fn parse_accelerator(spec: &str) -> Option<Accelerator> {
    match spec.parse() {
        Ok(accel) => Some(accel),
        Err(err) => {
            tracing::warn!(%err, spec, "invalid accelerator");
            None
        }
    }
}

fn native_item(role: NativeRole) -> PredefinedMenuItem {
    match role {
        NativeRole::About => PredefinedMenuItem::about(None, None),
        NativeRole::Services => PredefinedMenuItem::services(None),
        NativeRole::Hide => PredefinedMenuItem::hide(None),
        NativeRole::HideOthers => PredefinedMenuItem::hide_others(None),
        NativeRole::ShowAll => PredefinedMenuItem::show_all(None),
        NativeRole::Quit => PredefinedMenuItem::quit(None),
        NativeRole::Undo => PredefinedMenuItem::undo(None),
        NativeRole::Redo => PredefinedMenuItem::redo(None),
        NativeRole::Cut => PredefinedMenuItem::cut(None),
        NativeRole::Copy => PredefinedMenuItem::copy(None),
        NativeRole::Paste => PredefinedMenuItem::paste(None),
        NativeRole::Minimize => PredefinedMenuItem::minimize(None),
        NativeRole::Maximize => PredefinedMenuItem::maximize(None),
        NativeRole::Fullscreen => PredefinedMenuItem::fullscreen(None),
        NativeRole::BringAllToFront => PredefinedMenuItem::bring_all_to_front(None),
    }
}
