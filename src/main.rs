use clap::Parser;
use global_hotkey::{GlobalHotKeyEvent, HotKeyState};
use muda::MenuEvent;
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow as TaoControlFlow, EventLoopBuilder};

use term_host::drivers::desktop::{
    self, AppMenu, DesktopDriver, DesktopHotkeyBackend, DesktopWindow, UserEvent,
};
use term_host::events::{PlatformEvent, UiRequest};
use term_host::hotkey::HotkeyGuard;
use term_host::runner::{ControlFlow, Host};
use term_host::tracing_sub;

#[derive(Debug, Parser)]
#[command(name = "term-host", version, about = "Window controller for the terminal app")]
struct Cli {
    /// Skip registering the global show/hide hotkey.
    #[arg(long)]
    no_global_hotkey: bool,
    /// Tracing filter override, e.g. "term_host=debug".
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    tracing_sub::init_default(cli.log_filter.as_deref());

    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let menu = AppMenu::build();
    menu.install();

    let mut hotkeys = (!cli.no_global_hotkey)
        .then(|| HotkeyGuard::register(DesktopHotkeyBackend::default()));
    let toggle_id = desktop::toggle_hotkey().id();

    let mut host: Host<DesktopWindow> = Host::new();
    {
        let mut driver = DesktopDriver::new(&event_loop, &proxy, &menu);
        if let Err(err) = host.startup(&mut driver) {
            tracing::error!(%err, "failed to open the initial window");
        }
    }

    event_loop.run(move |event, target, flow| {
        *flow = TaoControlFlow::Wait;

        // Menu and hotkey activations arrive on their own channels; drain
        // them every turn so they interleave with native events in order.
        let mut inbound: Vec<PlatformEvent> = Vec::new();
        while let Ok(menu_event) = MenuEvent::receiver().try_recv() {
            if let Some(action) = menu.action_for(menu_event.id()) {
                inbound.push(PlatformEvent::Menu(action));
            }
        }
        if hotkeys.as_ref().is_some_and(HotkeyGuard::is_registered) {
            while let Ok(hotkey_event) = GlobalHotKeyEvent::receiver().try_recv() {
                if hotkey_event.id == toggle_id && hotkey_event.state == HotKeyState::Pressed {
                    inbound.push(PlatformEvent::ToggleHotkey);
                }
            }
        }

        match event {
            Event::WindowEvent {
                window_id, event, ..
            } => {
                if let Some(translated) = translate_window_event(&host, window_id, &event) {
                    inbound.push(translated);
                }
            }
            Event::UserEvent(user) => {
                if let Some(translated) = translate_user_event(user) {
                    inbound.push(translated);
                }
            }
            #[cfg(target_os = "macos")]
            Event::Reopen {
                has_visible_windows,
                ..
            } => {
                if !has_visible_windows {
                    inbound.push(PlatformEvent::Reopen);
                }
            }
            Event::LoopDestroyed => {
                if let Some(guard) = hotkeys.as_mut() {
                    guard.release();
                }
            }
            _ => {}
        }

        for platform_event in inbound {
            let mut driver = DesktopDriver::new(target, &proxy, &menu);
            if let ControlFlow::Quit = host.handle_event(&mut driver, platform_event) {
                if let Some(guard) = hotkeys.as_mut() {
                    guard.release();
                }
                *flow = TaoControlFlow::Exit;
            }
        }
    });
}

/// Maps a native window callback onto the host's event vocabulary. Events
/// for windows the registry no longer knows are dropped here.
fn translate_window_event(
    host: &Host<DesktopWindow>,
    tao_id: tao::window::WindowId,
    event: &WindowEvent<'_>,
) -> Option<PlatformEvent> {
    let record = host
        .registry()
        .iter()
        .find(|record| record.native().tao_id() == tao_id)?;
    let id = record.id();
    match event {
        WindowEvent::CloseRequested => Some(PlatformEvent::WindowClosed(id)),
        WindowEvent::Focused(focused) => Some(PlatformEvent::FocusChanged {
            window: id,
            focused: *focused,
        }),
        // tao reports no dedicated fullscreen transition, so diff the
        // native state against the record on every resize.
        WindowEvent::Resized(_) => {
            let fullscreen = record.native().is_native_fullscreen();
            (fullscreen != record.is_fullscreen()).then_some(PlatformEvent::FullscreenChanged {
                window: id,
                fullscreen,
            })
        }
        _ => None,
    }
}

fn translate_user_event(user: UserEvent) -> Option<PlatformEvent> {
    match user {
        UserEvent::Ui { window, body } => desktop::parse_ui_request(&body)
            .map(|request| PlatformEvent::UiRequest { window, request }),
        // Intercepted navigations take the same guarded path as an
        // explicit open-external-url request.
        UserEvent::NavigationIntercepted { window, url } => Some(PlatformEvent::UiRequest {
            window,
            request: UiRequest::OpenExternalUrl { url },
        }),
        UserEvent::FolderPicked { window, path } => {
            Some(PlatformEvent::FolderPicked { window, path })
        }
        UserEvent::CloseWindow(id) => Some(PlatformEvent::WindowClosed(id)),
    }
}
