//! Request/response bridge between each window's UI layer and the host.
//!
//! Every operation is scoped to the window the request arrived from, looked
//! up by id in the registry — never a shared "current window" global, so
//! concurrent requests from different windows cannot cross-affect each
//! other. Failures degrade to boolean/empty replies; nothing here can take
//! the process down.

use std::path::PathBuf;

use crate::drivers::PlatformDriver;
use crate::events::{UiReply, UiRequest};
use crate::navigation;
use crate::registry::{WindowId, WindowRegistry};

/// Executes one inbound request on behalf of `window`.
pub fn dispatch<D: PlatformDriver>(
    registry: &mut WindowRegistry<D::Window>,
    driver: &mut D,
    window: WindowId,
    request: UiRequest,
) {
    match request {
        UiRequest::OpenFolderDialog => {
            // Resolves later via `FolderPicked`; see `deliver_folder_reply`.
            driver.open_folder_dialog(window);
        }
        UiRequest::OpenExternalUrl { url } => {
            let ok = open_external(driver, &url);
            reply(registry, window, UiReply::UrlOpened { ok });
        }
        UiRequest::ToggleAlwaysOnTop { flag } => {
            let ok = match registry.get_mut(window) {
                Some(record) => {
                    record.set_always_on_top(flag);
                    true
                }
                None => false,
            };
            reply(registry, window, UiReply::AlwaysOnTop { ok });
        }
        UiRequest::CloseWindow => {
            // Fire-and-forget: ask the OS to close and let the resulting
            // close event remove the record. No-op if the window is gone.
            if let Some(record) = registry.get_mut(window) {
                record.request_close();
            }
        }
    }
}

/// Completes a suspended open-folder-dialog request. `None` is a dismissed
/// dialog, delivered to the UI layer as an empty selection.
pub fn deliver_folder_reply<W: crate::drivers::PlatformWindow>(
    registry: &mut WindowRegistry<W>,
    window: WindowId,
    path: Option<PathBuf>,
) {
    reply(registry, window, UiReply::FolderSelected { path });
}

/// Runs a candidate URL through the safety guard and, only on success,
/// the OS launcher. Rejected or failed launches report `false`.
fn open_external<D: PlatformDriver>(driver: &mut D, candidate: &str) -> bool {
    let Some(url) = navigation::normalize(candidate) else {
        tracing::debug!(candidate, "rejected external navigation");
        return false;
    };
    match driver.launch_external(&url) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(%err, url, "external launch failed");
            false
        }
    }
}

fn reply<W: crate::drivers::PlatformWindow>(
    registry: &mut WindowRegistry<W>,
    window: WindowId,
    reply: UiReply,
) {
    match registry.get_mut(window) {
        Some(record) => record.send_reply(&reply),
        None => {
            tracing::debug!(window_id = ?window, "dropping reply for closed window");
        }
    }
}
