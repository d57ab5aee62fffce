mod common;

use std::path::PathBuf;

use common::StubDriver;
use term_host::events::{PlatformEvent, UiReply, UiRequest};
use term_host::registry::WindowId;
use term_host::runner::Host;

fn host_with_one_window(driver: &mut StubDriver) -> (Host<common::StubWindow>, WindowId) {
    let mut host = Host::with_quit_policy(false);
    host.startup(driver).unwrap();
    let id = host.registry().primary_id().unwrap();
    (host, id)
}

#[test]
fn rejected_urls_never_reach_the_launcher() {
    let mut driver = StubDriver::new();
    let log = driver.log();
    let (mut host, id) = host_with_one_window(&mut driver);

    for candidate in ["javascript:alert(1)", "not a url", "", "file:///etc/hosts"] {
        host.handle_event(
            &mut driver,
            PlatformEvent::UiRequest {
                window: id,
                request: UiRequest::OpenExternalUrl {
                    url: candidate.to_string(),
                },
            },
        );
    }

    assert!(log.borrow().launched.is_empty());
    let replies = log.borrow().replies.clone();
    assert_eq!(replies.len(), 4);
    assert!(
        replies
            .iter()
            .all(|(_, reply)| *reply == UiReply::UrlOpened { ok: false })
    );
}

#[test]
fn accepted_urls_are_normalized_before_launch() {
    let mut driver = StubDriver::new();
    let log = driver.log();
    let (mut host, id) = host_with_one_window(&mut driver);

    host.handle_event(
        &mut driver,
        PlatformEvent::UiRequest {
            window: id,
            request: UiRequest::OpenExternalUrl {
                url: "example.com".to_string(),
            },
        },
    );

    assert_eq!(log.borrow().launched, vec!["https://example.com/"]);
    assert_eq!(
        log.borrow().replies.last().unwrap().1,
        UiReply::UrlOpened { ok: true }
    );
}

#[test]
fn launcher_failure_degrades_to_a_false_reply() {
    let mut driver = StubDriver::new();
    driver.fail_launch = true;
    let log = driver.log();
    let (mut host, id) = host_with_one_window(&mut driver);

    host.handle_event(
        &mut driver,
        PlatformEvent::UiRequest {
            window: id,
            request: UiRequest::OpenExternalUrl {
                url: "https://example.com".to_string(),
            },
        },
    );

    assert_eq!(
        log.borrow().replies.last().unwrap().1,
        UiReply::UrlOpened { ok: false }
    );
}

#[test]
fn always_on_top_is_scoped_to_the_requesting_window() {
    let mut driver = StubDriver::new();
    let log = driver.log();
    let (mut host, first) = host_with_one_window(&mut driver);
    host.handle_event(
        &mut driver,
        PlatformEvent::Menu(term_host::actions::MenuAction::NewWindow),
    );
    let second = host.registry().iter().nth(1).unwrap().id();

    host.handle_event(
        &mut driver,
        PlatformEvent::UiRequest {
            window: second,
            request: UiRequest::ToggleAlwaysOnTop { flag: true },
        },
    );

    assert_eq!(log.borrow().always_on_top, vec![(second, true)]);
    let records: Vec<_> = host
        .registry()
        .iter()
        .map(|r| (r.id(), r.is_always_on_top()))
        .collect();
    assert_eq!(records, vec![(first, false), (second, true)]);
}

#[test]
fn always_on_top_for_a_closed_window_reports_failure_without_replying() {
    let mut driver = StubDriver::new();
    let log = driver.log();
    let (mut host, id) = host_with_one_window(&mut driver);
    host.handle_event(&mut driver, PlatformEvent::WindowClosed(id));

    host.handle_event(
        &mut driver,
        PlatformEvent::UiRequest {
            window: id,
            request: UiRequest::ToggleAlwaysOnTop { flag: true },
        },
    );

    // The window is gone, so there is nothing to flip and nowhere to
    // deliver the failure reply; the request must still be harmless.
    assert!(log.borrow().always_on_top.is_empty());
    assert!(log.borrow().replies.is_empty());
}

#[test]
fn close_window_requests_the_native_close_and_waits_for_the_event() {
    let mut driver = StubDriver::new();
    let log = driver.log();
    let (mut host, id) = host_with_one_window(&mut driver);

    host.handle_event(
        &mut driver,
        PlatformEvent::UiRequest {
            window: id,
            request: UiRequest::CloseWindow,
        },
    );
    assert_eq!(log.borrow().close_requests, vec![id]);
    // The record stays until the OS reports the close.
    assert_eq!(host.registry().len(), 1);

    host.handle_event(&mut driver, PlatformEvent::WindowClosed(id));
    assert!(host.registry().is_empty());
}

#[test]
fn folder_dialog_suspends_and_delivers_to_the_requesting_window() {
    let mut driver = StubDriver::new();
    let log = driver.log();
    let (mut host, id) = host_with_one_window(&mut driver);

    host.handle_event(
        &mut driver,
        PlatformEvent::UiRequest {
            window: id,
            request: UiRequest::OpenFolderDialog,
        },
    );
    assert_eq!(log.borrow().folder_requests, vec![id]);
    assert!(log.borrow().replies.is_empty());

    host.handle_event(
        &mut driver,
        PlatformEvent::FolderPicked {
            window: id,
            path: Some(PathBuf::from("/home/user/projects")),
        },
    );
    assert_eq!(
        log.borrow().replies.last().unwrap().1,
        UiReply::FolderSelected {
            path: Some(PathBuf::from("/home/user/projects")),
        }
    );
}

#[test]
fn cancelled_folder_dialog_is_an_empty_selection_not_an_error() {
    let mut driver = StubDriver::new();
    let log = driver.log();
    let (mut host, id) = host_with_one_window(&mut driver);

    host.handle_event(
        &mut driver,
        PlatformEvent::UiRequest {
            window: id,
            request: UiRequest::OpenFolderDialog,
        },
    );
    host.handle_event(
        &mut driver,
        PlatformEvent::FolderPicked {
            window: id,
            path: None,
        },
    );
    assert_eq!(
        log.borrow().replies.last().unwrap().1,
        UiReply::FolderSelected { path: None }
    );
}

#[test]
fn folder_result_for_a_closed_window_is_dropped() {
    let mut driver = StubDriver::new();
    let log = driver.log();
    let (mut host, id) = host_with_one_window(&mut driver);

    host.handle_event(
        &mut driver,
        PlatformEvent::UiRequest {
            window: id,
            request: UiRequest::OpenFolderDialog,
        },
    );
    host.handle_event(&mut driver, PlatformEvent::WindowClosed(id));
    host.handle_event(
        &mut driver,
        PlatformEvent::FolderPicked {
            window: id,
            path: Some(PathBuf::from("/tmp")),
        },
    );
    assert!(log.borrow().replies.is_empty());
}
