mod common;

use common::StubDriver;
use term_host::actions::MenuAction;
use term_host::events::PlatformEvent;
use term_host::runner::Host;
use term_host::visibility::VisibilityState;

#[test]
fn toggle_with_no_windows_creates_exactly_one_and_shows() {
    let mut driver = StubDriver::new();
    let mut host = Host::with_quit_policy(false);

    host.handle_event(&mut driver, PlatformEvent::ToggleHotkey);
    assert_eq!(host.registry().len(), 1);
    assert_eq!(host.visibility_state(), VisibilityState::Shown);
}

#[test]
fn toggle_round_trips_between_shown_and_hidden() {
    let mut driver = StubDriver::new();
    let log = driver.log();
    let mut host = Host::with_quit_policy(false);
    host.startup(&mut driver).unwrap();
    let primary = host.registry().primary_id().unwrap();

    host.handle_event(&mut driver, PlatformEvent::ToggleHotkey);
    assert_eq!(host.visibility_state(), VisibilityState::Hidden);
    assert_eq!(log.borrow().hidden, vec![primary]);
    assert!(!host.registry().iter().next().unwrap().is_visible());

    host.handle_event(&mut driver, PlatformEvent::ToggleHotkey);
    assert_eq!(host.visibility_state(), VisibilityState::Shown);
    assert_eq!(log.borrow().shown, vec![primary]);
    assert_eq!(log.borrow().focused, vec![primary]);
    assert!(host.registry().iter().next().unwrap().is_visible());
}

#[test]
fn menu_toggle_behaves_like_the_hotkey() {
    let mut driver = StubDriver::new();
    let mut host = Host::with_quit_policy(false);
    host.startup(&mut driver).unwrap();

    host.handle_event(
        &mut driver,
        PlatformEvent::Menu(MenuAction::ToggleVisibility),
    );
    assert_eq!(host.visibility_state(), VisibilityState::Hidden);
    host.handle_event(
        &mut driver,
        PlatformEvent::Menu(MenuAction::ToggleVisibility),
    );
    assert_eq!(host.visibility_state(), VisibilityState::Shown);
}

#[test]
fn toggle_targets_the_promoted_primary_after_a_close() {
    let mut driver = StubDriver::new();
    let log = driver.log();
    let mut host = Host::with_quit_policy(false);
    host.startup(&mut driver).unwrap();
    host.handle_event(&mut driver, PlatformEvent::Menu(MenuAction::NewWindow));

    let ids: Vec<_> = host.registry().iter().map(|r| r.id()).collect();
    host.handle_event(&mut driver, PlatformEvent::WindowClosed(ids[0]));

    host.handle_event(&mut driver, PlatformEvent::ToggleHotkey);
    assert_eq!(log.borrow().hidden, vec![ids[1]]);
}

#[test]
fn closing_everything_while_hidden_recovers_cleanly() {
    let mut driver = StubDriver::new();
    let mut host = Host::with_quit_policy(false);
    host.startup(&mut driver).unwrap();
    let primary = host.registry().primary_id().unwrap();

    host.handle_event(&mut driver, PlatformEvent::ToggleHotkey);
    assert_eq!(host.visibility_state(), VisibilityState::Hidden);
    host.handle_event(&mut driver, PlatformEvent::WindowClosed(primary));
    assert_eq!(host.visibility_state(), VisibilityState::NoWindow);

    // The next toggle starts over with a fresh window.
    host.handle_event(&mut driver, PlatformEvent::ToggleHotkey);
    assert_eq!(host.registry().len(), 1);
    assert_eq!(host.visibility_state(), VisibilityState::Shown);
}
