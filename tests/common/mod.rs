#![allow(dead_code)]

//! In-memory platform stub shared by the integration tests. Every OS-side
//! effect is recorded in a [`PlatformLog`] the assertions can inspect.

use std::cell::RefCell;
use std::rc::Rc;

use term_host::drivers::{PlatformDriver, PlatformError, PlatformWindow, WindowSpec};
use term_host::events::{UiEvent, UiReply};
use term_host::registry::WindowId;

#[derive(Debug, Default)]
pub struct PlatformLog {
    pub launched: Vec<String>,
    pub folder_requests: Vec<WindowId>,
    pub close_requests: Vec<WindowId>,
    pub shown: Vec<WindowId>,
    pub hidden: Vec<WindowId>,
    pub focused: Vec<WindowId>,
    pub always_on_top: Vec<(WindowId, bool)>,
    pub events: Vec<(WindowId, UiEvent)>,
    pub replies: Vec<(WindowId, UiReply)>,
}

#[derive(Default)]
pub struct StubDriver {
    log: Rc<RefCell<PlatformLog>>,
    pub fail_window_create: bool,
    pub fail_launch: bool,
}

impl StubDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the log; windows spawned by this driver write to
    /// the same one.
    pub fn log(&self) -> Rc<RefCell<PlatformLog>> {
        self.log.clone()
    }
}

pub struct StubWindow {
    id: WindowId,
    log: Rc<RefCell<PlatformLog>>,
}

impl PlatformDriver for StubDriver {
    type Window = StubWindow;

    fn open_window(&mut self, spec: &WindowSpec) -> Result<StubWindow, PlatformError> {
        if self.fail_window_create {
            return Err(PlatformError::WindowCreate("stub refused".into()));
        }
        Ok(StubWindow {
            id: spec.id,
            log: self.log.clone(),
        })
    }

    fn open_folder_dialog(&mut self, window: WindowId) {
        self.log.borrow_mut().folder_requests.push(window);
    }

    fn launch_external(&mut self, url: &str) -> Result<(), PlatformError> {
        if self.fail_launch {
            return Err(PlatformError::Launch("stub launcher down".into()));
        }
        self.log.borrow_mut().launched.push(url.to_string());
        Ok(())
    }
}

impl PlatformWindow for StubWindow {
    fn show(&mut self) {
        self.log.borrow_mut().shown.push(self.id);
    }

    fn hide(&mut self) {
        self.log.borrow_mut().hidden.push(self.id);
    }

    fn focus(&mut self) {
        self.log.borrow_mut().focused.push(self.id);
    }

    fn request_close(&mut self) {
        self.log.borrow_mut().close_requests.push(self.id);
    }

    fn set_always_on_top(&mut self, on_top: bool) {
        self.log.borrow_mut().always_on_top.push((self.id, on_top));
    }

    fn send_event(&mut self, event: &UiEvent) {
        self.log.borrow_mut().events.push((self.id, *event));
    }

    fn send_reply(&mut self, reply: &UiReply) {
        self.log.borrow_mut().replies.push((self.id, reply.clone()));
    }
}
