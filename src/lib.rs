//! Process-level controller of a multi-window terminal-emulator desktop
//! application: native window lifecycle, the global show/hide hotkey,
//! menu-driven command dispatch to the UI layer, and the safety boundary
//! around externally-opened URLs.
//!
//! The terminal emulation itself is an opaque UI layer hosted inside each
//! window; this crate only exchanges requests, replies, and named events
//! with it. All OS interaction goes through the driver traits in
//! [`drivers`], so the lifecycle state machines run unchanged against the
//! real desktop or an in-memory test stub.

pub mod actions;
pub mod bridge;
pub mod constants;
pub mod drivers;
pub mod events;
pub mod hotkey;
pub mod menu;
pub mod navigation;
pub mod registry;
pub mod runner;
pub mod tracing_sub;
pub mod visibility;
