//! Shared crate-wide constants.

/// Title applied to every top-level window.
pub const APP_TITLE: &str = "Terminal";

/// Initial inner size of a newly spawned window, in logical pixels.
pub const WINDOW_WIDTH: u32 = 900;
pub const WINDOW_HEIGHT: u32 = 600;

/// Smallest inner size the user can shrink a window to. Below this the
/// terminal grid becomes unusable, so the platform driver enforces it as
/// the native minimum size.
pub const WINDOW_MIN_WIDTH: u32 = 400;
pub const WINDOW_MIN_HEIGHT: u32 = 300;

/// Anchor position for the first window when the registry is empty.
///
/// Placement is owned by the registry so that spawn positions stay
/// deterministic; a fixed anchor stands in for OS-side centering, which
/// would make every follow-up offset depend on the monitor the process
/// happened to start on.
pub const PRIMARY_SPAWN_POSITION: (i32, i32) = (120, 120);

/// Offset applied to each new window relative to the most recently
/// created one, so stacked windows stay individually grabbable.
pub const SPAWN_OFFSET: (i32, i32) = (30, 30);

/// Highest tab index addressable from the menu (tabs 1..=9 map to 0..=8).
pub const MAX_TAB_INDEX: u8 = 8;
