/// Timer access for widgets.
pub mod context;
/// Error types.
pub mod error;
/// Input events.
pub mod event;
/// Render surface.
pub mod render;
/// Typed signal subscriptions.
pub mod signal;
/// Style resolution.
pub mod style;
/// Terminal cell buffer.
pub mod termbuf;
/// Test helpers.
#[cfg(any(test, feature = "testing"))]
pub mod testing;
/// Display-width aware text helpers.
pub mod text;
/// Single-threaded timer scheduling.
pub mod timer;
