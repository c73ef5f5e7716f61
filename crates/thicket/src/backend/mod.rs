//! Terminal backends.

/// Crossterm terminal session and run loop.
pub mod crossterm;
