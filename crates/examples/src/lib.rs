//! Example programs built on thicket.

/// Tree gym: a scriptable list view over a generated project tree.
pub mod treegym;

#[cfg(test)]
mod tests;
