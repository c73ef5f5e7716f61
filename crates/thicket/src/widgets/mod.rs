//! Built-in widgets.

pub mod listview;
pub mod scrollbar;

pub use listview::ListView;
pub use scrollbar::{Orientation, ScrollBar, ScrollType};
