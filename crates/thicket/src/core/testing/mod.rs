/// Capturing render backend.
pub mod backend;
/// Buffer testing utilities.
pub mod buf;
/// A context that records timer requests.
pub mod dummyctx;
