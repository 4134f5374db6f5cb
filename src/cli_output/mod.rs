//! Line-based console rendering of the view model.
//!
//! Renders into a `String` so the layout can be asserted in tests; the
//! console driver prints the result.

mod frame;

pub use frame::{render_modal, render_view, tone_icon};
