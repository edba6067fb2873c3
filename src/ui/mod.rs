//! Terminal UI toolkit for the waypoint binary.
//!
//! Commands resolve color and unicode support once into a [`UiContext`] and
//! render through the widgets here. Widgets return plain `String`s so they
//! can be asserted against in tests without a live terminal.

pub mod context;
pub mod panel;
pub mod table;
pub mod theme;

pub use context::UiContext;
pub use panel::{Panel, PanelStyle};
pub use table::{Align, Table};
