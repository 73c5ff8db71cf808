//! UI layer for the counter window: view and theme.

pub mod theme;
pub mod view;

pub use theme::ViewConfig;
pub use view::ClickCounterView;
