//! Controller layer: button events and the model/view relay.

pub mod counter;
pub mod events;

pub use counter::ClickCounterController;
