//! Click counter state holder and the observer capability it notifies.

pub mod error;
pub mod model;
pub mod observer;

pub use error::ModelError;
pub use model::ClickCounterModel;
pub use observer::Observer;
