//! Controller layer: pointer events from the view and their dispatch to the showcase.

pub mod events;
pub mod orchestration;
