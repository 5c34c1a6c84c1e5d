//! Controller layer: UI events, per-flow state transitions, and command orchestration.

pub mod events;
pub mod orchestration;
pub mod reducer;
