//! UI layer for desktop GUI: app shell, section panels, display models, and theme.

pub mod app;
pub mod panels;
pub mod render;
pub mod theme;

pub use app::TravelAssistantApp;
