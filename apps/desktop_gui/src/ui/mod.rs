//! UI layer for the desktop showcase: app shell and snippet card painting.

pub mod app;
pub mod cards;

pub use app::ShowcaseApp;
