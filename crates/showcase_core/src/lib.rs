//! Timer-driven snippet showcase: cycles through HTML, CSS and JavaScript
//! samples, then reveals all three with a restart control.

pub mod animator;
pub mod config;
pub mod error;
pub mod phase;
pub mod reducer;
pub mod scheduler;
pub mod sequencer;
pub mod showcase;
pub mod view;

pub use config::{load_timing, Timing, TimingOverrides};
pub use error::ShowcaseError;
pub use phase::Phase;
pub use reducer::ViewState;
pub use showcase::Showcase;
pub use view::ViewModel;
