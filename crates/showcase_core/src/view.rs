//! View renderer: a pure mapping from [`ViewState`] to what the host paints.
//!
//! Colors and durations are expressed without a UI toolkit so every host
//! (window, terminal, test) agrees on the same model.

use std::time::Duration;

use crate::{phase::Phase, reducer::ViewState};

pub const HOVER_FADE: Duration = Duration::from_millis(300);
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(1_000);
pub const ENTRANCE_RISE_PX: f32 = 40.0;
pub const GRADIENT_CYCLE: Duration = Duration::from_millis(3_000);
pub const RESTART_LABEL: &str = "Restart";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let (a, b) = (a as f32, b as f32);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        };
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

pub mod palette {
    use super::Rgb;

    pub const PAGE: Rgb = Rgb(243, 244, 246);
    pub const PAGE_HOVER: Rgb = Rgb(0, 0, 0);
    pub const CARD: Rgb = Rgb(255, 255, 255);
    pub const CODE_BAR: Rgb = Rgb(31, 41, 55);
    pub const CODE_BAR_TEXT: Rgb = Rgb(255, 255, 255);
    pub const HEADER_TEXT: Rgb = Rgb(17, 24, 39);
    pub const CODE_TEXT: Rgb = Rgb(55, 65, 81);
    pub const GRADIENT_FROM: Rgb = Rgb(255, 0, 255);
    pub const GRADIENT_TO: Rgb = Rgb(0, 255, 255);

    pub const BUTTON_IDLE: [Rgb; 3] = [Rgb(45, 212, 191), Rgb(99, 102, 241), Rgb(147, 51, 234)];
    pub const BUTTON_HOVER: [Rgb; 3] = [Rgb(253, 224, 71), Rgb(234, 179, 8), Rgb(161, 98, 7)];
    pub const BUTTON_ORB_IDLE: Rgb = Rgb(168, 85, 247);
    pub const BUTTON_ORB_HOVER: Rgb = Rgb(202, 138, 4);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Plain,
    /// Animated magenta-to-cyan text fill.
    Gradient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetCard {
    pub phase: Phase,
    pub language: &'static str,
    pub header: &'static str,
    pub code: &'static str,
    pub header_style: HeaderStyle,
    pub animate_entrance: bool,
}

impl SnippetCard {
    fn new(state: &ViewState, phase: Phase, animate_entrance: bool) -> Self {
        Self {
            phase,
            language: phase.label(),
            header: state.header_for(phase),
            code: phase.snippet(),
            header_style: match phase {
                Phase::Css => HeaderStyle::Gradient,
                Phase::Html | Phase::JavaScript => HeaderStyle::Plain,
            },
            animate_entrance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Single(SnippetCard),
    Gallery([SnippetCard; 3]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestartControl {
    pub label: &'static str,
    pub hovering: bool,
    pub fill: [Rgb; 3],
    pub orb: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub background: Rgb,
    /// Snippet content fades out entirely while the restart control is hovered.
    pub content_visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewModel {
    pub layout: Layout,
    pub restart: Option<RestartControl>,
    pub presentation: Presentation,
}

impl ViewModel {
    pub fn cards(&self) -> &[SnippetCard] {
        match &self.layout {
            Layout::Single(card) => std::slice::from_ref(card),
            Layout::Gallery(cards) => cards,
        }
    }
}

pub fn render(state: &ViewState) -> ViewModel {
    let layout = if state.all_revealed {
        Layout::Gallery(Phase::ORDER.map(|phase| SnippetCard::new(state, phase, true)))
    } else {
        Layout::Single(SnippetCard::new(state, state.phase, false))
    };

    let restart = state.all_revealed.then(|| RestartControl {
        label: RESTART_LABEL,
        hovering: state.hovering,
        fill: if state.hovering {
            palette::BUTTON_HOVER
        } else {
            palette::BUTTON_IDLE
        },
        orb: if state.hovering {
            palette::BUTTON_ORB_HOVER
        } else {
            palette::BUTTON_ORB_IDLE
        },
    });

    ViewModel {
        layout,
        restart,
        presentation: Presentation {
            background: if state.hovering {
                palette::PAGE_HOVER
            } else {
                palette::PAGE
            },
            content_visible: !state.hovering,
        },
    }
}

/// Cubic ease-in-out over `0..=1`.
pub fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Position of the gradient window (`0..=1`) at `elapsed`: sweeps across and
/// back once per [`GRADIENT_CYCLE`].
pub fn gradient_position(elapsed: Duration) -> f32 {
    let cycle = GRADIENT_CYCLE.as_secs_f64();
    let t = (elapsed.as_secs_f64() % cycle / cycle) as f32;
    if t < 0.5 {
        ease(t * 2.0)
    } else {
        ease((1.0 - t) * 2.0)
    }
}

/// Fill color for a glyph at `offset` (`0..=1` across the header text). The
/// gradient is twice the text width, so the window shows half of it.
pub fn gradient_color(offset: f32, position: f32) -> Rgb {
    let t = offset.clamp(0.0, 1.0) * 0.5 + position.clamp(0.0, 1.0) * 0.5;
    palette::GRADIENT_FROM.lerp(palette::GRADIENT_TO, t)
}

/// Opacity and downward offset of a gallery card `progress` (`0..=1`) of the
/// way through its entrance.
pub fn entrance_frame(progress: f32) -> (f32, f32) {
    let eased = ease(progress);
    (eased, (1.0 - eased) * ENTRANCE_RISE_PX)
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
