//! Pointer events raised by the view for the showcase controller.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    RestartClicked,
    PointerEntered,
    PointerLeft,
}

impl UiEvent {
    pub fn name(self) -> &'static str {
        match self {
            UiEvent::RestartClicked => "restart_clicked",
            UiEvent::PointerEntered => "pointer_entered",
            UiEvent::PointerLeft => "pointer_left",
        }
    }
}

/// Event to raise when the restart control's hover state is observed as
/// `hovered` while the showcase believes it is `current`.
pub fn hover_transition(current: bool, hovered: bool) -> Option<UiEvent> {
    match (current, hovered) {
        (false, true) => Some(UiEvent::PointerEntered),
        (true, false) => Some(UiEvent::PointerLeft),
        _ => None,
    }
}
