//! Applies UI events to the showcase runtime.

use showcase_core::Showcase;

use crate::controller::events::UiEvent;

pub fn dispatch_ui_event(showcase: &mut Showcase, event: UiEvent) {
    tracing::debug!(
        event = event.name(),
        at_ms = showcase.now().as_millis() as u64,
        "applying ui event"
    );
    match event {
        UiEvent::RestartClicked => showcase.restart(),
        UiEvent::PointerEntered => showcase.set_hovering(true),
        UiEvent::PointerLeft => showcase.set_hovering(false),
    }
}
