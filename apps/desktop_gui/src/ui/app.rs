use std::time::Duration;

use eframe::egui;
use showcase_core::{
    view::{self, palette, HeaderStyle, Layout, SnippetCard, ViewModel, ENTRANCE_DURATION, HOVER_FADE},
    Showcase, Timing,
};

use crate::controller::{
    events::{hover_transition, UiEvent},
    orchestration::dispatch_ui_event,
};
use crate::ui::cards;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const SINGLE_MAX_WIDTH: f32 = 720.0;
const GALLERY_MAX_WIDTH: f32 = 1280.0;

pub struct ShowcaseApp {
    showcase: Showcase,
    /// Frame clock reading (seconds) at the first painted frame.
    mounted_at: Option<f64>,
    gallery_since: Option<Duration>,
}

impl ShowcaseApp {
    pub fn new(timing: Timing) -> Self {
        Self {
            showcase: Showcase::mount(timing),
            mounted_at: None,
            gallery_since: None,
        }
    }

    fn elapsed(&mut self, now_secs: f64) -> Duration {
        let mounted_at = *self.mounted_at.get_or_insert(now_secs);
        elapsed_between(mounted_at, now_secs)
    }

    fn track_gallery(&mut self, elapsed: Duration) {
        match (self.showcase.state().all_revealed, self.gallery_since) {
            (true, None) => self.gallery_since = Some(elapsed),
            (false, Some(_)) => self.gallery_since = None,
            _ => {}
        }
    }

    fn entrance_progress(&self, elapsed: Duration) -> f32 {
        match self.gallery_since {
            Some(since) => {
                let shown = elapsed.saturating_sub(since).as_secs_f32();
                (shown / ENTRANCE_DURATION.as_secs_f32()).clamp(0.0, 1.0)
            }
            None => 1.0,
        }
    }

    fn schedule_repaint(
        &self,
        ctx: &egui::Context,
        elapsed: Duration,
        hover_t: f32,
        entrance: f32,
        model: &ViewModel,
    ) {
        let fading = hover_t > 0.0 && hover_t < 1.0;
        let gradient = model
            .cards()
            .iter()
            .any(|card| card.header_style == HeaderStyle::Gradient);
        if fading || entrance < 1.0 || gradient {
            ctx.request_repaint_after(FRAME_INTERVAL);
        } else if let Some(deadline) = self.showcase.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_sub(elapsed));
        }
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let elapsed = self.elapsed(ctx.input(|i| i.time));
        self.showcase.advance_to(elapsed);
        self.track_gallery(elapsed);

        let model = self.showcase.view();
        let hover_t = ctx.animate_bool_with_time(
            egui::Id::new("showcase_hover_fade"),
            !model.presentation.content_visible,
            HOVER_FADE.as_secs_f32(),
        );
        let background = palette::PAGE.lerp(palette::PAGE_HOVER, hover_t);
        let entrance = self.entrance_progress(elapsed);
        let mut events = Vec::new();

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(cards::color(background))
                    .inner_margin(egui::Margin::same(32)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.scope(|ui| {
                            ui.multiply_opacity(1.0 - hover_t);
                            match &model.layout {
                                Layout::Single(card) => {
                                    ui.vertical_centered(|ui| {
                                        ui.set_max_width(SINGLE_MAX_WIDTH);
                                        cards::show_card(ui, card, elapsed);
                                    });
                                }
                                Layout::Gallery(gallery) => {
                                    show_gallery(ui, gallery, elapsed, entrance);
                                }
                            }
                        });

                        if let Some(control) = &model.restart {
                            ui.add_space(48.0);
                            ui.vertical_centered(|ui| {
                                let response = cards::restart_button(ui, control);
                                if let Some(event) =
                                    hover_transition(control.hovering, response.hovered())
                                {
                                    events.push(event);
                                }
                                if response.clicked() {
                                    events.push(UiEvent::RestartClicked);
                                }
                            });
                        }
                    });
            });

        for event in events {
            dispatch_ui_event(&mut self.showcase, event);
        }
        self.track_gallery(elapsed);
        self.schedule_repaint(ctx, elapsed, hover_t, entrance, &model);
    }
}

fn show_gallery(ui: &mut egui::Ui, gallery: &[SnippetCard; 3], elapsed: Duration, entrance: f32) {
    let (opacity, rise) = view::entrance_frame(entrance);
    ui.vertical_centered(|ui| {
        ui.set_max_width(GALLERY_MAX_WIDTH);
        ui.columns(gallery.len(), |columns| {
            for (column, card) in columns.iter_mut().zip(gallery.iter()) {
                column.scope(|ui| {
                    if card.animate_entrance {
                        ui.multiply_opacity(opacity);
                        ui.add_space(rise);
                    }
                    cards::show_card(ui, card, elapsed);
                });
            }
        });
    });
}

fn elapsed_between(mounted_at: f64, now_secs: f64) -> Duration {
    Duration::from_secs_f64((now_secs - mounted_at).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_measured_from_first_frame() {
        let mut app = ShowcaseApp::new(Timing::default());
        assert_eq!(app.elapsed(12.5), Duration::ZERO);
        assert_eq!(app.elapsed(14.5), Duration::from_secs(2));
    }

    #[test]
    fn elapsed_never_goes_negative() {
        assert_eq!(elapsed_between(10.0, 9.0), Duration::ZERO);
    }

    #[test]
    fn entrance_runs_from_gallery_reveal() {
        let mut app = ShowcaseApp::new(Timing::default());
        assert_eq!(app.entrance_progress(Duration::ZERO), 1.0);

        app.showcase.advance_to(Duration::from_millis(6_000));
        app.track_gallery(Duration::from_millis(6_000));
        assert_eq!(app.entrance_progress(Duration::from_millis(6_000)), 0.0);
        assert!((app.entrance_progress(Duration::from_millis(6_500)) - 0.5).abs() < 1e-6);
        assert_eq!(app.entrance_progress(Duration::from_millis(9_000)), 1.0);

        app.showcase.restart();
        app.track_gallery(Duration::from_millis(9_000));
        assert_eq!(app.entrance_progress(Duration::from_millis(9_000)), 1.0);
    }
}
