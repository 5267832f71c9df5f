use vitrine_core::gesture::PointerEvent;
use vitrine_core::track::DragOutcome;

use crate::app::VitrineApp;
use crate::panels::pointer::pointer_events;
use crate::states::LoadedImage;

/// Card image height relative to its width.
const CARD_ASPECT: f32 = 0.75;
const LABEL_HEIGHT: f32 = 28.0;
const SLIDE_SECONDS: f32 = 0.3;

pub fn show(ctx: &egui::Context, app: &mut VitrineApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        paint_background(ui, ui.available_rect_before_wrap());

        if app.gallery.media.is_empty() {
            show_placeholder(ui);
            return;
        }

        let scroll_enabled = !app.viewer.host().scroll_suspended();
        egui::ScrollArea::vertical()
            .enable_scrolling(scroll_enabled)
            .show(ui, |ui| {
                show_header(ui, app);
                ui.add_space(8.0);
                show_track(ui, app);
                ui.add_space(8.0);
                show_dots(ui, app);
            });
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(245));
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open a folder of images to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(120)),
        );
    });
}

fn show_header(ui: &mut egui::Ui, app: &mut VitrineApp) {
    ui.horizontal(|ui| {
        let title = app
            .gallery
            .folder
            .as_ref()
            .and_then(|f| f.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        ui.heading(title);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_enabled(app.track.can_next(), egui::Button::new("Next ⏵")).clicked() {
                app.track.next();
            }
            if ui.add_enabled(app.track.can_prev(), egui::Button::new("⏴ Prev")).clicked() {
                app.track.prev();
            }

            let mut autoplay = app.track.autoplay_enabled();
            if ui.checkbox(&mut autoplay, "Autoplay").changed() {
                app.track.set_autoplay(autoplay);
            }
        });
    });
}

fn show_track(ui: &mut egui::Ui, app: &mut VitrineApp) {
    let width = ui.available_width();
    app.track.set_viewport_width(width);
    let per_view = app.config.track.breakpoints.items_per_view(width);
    app.track.set_items_per_view(per_view);

    let card_width = app.track.layout().card_width;
    let height = card_width * CARD_ASPECT + LABEL_HEIGHT;
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click_and_drag());

    // The lightbox owns all input while open.
    if !app.viewer.is_open() {
        handle_pointer(ui, &response, app);
    }

    let layout = app.track.layout();
    let time = if app.track.is_dragging() { 0.0 } else { SLIDE_SECONDS };
    let offset = ui
        .ctx()
        .animate_value_with_time(response.id.with("offset"), layout.offset_px, time);

    let painter = ui.painter_at(rect);
    let image_height = layout.card_width * CARD_ASPECT;
    for (i, item) in app.track.items().iter().enumerate() {
        let x = rect.left() + offset + i as f32 * layout.stride;
        let card = egui::Rect::from_min_size(
            egui::pos2(x, rect.top()),
            egui::vec2(layout.card_width, image_height),
        );
        if card.right() < rect.left() || card.left() > rect.right() {
            continue;
        }
        draw_card(&painter, card, app.gallery.image(item));
        painter.text(
            egui::pos2(card.center().x, card.bottom() + 6.0),
            egui::Align2::CENTER_TOP,
            item.label(),
            egui::FontId::proportional(14.0),
            egui::Color32::from_gray(40),
        );
    }
}

fn handle_pointer(ui: &egui::Ui, response: &egui::Response, app: &mut VitrineApp) {
    for event in pointer_events(ui, response, app.track.is_dragging()) {
        let release_x = match event {
            PointerEvent::Up { pos, .. } => Some(pos.x),
            _ => None,
        };
        let outcome = app.track.handle_pointer(event);
        if let (Some(DragOutcome::Tap), Some(x)) = (outcome, release_x) {
            if let Some(index) = app.track.card_at(x) {
                app.open_viewer(index);
            }
        }
    }
}

fn draw_card(painter: &egui::Painter, card: egui::Rect, image: Option<&LoadedImage>) {
    let rounding = 6.0;
    match image {
        Some(img) => {
            let uv = cover_uv(card.size(), img.texture.size_vec2());
            painter.add(
                egui::epaint::RectShape::filled(card, rounding, egui::Color32::WHITE)
                    .with_texture(img.texture.id(), uv),
            );
        }
        None => {
            painter.rect_filled(card, rounding, egui::Color32::from_gray(220));
        }
    }
}

/// Texture coordinates that fill `target` with the image, cropping the
/// overflowing axis around the centre.
fn cover_uv(target: egui::Vec2, image: egui::Vec2) -> egui::Rect {
    let full = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    if target.y <= 0.0 || image.x <= 0.0 || image.y <= 0.0 {
        return full;
    }
    let target_aspect = target.x / target.y;
    let image_aspect = image.x / image.y;
    if image_aspect > target_aspect {
        let w = target_aspect / image_aspect;
        egui::Rect::from_min_max(egui::pos2(0.5 - w / 2.0, 0.0), egui::pos2(0.5 + w / 2.0, 1.0))
    } else {
        let h = image_aspect / target_aspect;
        egui::Rect::from_min_max(egui::pos2(0.0, 0.5 - h / 2.0), egui::pos2(1.0, 0.5 + h / 2.0))
    }
}

fn show_dots(ui: &mut egui::Ui, app: &mut VitrineApp) {
    let positions = app.track.positions();
    if positions <= 1 {
        return;
    }
    ui.horizontal(|ui| {
        for i in 0..positions {
            let active = i == app.track.active_index();
            let (rect, response) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::click());
            let color = if active {
                egui::Color32::from_gray(40)
            } else {
                egui::Color32::from_gray(180)
            };
            ui.painter().circle_filled(rect.center(), 4.0, color);
            if response.on_hover_text(format!("Position {}", i + 1)).clicked() {
                app.track.go_to(i as i64);
            }
        }
    });
}
