use vitrine_core::geometry::Size;
use vitrine_core::gesture::Key;

use crate::app::VitrineApp;
use crate::panels::pointer::pointer_events;

const TOP_BAR_HEIGHT: f32 = 48.0;
const THUMB_STRIP_HEIGHT: f32 = 84.0;
const FOOTER_HEIGHT: f32 = 32.0;
const ZOOM_SECONDS: f32 = 0.2;

pub fn show(ctx: &egui::Context, app: &mut VitrineApp) {
    if !app.viewer.is_open() {
        return;
    }
    handle_keys(ctx, app);
    if !app.viewer.is_open() {
        return;
    }

    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new("lightbox"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.set_min_size(screen.size());
            ui.painter()
                .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(235));

            let top = egui::Rect::from_min_size(screen.min, egui::vec2(screen.width(), TOP_BAR_HEIGHT));
            let bottom_height = FOOTER_HEIGHT
                + if app.ui_state.hide_thumbnails { 0.0 } else { THUMB_STRIP_HEIGHT };
            let stage = egui::Rect::from_min_max(
                egui::pos2(screen.left(), top.bottom()),
                egui::pos2(screen.right(), screen.bottom() - bottom_height),
            );
            let footer = egui::Rect::from_min_max(
                egui::pos2(screen.left(), stage.bottom()),
                egui::pos2(screen.right(), screen.bottom()),
            );

            show_stage(ui, app, stage);
            show_top_bar(ui, app, top);
            show_side_arrows(ui, app, stage);
            show_footer(ui, app, footer);
        });
}

fn handle_keys(ctx: &egui::Context, app: &mut VitrineApp) {
    let keys: Vec<Key> = ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key, pressed: true, ..
                } => Some(map_key(*key)),
                _ => None,
            })
            .collect()
    });
    for key in keys {
        app.viewer.handle_key(key);
    }
}

fn map_key(key: egui::Key) -> Key {
    match key {
        egui::Key::Escape => Key::Escape,
        egui::Key::ArrowLeft => Key::ArrowLeft,
        egui::Key::ArrowRight => Key::ArrowRight,
        egui::Key::Plus => Key::Plus,
        egui::Key::Equals => Key::Equals,
        egui::Key::Minus => Key::Minus,
        _ => Key::Other,
    }
}

fn show_stage(ui: &mut egui::Ui, app: &mut VitrineApp, stage: egui::Rect) {
    let response = ui.interact(stage, ui.id().with("stage"), egui::Sense::click_and_drag());
    app.viewer
        .set_container_size(Size::new(stage.width(), stage.height()));

    let Some(item) = app.viewer.current().cloned() else {
        return;
    };
    let Some(image) = app.gallery.image(&item) else {
        ui.painter().text(
            stage.center(),
            egui::Align2::CENTER_CENTER,
            "Loading...",
            egui::FontId::proportional(16.0),
            egui::Color32::from_gray(160),
        );
        return;
    };
    let texture_id = image.texture.id();
    app.viewer.set_natural_size(image.natural_size());

    for event in pointer_events(ui, &response, app.viewer.host().is_capturing()) {
        app.viewer.handle_pointer(event);
    }

    let Some(geometry) = app.viewer.geometry() else {
        return;
    };
    let contained = geometry.contained_size();
    let transform = app.viewer.transform();
    let time = if transform.animate { ZOOM_SECONDS } else { 0.0 };
    let anim = |name: &str, value: f32| {
        ui.ctx()
            .animate_value_with_time(response.id.with(name), value, time)
    };
    let scale = anim("scale", transform.scale);
    let offset = egui::vec2(anim("x", transform.offset.x), anim("y", transform.offset.y));

    let size = egui::vec2(contained.width, contained.height) * scale;
    let rect = egui::Rect::from_center_size(stage.center() + offset, size);
    ui.painter_at(stage).image(
        texture_id,
        rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn show_top_bar(ui: &mut egui::Ui, app: &mut VitrineApp, top: egui::Rect) {
    let mut bar = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(top.shrink2(egui::vec2(12.0, 8.0)))
            .layout(egui::Layout::left_to_right(egui::Align::Center)),
    );

    if let Some((pos, total)) = app.viewer.counter() {
        bar.label(
            egui::RichText::new(format!("{pos} / {total}"))
                .color(egui::Color32::WHITE)
                .size(16.0),
        );
    }

    bar.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui.button("✖").on_hover_text("Close (Esc)").clicked() {
            app.viewer.close();
            return;
        }

        let fullscreen = app.viewer.state().is_some_and(|s| s.is_fullscreen);
        let label = if fullscreen { "Exit Fullscreen" } else { "Fullscreen" };
        if ui.button(label).clicked() {
            app.viewer.toggle_fullscreen();
        }

        let (zoom, min, max) = {
            let config = app.viewer.config();
            let zoom = app.viewer.state().map_or(config.min_zoom, |s| s.zoom_level);
            (zoom, config.min_zoom, config.max_zoom)
        };
        if ui.add_enabled(zoom < max, egui::Button::new("+")).on_hover_text("Zoom in").clicked() {
            app.viewer.zoom_in();
        }
        ui.label(
            egui::RichText::new(format!("{:.0}%", zoom * 100.0)).color(egui::Color32::WHITE),
        );
        if ui.add_enabled(zoom > min, egui::Button::new("-")).on_hover_text("Zoom out").clicked() {
            app.viewer.zoom_out();
        }
    });
}

fn show_side_arrows(ui: &mut egui::Ui, app: &mut VitrineApp, stage: egui::Rect) {
    let size = egui::vec2(40.0, 64.0);
    if app.viewer.can_prev() {
        let rect = egui::Rect::from_center_size(
            egui::pos2(stage.left() + 32.0, stage.center().y),
            size,
        );
        if ui.put(rect, egui::Button::new("⏴")).clicked() {
            app.viewer.prev();
        }
    }
    if app.viewer.can_next() {
        let rect = egui::Rect::from_center_size(
            egui::pos2(stage.right() - 32.0, stage.center().y),
            size,
        );
        if ui.put(rect, egui::Button::new("⏵")).clicked() {
            app.viewer.next();
        }
    }
}

fn show_footer(ui: &mut egui::Ui, app: &mut VitrineApp, footer: egui::Rect) {
    let mut area = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(footer.shrink2(egui::vec2(12.0, 4.0)))
            .layout(egui::Layout::top_down(egui::Align::Center)),
    );

    if !app.ui_state.hide_thumbnails {
        show_thumbnails(&mut area, app);
    }

    if let Some(item) = app.viewer.current() {
        area.label(
            egui::RichText::new(item.label())
                .color(egui::Color32::from_gray(220))
                .size(14.0),
        );
    }
}

fn show_thumbnails(ui: &mut egui::Ui, app: &mut VitrineApp) {
    let active = app.viewer.state().map(|s| s.active_index);
    let thumb = egui::vec2(THUMB_STRIP_HEIGHT - 16.0, THUMB_STRIP_HEIGHT - 16.0);
    let mut clicked = None;

    egui::ScrollArea::horizontal()
        .id_salt("lightbox_thumbs")
        .max_height(THUMB_STRIP_HEIGHT)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for (i, item) in app.viewer.media().iter().enumerate() {
                    let (rect, response) = ui.allocate_exact_size(thumb, egui::Sense::click());
                    match app.gallery.image(item) {
                        Some(img) => {
                            ui.painter().image(
                                img.texture.id(),
                                rect,
                                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                                egui::Color32::WHITE,
                            );
                        }
                        None => {
                            ui.painter().rect_filled(rect, 4.0, egui::Color32::from_gray(60));
                        }
                    }
                    if active == Some(i) {
                        ui.painter().rect_stroke(
                            rect,
                            4.0,
                            egui::Stroke::new(2.0, egui::Color32::WHITE),
                            egui::StrokeKind::Outside,
                        );
                    }
                    if response.on_hover_text(item.label()).clicked() {
                        clicked = Some(i);
                    }
                }
            });
        });

    if let Some(i) = clicked {
        app.viewer.go_to(i as i64);
    }
}
