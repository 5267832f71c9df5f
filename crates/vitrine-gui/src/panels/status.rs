use crate::app::VitrineApp;

pub fn show(ctx: &egui::Context, app: &mut VitrineApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area: fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for msg in &app.ui_state.log_messages {
                    ui.label(msg);
                }
            });

        ui.horizontal(|ui| {
            let total = app.gallery.media.len();
            ui.label(format!("{}/{} loaded", app.gallery.loaded_count(), total));
            ui.separator();
            ui.label(format!("{} per view", app.track.items_per_view()));
            ui.separator();
            ui.label(format!(
                "Position {}/{}",
                app.track.active_index() + 1,
                app.track.positions()
            ));
            if app.track.autoplay_enabled() {
                ui.separator();
                ui.label("Autoplay");
            }
            if app.viewer.is_open() {
                ui.separator();
                ui.label(format!("Viewer: {}", app.viewer.phase()));
            }
        });

        ui.add_space(2.0);
    });
}
