//! Colors and frames shared by the travel sections.

use eframe::egui;

pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(220, 92, 92);
pub const LOADING_TEXT: egui::Color32 = egui::Color32::from_rgb(120, 160, 220);
pub const PREMIUM_ACCENT: egui::Color32 = egui::Color32::from_rgb(214, 168, 64);

pub fn lighten_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

pub fn section_frame(ui: &egui::Ui, premium: bool) -> egui::Frame {
    let stroke_color = if premium {
        PREMIUM_ACCENT
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke.color
    };
    egui::Frame::NONE
        .fill(lighten_color(ui.visuals().panel_fill, 0.03))
        .stroke(egui::Stroke::new(1.0, stroke_color))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::symmetric(16, 14))
}

pub fn result_frame(ui: &egui::Ui) -> egui::Frame {
    egui::Frame::NONE
        .fill(ui.visuals().faint_bg_color.gamma_multiply(0.8))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 10))
}

pub fn premium_tag(ui: &mut egui::Ui) {
    egui::Frame::NONE
        .fill(PREMIUM_ACCENT)
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new("Premium")
                    .small()
                    .strong()
                    .color(egui::Color32::BLACK),
            );
        });
}
