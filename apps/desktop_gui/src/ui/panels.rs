//! The three travel sections. Each reads its own flow slice from the
//! controller and triggers only its own request.

use eframe::egui;

use crate::controller::reducer::{FlowState, ViewController};
use crate::ui::render::{accommodation_view, extraction_fields, full_guide_view, LabeledField};
use crate::ui::theme;

pub fn extraction_section(ui: &mut egui::Ui, controller: &mut ViewController) {
    theme::section_frame(ui, false).show(ui, |ui| {
        ui.heading("Extract Location & Date");
        ui.add_space(4.0);
        ui.add(
            egui::TextEdit::multiline(&mut controller.extract_query)
                .id_salt("extract_query")
                .hint_text("e.g., What's the weather in Paris on 2023-06-01?")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        if ui
            .add_enabled(controller.can_extract(), egui::Button::new("Extract & Summarize"))
            .clicked()
        {
            controller.extract();
        }

        flow_status(ui, controller.extraction(), "Loading...", |ui, result| {
            theme::result_frame(ui).show(ui, |ui| {
                for field in extraction_fields(result) {
                    labeled_row(ui, &field);
                }
            });
        });
    });
}

pub fn accommodation_section(ui: &mut egui::Ui, controller: &mut ViewController) {
    theme::section_frame(ui, true).show(ui, |ui| {
        premium_heading(ui, "Travel Accommodation Guide");
        ui.add(
            egui::TextEdit::multiline(&mut controller.travel_query)
                .id_salt("accommodation_query")
                .hint_text("e.g., I am visiting Paris next month. Can you suggest accommodation?")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        if ui
            .add_enabled(
                controller.can_fetch_accommodation(),
                egui::Button::new("Get Accommodation Guide"),
            )
            .clicked()
        {
            controller.fetch_accommodation();
        }

        flow_status(
            ui,
            controller.accommodation(),
            "Loading accommodation guide...",
            |ui, result| {
                let view = accommodation_view(result);
                theme::result_frame(ui).show(ui, |ui| {
                    labeled_row(ui, &view.location);
                    labeled_row(ui, &view.date);
                    ui.label(egui::RichText::new("Accommodation Suggestions:").strong());
                    ui.add_space(4.0);
                    ui.label(view.suggestions);
                });
            },
        );
    });
}

pub fn full_guide_section(ui: &mut egui::Ui, controller: &mut ViewController) {
    theme::section_frame(ui, true).show(ui, |ui| {
        premium_heading(ui, "Full Travel Guide");
        ui.add(
            egui::TextEdit::multiline(&mut controller.travel_query)
                .id_salt("full_guide_query")
                .hint_text("Enter your travel query here...")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        if ui
            .add_enabled(
                controller.can_fetch_full_guide(),
                egui::Button::new("Get Full Travel Guide"),
            )
            .clicked()
        {
            controller.fetch_full_guide();
        }

        flow_status(
            ui,
            controller.full_guide(),
            "Loading full travel guide...",
            |ui, result| {
                let Some(view) = full_guide_view(result) else {
                    return;
                };
                theme::result_frame(ui).show(ui, |ui| {
                    ui.label(egui::RichText::new(view.formatted_response).monospace());
                    ui.separator();

                    ui.label(egui::RichText::new("Day-wise Itinerary").strong().size(16.0));
                    for day in view.days {
                        ui.label(egui::RichText::new(day.label).strong());
                        for item in day.items {
                            ui.horizontal_wrapped(|ui| {
                                ui.label("•");
                                ui.label(item);
                            });
                        }
                        ui.add_space(8.0);
                    }
                    ui.separator();

                    ui.label(egui::RichText::new("Travel Summary").strong().size(16.0));
                    ui.label(view.summary);
                });
            },
        );
    });
}

fn flow_status<T>(
    ui: &mut egui::Ui,
    state: &FlowState<T>,
    loading_caption: &str,
    show_result: impl FnOnce(&mut egui::Ui, &T),
) {
    match state {
        FlowState::Idle => {}
        FlowState::Loading => {
            ui.colored_label(theme::LOADING_TEXT, loading_caption);
        }
        FlowState::Error(message) => {
            ui.colored_label(theme::ERROR_TEXT, message.as_str());
        }
        FlowState::Success(result) => show_result(ui, result),
    }
}

fn labeled_row(ui: &mut egui::Ui, field: &LabeledField) {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new(field.label).strong());
        ui.label(field.value.as_str());
    });
}

fn premium_heading(ui: &mut egui::Ui, title: &str) {
    ui.horizontal(|ui| {
        ui.heading(title);
        theme::premium_tag(ui);
    });
    ui.add_space(4.0);
}
