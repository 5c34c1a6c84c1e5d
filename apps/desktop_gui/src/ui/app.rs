use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::StartupConfig;
use crate::controller::events::{UiErrorCategory, UiEvent};
use crate::controller::reducer::ViewController;
use crate::ui::panels;

pub const WINDOW_TITLE: &str = "Weather Summarizer & AI Travel Assistant";

fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::Remote => "Service",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

fn server_environment_label(api_base: &str) -> &'static str {
    let server = api_base.to_ascii_lowercase();
    if server.contains("127.0.0.1") || server.contains("localhost") {
        "Local"
    } else if server.contains("staging") {
        "Staging"
    } else {
        "Remote"
    }
}

pub struct TravelAssistantApp {
    ui_rx: Receiver<UiEvent>,
    controller: ViewController,
    api_base: String,
}

impl TravelAssistantApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        Self {
            ui_rx,
            controller: ViewController::new(cmd_tx, startup.ignore_stale_responses),
            api_base: startup.api_base,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.controller.apply(event);
        }
    }

    fn show_status_banner(&mut self, ctx: &egui::Context) {
        let Some(banner) = self.controller.banner().cloned() else {
            return;
        };
        egui::TopBottomPanel::top("status_banner").show(ctx, |ui| {
            egui::Frame::NONE
                .fill(egui::Color32::from_rgb(111, 53, 53))
                .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "{} error: {}",
                                err_label(banner.category()),
                                banner.message()
                            ))
                            .color(egui::Color32::WHITE),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.controller.dismiss_banner();
                            }
                        });
                    });
                });
        });
    }

    fn show_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.weak(format!(
                    "{} service: {}",
                    server_environment_label(&self.api_base),
                    self.api_base
                ));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(self.controller.status());
                });
            });
        });
    }

    fn show_sections(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(egui::RichText::new(WINDOW_TITLE).size(26.0));
                });
                ui.add_space(12.0);

                panels::extraction_section(ui, &mut self.controller);
                ui.add_space(16.0);
                panels::accommodation_section(ui, &mut self.controller);
                ui.add_space(24.0);
                panels::full_guide_section(ui, &mut self.controller);
            });
        });
    }
}

impl eframe::App for TravelAssistantApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_status_banner(ctx);
        self.show_footer(ctx);
        self.show_sections(ctx);

        if self.controller.any_in_flight() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
