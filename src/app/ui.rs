use std::time::Instant;

use eframe::egui::{CentralPanel, Color32, Context, Frame, Margin, RichText, ScrollArea, Ui, Vec2};
use itertools::Itertools;

use super::state::{HpcApp, Page};
use crate::config::{
    ACCENT_COLOR, BACKGROUND_COLOR, INITIALIZING_COLOR, LAUNCH_STEPS, OFFLINE_COLOR, ONLINE_COLOR,
    PANEL_COLOR,
};
use crate::widgets::node::node_cell;

// Узлов в ряду сетки
const GRID_COLUMNS: usize = 14;

impl HpcApp {
    pub fn render_ui(&mut self, ctx: &Context) {
        self.setup_custom_styles(ctx);

        CentralPanel::default()
            .frame(Frame::default().fill(BACKGROUND_COLOR).inner_margin(Margin::same(16)))
            .show(ctx, |ui| {
                self.render_header(ui);

                match self.page {
                    Page::Launch => self.render_launch_page(ui),
                    Page::Status => self.render_status_page(ui),
                }
            });

        // Модальное окно с ошибкой
        if let Some(error_msg) = &self.error_message.clone() {
            egui::Window::new("⚠ Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(error_msg);
                    ui.separator();
                    if ui.add_sized(Vec2::new(120.0, 32.0), egui::Button::new("OK")).clicked() {
                        self.error_message = None;
                    }
                });
        }
    }

    fn setup_custom_styles(&self, ctx: &Context) {
        let mut style = (*ctx.style()).clone();

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(22.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.spacing.button_padding = Vec2::new(10.0, 6.0);
        style.spacing.item_spacing = Vec2::new(8.0, 8.0);
        style.visuals.override_text_color = Some(Color32::from_gray(230));
        style.visuals.panel_fill = BACKGROUND_COLOR;

        ctx.set_style(style);
    }

    fn render_header(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("🖳").size(26.0).color(ACCENT_COLOR));
            ui.heading("ACE HPC CLUSTER");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("FPS: {}", self.fps as u32))
                        .small()
                        .color(Color32::GRAY),
                );
            });
        });
        ui.separator();
        ui.add_space(8.0);
    }

    fn render_launch_page(&mut self, ui: &mut Ui) {
        ui.add_space(ui.available_height() * 0.25);

        ui.vertical_centered(|ui| {
            if !self.launch.is_launching() && !self.launch.is_completed() {
                let button = egui::Button::new(
                    RichText::new("🖳  LAUNCH").size(24.0).color(Color32::WHITE),
                )
                .fill(ACCENT_COLOR)
                .min_size(Vec2::new(240.0, 72.0));

                if ui.add(button).clicked() {
                    self.start_launch(Instant::now());
                }
            } else {
                self.render_progress_sequence(ui);
            }
        });
    }

    // Чек-лист этапов запуска с полосой прогресса
    fn render_progress_sequence(&self, ui: &mut Ui) {
        let current = self.launch.current_step();
        let progress = self.launch.progress();

        ui.set_max_width(420.0);
        ui.vertical(|ui| {
            for (index, step) in LAUNCH_STEPS.iter().enumerate() {
                ui.horizontal(|ui| {
                    if index < current {
                        ui.label(RichText::new("✔").color(ONLINE_COLOR));
                    } else if index == current {
                        ui.label(RichText::new("●").color(ACCENT_COLOR));
                    } else {
                        ui.label(RichText::new("○").color(OFFLINE_COLOR));
                    }

                    // будущие этапы приглушены
                    let text = if index <= current {
                        RichText::new(*step)
                    } else {
                        RichText::new(*step).color(Color32::from_gray(120))
                    };
                    ui.label(text);
                });
            }

            ui.add_space(16.0);
            ui.add(
                egui::ProgressBar::new(progress as f32 / 100.0)
                    .fill(ACCENT_COLOR)
                    .desired_height(8.0),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("{progress}%")).monospace());
            });
        });
    }

    fn render_status_page(&mut self, ui: &mut Ui) {
        let Some(status) = &self.status else {
            return;
        };

        // Панель индикаторов
        Frame::group(ui.style())
            .fill(PANEL_COLOR)
            .inner_margin(Margin::same(12))
            .show(ui, |ui| {
                ui.heading("Cluster Performance");
                ui.add_space(8.0);
                ui.columns(4, |columns| {
                    status.nodes_gauge.show(&mut columns[0]);
                    status.cores_gauge.show(&mut columns[1]);
                    status.memory_gauge.show(&mut columns[2]);
                    status.storage_gauge.show(&mut columns[3]);
                });
            });

        ui.add_space(12.0);

        // Панель сетки узлов с легендой статусов
        Frame::group(ui.style())
            .fill(PANEL_COLOR)
            .inner_margin(Margin::same(12))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Cluster Nodes");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        legend_entry(ui, "Online", ONLINE_COLOR);
                        legend_entry(ui, "Initializing", INITIALIZING_COLOR);
                    });
                });
                ui.add_space(8.0);

                ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
                    for row in &status.grid.nodes().iter().chunks(GRID_COLUMNS) {
                        ui.horizontal(|ui| {
                            for node in row {
                                node_cell(ui, node);
                            }
                        });
                    }
                });
            });
    }
}

fn legend_entry(ui: &mut Ui, label: &str, color: Color32) {
    ui.label(RichText::new(label).small());
    ui.label(RichText::new("●").color(color));
}
