//! This module define main app logic

use crate::{tree::DEFAULT_ORDER, view::FractalTree};
use eframe::egui;

pub struct FractalApp {
    tree: FractalTree,
}

impl FractalApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        tracing::info!(order = DEFAULT_ORDER, "starting fractal tree viewer");
        Self {
            tree: FractalTree::new(DEFAULT_ORDER),
        }
    }
}

impl eframe::App for FractalApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                egui::widgets::global_dark_light_mode_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        frame.quit();
                    }
                });
                ui.label(FractalTree::NAME);
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::dark_canvas(ui.style()).show(ui, |ui| self.tree.ui(ui));
        });
    }
}
