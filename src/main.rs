#![forbid(unsafe_code)]
#![cfg_attr(not(debug_assertions), deny(warnings))] // Forbid warnings in release builds
#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] //Hide console window in release builds on Windows, this blocks stdout.

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    tracing_subscriber::fmt::init();

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(eframe::egui::vec2(400.0, 440.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Fractal Tree",
        native_options,
        Box::new(|cc| Box::new(fractal_tree::FractalApp::new(cc))),
    );
}

// The web build starts from `fractal_tree::start` instead.
#[cfg(target_arch = "wasm32")]
fn main() {}
