#![forbid(unsafe_code)]
#![warn(clippy::all, rust_2018_idioms)]

mod app;
mod error;
pub mod tree;
mod view;

pub use app::FractalApp;
pub use error::{TreeError, TreeResult};
pub use tree::{FractalRenderer, Point, Rgb, Segment, Segments, Surface};

#[cfg(target_arch = "wasm32")]
use eframe::wasm_bindgen::{self, prelude::*};

/// Entry point for the web build, called from the page with the id of the canvas to draw on.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), eframe::wasm_bindgen::JsValue> {
    // Make sure panics are logged using `console.error`.
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    eframe::start_web(canvas_id, Box::new(|cc| Box::new(FractalApp::new(cc))))
}
