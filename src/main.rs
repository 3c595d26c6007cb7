//! CVForge - ATS-friendly resume builder
//!
//! A Rust-based resume editor with a form panel, live preview, and
//! plain-text export for printing.

mod app;
mod core;
mod ui;

use app::CvForgeApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting CVForge...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("CVForge"),
        ..Default::default()
    };

    eframe::run_native(
        "CVForge",
        native_options,
        Box::new(|cc| Ok(Box::new(CvForgeApp::new(cc)))),
    )
}
