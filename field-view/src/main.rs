//! Application entry point for the Farfly showcase.
//!
//! This binary sets up logging and eframe/egui, then delegates all
//! interactive logic and rendering to [`Viewer`] from the `viewer` module.

mod background;
mod pages;
mod theme;
mod viewer;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use viewer::Viewer;

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .init();

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "FARFLY",
        options,
        Box::new(|_cc| {
            // Construct the root app state for the showcase.
            Ok(Box::new(Viewer::new()))
        }),
    )
}
