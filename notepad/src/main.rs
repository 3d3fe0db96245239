//! Simple Notepad, a minimal plain text editor.

mod app;
mod command;
mod config;
mod document;
mod error;
mod notepad;

use app::NotepadApp;
use config::NotepadConfig;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = NotepadConfig::default();
    let app_name = config.app_name.clone();
    let theme = padcore::PadTheme {
        editor_font_size: config.editor_font_size,
        ..Default::default()
    };
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(app_name.clone()),
        centered: true,
        ..Default::default()
    };

    log::info!("starting {}", app_name);
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| {
            theme.apply(&cc.egui_ctx);
            Box::new(NotepadApp::new(cc, config))
        }),
    )
}
