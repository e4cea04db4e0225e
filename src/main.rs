use eframe::NativeOptions;
use fourier_path::config::ConfigManager;
use fourier_path::ui::FourierPathApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = ConfigManager::load_or_default(None);
    log::info!("Starting with window {}x{}", config.window.width, config.window.height);

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_resizable(config.window.resizable)
            .with_maximize_button(config.window.resizable)
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "Fourier Path",
        native_options,
        Box::new(move |cc| Ok(Box::new(FourierPathApp::new(cc, &config)))),
    )
}
