use skin_lesion_classifier::config::Config;
use skin_lesion_classifier::gui::app::SkinLesionApp;
use skin_lesion_classifier::gui::labels;
use skin_lesion_classifier::library::logger::impl_console::LoggerConsole;
use skin_lesion_classifier::library::logger::interface::Logger;
use skin_lesion_classifier::predictor::Predictor;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let predictor = Predictor::load(&config, logger.clone()).map_err(|e| {
        let _ = logger.error(&format!(
            "failed to load model from {}: {}",
            config.model_dir.display(),
            e
        ));
        e
    })?;
    logger.info(&format!("inference on {}", predictor.device()))?;

    let start_dir = std::env::current_dir()?;
    let app = SkinLesionApp::new(predictor, logger, config.language, start_dir);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(labels::window_title(config.language))
            .with_inner_size([900.0, 450.0])
            .with_min_inner_size([760.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        labels::window_title(config.language),
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}
