use skin_lesion_classifier::config::Config;
use skin_lesion_classifier::library::logger::impl_console::LoggerConsole;
use skin_lesion_classifier::library::logger::interface::Logger;
use skin_lesion_classifier::predictor::Predictor;
use skin_lesion_classifier::report;
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> Result<ExitCode, Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let predictor = Predictor::load(&config, logger.clone()).map_err(|e| {
        let _ = logger.error(&format!("failed to load model from {}: {}", config.model_dir.display(), e));
        e
    })?;
    logger.info(&format!("inference on {}", predictor.device()))?;

    match predictor.predict_path(&config.test_image_path) {
        Ok(classification) => {
            println!(
                "\n{}",
                report::cli_summary(&config.test_image_path, &classification, config.language)
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{}", report::cli_error(&e, config.language));
            Ok(ExitCode::FAILURE)
        }
    }
}
