use tracing::info;

use crate::cli::Cli;
use crate::config::AppConfig;

/// Load `.env` and resolve the run configuration (fatal on error).
pub fn init_foundation(cli: &Cli) -> Result<AppConfig, anyhow::Error> {
    load_dotenv();
    let config = AppConfig::load(cli)?;
    info!(
        cuts = %config.cuts_file.display(),
        input = %config.input_root.display(),
        output = %config.output_root.display(),
        "Settings loaded"
    );
    Ok(config)
}

/// Load .env from the working directory if present.
fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded .env from: {}", path.display()),
        Err(_) => info!("No .env file found, using system environment variables"),
    }
}
