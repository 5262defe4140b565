use tracing_subscriber::EnvFilter;

use pattern_cutter_lib::{Cli, driver};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse_with_settings();
    let config = pattern_cutter_lib::init_foundation(&cli)?;
    driver::run(&config)?;
    Ok(())
}
