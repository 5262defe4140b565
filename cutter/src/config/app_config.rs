//! Runtime application configuration: defaults, environment overrides, then CLI.

use std::path::PathBuf;

use anyhow::anyhow;
use pattern_raster::BoundsPolicy;

use super::defaults::{self, get_default};
use super::validation::{parse_bounds_policy, validate_setting};
use crate::cli::Cli;

/// Runtime configuration for one batch run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub cuts_file: PathBuf,
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    pub assets_dir: PathBuf,
    pub print: bool,
    pub grid: bool,
    pub pdf: bool,
    pub bounds: BoundsPolicy,
    pub report_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cuts_file: "cuts.txt".into(),
            input_root: "input".into(),
            output_root: "output".into(),
            assets_dir: "assets".into(),
            print: false,
            grid: false,
            pdf: false,
            bounds: BoundsPolicy::Pad,
            report_path: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment and CLI flags.
    pub fn load(cli: &Cli) -> Result<Self, anyhow::Error> {
        Self::resolve(cli, |key| std::env::var(key).ok())
    }

    /// Resolve configuration with `env` as the environment lookup.
    ///
    /// Invalid environment values fall back to the default with a warning;
    /// invalid CLI values are an error.
    pub fn resolve<F>(cli: &Cli, env: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let g = |key: &str| -> String {
            let default = get_default(key).unwrap_or_default();
            match env(key) {
                Some(v) => match validate_setting(key, &v) {
                    Ok(()) => v,
                    Err(e) => {
                        tracing::warn!("Ignoring {key}={v:?}: {e}");
                        default.to_string()
                    }
                },
                None => default.to_string(),
            }
        };

        let bounds_raw = match &cli.bounds {
            Some(v) => v.clone(),
            None => g(defaults::BOUNDS_POLICY),
        };
        let bounds = parse_bounds_policy(&bounds_raw)
            .map_err(|e| anyhow!("invalid bounds policy {bounds_raw:?}: {e}"))?;

        Ok(Self {
            cuts_file: cli
                .cuts
                .clone()
                .unwrap_or_else(|| g(defaults::CUTS_FILE).into()),
            input_root: cli
                .input_root
                .clone()
                .unwrap_or_else(|| g(defaults::INPUT_ROOT).into()),
            output_root: cli
                .output
                .clone()
                .unwrap_or_else(|| g(defaults::OUTPUT_DIR).into()),
            assets_dir: cli
                .assets
                .clone()
                .unwrap_or_else(|| g(defaults::ASSETS_DIR).into()),
            print: cli.print,
            grid: cli.grid,
            pdf: cli.pdf,
            bounds,
            report_path: cli.report.clone(),
        })
    }
}
