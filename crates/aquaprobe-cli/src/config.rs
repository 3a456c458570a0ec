use std::env;
use std::path::PathBuf;

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Runtime settings read from the environment (and an optional `.env` file).
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub telemetry: TelemetryConfig,
    /// Custom threshold table used when `--thresholds` is not given.
    pub thresholds: Option<PathBuf>,
}

impl CliConfig {
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let log_level =
            env::var("AQUAPROBE_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        let thresholds = env::var_os("AQUAPROBE_THRESHOLDS")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self {
            telemetry: TelemetryConfig { log_level },
            thresholds,
        }
    }

    /// Pick the threshold table path: the command-line flag wins over the environment.
    pub fn thresholds_path(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| self.thresholds.clone())
    }
}

/// Settings controlling log output.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}
