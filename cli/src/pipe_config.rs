use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "rx_pipe.conf";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_PERIOD_MS: u64 = 1000;
const DEFAULT_LABEL: &str = "rx";

/// Which source the pipeline starts from.
#[derive(ValueEnum, Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// A timer emitting 0, 1, 2, ... every `period_ms`.
    Interval,
    /// The fixed list given in `values`.
    Of,
}

#[derive(Parser, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[clap(about = "Builds a reactive pipeline and prints its notifications", version)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[clap(long, env = "RX_CONFIG_PATH", help = "Path to the JSON configuration file.")]
    pub config_path: Option<PathBuf>,

    #[clap(long, env = "RX_LOG_DIR", help = "Directory for log files. Console only when unset.")]
    pub log_dir: Option<PathBuf>,

    #[clap(long, env = "RX_LOG_LEVEL", help = "Logging level (trace, debug, info, warn, error).")]
    pub log_level: Option<String>,

    #[clap(long, value_enum, env = "RX_SOURCE", help = "Pipeline source: interval or of.")]
    pub source: Option<SourceKind>,

    #[clap(long, env = "RX_PERIOD_MS", help = "Interval period in milliseconds.")]
    pub period_ms: Option<u64>,

    #[clap(long, env = "RX_VALUES", value_delimiter = ',', allow_hyphen_values = true, help = "Comma separated values for the `of` source.")]
    pub values: Option<Vec<f64>>,

    #[clap(long, env = "RX_SKIP", help = "Number of leading values to skip.")]
    pub skip: Option<usize>,

    #[clap(long, env = "RX_TAKE", help = "Complete after this many values. Unbounded when unset.")]
    pub take: Option<usize>,

    #[clap(long, env = "RX_ABS", help = "Replace every value with its absolute value.")]
    pub abs: Option<bool>,

    #[clap(long, env = "RX_SCALE", allow_negative_numbers = true, help = "Multiply every value by this factor.")]
    pub scale: Option<f64>,

    #[clap(long, env = "RX_LABEL", help = "Label printed in front of every notification.")]
    pub label: Option<String>,
}

/// Fully resolved settings, every option filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeSettings {
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
    pub source: SourceKind,
    pub period_ms: u64,
    pub values: Vec<f64>,
    pub skip: usize,
    pub take: Option<usize>,
    pub abs: bool,
    pub scale: f64,
    pub label: String,
}

impl Config {
    // Merge two Config structs, where 'other' overrides 'self' for Some values
    fn merge(self, other: Config) -> Config {
        Config {
            config_path: other.config_path.or(self.config_path),
            log_dir: other.log_dir.or(self.log_dir),
            log_level: other.log_level.or(self.log_level),
            source: other.source.or(self.source),
            period_ms: other.period_ms.or(self.period_ms),
            values: other.values.or(self.values),
            skip: other.skip.or(self.skip),
            take: other.take.or(self.take),
            abs: other.abs.or(self.abs),
            scale: other.scale.or(self.scale),
            label: other.label.or(self.label),
        }
    }

    /// Fills every unset option with its built-in default.
    pub fn resolve(self) -> PipeSettings {
        PipeSettings {
            log_dir: self.log_dir,
            log_level: self.log_level.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            source: self.source.unwrap_or(SourceKind::Interval),
            period_ms: self.period_ms.unwrap_or(DEFAULT_PERIOD_MS),
            values: self.values.unwrap_or_default(),
            skip: self.skip.unwrap_or(0),
            take: self.take,
            abs: self.abs.unwrap_or(false),
            scale: self.scale.unwrap_or(1.0),
            label: self.label.unwrap_or_else(|| DEFAULT_LABEL.to_string()),
        }
    }
}

/// Reads a JSON config file. A missing file is not an error.
pub fn read_config_file(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        log::info!("Config file not found at {}. Using defaults and environment/CLI variables.", path.display());
        return Ok(None);
    }
    let config_str = fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = serde_json::from_str::<Config>(&config_str)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(Some(config))
}

fn default_config_path() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    dirs::config_dir()
        .map(|dir| dir.join("rx_pipe").join(CONFIG_FILE_NAME))
        .unwrap_or(local)
}

/// Builds the effective configuration: config file < env/CLI. Defaults are
/// applied by [`Config::resolve`].
pub fn load_config<I, T>(args: I) -> Result<Config>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    // clap folds the environment into the parsed arguments.
    let cli_args = Config::try_parse_from(args)?;

    let config_file_path = cli_args.config_path.clone().unwrap_or_else(default_config_path);

    let file_config = read_config_file(&config_file_path)?.unwrap_or_default();
    Ok(file_config.merge(cli_args))
}
