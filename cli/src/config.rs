use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `THEMER__THEMES_DIR`.
const ENV_PREFIX: &str = "THEMER";

fn default_themes_dir() -> PathBuf {
    PathBuf::from("./themes/")
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_themes_dir")]
    themes_dir: PathBuf,
    #[serde(default)]
    logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            themes_dir: default_themes_dir(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl AppConfig {
    pub fn themes_dir(&self) -> &Path {
        &self.themes_dir
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

impl LoggingConfig {
    /// Level from the config file, used when no `-v` flag is given.
    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

/// `<home>/.config/the-themer/config.toml`
pub fn config_path(home: &Path) -> PathBuf {
    home.join(".config").join("the-themer").join("config.toml")
}

/// Load the optional config file, then apply `THEMER__*` environment
/// overrides on top.
pub fn load_config(home: &Path) -> Result<AppConfig, ConfigError> {
    build(&config_path(home), Environment::with_prefix(ENV_PREFIX))
}

fn build(file: &Path, env: Environment) -> Result<AppConfig, ConfigError> {
    let file_source = File::from(file).format(FileFormat::Toml).required(false);
    let env_source = env.separator("__");

    let config = Config::builder()
        .add_source(file_source)
        .add_source(env_source)
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;
    log::debug!("Loaded configuration: {app_config:?}");
    Ok(app_config)
}
