//! Runtime settings.
//!
//! Sources, later ones overriding earlier ones:
//! 1. built-in defaults
//! 2. `config/default.yaml` and `config/local.yaml`, both optional
//! 3. environment variables prefixed with `TRAVELY`, using `__` for nesting
//!    (`TRAVELY__DATABASE_URL`, `TRAVELY__IMAGE__QUALITY`)
//!
//! A `.env` file in the working directory is loaded into the environment first.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::codec::{CodecSettings, ImageCodec};
use crate::repository::DieselRepository;

const DEFAULT_DATABASE_URL: &str = "travely.db";

/// Settings of the categories core.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Image codec parameters.
    #[serde(default)]
    pub image: CodecSettings,
}

impl Settings {
    /// Load settings from `config/` and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load_from("config")
    }

    /// Load settings from the given configuration directory and the environment.
    pub fn load_from(config_dir: &str) -> Result<Self, ConfigError> {
        let defaults = CodecSettings::default();

        let settings = Config::builder()
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("image.width", i64::from(defaults.width))?
            .set_default("image.height", i64::from(defaults.height))?
            .set_default("image.quality", i64::from(defaults.quality))?
            .set_default("image.max_upload_bytes", defaults.max_upload_bytes as i64)?
            .add_source(File::with_name(&format!("{config_dir}/default")).required(false))
            .add_source(File::with_name(&format!("{config_dir}/local")).required(false))
            .add_source(Environment::with_prefix("TRAVELY").separator("__"))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::Message("database_url cannot be empty".into()));
        }
        if self.image.width == 0 || self.image.height == 0 {
            return Err(ConfigError::Message(
                "image.width and image.height must be greater than zero".into(),
            ));
        }
        if !(1..=100).contains(&self.image.quality) {
            return Err(ConfigError::Message(
                "image.quality must be between 1 and 100".into(),
            ));
        }
        Ok(())
    }

    /// Repository over the configured database.
    pub fn repository(&self) -> DieselRepository {
        DieselRepository::new(self.database_url.clone())
    }

    /// Codec using the configured image parameters.
    pub fn codec(&self) -> ImageCodec {
        ImageCodec::new(self.image)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn falls_back_to_defaults_without_files() {
        let dir = TempDir::new().unwrap();

        let settings = Settings::load_from(dir.path().to_str().unwrap()).unwrap();

        assert_eq!(settings.database_url, "travely.db");
        assert_eq!(settings.image, CodecSettings::default());
    }

    #[test]
    fn reads_yaml_overrides() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("default.yaml"),
            "database_url: gallery.db\nimage:\n  width: 120\n  quality: 90\n",
        )
        .unwrap();

        let settings = Settings::load_from(dir.path().to_str().unwrap()).unwrap();

        assert_eq!(settings.database_url, "gallery.db");
        assert_eq!(settings.image.width, 120);
        assert_eq!(settings.image.height, 300);
        assert_eq!(settings.image.quality, 90);
        assert_eq!(settings.codec().settings().width, 120);
        assert_eq!(settings.repository().database_url(), "gallery.db");
    }

    #[test]
    fn local_file_overrides_default_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("default.yaml"), "database_url: a.db\n").unwrap();
        fs::write(dir.path().join("local.yaml"), "database_url: b.db\n").unwrap();

        let settings = Settings::load_from(dir.path().to_str().unwrap()).unwrap();

        assert_eq!(settings.database_url, "b.db");
    }

    #[test]
    fn rejects_out_of_range_quality() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("default.yaml"), "image:\n  quality: 0\n").unwrap();

        assert!(Settings::load_from(dir.path().to_str().unwrap()).is_err());
    }
}
