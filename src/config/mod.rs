//! Application configuration.
//!
//! Sources are merged in this order, later ones overriding earlier ones:
//! 1. Built-in defaults (repository qualifier and JSON data path; the tax rate has none)
//! 2. A TOML file, `config.toml` unless another path is given
//! 3. Environment variables prefixed with `CONFIG_`, nested with `__`
//!    (`CONFIG_PRICE__TAX=1.25` sets `price.tax`)

use std::path::{Path, PathBuf};
use figment::Figment;
use figment::error::Kind;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use crate::error::ConfigError;
use crate::repository::RepositoryKind;

pub const DEFAULT_CONFIG_FILENAME: &str = "config.toml";
pub const DEFAULT_PRODUCTS_JSON: &str = "resources/product.json";
pub const CONFIG_ENV_PREFIX: &str = "CONFIG_";

/// Pricing settings consumed by the product service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceConfig {
    /// Multiplier applied to every listed price.
    pub tax: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Location of the file read by the JSON repository.
    pub products_json: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Which repository the service is wired to.
    pub repository: RepositoryKind,
    pub price: PriceConfig,
    pub data: DataConfig,
}

/// Builds an [`AppConfig`] from defaults, a TOML file, and the environment.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_FILENAME),
        }
    }

    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = path.as_ref().to_path_buf();
        self
    }

    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        let mut figment = Figment::new()
            .merge(Serialized::default("repository", RepositoryKind::default()))
            .merge(Serialized::default("data.products_json", DEFAULT_PRODUCTS_JSON));

        if self.config_path.exists() {
            info!(path = %self.config_path.display(), "Loading configuration file");
            figment = figment.merge(Toml::file(&self.config_path));
        } else {
            warn!(path = %self.config_path.display(), "Configuration file not found, using defaults and environment");
        }

        figment = figment.merge(Env::prefixed(CONFIG_ENV_PREFIX).split("__"));

        let config: AppConfig = figment.extract().map_err(classify)?;
        validate(&config)?;
        Ok(config)
    }
}

fn classify(error: figment::Error) -> ConfigError {
    match &error.kind {
        Kind::MissingField(field) => {
            let mut key = error.path.clone();
            key.push(field.to_string());
            ConfigError::Missing(key.join("."))
        }
        Kind::UnknownVariant(name, _) => ConfigError::UnknownRepository(name.clone()),
        _ => ConfigError::Extract(Box::new(error)),
    }
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let tax = config.price.tax;
    if !tax.is_finite() || tax < 0.0 {
        return Err(ConfigError::Invalid(format!("price.tax must be a non-negative number, got {}", tax)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_loads_toml_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                repository = "productFoo"

                [price]
                tax = 1.25

                [data]
                products_json = "data/catalog.json"
                "#,
            )?;

            let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;
            assert_eq!(config.repository, RepositoryKind::Foo);
            assert_eq!(config.price.tax, 1.25);
            assert_eq!(config.data.products_json, PathBuf::from("data/catalog.json"));
            Ok(())
        });
    }

    #[test]
    fn test_defaults_fill_everything_but_tax() {
        Jail::expect_with(|jail| {
            jail.set_env("CONFIG_PRICE__TAX", "1.5");

            let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;
            assert_eq!(config.repository, RepositoryKind::List);
            assert_eq!(config.price.tax, 1.5);
            assert_eq!(config.data.products_json, PathBuf::from(DEFAULT_PRODUCTS_JSON));
            Ok(())
        });
    }

    #[test]
    fn test_environment_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("settings.toml", "[price]\ntax = 1.25\n")?;
            jail.set_env("CONFIG_PRICE__TAX", "2.0");
            jail.set_env("CONFIG_REPOSITORY", "productJson");

            let config = ConfigLoader::new()
                .with_config_path("settings.toml")
                .load()
                .map_err(|e| e.to_string())?;
            assert_eq!(config.price.tax, 2.0);
            assert_eq!(config.repository, RepositoryKind::Json);
            Ok(())
        });
    }

    #[test]
    fn test_missing_tax_is_fatal() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "repository = \"productList\"\n")?;

            let result = ConfigLoader::new().load();
            assert!(matches!(&result, Err(ConfigError::Missing(key)) if key.ends_with("price")), "{:?}", result);
            Ok(())
        });
    }

    #[test]
    fn test_missing_tax_inside_price_table() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[price]\n")?;

            let result = ConfigLoader::new().load();
            assert!(matches!(&result, Err(ConfigError::Missing(key)) if key.ends_with("tax")), "{:?}", result);
            Ok(())
        });
    }

    #[test]
    fn test_negative_tax_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[price]\ntax = -1.0\n")?;

            let result = ConfigLoader::new().load();
            assert!(matches!(&result, Err(ConfigError::Invalid(_))));
            Ok(())
        });
    }

    #[test]
    fn test_unknown_repository_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "repository = \"productCsv\"\n[price]\ntax = 1.25\n")?;

            let result = ConfigLoader::new().load();
            assert!(matches!(&result, Err(ConfigError::UnknownRepository(name)) if name == "productCsv"));
            Ok(())
        });
    }
}
