// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Layered configuration for the Meridian site.
//!
//! Precedence (highest to lowest):
//! 1. Environment variables (`MERIDIAN_*`)
//! 2. Config file (`$MERIDIAN_CONFIG` or `~/.config/meridian/site.toml`)
//! 3. Built-in defaults
//!
//! ```ignore
//! let config = meridian_config::load_config()?;
//! println!("dictionaries from {}", config.locales.base_url);
//! ```

pub mod env;
pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use env::{load_secret_env, SecretEnvError};
pub use error::ConfigError;
pub use layer::SiteConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Languages that have a dictionary resource.
const KNOWN_LANGUAGES: &[&str] = &["en", "ar"];

/// Fully resolved site configuration.
#[derive(Debug, Clone, Default)]
pub struct SiteConfig {
	pub locales: LocalesConfig,
	pub preferences: PreferencesConfig,
	pub contact: ContactConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from all sources with standard precedence.
pub fn load_config() -> Result<SiteConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::user()),
		Box::new(EnvSource),
	])
}

/// Load configuration with an explicit config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<SiteConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<SiteConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = SiteConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		merged.merge(source.load()?);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: SiteConfigLayer) -> Result<SiteConfig, ConfigError> {
	let config = SiteConfig {
		locales: layer.locales.unwrap_or_default().finalize(),
		preferences: layer.preferences.unwrap_or_default().finalize(),
		contact: layer.contact.unwrap_or_default().finalize(),
		logging: layer.logging.unwrap_or_default().finalize(),
	};

	validate_config(&config)?;

	info!(
		locales = %config.locales.base_url,
		fallback_language = %config.locales.fallback_language,
		preferences = %config.preferences.path.display(),
		contact_configured = config.contact.is_configured(),
		"Site configuration loaded"
	);

	Ok(config)
}

/// Validate cross-field configuration rules.
fn validate_config(config: &SiteConfig) -> Result<(), ConfigError> {
	if !KNOWN_LANGUAGES.contains(&config.locales.fallback_language.as_str()) {
		return Err(ConfigError::InvalidValue {
			key: "locales.fallback_language".to_string(),
			message: format!(
				"'{}' has no dictionary; expected one of {}",
				config.locales.fallback_language,
				KNOWN_LANGUAGES.join(", ")
			),
		});
	}

	if config.locales.request_timeout_secs == 0 {
		return Err(ConfigError::Validation(
			"locales.request_timeout_secs must be greater than zero".to_string(),
		));
	}

	if config.contact.base_url.is_some() && config.contact.api_key.is_none() {
		return Err(ConfigError::Validation(
			"contact.base_url is set but MERIDIAN_CONTACT_API_KEY is missing".to_string(),
		));
	}

	Ok(())
}
