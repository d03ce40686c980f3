// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults, a TOML file, the environment.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::env::{env_u64, env_var, load_secret_env};
use crate::error::ConfigError;
use crate::layer::SiteConfigLayer;
use crate::sections::{
	ContactConfigLayer, LocalesConfigLayer, LoggingConfigLayer, PreferencesConfigLayer,
};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<SiteConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<SiteConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(SiteConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file is not an error.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// `$MERIDIAN_CONFIG`, else `$XDG_CONFIG_HOME/meridian/site.toml`.
	pub fn user() -> Self {
		let path = env_var("MERIDIAN_CONFIG")
			.map(PathBuf::from)
			.or_else(|| dirs::config_dir().map(|d| d.join("meridian/site.toml")))
			.unwrap_or_else(|| PathBuf::from("site.toml"));
		Self::new(path)
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<SiteConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(SiteConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: SiteConfigLayer = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
			path: self.path.clone(),
			source: e,
		})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: MERIDIAN_<SECTION>_<FIELD>
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<SiteConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(SiteConfigLayer {
			locales: Some(LocalesConfigLayer {
				base_url: env_var("MERIDIAN_LOCALES_BASE_URL"),
				fallback_language: env_var("MERIDIAN_LOCALES_FALLBACK"),
				request_timeout_secs: env_u64("MERIDIAN_LOCALES_TIMEOUT_SECS")?,
			}),
			preferences: Some(PreferencesConfigLayer {
				path: env_var("MERIDIAN_PREFERENCES_PATH").map(PathBuf::from),
			}),
			contact: Some(ContactConfigLayer {
				base_url: env_var("MERIDIAN_CONTACT_BASE_URL"),
				table: env_var("MERIDIAN_CONTACT_TABLE"),
				api_key: load_secret_env("MERIDIAN_CONTACT_API_KEY")?,
			}),
			logging: Some(LoggingConfigLayer {
				level: env_var("MERIDIAN_LOG_LEVEL"),
			}),
		})
	}
}
