// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Environment variable helpers.
//!
//! Secrets follow the `VAR` / `VAR_FILE` convention so the contact table key
//! can be mounted as a file by the hosting platform.

use std::path::PathBuf;
use std::{env, fs};

use meridian_common_secret::SecretString;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretEnvError {
	#[error("failed to read secret file at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("secret file path in {var} is empty")]
	EmptyPath { var: String },
}

/// Load a secret from `{var}_FILE` (preferred) or `{var}`.
///
/// A single trailing newline is stripped from file contents. Returns
/// `Ok(None)` when neither variable is set.
pub fn load_secret_env(var: &str) -> Result<Option<SecretString>, SecretEnvError> {
	let file_var = format!("{var}_FILE");

	if let Ok(path_str) = env::var(&file_var) {
		if path_str.is_empty() {
			return Err(SecretEnvError::EmptyPath { var: file_var });
		}

		let path = PathBuf::from(&path_str);
		let content = fs::read_to_string(&path).map_err(|e| SecretEnvError::Io {
			path: path.clone(),
			source: e,
		})?;

		let secret = content.strip_suffix('\n').unwrap_or(&content).to_string();
		return Ok(Some(SecretString::new(secret)));
	}

	match env::var(var) {
		Ok(value) if !value.is_empty() => Ok(Some(SecretString::new(value))),
		_ => Ok(None),
	}
}

pub(crate) fn env_var(name: &str) -> Option<String> {
	env::var(name).ok().filter(|s| !s.is_empty())
}

pub(crate) fn env_u64(name: &str) -> Result<Option<u64>, crate::ConfigError> {
	match env_var(name) {
		Some(v) => v
			.parse()
			.map(Some)
			.map_err(|_| crate::ConfigError::InvalidValue {
				key: name.to_string(),
				message: format!("invalid u64 value '{v}'"),
			}),
		None => Ok(None),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	// Each test uses its own variable name; the process environment is shared
	// between test threads.

	#[test]
	fn returns_none_when_unset() {
		let result = load_secret_env("MERIDIAN_TEST_SECRET_UNSET").unwrap();
		assert!(result.is_none());
	}

	#[test]
	fn reads_direct_value() {
		env::set_var("MERIDIAN_TEST_SECRET_DIRECT", "anon-key");
		let secret = load_secret_env("MERIDIAN_TEST_SECRET_DIRECT")
			.unwrap()
			.unwrap();
		assert_eq!(secret.expose(), "anon-key");
		env::remove_var("MERIDIAN_TEST_SECRET_DIRECT");
	}

	#[test]
	fn file_variant_wins_and_strips_newline() {
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "from-file").unwrap();

		env::set_var("MERIDIAN_TEST_SECRET_BOTH", "from-env");
		env::set_var("MERIDIAN_TEST_SECRET_BOTH_FILE", file.path());
		let secret = load_secret_env("MERIDIAN_TEST_SECRET_BOTH").unwrap().unwrap();
		assert_eq!(secret.expose(), "from-file");
		env::remove_var("MERIDIAN_TEST_SECRET_BOTH");
		env::remove_var("MERIDIAN_TEST_SECRET_BOTH_FILE");
	}

	#[test]
	fn empty_file_path_is_an_error() {
		env::set_var("MERIDIAN_TEST_SECRET_EMPTY_FILE", "");
		let result = load_secret_env("MERIDIAN_TEST_SECRET_EMPTY");
		assert!(matches!(result, Err(SecretEnvError::EmptyPath { .. })));
		env::remove_var("MERIDIAN_TEST_SECRET_EMPTY_FILE");
	}

	#[test]
	fn invalid_u64_is_reported_with_key() {
		env::set_var("MERIDIAN_TEST_BAD_U64", "ten");
		let err = env_u64("MERIDIAN_TEST_BAD_U64").unwrap_err();
		assert!(err.to_string().contains("MERIDIAN_TEST_BAD_U64"));
		env::remove_var("MERIDIAN_TEST_BAD_U64");
	}
}
