// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Durable storage of the visitor's language choice.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::PreferenceError;
use crate::language::LanguageCode;

/// Key under which the language code is stored.
pub const PREFERENCE_KEY: &str = "language";

/// Key/value storage for the language preference.
///
/// `load` returns the raw stored string; validation happens in
/// [`resolve_language`](crate::resolve_language) so that an unknown value is
/// treated like no value at all.
pub trait PreferenceStore: Send + Sync {
	fn load(&self) -> Option<String>;
	fn save(&self, language: LanguageCode) -> Result<(), PreferenceError>;
}

/// Stores `{"language": "<code>"}` in a JSON file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
	path: PathBuf,
}

impl FilePreferenceStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn io_error(&self, source: std::io::Error) -> PreferenceError {
		PreferenceError::Io {
			path: self.path.clone(),
			source,
		}
	}
}

impl PreferenceStore for FilePreferenceStore {
	fn load(&self) -> Option<String> {
		let content = match std::fs::read_to_string(&self.path) {
			Ok(content) => content,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
			Err(e) => {
				warn!(path = %self.path.display(), error = %e, "failed to read language preference");
				return None;
			}
		};

		match serde_json::from_str::<Value>(&content) {
			Ok(doc) => doc
				.get(PREFERENCE_KEY)
				.and_then(Value::as_str)
				.map(str::to_string),
			Err(e) => {
				warn!(path = %self.path.display(), error = %e, "ignoring malformed preference file");
				None
			}
		}
	}

	fn save(&self, language: LanguageCode) -> Result<(), PreferenceError> {
		if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
			std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
		}

		let body = serde_json::to_vec_pretty(&json!({ PREFERENCE_KEY: language.as_str() }))?;

		// Write-then-rename so a crash never leaves a truncated file behind.
		let tmp = self.path.with_extension("json.tmp");
		std::fs::write(&tmp, body).map_err(|e| self.io_error(e))?;
		std::fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

		debug!(path = %self.path.display(), language = %language, "saved language preference");
		Ok(())
	}
}

/// Process-local preference, for tests and embedded use.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
	value: Mutex<Option<String>>,
}

impl MemoryPreferenceStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts with a raw stored value, valid or not.
	pub fn with_value(value: impl Into<String>) -> Self {
		Self {
			value: Mutex::new(Some(value.into())),
		}
	}

	pub fn value(&self) -> Option<String> {
		self.value
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.clone()
	}
}

impl PreferenceStore for MemoryPreferenceStore {
	fn load(&self) -> Option<String> {
		self.value()
	}

	fn save(&self, language: LanguageCode) -> Result<(), PreferenceError> {
		*self.value.lock().unwrap_or_else(PoisonError::into_inner) = Some(language.to_string());
		Ok(())
	}
}
