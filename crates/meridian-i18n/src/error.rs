// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for dictionary loading, preference persistence and typed lookup.

use std::path::PathBuf;

use thiserror::Error;

use crate::language::LanguageCode;

/// A dictionary resource could not be turned into a [`Dictionary`](crate::Dictionary).
///
/// Every variant triggers the fallback path in the store; none of them reach
/// callers of `set_language`.
#[derive(Debug, Error)]
pub enum LoadError {
	/// Transport failure (connect, timeout, body read).
	#[error("request for the {language} dictionary failed: {source}")]
	Request {
		language: LanguageCode,
		#[source]
		source: reqwest::Error,
	},

	/// Any status other than 200.
	#[error("the {language} dictionary returned HTTP {status}")]
	Status { language: LanguageCode, status: u16 },

	#[error("the {language} dictionary is not valid JSON: {source}")]
	Parse {
		language: LanguageCode,
		#[source]
		source: serde_json::Error,
	},

	#[error("the {language} dictionary root is not a JSON object")]
	NotAnObject { language: LanguageCode },

	#[error("failed to read dictionary file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("no dictionary is available for {language}")]
	NotFound { language: LanguageCode },
}

/// The language preference could not be written.
#[derive(Debug, Error)]
pub enum PreferenceError {
	#[error("failed to write preference file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to encode preference: {0}")]
	Serialize(#[from] serde_json::Error),
}

/// Errors from the typed accessor layer and store construction.
#[derive(Debug, Error)]
pub enum I18nError {
	#[error("translation key '{key}' is missing")]
	MissingKey { key: String },

	#[error("translation key '{key}' has an unexpected shape: {source}")]
	InvalidShape {
		key: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("language store requires a dictionary source")]
	MissingSource,

	#[error("language store must be built inside a Tokio runtime")]
	NoRuntime,
}

pub type Result<T> = std::result::Result<T, I18nError>;
