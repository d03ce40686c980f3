// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Where dictionaries come from.
//!
//! Each source maps a [`LanguageCode`] to one `{code}.json` resource and applies
//! the same acceptance rules: the resource must exist, and its body must be a
//! JSON object.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::dictionary::Dictionary;
use crate::error::LoadError;
use crate::language::LanguageCode;

/// Fetches the dictionary for one language.
#[async_trait]
pub trait DictionarySource: Send + Sync {
	async fn fetch(&self, language: LanguageCode) -> Result<Dictionary, LoadError>;
}

/// Serves `GET {base_url}/{code}.json`. Only `200 OK` counts as success.
#[derive(Debug, Clone)]
pub struct HttpDictionarySource {
	client: Client,
	base_url: String,
}

impl HttpDictionarySource {
	pub fn new(client: Client, base_url: impl Into<String>) -> Self {
		Self {
			client,
			base_url: base_url.into().trim_end_matches('/').to_string(),
		}
	}

	/// Uses the shared client with the given request timeout.
	pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
		let client = meridian_common_http::new_client_with_timeout(timeout)?;
		Ok(Self::new(client, base_url))
	}

	pub fn url_for(&self, language: LanguageCode) -> String {
		format!("{}/{}.json", self.base_url, language)
	}
}

#[async_trait]
impl DictionarySource for HttpDictionarySource {
	#[instrument(skip_all, fields(language = %language))]
	async fn fetch(&self, language: LanguageCode) -> Result<Dictionary, LoadError> {
		let url = self.url_for(language);
		debug!(url = %url, "fetching dictionary");

		let response = self
			.client
			.get(&url)
			.send()
			.await
			.map_err(|source| LoadError::Request { language, source })?;

		let status = response.status();
		if status != StatusCode::OK {
			return Err(LoadError::Status {
				language,
				status: status.as_u16(),
			});
		}

		let body = response
			.bytes()
			.await
			.map_err(|source| LoadError::Request { language, source })?;

		Dictionary::parse(language, &body)
	}
}

/// Reads `{dir}/{code}.json` from the local filesystem.
#[derive(Debug, Clone)]
pub struct DirDictionarySource {
	dir: PathBuf,
}

impl DirDictionarySource {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	pub fn path_for(&self, language: LanguageCode) -> PathBuf {
		self.dir.join(format!("{language}.json"))
	}
}

#[async_trait]
impl DictionarySource for DirDictionarySource {
	async fn fetch(&self, language: LanguageCode) -> Result<Dictionary, LoadError> {
		let path = self.path_for(language);
		debug!(path = %path.display(), language = %language, "reading dictionary");

		let body = tokio::fs::read(&path)
			.await
			.map_err(|source| LoadError::Io { path, source })?;

		Dictionary::parse(language, &body)
	}
}

/// In-memory dictionaries. Languages without an entry fail with `NotFound`.
#[derive(Debug, Clone, Default)]
pub struct StaticDictionarySource {
	dictionaries: HashMap<LanguageCode, Dictionary>,
}

impl StaticDictionarySource {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, language: LanguageCode, dictionary: Dictionary) -> Self {
		self.dictionaries.insert(language, dictionary);
		self
	}
}

#[async_trait]
impl DictionarySource for StaticDictionarySource {
	async fn fetch(&self, language: LanguageCode) -> Result<Dictionary, LoadError> {
		self.dictionaries
			.get(&language)
			.cloned()
			.ok_or(LoadError::NotFound { language })
	}
}
