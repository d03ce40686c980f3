// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Dictionary location and load policy.

use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "locales";
const DEFAULT_FALLBACK: &str = "en";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where dictionaries are loaded from (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalesConfig {
	/// `http(s)://` URL serving `{code}.json`, or a local directory path.
	pub base_url: String,
	/// Language whose dictionary is substituted when the requested one fails.
	pub fallback_language: String,
	pub request_timeout_secs: u64,
}

impl LocalesConfig {
	pub fn is_remote(&self) -> bool {
		self.base_url.starts_with("http://") || self.base_url.starts_with("https://")
	}
}

impl Default for LocalesConfig {
	fn default() -> Self {
		LocalesConfigLayer::default().finalize()
	}
}

/// Locales configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalesConfigLayer {
	#[serde(default)]
	pub base_url: Option<String>,
	#[serde(default)]
	pub fallback_language: Option<String>,
	#[serde(default)]
	pub request_timeout_secs: Option<u64>,
}

impl LocalesConfigLayer {
	pub fn merge(&mut self, other: LocalesConfigLayer) {
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.fallback_language.is_some() {
			self.fallback_language = other.fallback_language;
		}
		if other.request_timeout_secs.is_some() {
			self.request_timeout_secs = other.request_timeout_secs;
		}
	}

	pub fn finalize(self) -> LocalesConfig {
		LocalesConfig {
			base_url: self
				.base_url
				.map(|u| u.trim_end_matches('/').to_string())
				.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			fallback_language: self
				.fallback_language
				.unwrap_or_else(|| DEFAULT_FALLBACK.to_string()),
			request_timeout_secs: self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
		}
	}
}
