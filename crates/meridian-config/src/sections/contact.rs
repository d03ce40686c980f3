// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Hosted table that receives contact form submissions.

use meridian_common_secret::SecretString;
use serde::Deserialize;

const DEFAULT_TABLE: &str = "contact_messages";

/// Contact sink configuration (runtime, fully resolved).
#[derive(Debug, Clone)]
pub struct ContactConfig {
	/// Project URL of the hosted table store. `None` disables submission.
	pub base_url: Option<String>,
	pub table: String,
	pub api_key: Option<SecretString>,
}

impl ContactConfig {
	/// Submission needs both an endpoint and a key.
	pub fn is_configured(&self) -> bool {
		self.base_url.is_some() && self.api_key.is_some()
	}
}

impl Default for ContactConfig {
	fn default() -> Self {
		ContactConfigLayer::default().finalize()
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactConfigLayer {
	#[serde(default)]
	pub base_url: Option<String>,
	#[serde(default)]
	pub table: Option<String>,
	#[serde(default)]
	pub api_key: Option<SecretString>,
}

impl ContactConfigLayer {
	pub fn merge(&mut self, other: ContactConfigLayer) {
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.table.is_some() {
			self.table = other.table;
		}
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
	}

	pub fn finalize(self) -> ContactConfig {
		ContactConfig {
			base_url: self.base_url.map(|u| u.trim_end_matches('/').to_string()),
			table: self.table.unwrap_or_else(|| DEFAULT_TABLE.to_string()),
			api_key: self.api_key,
		}
	}
}
