// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Loaded translation data for one language.

use serde_json::{Map, Value};

use crate::error::LoadError;
use crate::language::LanguageCode;

/// An immutable tree of translations parsed from one `{code}.json` resource.
///
/// The root is always a JSON object. Dictionaries are shared behind `Arc` and
/// replaced wholesale on every load; nothing mutates one after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
	root: Map<String, Value>,
}

impl Dictionary {
	/// The dictionary used before the first load and after total failure.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Wraps a JSON value; `None` unless the value is an object.
	pub fn from_value(value: Value) -> Option<Self> {
		match value {
			Value::Object(root) => Some(Self { root }),
			_ => None,
		}
	}

	/// Parses a dictionary resource body.
	pub fn parse(language: LanguageCode, body: &[u8]) -> Result<Self, LoadError> {
		let value: Value =
			serde_json::from_slice(body).map_err(|source| LoadError::Parse { language, source })?;
		Self::from_value(value).ok_or(LoadError::NotAnObject { language })
	}

	pub fn root(&self) -> &Map<String, Value> {
		&self.root
	}

	pub fn is_empty(&self) -> bool {
		self.root.is_empty()
	}

	/// Number of top-level sections.
	pub fn len(&self) -> usize {
		self.root.len()
	}
}
