// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Page-facing accessor bound to one dictionary.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::dictionary::Dictionary;
use crate::error::{I18nError, Result};
use crate::resolve::{lookup, resolve};

/// Read-only view of the dictionary that was active when it was created.
///
/// Cloning is cheap. A translator never observes a later load; consumers
/// take a fresh one from the store (or its subscription) on every change.
#[derive(Debug, Clone, Default)]
pub struct Translator {
	dictionary: Arc<Dictionary>,
}

impl Translator {
	pub fn new(dictionary: Arc<Dictionary>) -> Self {
		Self { dictionary }
	}

	pub fn dictionary(&self) -> &Dictionary {
		&self.dictionary
	}

	/// Raw resolution, type preserved. See [`resolve`].
	pub fn value(&self, key: &str, fallback: Option<Value>) -> Value {
		resolve(&self.dictionary, key, fallback)
	}

	/// Text at `key`, or the key itself when there is no text there.
	///
	/// Numbers and booleans render with their JSON spelling; objects and
	/// arrays are not text.
	pub fn t(&self, key: &str) -> String {
		self.text(key).unwrap_or_else(|| key.to_string())
	}

	/// Text at `key`, or `fallback`.
	pub fn t_or(&self, key: &str, fallback: &str) -> String {
		self.text(key).unwrap_or_else(|| fallback.to_string())
	}

	/// Text at `key` with `{name}` placeholders substituted.
	///
	/// ```
	/// use std::sync::Arc;
	/// use meridian_i18n::{Dictionary, Translator};
	///
	/// let dict = Dictionary::from_value(serde_json::json!({
	///     "contact": { "thanks": "Thanks, {name}!" }
	/// })).unwrap();
	/// let t = Translator::new(Arc::new(dict));
	/// assert_eq!(t.t_fmt("contact.thanks", &[("name", "Layla")]), "Thanks, Layla!");
	/// ```
	pub fn t_fmt(&self, key: &str, args: &[(&str, &str)]) -> String {
		let mut result = self.t(key);

		for (name, value) in args {
			let placeholder = format!("{{{name}}}");
			result = result.replace(&placeholder, value);
		}

		result
	}

	/// String items of the array at `key`; non-string items are skipped.
	pub fn list(&self, key: &str) -> Vec<String> {
		match lookup(&self.dictionary, key) {
			Some(Value::Array(items)) => items
				.iter()
				.filter_map(|item| item.as_str().map(str::to_string))
				.collect(),
			_ => Vec::new(),
		}
	}

	/// Deserializes the section at `key` into `T`.
	///
	/// Unlike [`Translator::t`] this surfaces problems instead of hiding them:
	/// a missing key or a section of the wrong shape is an error.
	pub fn section<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
		let value = lookup(&self.dictionary, key).ok_or_else(|| I18nError::MissingKey {
			key: key.to_string(),
		})?;

		T::deserialize(value).map_err(|source| I18nError::InvalidShape {
			key: key.to_string(),
			source,
		})
	}

	fn text(&self, key: &str) -> Option<String> {
		match lookup(&self.dictionary, key)? {
			Value::String(s) => Some(s.clone()),
			Value::Number(n) => Some(n.to_string()),
			Value::Bool(b) => Some(b.to_string()),
			_ => None,
		}
	}
}
