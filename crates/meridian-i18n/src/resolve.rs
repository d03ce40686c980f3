// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Dotted-key lookup into a [`Dictionary`].
//!
//! `nav.services` walks `root["nav"]["services"]`. Array nodes accept a
//! decimal index segment (`services.items.0.title`). The walk stops at the
//! first segment that cannot be followed; a terminal `null` counts as missing.
//!
//! A miss resolves to the caller's fallback, or to the key itself so that
//! untranslated copy stays visible in the page.

use serde_json::Value;

use crate::dictionary::Dictionary;

/// Returns the value at `key`, or `None` if any segment is missing.
pub fn lookup<'a>(dictionary: &'a Dictionary, key: &str) -> Option<&'a Value> {
	let mut segments = key.split('.');
	let first = segments.next()?;
	let mut node = dictionary.root().get(first)?;

	for segment in segments {
		node = match node {
			Value::Object(map) => map.get(segment)?,
			Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
			_ => return None,
		};
	}

	(!node.is_null()).then_some(node)
}

/// Resolves `key` with fallback: found value, else `fallback`, else the key.
///
/// The found value keeps its JSON type; callers that expect a list or a
/// nested section get one back.
pub fn resolve(dictionary: &Dictionary, key: &str, fallback: Option<Value>) -> Value {
	match lookup(dictionary, key) {
		Some(value) => value.clone(),
		None => fallback.unwrap_or_else(|| Value::String(key.to_string())),
	}
}
