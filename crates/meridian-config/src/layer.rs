// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration layer for merging from multiple sources.

use serde::Deserialize;

use crate::sections::{
	ContactConfigLayer, LocalesConfigLayer, LoggingConfigLayer, PreferencesConfigLayer,
};

/// Site configuration layer - all fields are Option for merging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfigLayer {
	#[serde(default)]
	pub locales: Option<LocalesConfigLayer>,
	#[serde(default)]
	pub preferences: Option<PreferencesConfigLayer>,
	#[serde(default)]
	pub contact: Option<ContactConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl SiteConfigLayer {
	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: SiteConfigLayer) {
		merge_option(&mut self.locales, other.locales, LocalesConfigLayer::merge);
		merge_option(
			&mut self.preferences,
			other.preferences,
			PreferencesConfigLayer::merge,
		);
		merge_option(&mut self.contact, other.contact, ContactConfigLayer::merge);
		merge_option(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_option<T, F>(target: &mut Option<T>, source: Option<T>, merge_fn: F)
where
	F: FnOnce(&mut T, T),
{
	match (target.as_mut(), source) {
		(Some(t), Some(s)) => merge_fn(t, s),
		(None, Some(s)) => *target = Some(s),
		_ => {}
	}
}
