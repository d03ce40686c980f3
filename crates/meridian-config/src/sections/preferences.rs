// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Location of the persisted language preference.

use std::path::PathBuf;

use serde::Deserialize;

const PREFERENCES_FILE: &str = "preferences.json";

/// Preference persistence (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferencesConfig {
	pub path: PathBuf,
}

impl Default for PreferencesConfig {
	fn default() -> Self {
		Self {
			path: default_path(),
		}
	}
}

/// `$XDG_STATE_HOME/meridian/preferences.json`, falling back to the local
/// data directory, then to the working directory.
fn default_path() -> PathBuf {
	dirs::state_dir()
		.or_else(dirs::data_local_dir)
		.map(|dir| dir.join("meridian"))
		.unwrap_or_else(|| PathBuf::from(".meridian"))
		.join(PREFERENCES_FILE)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreferencesConfigLayer {
	#[serde(default)]
	pub path: Option<PathBuf>,
}

impl PreferencesConfigLayer {
	pub fn merge(&mut self, other: PreferencesConfigLayer) {
		if other.path.is_some() {
			self.path = other.path;
		}
	}

	pub fn finalize(self) -> PreferencesConfig {
		PreferencesConfig {
			path: self.path.unwrap_or_else(default_path),
		}
	}
}
