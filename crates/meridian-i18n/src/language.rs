// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported languages and text direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Text direction for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	/// Left-to-right (English)
	Ltr,
	/// Right-to-left (Arabic)
	Rtl,
}

impl Direction {
	/// Returns the HTML `dir` attribute value.
	pub fn as_html_dir(&self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}

	/// Returns the CSS `text-align` value for the start of text.
	pub fn text_align_start(&self) -> &'static str {
		match self {
			Direction::Ltr => "left",
			Direction::Rtl => "right",
		}
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_html_dir())
	}
}

/// A language the site ships a dictionary for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
	En,
	Ar,
}

/// Language used when no valid preference has been persisted.
pub const DEFAULT_LANGUAGE: LanguageCode = LanguageCode::Ar;

/// Language whose dictionary is substituted when a load fails.
pub const FALLBACK_LANGUAGE: LanguageCode = LanguageCode::En;

impl LanguageCode {
	pub const ALL: [LanguageCode; 2] = [LanguageCode::En, LanguageCode::Ar];

	pub fn as_str(&self) -> &'static str {
		match self {
			LanguageCode::En => "en",
			LanguageCode::Ar => "ar",
		}
	}

	pub fn direction(&self) -> Direction {
		match self {
			LanguageCode::Ar => Direction::Rtl,
			LanguageCode::En => Direction::Ltr,
		}
	}

	pub fn info(&self) -> &'static LocaleInfo {
		match self {
			LanguageCode::En => &LOCALES[0],
			LanguageCode::Ar => &LOCALES[1],
		}
	}

	/// The other supported language; drives the header's language toggle.
	pub fn toggled(&self) -> LanguageCode {
		match self {
			LanguageCode::En => LanguageCode::Ar,
			LanguageCode::Ar => LanguageCode::En,
		}
	}
}

impl fmt::Display for LanguageCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code '{0}' (expected 'en' or 'ar')")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for LanguageCode {
	type Err = UnsupportedLanguage;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"en" => Ok(LanguageCode::En),
			"ar" => Ok(LanguageCode::Ar),
			other => Err(UnsupportedLanguage(other.to_string())),
		}
	}
}

/// Metadata about a supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
	pub code: LanguageCode,
	/// English name of the language
	pub name: &'static str,
	/// Native name, shown in the language toggle
	pub native_name: &'static str,
	pub direction: Direction,
}

pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: LanguageCode::En,
		name: "English",
		native_name: "English",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: LanguageCode::Ar,
		name: "Arabic",
		native_name: "العربية",
		direction: Direction::Rtl,
	},
];

/// Resolve the active language from a persisted preference.
///
/// Only `en` and `ar` are accepted; a missing or unrecognised value yields
/// [`DEFAULT_LANGUAGE`].
pub fn resolve_language(persisted: Option<&str>) -> LanguageCode {
	persisted
		.and_then(|value| value.parse().ok())
		.unwrap_or(DEFAULT_LANGUAGE)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_persisted_preference_takes_priority() {
		assert_eq!(resolve_language(Some("en")), LanguageCode::En);
		assert_eq!(resolve_language(Some("ar")), LanguageCode::Ar);
	}

	#[test]
	fn test_missing_preference_defaults_to_arabic() {
		assert_eq!(resolve_language(None), LanguageCode::Ar);
	}

	#[test]
	fn test_invalid_preference_defaults_to_arabic() {
		assert_eq!(resolve_language(Some("fr")), LanguageCode::Ar);
		assert_eq!(resolve_language(Some("")), LanguageCode::Ar);
		assert_eq!(resolve_language(Some("EN")), LanguageCode::Ar);
		assert_eq!(resolve_language(Some(" en")), LanguageCode::Ar);
	}

	#[test]
	fn test_direction() {
		assert_eq!(LanguageCode::Ar.direction(), Direction::Rtl);
		assert_eq!(LanguageCode::En.direction(), Direction::Ltr);
		assert_eq!(Direction::Rtl.as_html_dir(), "rtl");
		assert_eq!(Direction::Ltr.text_align_start(), "left");
		assert_eq!(Direction::Rtl.text_align_start(), "right");
	}

	#[test]
	fn test_locale_info_matches_code() {
		for code in LanguageCode::ALL {
			assert_eq!(code.info().code, code);
			assert_eq!(code.info().direction, code.direction());
		}
		assert_eq!(LanguageCode::Ar.info().native_name, "العربية");
	}

	#[test]
	fn test_toggle() {
		assert_eq!(LanguageCode::En.toggled(), LanguageCode::Ar);
		assert_eq!(LanguageCode::Ar.toggled(), LanguageCode::En);
	}

	#[test]
	fn test_serde_lowercase() {
		assert_eq!(serde_json::to_string(&LanguageCode::Ar).unwrap(), "\"ar\"");
		let code: LanguageCode = serde_json::from_str("\"en\"").unwrap();
		assert_eq!(code, LanguageCode::En);
	}
}
