// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Document-level `lang` / `dir` attributes.

use std::sync::{PoisonError, RwLock};

use tracing::trace;

use crate::language::{Direction, LanguageCode};

/// Receives the root element's locale attributes on every language change.
pub trait DocumentAttributes: Send + Sync {
	fn apply(&self, language: LanguageCode, direction: Direction);
}

/// The page shell's root element attributes.
#[derive(Debug, Default)]
pub struct DocumentRoot {
	attributes: RwLock<Option<(LanguageCode, Direction)>>,
}

impl DocumentRoot {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn lang(&self) -> Option<LanguageCode> {
		self.read().map(|(lang, _)| lang)
	}

	pub fn dir(&self) -> Option<Direction> {
		self.read().map(|(_, dir)| dir)
	}

	/// Direction for `<body>`; mirrors the root element, LTR before the first apply.
	pub fn body_dir(&self) -> Direction {
		self.dir().unwrap_or(Direction::Ltr)
	}

	/// Renders `lang="…" dir="…"` for the `<html>` tag, empty before the first apply.
	pub fn html_attributes(&self) -> String {
		match self.read() {
			Some((lang, dir)) => format!("lang=\"{}\" dir=\"{}\"", lang, dir.as_html_dir()),
			None => String::new(),
		}
	}

	fn read(&self) -> Option<(LanguageCode, Direction)> {
		*self.attributes.read().unwrap_or_else(PoisonError::into_inner)
	}
}

impl DocumentAttributes for DocumentRoot {
	fn apply(&self, language: LanguageCode, direction: Direction) {
		trace!(language = %language, direction = %direction, "applying document attributes");
		*self.attributes.write().unwrap_or_else(PoisonError::into_inner) = Some((language, direction));
	}
}
