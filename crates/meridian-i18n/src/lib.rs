// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for the Meridian site.
//!
//! The site is bilingual: English (left-to-right) and Arabic (right-to-left).
//! Translations live in one JSON dictionary per language, addressed with
//! dot-notation keys such as `nav.services` or `pricing.plans`.
//!
//! - [`LanguageStore`] owns the active language and its dictionary, persists
//!   the visitor's choice and keeps the document direction in sync.
//! - [`resolve`] is the pure lookup: found value, else fallback, else the key.
//! - [`Translator`] is the accessor pages use, bound to one dictionary.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use meridian_i18n::{DirDictionarySource, LanguageCode, LanguageStore};
//!
//! # async fn run() -> Result<(), meridian_i18n::I18nError> {
//! let store = LanguageStore::builder()
//!     .source(Arc::new(DirDictionarySource::new("locales")))
//!     .build()?;
//! store.loaded().await;
//!
//! let t = store.translator();
//! println!("{}", t.t("nav.home"));
//!
//! store.set_language(LanguageCode::En);
//! # Ok(())
//! # }
//! ```

mod dictionary;
mod document;
mod error;
mod language;
mod preference;
mod resolve;
mod source;
mod store;
mod translator;

pub use dictionary::Dictionary;
pub use document::{DocumentAttributes, DocumentRoot};
pub use error::{I18nError, LoadError, PreferenceError, Result};
pub use language::{
	resolve_language, Direction, LanguageCode, LocaleInfo, UnsupportedLanguage, DEFAULT_LANGUAGE,
	FALLBACK_LANGUAGE, LOCALES,
};
pub use preference::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, PREFERENCE_KEY};
pub use resolve::{lookup, resolve};
pub use source::{DictionarySource, DirDictionarySource, HttpDictionarySource, StaticDictionarySource};
pub use store::{LanguageState, LanguageStore, LanguageStoreBuilder, LoadStatus};
pub use translator::Translator;
