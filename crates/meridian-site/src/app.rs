// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Application bootstrap: wires configuration into the language store and the
//! contact sink.

use std::sync::Arc;
use std::time::Duration;

use meridian_config::SiteConfig;
use meridian_contact::{ContactError, ContactForm, ContactSink, FormStatus, TableSink};
use meridian_i18n::{
	DictionarySource, DirDictionarySource, DocumentRoot, FilePreferenceStore, HttpDictionarySource,
	I18nError, LanguageCode, LanguageStore, LoadStatus, Translator,
};
use tracing::info;

use crate::content::SiteContent;
use crate::error::SiteError;
use crate::pages::Page;

/// Everything a page needs to render.
///
/// Must be created inside a Tokio runtime: building the store starts the
/// initial dictionary load, and fails with `NoRuntime` otherwise.
pub struct App {
	config: SiteConfig,
	store: LanguageStore,
	document: Arc<DocumentRoot>,
	contact: Option<Arc<dyn ContactSink>>,
}

impl App {
	pub fn from_config(config: SiteConfig) -> Result<Self, SiteError> {
		let contact: Option<Arc<dyn ContactSink>> = match (&config.contact.base_url, &config.contact.api_key) {
			(Some(base_url), Some(api_key)) => Some(Arc::new(
				TableSink::builder()
					.base_url(base_url.clone())
					.table(config.contact.table.clone())
					.api_key(api_key.clone())
					.build()?,
			)),
			_ => None,
		};

		Self::with_contact_sink(config, contact)
	}

	/// Like [`App::from_config`] with an explicit sink (or none).
	pub fn with_contact_sink(
		config: SiteConfig,
		contact: Option<Arc<dyn ContactSink>>,
	) -> Result<Self, SiteError> {
		let fallback: LanguageCode = config.locales.fallback_language.parse()?;
		let source = dictionary_source(&config)?;
		let document = Arc::new(DocumentRoot::new());

		let store = LanguageStore::builder()
			.source(source)
			.preferences(Arc::new(FilePreferenceStore::new(&config.preferences.path)))
			.document(document.clone())
			.fallback(fallback)
			.build()?;

		info!(
			language = %store.language(),
			locales = %config.locales.base_url,
			contact = contact.is_some(),
			"site initialized"
		);

		Ok(Self {
			config,
			store,
			document,
			contact,
		})
	}

	pub fn config(&self) -> &SiteConfig {
		&self.config
	}

	pub fn store(&self) -> &LanguageStore {
		&self.store
	}

	pub fn document(&self) -> &DocumentRoot {
		&self.document
	}

	pub fn translator(&self) -> Translator {
		self.store.translator()
	}

	/// Waits for the in-flight dictionary load.
	pub async fn ready(&self) -> LoadStatus {
		self.store.loaded().await;
		self.store.snapshot().status
	}

	/// Switches language and waits for its dictionary.
	pub async fn switch_language(&self, language: LanguageCode) -> LoadStatus {
		drop(self.store.set_language(language));
		self.ready().await
	}

	/// The header's language toggle.
	pub async fn toggle_language(&self) -> LoadStatus {
		self.switch_language(self.store.language().toggled()).await
	}

	/// Localized navigation entries in menu order.
	pub fn navigation(&self) -> Vec<(Page, String)> {
		let t = self.translator();
		Page::ALL.into_iter().map(|page| (page, page.title(&t))).collect()
	}

	pub fn content(&self) -> Result<SiteContent, I18nError> {
		SiteContent::from_translator(&self.translator())
	}

	pub fn can_submit_contact(&self) -> bool {
		self.contact.is_some()
	}

	pub async fn submit_contact<'f>(
		&self,
		form: &'f mut ContactForm,
	) -> Result<&'f FormStatus, SiteError> {
		let sink = self.contact.as_deref().ok_or(ContactError::NotConfigured)?;
		Ok(form.submit(sink).await)
	}
}

impl std::fmt::Debug for App {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("App")
			.field("store", &self.store)
			.field("locales", &self.config.locales.base_url)
			.field("contact", &self.contact.is_some())
			.finish()
	}
}

fn dictionary_source(config: &SiteConfig) -> Result<Arc<dyn DictionarySource>, SiteError> {
	let locales = &config.locales;
	if locales.is_remote() {
		let timeout = Duration::from_secs(locales.request_timeout_secs);
		Ok(Arc::new(HttpDictionarySource::with_timeout(&locales.base_url, timeout)?))
	} else {
		Ok(Arc::new(DirDictionarySource::new(&locales.base_url)))
	}
}
