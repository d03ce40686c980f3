// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The language store: active language, its dictionary, and load status.
//!
//! One store is built at application bootstrap and handed to everything that
//! renders text. Changes go through [`LanguageStore::set_language`], which
//! applies the persistence and document-direction side effects synchronously
//! and then loads the dictionary in a background task:
//!
//! 1. fetch the requested language;
//! 2. on failure, fetch the fallback language (degraded mode);
//! 3. on failure again, use the empty dictionary.
//!
//! Every request takes a new generation number. A load that finishes after a
//! newer request was made is discarded, so the exposed dictionary always
//! belongs to the most recent request.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::dictionary::Dictionary;
use crate::document::{DocumentAttributes, DocumentRoot};
use crate::error::{I18nError, Result};
use crate::language::{resolve_language, LanguageCode, FALLBACK_LANGUAGE};
use crate::preference::{MemoryPreferenceStore, PreferenceStore};
use crate::source::DictionarySource;
use crate::translator::Translator;

/// Which dictionary is currently exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
	/// No load has completed yet; the dictionary is empty.
	Pending,
	/// The requested language's dictionary.
	Loaded,
	/// The requested language failed; `served` is the substitute.
	Degraded { served: LanguageCode },
	/// Both the requested and the fallback dictionary failed.
	Empty,
}

/// A consistent snapshot of the store.
#[derive(Debug, Clone)]
pub struct LanguageState {
	pub language: LanguageCode,
	pub dictionary: Arc<Dictionary>,
	pub loading: bool,
	pub status: LoadStatus,
	pub generation: u64,
}

impl LanguageState {
	fn initial(language: LanguageCode) -> Self {
		Self {
			language,
			dictionary: Arc::new(Dictionary::empty()),
			loading: false,
			status: LoadStatus::Pending,
			generation: 0,
		}
	}

	pub fn translator(&self) -> Translator {
		Translator::new(Arc::clone(&self.dictionary))
	}
}

/// Builder for [`LanguageStore`].
pub struct LanguageStoreBuilder {
	source: Option<Arc<dyn DictionarySource>>,
	preferences: Option<Arc<dyn PreferenceStore>>,
	document: Option<Arc<dyn DocumentAttributes>>,
	fallback: LanguageCode,
}

impl LanguageStoreBuilder {
	fn new() -> Self {
		Self {
			source: None,
			preferences: None,
			document: None,
			fallback: FALLBACK_LANGUAGE,
		}
	}

	pub fn source(mut self, source: Arc<dyn DictionarySource>) -> Self {
		self.source = Some(source);
		self
	}

	/// Defaults to a [`MemoryPreferenceStore`].
	pub fn preferences(mut self, preferences: Arc<dyn PreferenceStore>) -> Self {
		self.preferences = Some(preferences);
		self
	}

	/// Defaults to a detached [`DocumentRoot`].
	pub fn document(mut self, document: Arc<dyn DocumentAttributes>) -> Self {
		self.document = Some(document);
		self
	}

	pub fn fallback(mut self, language: LanguageCode) -> Self {
		self.fallback = language;
		self
	}

	/// Builds the store and starts loading the initial language.
	///
	/// The initial language is the persisted preference when it is `en` or
	/// `ar`, otherwise `ar`. Loads run on the Tokio runtime current at build
	/// time; building outside a runtime fails with [`I18nError::NoRuntime`].
	pub fn build(self) -> Result<LanguageStore> {
		let source = self.source.ok_or(I18nError::MissingSource)?;
		let runtime = Handle::try_current().map_err(|_| I18nError::NoRuntime)?;
		let preferences = self
			.preferences
			.unwrap_or_else(|| Arc::new(MemoryPreferenceStore::new()));
		let document = self
			.document
			.unwrap_or_else(|| Arc::new(DocumentRoot::new()));

		let persisted = preferences.load();
		let language = resolve_language(persisted.as_deref());
		info!(
			language = %language,
			persisted = ?persisted,
			fallback = %self.fallback,
			"initializing language store"
		);

		let (state, _) = watch::channel(LanguageState::initial(language));
		let store = LanguageStore {
			inner: Arc::new(Inner {
				source,
				preferences,
				document,
				fallback: self.fallback,
				state,
				runtime,
				side_effects: Mutex::new(()),
			}),
		};

		drop(store.set_language(language));
		Ok(store)
	}
}

/// Shared handle to the language state. Cloning shares the same store.
#[derive(Clone)]
pub struct LanguageStore {
	inner: Arc<Inner>,
}

struct Inner {
	source: Arc<dyn DictionarySource>,
	preferences: Arc<dyn PreferenceStore>,
	document: Arc<dyn DocumentAttributes>,
	fallback: LanguageCode,
	state: watch::Sender<LanguageState>,
	runtime: Handle,
	/// Serializes persistence and document updates across `set_language`
	/// calls, outside the state channel's lock.
	side_effects: Mutex<()>,
}

impl LanguageStore {
	pub fn builder() -> LanguageStoreBuilder {
		LanguageStoreBuilder::new()
	}

	/// The active language.
	pub fn language(&self) -> LanguageCode {
		self.inner.state.borrow().language
	}

	/// The active dictionary; empty until the first load completes.
	pub fn dictionary(&self) -> Arc<Dictionary> {
		Arc::clone(&self.inner.state.borrow().dictionary)
	}

	/// Accessor bound to the active dictionary.
	pub fn translator(&self) -> Translator {
		self.inner.state.borrow().translator()
	}

	pub fn snapshot(&self) -> LanguageState {
		self.inner.state.borrow().clone()
	}

	pub fn is_loading(&self) -> bool {
		self.inner.state.borrow().loading
	}

	/// Change notifications for consumers that re-render.
	pub fn subscribe(&self) -> watch::Receiver<LanguageState> {
		self.inner.state.subscribe()
	}

	/// Switches the active language.
	///
	/// Before returning, the preference is persisted, the document attributes
	/// are updated and the new language is published with `loading = true`.
	/// The dictionary load continues in the returned task; callers may drop
	/// the handle. Load failures are logged and never surface here.
	pub fn set_language(&self, language: LanguageCode) -> JoinHandle<()> {
		let _ordered = self
			.inner
			.side_effects
			.lock()
			.unwrap_or_else(PoisonError::into_inner);

		let mut generation = 0;
		self.inner.state.send_modify(|state| {
			state.generation += 1;
			generation = state.generation;
			state.language = language;
			state.loading = true;
		});

		if let Err(e) = self.inner.preferences.save(language) {
			warn!(language = %language, error = %e, "failed to persist language preference");
		}
		self.inner.document.apply(language, language.direction());

		debug!(language = %language, generation, "language change requested");

		let task = LoadTask {
			inner: Arc::clone(&self.inner),
			generation,
		};
		self.inner.runtime.spawn(task.run(language))
	}

	/// Waits until no load is in flight for the current generation.
	pub async fn loaded(&self) {
		let mut rx = self.inner.state.subscribe();
		// The sender lives as long as `self`, so this cannot fail.
		let _ = rx.wait_for(|state| !state.loading).await;
	}
}

impl std::fmt::Debug for LanguageStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.inner.state.borrow();
		f.debug_struct("LanguageStore")
			.field("language", &state.language)
			.field("status", &state.status)
			.field("loading", &state.loading)
			.field("generation", &state.generation)
			.finish()
	}
}

impl Inner {
	/// Requested language, then the fallback, then the empty dictionary.
	async fn fetch_with_fallback(&self, requested: LanguageCode) -> (Dictionary, LoadStatus) {
		let primary = match self.source.fetch(requested).await {
			Ok(dictionary) => return (dictionary, LoadStatus::Loaded),
			Err(e) => e,
		};

		warn!(
			language = %requested,
			fallback = %self.fallback,
			error = %primary,
			"dictionary load failed, falling back"
		);

		match self.source.fetch(self.fallback).await {
			// A second attempt at the requested language is not a substitution.
			Ok(dictionary) if requested == self.fallback => (dictionary, LoadStatus::Loaded),
			Ok(dictionary) => (
				dictionary,
				LoadStatus::Degraded {
					served: self.fallback,
				},
			),
			Err(e) => {
				error!(
					language = %requested,
					fallback = %self.fallback,
					error = %e,
					"fallback dictionary load failed, using empty dictionary"
				);
				(Dictionary::empty(), LoadStatus::Empty)
			}
		}
	}

	fn publish(&self, generation: u64, dictionary: Dictionary, status: LoadStatus) {
		let dictionary = Arc::new(dictionary);
		self.state.send_if_modified(|state| {
			if state.generation != generation {
				debug!(
					generation,
					current = state.generation,
					"discarding stale dictionary load"
				);
				return false;
			}

			info!(
				language = %state.language,
				status = ?status,
				sections = dictionary.len(),
				"dictionary loaded"
			);
			state.dictionary = dictionary;
			state.status = status;
			true
		});
	}
}

/// One dictionary load, owned by its spawned task.
///
/// Dropping it clears `loading`, so the flag is reset on every exit path,
/// including a task aborted before its first poll. Only the load that owns
/// the current generation may clear the flag.
struct LoadTask {
	inner: Arc<Inner>,
	generation: u64,
}

impl LoadTask {
	async fn run(self, requested: LanguageCode) {
		let (dictionary, status) = self.inner.fetch_with_fallback(requested).await;
		self.inner.publish(self.generation, dictionary, status);
	}
}

impl Drop for LoadTask {
	fn drop(&mut self) {
		let generation = self.generation;
		self.inner.state.send_if_modified(|state| {
			if state.generation == generation && state.loading {
				state.loading = false;
				true
			} else {
				false
			}
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::LoadError;
	use crate::source::StaticDictionarySource;
	use async_trait::async_trait;
	use serde_json::json;
	use std::collections::HashMap;
	use std::sync::atomic::{AtomicUsize, Ordering};
	use tokio::sync::Semaphore;

	fn dict(value: serde_json::Value) -> Dictionary {
		Dictionary::from_value(value).unwrap()
	}

	fn arabic() -> Dictionary {
		dict(json!({"nav": {"home": "الرئيسية"}}))
	}

	fn english() -> Dictionary {
		dict(json!({"nav": {"home": "Home"}}))
	}

	fn both() -> Arc<StaticDictionarySource> {
		Arc::new(
			StaticDictionarySource::new()
				.with(LanguageCode::Ar, arabic())
				.with(LanguageCode::En, english()),
		)
	}

	struct Fixture {
		store: LanguageStore,
		preferences: Arc<MemoryPreferenceStore>,
		document: Arc<DocumentRoot>,
	}

	fn fixture(source: Arc<dyn DictionarySource>, preferences: MemoryPreferenceStore) -> Fixture {
		let preferences = Arc::new(preferences);
		let document = Arc::new(DocumentRoot::new());
		let store = LanguageStore::builder()
			.source(source)
			.preferences(preferences.clone())
			.document(document.clone())
			.build()
			.unwrap();
		Fixture {
			store,
			preferences,
			document,
		}
	}

	/// Each language's fetch waits for a permit on its own gate.
	struct GatedSource {
		gates: HashMap<LanguageCode, Arc<Semaphore>>,
		fetches: AtomicUsize,
		completed: AtomicUsize,
	}

	impl GatedSource {
		fn new() -> Self {
			let gates = LanguageCode::ALL
				.into_iter()
				.map(|code| (code, Arc::new(Semaphore::new(0))))
				.collect();
			Self {
				gates,
				fetches: AtomicUsize::new(0),
				completed: AtomicUsize::new(0),
			}
		}

		fn release(&self, language: LanguageCode, permits: usize) {
			self.gates[&language].add_permits(permits);
		}

		/// Yields until `count` fetches have returned. On the current-thread
		/// runtime the load task publishes in the same poll its fetch returns.
		async fn wait_completed(&self, count: usize) {
			while self.completed.load(Ordering::SeqCst) < count {
				tokio::task::yield_now().await;
			}
		}
	}

	#[async_trait]
	impl DictionarySource for GatedSource {
		async fn fetch(&self, language: LanguageCode) -> std::result::Result<Dictionary, LoadError> {
			self.fetches.fetch_add(1, Ordering::SeqCst);
			let permit = self.gates[&language].acquire().await.unwrap();
			permit.forget();
			self.completed.fetch_add(1, Ordering::SeqCst);
			Ok(match language {
				LanguageCode::Ar => arabic(),
				LanguageCode::En => english(),
			})
		}
	}

	#[tokio::test]
	async fn fresh_store_defaults_to_arabic_and_resolves_label() {
		let f = fixture(both(), MemoryPreferenceStore::new());
		f.store.loaded().await;

		assert_eq!(f.store.language(), LanguageCode::Ar);
		assert_eq!(f.store.translator().t("nav.home"), "الرئيسية");
		assert_eq!(
			crate::resolve(&f.store.dictionary(), "nav.home", None),
			json!("الرئيسية")
		);
		assert_eq!(f.store.snapshot().status, LoadStatus::Loaded);
		assert_eq!(f.preferences.value().as_deref(), Some("ar"));
		assert_eq!(f.document.dir(), Some(crate::Direction::Rtl));
	}

	#[tokio::test]
	async fn persisted_preference_selects_initial_language() {
		let f = fixture(both(), MemoryPreferenceStore::with_value("en"));
		f.store.loaded().await;
		assert_eq!(f.store.language(), LanguageCode::En);
		assert_eq!(f.store.translator().t("nav.home"), "Home");
	}

	#[tokio::test]
	async fn invalid_persisted_preference_defaults_to_arabic() {
		let f = fixture(both(), MemoryPreferenceStore::with_value("de"));
		f.store.loaded().await;
		assert_eq!(f.store.language(), LanguageCode::Ar);
		assert_eq!(f.preferences.value().as_deref(), Some("ar"));
	}

	#[tokio::test]
	async fn side_effects_apply_before_load_completes() {
		let source = Arc::new(GatedSource::new());
		let f = fixture(source.clone(), MemoryPreferenceStore::with_value("ar"));

		let handle = f.store.set_language(LanguageCode::En);

		assert_eq!(f.store.language(), LanguageCode::En);
		assert!(f.store.is_loading());
		assert_eq!(f.preferences.value().as_deref(), Some("en"));
		assert_eq!(f.document.html_attributes(), "lang=\"en\" dir=\"ltr\"");
		assert!(f.store.dictionary().is_empty());

		source.release(LanguageCode::En, 1);
		handle.await.unwrap();
		assert!(!f.store.is_loading());
		assert_eq!(f.store.translator().t("nav.home"), "Home");
	}

	#[tokio::test]
	async fn set_language_arabic_loads_and_sets_rtl() {
		let f = fixture(both(), MemoryPreferenceStore::with_value("en"));
		f.store.loaded().await;

		f.store.set_language(LanguageCode::Ar).await.unwrap();

		assert_eq!(f.preferences.value().as_deref(), Some("ar"));
		assert_eq!(f.document.dir(), Some(crate::Direction::Rtl));
		assert_eq!(*f.store.dictionary(), arabic());
	}

	#[tokio::test]
	async fn failed_language_falls_back_to_english_dictionary() {
		let source = Arc::new(StaticDictionarySource::new().with(LanguageCode::En, english()));
		let f = fixture(source, MemoryPreferenceStore::with_value("en"));
		f.store.loaded().await;

		f.store.set_language(LanguageCode::Ar).await.unwrap();

		let state = f.store.snapshot();
		assert_eq!(state.language, LanguageCode::Ar);
		assert_eq!(*state.dictionary, english());
		assert_eq!(
			state.status,
			LoadStatus::Degraded {
				served: LanguageCode::En
			}
		);
		assert_eq!(f.preferences.value().as_deref(), Some("ar"));
		assert!(!state.loading);
	}

	#[tokio::test]
	async fn total_failure_uses_empty_dictionary() {
		let f = fixture(
			Arc::new(StaticDictionarySource::new()),
			MemoryPreferenceStore::new(),
		);
		f.store.loaded().await;

		let state = f.store.snapshot();
		assert!(state.dictionary.is_empty());
		assert_eq!(state.status, LoadStatus::Empty);
		assert!(!state.loading);
		assert_eq!(f.store.translator().t("nav.home"), "nav.home");
		assert_eq!(f.store.translator().t_or("nav.home", "Home"), "Home");
	}

	#[tokio::test]
	async fn failing_fallback_language_is_attempted_twice() {
		struct Failing(AtomicUsize);

		#[async_trait]
		impl DictionarySource for Failing {
			async fn fetch(&self, language: LanguageCode) -> std::result::Result<Dictionary, LoadError> {
				self.0.fetch_add(1, Ordering::SeqCst);
				Err(LoadError::NotFound { language })
			}
		}

		let source = Arc::new(Failing(AtomicUsize::new(0)));
		let f = fixture(source.clone(), MemoryPreferenceStore::with_value("en"));
		f.store.loaded().await;

		assert_eq!(f.store.snapshot().status, LoadStatus::Empty);
		assert_eq!(source.0.load(Ordering::SeqCst), 2);
	}

	#[tokio::test]
	async fn second_attempt_at_fallback_language_counts_as_loaded() {
		struct FailsOnce(AtomicUsize);

		#[async_trait]
		impl DictionarySource for FailsOnce {
			async fn fetch(&self, language: LanguageCode) -> std::result::Result<Dictionary, LoadError> {
				if self.0.fetch_add(1, Ordering::SeqCst) == 0 {
					return Err(LoadError::Status { language, status: 503 });
				}
				Ok(english())
			}
		}

		let source = Arc::new(FailsOnce(AtomicUsize::new(0)));
		let f = fixture(source.clone(), MemoryPreferenceStore::with_value("en"));
		f.store.loaded().await;

		let state = f.store.snapshot();
		assert_eq!(state.language, LanguageCode::En);
		assert_eq!(state.status, LoadStatus::Loaded);
		assert_eq!(f.store.translator().t("nav.home"), "Home");
		assert_eq!(source.0.load(Ordering::SeqCst), 2);
	}

	#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
	async fn slow_preference_write_does_not_block_readers() {
		use std::sync::atomic::AtomicBool;
		use tokio::sync::Notify;

		#[derive(Default)]
		struct SlowPreferences {
			armed: AtomicBool,
			saving: AtomicBool,
			started: Notify,
		}

		impl PreferenceStore for SlowPreferences {
			fn load(&self) -> Option<String> {
				None
			}

			fn save(&self, _language: LanguageCode) -> std::result::Result<(), crate::error::PreferenceError> {
				if self.armed.load(Ordering::SeqCst) {
					self.saving.store(true, Ordering::SeqCst);
					self.started.notify_one();
					std::thread::sleep(std::time::Duration::from_millis(300));
					self.saving.store(false, Ordering::SeqCst);
				}
				Ok(())
			}
		}

		let preferences = Arc::new(SlowPreferences::default());
		let store = LanguageStore::builder()
			.source(both())
			.preferences(preferences.clone())
			.build()
			.unwrap();
		store.loaded().await;
		preferences.armed.store(true, Ordering::SeqCst);

		let switching = store.clone();
		let switch = tokio::task::spawn_blocking(move || switching.set_language(LanguageCode::En));
		preferences.started.notified().await;

		// Read while the write is still in progress.
		assert_eq!(store.language(), LanguageCode::En);
		assert_eq!(store.snapshot().generation, 2);
		assert!(preferences.saving.load(Ordering::SeqCst));

		switch.await.unwrap().await.unwrap();
		assert!(!preferences.saving.load(Ordering::SeqCst));
	}

	#[test]
	fn build_outside_runtime_is_an_error() {
		let err = LanguageStore::builder().source(both()).build().unwrap_err();
		assert!(matches!(err, I18nError::NoRuntime));
	}

	#[tokio::test]
	async fn repeated_set_language_is_idempotent() {
		let f = fixture(both(), MemoryPreferenceStore::new());
		f.store.loaded().await;

		let first = f.store.set_language(LanguageCode::En);
		let second = f.store.set_language(LanguageCode::En);
		first.await.unwrap();
		second.await.unwrap();

		let state = f.store.snapshot();
		assert_eq!(state.language, LanguageCode::En);
		assert_eq!(*state.dictionary, english());
		assert_eq!(state.status, LoadStatus::Loaded);
		assert!(!state.loading);
		assert_eq!(f.preferences.value().as_deref(), Some("en"));
	}

	#[tokio::test]
	async fn stale_load_finishing_last_is_discarded() {
		let source = Arc::new(GatedSource::new());
		let f = fixture(source.clone(), MemoryPreferenceStore::with_value("ar"));

		let to_english = f.store.set_language(LanguageCode::En);
		let back_to_arabic = f.store.set_language(LanguageCode::Ar);

		// Initial load and the latest request both wait on the Arabic gate.
		source.release(LanguageCode::Ar, 2);
		back_to_arabic.await.unwrap();
		assert!(!f.store.is_loading());
		assert_eq!(*f.store.dictionary(), arabic());

		// The superseded English request completes after the Arabic one.
		source.release(LanguageCode::En, 1);
		to_english.await.unwrap();

		let state = f.store.snapshot();
		assert_eq!(state.language, LanguageCode::Ar);
		assert_eq!(*state.dictionary, arabic());
		assert_eq!(state.generation, 3);
		assert!(!state.loading);
		assert_eq!(source.fetches.load(Ordering::SeqCst), 3);
	}

	#[tokio::test]
	async fn stale_load_does_not_clear_newer_loading_flag() {
		let source = Arc::new(GatedSource::new());
		let f = fixture(source.clone(), MemoryPreferenceStore::with_value("en"));

		let to_arabic = f.store.set_language(LanguageCode::Ar);

		// Initial English load (generation 1) finishes while Arabic is pending.
		source.release(LanguageCode::En, 1);
		source.wait_completed(1).await;
		assert!(f.store.is_loading());
		assert!(f.store.dictionary().is_empty());

		source.release(LanguageCode::Ar, 1);
		to_arabic.await.unwrap();
		assert!(!f.store.is_loading());
		assert_eq!(*f.store.dictionary(), arabic());
	}

	#[tokio::test]
	async fn subscribers_see_language_change_and_new_dictionary() {
		let f = fixture(both(), MemoryPreferenceStore::new());
		f.store.loaded().await;

		let mut rx = f.store.subscribe();
		let _ = rx.borrow_and_update();
		f.store.set_language(LanguageCode::En).await.unwrap();

		assert!(rx.has_changed().unwrap());
		let state = rx.borrow_and_update().clone();
		assert_eq!(state.language, LanguageCode::En);
		assert_eq!(state.translator().t("nav.home"), "Home");
	}

	#[tokio::test]
	async fn aborted_load_still_clears_loading_flag() {
		let source = Arc::new(GatedSource::new());
		let f = fixture(source.clone(), MemoryPreferenceStore::with_value("ar"));

		let handle = f.store.set_language(LanguageCode::En);
		handle.abort();
		let _ = handle.await;

		assert!(!f.store.is_loading());
		assert!(f.store.dictionary().is_empty());
	}

	#[tokio::test]
	async fn builder_requires_source() {
		let err = LanguageStore::builder().build().unwrap_err();
		assert!(matches!(err, I18nError::MissingSource));
	}
}
