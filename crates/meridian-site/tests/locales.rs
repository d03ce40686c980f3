// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Checks on the dictionaries shipped in `locales/`.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use meridian_contact::{Field, FormStatus};
use meridian_i18n::{Dictionary, LanguageCode, Translator};
use meridian_site::{Page, SiteContent};
use serde_json::Value;

fn locales_dir() -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../locales")
}

fn load(language: LanguageCode) -> Dictionary {
	let path = locales_dir().join(format!("{language}.json"));
	let body = std::fs::read(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()));
	Dictionary::parse(language, &body).unwrap()
}

fn translator(language: LanguageCode) -> Translator {
	Translator::new(Arc::new(load(language)))
}

/// Dotted paths of every object key; array contents are not descended.
fn key_paths(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
	if let Value::Object(map) = value {
		for (key, child) in map {
			let path = if prefix.is_empty() {
				key.clone()
			} else {
				format!("{prefix}.{key}")
			};
			key_paths(&path, child, out);
			out.insert(path);
		}
	}
}

#[test]
fn both_languages_have_the_same_keys() {
	let mut en = BTreeSet::new();
	let mut ar = BTreeSet::new();
	key_paths("", &Value::Object(load(LanguageCode::En).root().clone()), &mut en);
	key_paths("", &Value::Object(load(LanguageCode::Ar).root().clone()), &mut ar);

	let only_en: Vec<_> = en.difference(&ar).collect();
	let only_ar: Vec<_> = ar.difference(&en).collect();
	assert!(only_en.is_empty(), "missing in ar: {only_en:?}");
	assert!(only_ar.is_empty(), "missing in en: {only_ar:?}");
}

#[test]
fn every_page_has_a_title() {
	for language in LanguageCode::ALL {
		let t = translator(language);
		for page in Page::ALL {
			assert_ne!(page.title(&t), page.title_key(), "{language}: {page:?}");
		}
	}
}

#[test]
fn structured_sections_parse() {
	for language in LanguageCode::ALL {
		let content = SiteContent::from_translator(&translator(language))
			.unwrap_or_else(|e| panic!("{language}: {e}"));
		assert_eq!(content.services.len(), 3);
		assert_eq!(content.pricing.len(), 3);
		assert!(content.highlighted_plan().is_some());
		assert!(!content.team.is_empty());
		assert!(!content.testimonials.is_empty());
		assert_eq!(content.industries.len(), 5);
	}
}

#[test]
fn contact_labels_and_banners_exist() {
	let statuses = [
		FormStatus::Submitting,
		FormStatus::Success,
		FormStatus::Error(String::new()),
	];
	for language in LanguageCode::ALL {
		let t = translator(language);
		for field in [Field::Name, Field::Email, Field::Subject, Field::Message] {
			assert_ne!(t.t(field.label_key()), field.label_key());
		}
		for status in &statuses {
			let key = status.banner_key().unwrap();
			assert_ne!(t.t(key), key);
		}
	}
}

#[test]
fn array_items_are_addressable() {
	let t = translator(LanguageCode::En);
	assert_eq!(t.t("services.items.0.id"), "erp");
	assert_eq!(t.t("pricing.plans.1.name"), "Business");
	assert_eq!(t.t("services.items.9.id"), "services.items.9.id");
}

#[test]
fn thanks_message_interpolates() {
	let t = translator(LanguageCode::Ar);
	assert_eq!(t.t_fmt("contact.thanks", &[("name", "ليلى")]), "شكراً، ليلى!");
}
