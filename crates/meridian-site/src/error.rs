// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
	#[error(transparent)]
	I18n(#[from] meridian_i18n::I18nError),

	#[error("invalid fallback language: {0}")]
	Fallback(#[from] meridian_i18n::UnsupportedLanguage),

	#[error("failed to build HTTP client: {0}")]
	Http(#[from] reqwest::Error),

	#[error(transparent)]
	Contact(#[from] meridian_contact::ContactError),
}
