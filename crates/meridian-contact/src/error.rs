// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for contact submissions.

use thiserror::Error;

use crate::message::Field;

#[derive(Debug, Error)]
pub enum ContactError {
	/// A form field failed validation; nothing was sent.
	#[error("{field} {reason}")]
	Validation { field: Field, reason: &'static str },

	/// Transport failure talking to the table store.
	#[error("HTTP request failed: {0}")]
	RequestFailed(#[from] reqwest::Error),

	/// The table store rejected the insert.
	#[error("server error ({status}): {message}")]
	ServerError { status: u16, message: String },

	/// No endpoint or key configured.
	#[error("contact submission is not configured")]
	NotConfigured,
}

impl ContactError {
	pub(crate) fn validation(field: Field, reason: &'static str) -> Self {
		Self::Validation { field, reason }
	}
}

pub type Result<T> = std::result::Result<T, ContactError>;
