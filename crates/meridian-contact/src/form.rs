// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Contact form state: field values plus the submission status banner.

use tracing::{info, warn};

use crate::error::ContactError;
use crate::message::ContactMessage;
use crate::sink::ContactSink;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
	#[default]
	Idle,
	Submitting,
	Success,
	/// Carries the error text shown under the form.
	Error(String),
}

impl FormStatus {
	/// Dictionary key of the banner for this status, if one is shown.
	pub fn banner_key(&self) -> Option<&'static str> {
		match self {
			FormStatus::Idle => None,
			FormStatus::Submitting => Some("contact.form.sending"),
			FormStatus::Success => Some("contact.form.success"),
			FormStatus::Error(_) => Some("contact.form.error"),
		}
	}
}

#[derive(Debug, Default)]
pub struct ContactForm {
	pub fields: ContactMessage,
	status: FormStatus,
}

impl ContactForm {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_fields(fields: ContactMessage) -> Self {
		Self {
			fields,
			status: FormStatus::Idle,
		}
	}

	pub fn status(&self) -> &FormStatus {
		&self.status
	}

	/// Validates and sends the current fields.
	///
	/// Fields are cleared on success and kept on any failure so the visitor
	/// can correct and resend.
	pub async fn submit(&mut self, sink: &dyn ContactSink) -> &FormStatus {
		self.status = FormStatus::Submitting;

		let outcome = match self.fields.validated() {
			Ok(message) => sink.submit(&message).await,
			Err(e) => Err(e),
		};

		self.status = match outcome {
			Ok(()) => {
				info!("contact form submitted");
				self.fields = ContactMessage::default();
				FormStatus::Success
			}
			Err(e @ ContactError::Validation { .. }) => FormStatus::Error(e.to_string()),
			Err(e) => {
				warn!(error = %e, "contact form submission failed");
				FormStatus::Error(e.to_string())
			}
		};
		&self.status
	}

	/// Back to an empty idle form.
	pub fn reset(&mut self) {
		self.fields = ContactMessage::default();
		self.status = FormStatus::Idle;
	}
}
