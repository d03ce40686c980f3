// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The contact message and its validation rules.

use std::fmt;

use serde::Serialize;

use crate::error::{ContactError, Result};

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_SUBJECT_LEN: usize = 200;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_MESSAGE_LEN: usize = 5000;

/// Form field, used to point validation errors at the right input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
	Name,
	Email,
	Subject,
	Message,
}

impl Field {
	/// Dictionary key of the field's label, e.g. `contact.form.email`.
	pub fn label_key(&self) -> &'static str {
		match self {
			Field::Name => "contact.form.name",
			Field::Email => "contact.form.email",
			Field::Subject => "contact.form.subject",
			Field::Message => "contact.form.message",
		}
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Field::Name => "name",
			Field::Email => "email",
			Field::Subject => "subject",
			Field::Message => "message",
		})
	}
}

/// One row of the messages table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
	pub name: String,
	pub email: String,
	pub subject: String,
	pub message: String,
}

impl ContactMessage {
	pub fn new(
		name: impl Into<String>,
		email: impl Into<String>,
		subject: impl Into<String>,
		message: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			email: email.into(),
			subject: subject.into(),
			message: message.into(),
		}
	}

	/// Returns a trimmed copy that satisfies every field rule.
	pub fn validated(&self) -> Result<ContactMessage> {
		let message = ContactMessage {
			name: self.name.trim().to_string(),
			email: self.email.trim().to_string(),
			subject: self.subject.trim().to_string(),
			message: self.message.trim().to_string(),
		};

		check_text(Field::Name, &message.name, MAX_NAME_LEN)?;
		check_text(Field::Email, &message.email, MAX_EMAIL_LEN)?;
		if !is_plausible_email(&message.email) {
			return Err(ContactError::validation(Field::Email, "is not a valid address"));
		}
		check_text(Field::Subject, &message.subject, MAX_SUBJECT_LEN)?;
		check_text(Field::Message, &message.message, MAX_MESSAGE_LEN)?;

		Ok(message)
	}
}

fn check_text(field: Field, value: &str, max_chars: usize) -> Result<()> {
	if value.is_empty() {
		return Err(ContactError::validation(field, "is required"));
	}
	if value.chars().count() > max_chars {
		return Err(ContactError::validation(field, "is too long"));
	}
	Ok(())
}

/// One `@`, a non-empty local part, and a dotted domain without empty labels.
fn is_plausible_email(email: &str) -> bool {
	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};
	!local.is_empty()
		&& !domain.contains('@')
		&& !email.chars().any(char::is_whitespace)
		&& domain.contains('.')
		&& domain.split('.').all(|label| !label.is_empty())
}
