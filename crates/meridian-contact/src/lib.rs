// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Contact form handling for the marketing site.
//!
//! A [`ContactForm`] validates its [`ContactMessage`] and hands it to a
//! [`ContactSink`]. [`TableSink`] stores messages in the hosted table.

mod error;
mod form;
mod message;
mod sink;

pub use error::{ContactError, Result};
pub use form::{ContactForm, FormStatus};
pub use message::{
	ContactMessage, Field, MAX_EMAIL_LEN, MAX_MESSAGE_LEN, MAX_NAME_LEN, MAX_SUBJECT_LEN,
};
pub use sink::{ContactSink, TableSink, TableSinkBuilder};
