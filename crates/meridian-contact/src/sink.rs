// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Destinations for validated contact messages.

use std::time::Duration;

use async_trait::async_trait;
use meridian_common_secret::SecretString;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::error::{ContactError, Result};
use crate::message::ContactMessage;

const DEFAULT_TABLE: &str = "contact_messages";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Accepts one validated message.
#[async_trait]
pub trait ContactSink: Send + Sync {
	async fn submit(&self, message: &ContactMessage) -> Result<()>;
}

/// Inserts rows into a hosted table through its REST endpoint.
///
/// ```no_run
/// use meridian_contact::{ContactMessage, ContactSink, TableSink};
/// use meridian_common_secret::SecretString;
///
/// # async fn demo() -> meridian_contact::Result<()> {
/// let sink = TableSink::builder()
/// 	.base_url("https://project.example.co")
/// 	.api_key(SecretString::new("anon-key".into()))
/// 	.build()?;
/// let msg = ContactMessage::new("Layla", "layla@example.com", "Hello", "Call me");
/// sink.submit(&msg.validated()?).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TableSink {
	http: Client,
	endpoint: String,
	api_key: SecretString,
}

impl std::fmt::Debug for TableSink {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TableSink")
			.field("endpoint", &self.endpoint)
			.field("api_key", &self.api_key)
			.finish()
	}
}

impl TableSink {
	pub fn builder() -> TableSinkBuilder {
		TableSinkBuilder::default()
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

#[async_trait]
impl ContactSink for TableSink {
	#[instrument(skip_all, fields(endpoint = %self.endpoint))]
	async fn submit(&self, message: &ContactMessage) -> Result<()> {
		let response = self
			.http
			.post(&self.endpoint)
			.header("apikey", self.api_key.expose())
			.header("Authorization", format!("Bearer {}", self.api_key.expose()))
			.header("Prefer", "return=minimal")
			.json(message)
			.send()
			.await?;

		let status = response.status();
		if status.is_success() {
			debug!(status = status.as_u16(), "contact message stored");
			return Ok(());
		}

		let message = response.text().await.unwrap_or_default();
		warn!(status = status.as_u16(), "contact message rejected");
		Err(ContactError::ServerError {
			status: status.as_u16(),
			message,
		})
	}
}

#[derive(Default)]
pub struct TableSinkBuilder {
	base_url: Option<String>,
	table: Option<String>,
	api_key: Option<SecretString>,
	timeout: Option<Duration>,
	http: Option<Client>,
}

impl TableSinkBuilder {
	/// Project URL without the `/rest/v1` suffix.
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.base_url = Some(url.into());
		self
	}

	pub fn table(mut self, table: impl Into<String>) -> Self {
		self.table = Some(table.into());
		self
	}

	pub fn api_key(mut self, key: SecretString) -> Self {
		self.api_key = Some(key);
		self
	}

	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}

	/// Reuse an existing client instead of building one.
	pub fn http_client(mut self, client: Client) -> Self {
		self.http = Some(client);
		self
	}

	pub fn build(self) -> Result<TableSink> {
		let base_url = self
			.base_url
			.filter(|u| !u.trim().is_empty())
			.ok_or(ContactError::NotConfigured)?;
		let api_key = self.api_key.ok_or(ContactError::NotConfigured)?;
		let table = self.table.unwrap_or_else(|| DEFAULT_TABLE.to_string());

		let http = match self.http {
			Some(client) => client,
			None => meridian_common_http::new_client_with_timeout(
				self.timeout.unwrap_or(DEFAULT_TIMEOUT),
			)?,
		};

		Ok(TableSink {
			http,
			endpoint: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table),
			api_key,
		})
	}
}
