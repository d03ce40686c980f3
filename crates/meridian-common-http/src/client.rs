// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client with consistent User-Agent header.

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Creates a new HTTP client with the standard User-Agent header.
pub fn new_client() -> reqwest::Result<Client> {
	builder().build()
}

/// Creates a new HTTP client builder with the standard User-Agent header.
///
/// Use this when the caller needs further customization.
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Creates a new HTTP client with a request timeout.
///
/// Dictionary loads rely on this timeout; there is no other cancellation.
pub fn new_client_with_timeout(timeout: Duration) -> reqwest::Result<Client> {
	tracing::debug!(timeout_ms = timeout.as_millis() as u64, "building HTTP client");
	builder().timeout(timeout).build()
}

/// Returns the standard User-Agent string.
///
/// Format: `meridian/{version}/{os}-{arch}`
pub fn user_agent() -> String {
	format!(
		"meridian/{}/{}-{}",
		env!("CARGO_PKG_VERSION"),
		std::env::consts::OS,
		std::env::consts::ARCH
	)
}
