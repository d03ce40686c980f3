// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for the Meridian site.
//!
//! Every outbound request (dictionary fetches, contact inserts) goes through a
//! client built here so it carries the same User-Agent and timeout policy.

mod client;

pub use client::{builder, new_client, new_client_with_timeout, user_agent};
