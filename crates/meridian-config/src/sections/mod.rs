// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod contact;
mod locales;
mod logging;
mod preferences;

pub use contact::{ContactConfig, ContactConfigLayer};
pub use locales::{LocalesConfig, LocalesConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use preferences::{PreferencesConfig, PreferencesConfigLayer};
