// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The Meridian marketing site: page routes, typed localized content and
//! application bootstrap on top of `meridian-i18n`.

pub mod app;
pub mod content;
pub mod error;
pub mod pages;

pub use app::App;
pub use content::{PricingPlan, ServiceItem, SiteContent, TeamMember, Testimonial};
pub use error::SiteError;
pub use pages::Page;
