// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Typed views of the structured dictionary sections.

use meridian_i18n::{I18nError, Translator};
use serde::{Deserialize, Serialize};

pub const SERVICES_KEY: &str = "services.items";
pub const TEAM_KEY: &str = "about.team";
pub const TESTIMONIALS_KEY: &str = "testimonials.items";
pub const PRICING_KEY: &str = "pricing.plans";
pub const INDUSTRIES_KEY: &str = "industries.items";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceItem {
	pub id: String,
	pub title: String,
	pub description: String,
	#[serde(default)]
	pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
	pub name: String,
	pub role: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
	pub quote: String,
	pub author: String,
	pub company: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPlan {
	pub name: String,
	/// Display string; may be a number or a word such as "Custom".
	pub price: String,
	pub period: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub features: Vec<String>,
	#[serde(default)]
	pub highlighted: bool,
}

/// All structured sections for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteContent {
	pub services: Vec<ServiceItem>,
	pub team: Vec<TeamMember>,
	pub testimonials: Vec<Testimonial>,
	pub pricing: Vec<PricingPlan>,
	pub industries: Vec<String>,
}

impl SiteContent {
	/// Reads every section; the first missing or malformed one is returned
	/// as the error, naming its key.
	pub fn from_translator(t: &Translator) -> Result<Self, I18nError> {
		Ok(Self {
			services: t.section(SERVICES_KEY)?,
			team: t.section(TEAM_KEY)?,
			testimonials: t.section(TESTIMONIALS_KEY)?,
			pricing: t.section(PRICING_KEY)?,
			industries: t.list(INDUSTRIES_KEY),
		})
	}

	pub fn highlighted_plan(&self) -> Option<&PricingPlan> {
		self.pricing.iter().find(|plan| plan.highlighted)
	}
}
