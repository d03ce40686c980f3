// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Route table for the site's pages.

use std::fmt;

use meridian_i18n::Translator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
	Home,
	Services,
	Pricing,
	Industries,
	CaseStudies,
	Portfolio,
	Clients,
	About,
	Brochures,
	Contact,
	Sitemap,
}

impl Page {
	/// Navigation order.
	pub const ALL: [Page; 11] = [
		Page::Home,
		Page::Services,
		Page::Pricing,
		Page::Industries,
		Page::CaseStudies,
		Page::Portfolio,
		Page::Clients,
		Page::About,
		Page::Brochures,
		Page::Contact,
		Page::Sitemap,
	];

	pub fn path(&self) -> &'static str {
		match self {
			Page::Home => "/",
			Page::Services => "/services",
			Page::Pricing => "/pricing",
			Page::Industries => "/industries",
			Page::CaseStudies => "/case-studies",
			Page::Portfolio => "/portfolio",
			Page::Clients => "/clients",
			Page::About => "/about",
			Page::Brochures => "/brochures",
			Page::Contact => "/contact",
			Page::Sitemap => "/sitemap",
		}
	}

	/// Matches a request path; a trailing slash and query string are ignored.
	pub fn from_path(path: &str) -> Option<Page> {
		let path = path.split(['?', '#']).next().unwrap_or_default();
		let trimmed = path.trim_end_matches('/');
		let normalized = if trimmed.is_empty() { "/" } else { trimmed };
		Page::ALL.into_iter().find(|page| page.path() == normalized)
	}

	/// Dictionary key of the navigation label.
	pub fn title_key(&self) -> &'static str {
		match self {
			Page::Home => "nav.home",
			Page::Services => "nav.services",
			Page::Pricing => "nav.pricing",
			Page::Industries => "nav.industries",
			Page::CaseStudies => "nav.caseStudies",
			Page::Portfolio => "nav.portfolio",
			Page::Clients => "nav.clients",
			Page::About => "nav.about",
			Page::Brochures => "nav.brochures",
			Page::Contact => "nav.contact",
			Page::Sitemap => "nav.sitemap",
		}
	}

	pub fn title(&self, t: &Translator) -> String {
		t.t(self.title_key())
	}
}

impl fmt::Display for Page {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.path())
	}
}
