// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `meridian` - inspect and exercise the site's localized content from a
//! terminal.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use meridian_config::{load_config, load_config_with_file, SiteConfig};
use meridian_contact::{ContactForm, ContactMessage, FormStatus};
use meridian_i18n::{LanguageCode, LoadStatus};
use meridian_site::App;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "meridian", version, about, long_about = None)]
struct Args {
	/// Path to custom configuration file
	#[arg(short, long, env = "MERIDIAN_CONFIG")]
	config: Option<PathBuf>,

	/// Log filter (overrides config, overridden by RUST_LOG)
	#[arg(short, long)]
	log_level: Option<String>,

	/// Output logs as JSON
	#[arg(long)]
	json_logs: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Resolve a dotted key in the active language
	Lookup {
		key: String,
		/// Value printed when the key is missing
		#[arg(long)]
		fallback: Option<String>,
	},
	/// Switch the active language and remember the choice
	SetLanguage {
		#[arg(value_parser = parse_language)]
		language: LanguageCode,
	},
	/// List every page with its localized title
	Sitemap,
	/// Print the structured content sections as JSON
	Content,
	/// Send a message through the contact form
	Contact {
		#[arg(long)]
		name: String,
		#[arg(long)]
		email: String,
		#[arg(long)]
		subject: String,
		#[arg(long)]
		message: String,
	},
	/// Print version information
	Version,
}

fn parse_language(s: &str) -> Result<LanguageCode, String> {
	s.parse().map_err(|e: meridian_i18n::UnsupportedLanguage| e.to_string())
}

fn init_tracing(config: &SiteConfig, level: Option<&str>, json: bool) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(level.unwrap_or(&config.logging.level)));

	let layer = fmt::layer().with_writer(std::io::stderr);
	if json {
		tracing_subscriber::registry()
			.with(filter)
			.with(layer.json())
			.init();
	} else {
		tracing_subscriber::registry()
			.with(filter)
			.with(layer.compact())
			.init();
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	if let Command::Version = args.command {
		println!("meridian {}", env!("CARGO_PKG_VERSION"));
		return Ok(());
	}

	let config = match &args.config {
		Some(path) => load_config_with_file(path),
		None => load_config(),
	}
	.context("failed to load configuration")?;

	init_tracing(&config, args.log_level.as_deref(), args.json_logs);

	let app = App::from_config(config).context("failed to initialize site")?;
	let status = app.ready().await;
	report_status(&app, status);

	match args.command {
		Command::Lookup { key, fallback } => {
			let value = app.translator().value(&key, fallback.map(Value::String));
			match value {
				Value::String(s) => println!("{s}"),
				other => println!("{}", serde_json::to_string_pretty(&other)?),
			}
		}
		Command::SetLanguage { language } => {
			let status = app.switch_language(language).await;
			report_status(&app, status);
			println!(
				"{} ({})",
				language.info().native_name,
				app.document().html_attributes()
			);
		}
		Command::Sitemap => {
			for (page, title) in app.navigation() {
				println!("{:<14} {}", page.path(), title);
			}
		}
		Command::Content => {
			let content = app.content().context("dictionary content is incomplete")?;
			println!("{}", serde_json::to_string_pretty(&content)?);
		}
		Command::Contact {
			name,
			email,
			subject,
			message,
		} => {
			let t = app.translator();
			let mut form = ContactForm::with_fields(ContactMessage::new(name, email, subject, message));
			let status = app.submit_contact(&mut form).await?.clone();
			if let Some(key) = status.banner_key() {
				println!("{}", t.t(key));
			}
			if let FormStatus::Error(detail) = status {
				bail!("contact submission failed: {detail}");
			}
		}
		Command::Version => {}
	}

	Ok(())
}

fn report_status(app: &App, status: LoadStatus) {
	let language = app.store().language();
	match status {
		LoadStatus::Loaded => info!(language = %language, "dictionary loaded"),
		LoadStatus::Degraded { served } => {
			info!(language = %language, served = %served, "serving fallback dictionary")
		}
		LoadStatus::Empty | LoadStatus::Pending => {
			info!(language = %language, "no dictionary available, showing keys")
		}
	}
}
