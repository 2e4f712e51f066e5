//! `sitegen`: terminal client for the website section generator.
//!
//! # Usage
//!
//! ```text
//! sitegen generate "Landing page for a bakery" --export
//! sitegen --url http://localhost:3001 list
//! sitegen --config ~/.config/sitegen/config.toml list --export out.json
//! ```

use std::{
  path::{Path, PathBuf},
  process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use sitegen_client::{
  ApiClient, ApiConfig, DEFAULT_BASE_URL,
  view::{FAILURE_MESSAGE, render_sections},
};
use sitegen_core::{
  export::{DEFAULT_EXPORT_FILE, to_json_pretty},
  section::Section,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "sitegen", about = "Generate website sections from an idea")]
struct Args {
  /// Path to a TOML config file (`url`).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Base URL of the server (default: http://localhost:3001).
  #[arg(long, env = "SITEGEN_URL")]
  url: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Submit an idea, then print every stored section.
  Generate {
    /// Free-text description of the website.
    idea: String,

    /// Also write the listing as JSON (default file: website-sections.json).
    #[arg(long, value_name = "FILE", num_args = 0..=1, default_missing_value = DEFAULT_EXPORT_FILE)]
    export: Option<PathBuf>,
  },
  /// Print every stored section.
  List {
    /// Also write the listing as JSON (default file: website-sections.json).
    #[arg(long, value_name = "FILE", num_args = 0..=1, default_missing_value = DEFAULT_EXPORT_FILE)]
    export: Option<PathBuf>,
  },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  match run(args).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      tracing::debug!(error = ?e, "command failed");
      eprintln!("{FAILURE_MESSAGE}");
      ExitCode::FAILURE
    }
  }
}

async fn run(args: Args) -> Result<()> {
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flag / env overrides config file, which overrides the default.
  let api_config = ApiConfig {
    base_url: args
      .url
      .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
      .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
  };
  let client = ApiClient::new(api_config)?;
  client.health().await?;

  let (sections, export) = match args.command {
    Command::Generate { idea, export } => (client.generate(&idea).await?, export),
    Command::List { export } => (client.list_sections().await?, export),
  };

  print!("{}", render_sections(&sections));

  if let Some(path) = export {
    write_export(&sections, &path)?;
    println!("Exported to {}", path.display());
  }
  Ok(())
}

fn write_export(sections: &[Section], path: &Path) -> Result<()> {
  let json = to_json_pretty(sections)?;
  std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}
