//! Async HTTP client wrapping the section generator JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde_json::json;
use sitegen_core::section::Section;

/// Where the server listens unless told otherwise.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Connection settings for the API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Async HTTP client for the section generator REST API.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
  }

  /// `GET /health`
  pub async fn health(&self) -> Result<()> {
    let resp = self
      .client
      .get(self.url("/health"))
      .send()
      .await
      .context("GET /health failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET /health → {}", resp.status()));
    }
    Ok(())
  }

  // ── Sections ──────────────────────────────────────────────────────────────

  /// `POST /sections`: returns the three sections created for `idea`.
  pub async fn submit_idea(&self, idea: &str) -> Result<Vec<Section>> {
    let resp = self
      .client
      .post(self.url("/sections"))
      .json(&json!({ "idea": idea }))
      .send()
      .await
      .context("POST /sections failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("POST /sections → {}", resp.status()));
    }
    resp.json().await.context("deserialising created sections")
  }

  /// `GET /sections`: the full history, oldest first.
  pub async fn list_sections(&self) -> Result<Vec<Section>> {
    let resp = self
      .client
      .get(self.url("/sections"))
      .send()
      .await
      .context("GET /sections failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET /sections → {}", resp.status()));
    }
    resp.json().await.context("deserialising sections")
  }

  /// Submit `idea`, then re-read every stored section.
  pub async fn generate(&self, idea: &str) -> Result<Vec<Section>> {
    let created = self.submit_idea(idea).await?;
    tracing::debug!(created = created.len(), "idea submitted");
    self.list_sections().await
  }
}
