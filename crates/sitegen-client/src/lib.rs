//! Client side of the section generator: an HTTP client for the JSON API
//! and plain-text rendering of section lists.

pub mod client;
pub mod view;

pub use client::{ApiClient, ApiConfig, DEFAULT_BASE_URL};
