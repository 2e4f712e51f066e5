//! Core types and trait definitions for the website section generator.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

// Native `async fn` in traits; the store trait spells out `Send` futures
// where it matters.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod export;
pub mod generator;
pub mod section;
pub mod store;

pub use error::{Error, Result};
pub use generator::{SectionGenerator, derive_sections, slug};
pub use section::{NewSection, Section, SectionKind};
pub use store::{SectionQuery, SectionStore};
