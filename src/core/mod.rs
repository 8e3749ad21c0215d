//! Core components of the `insider-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`InsiderClient`] and its builder.
//! - The primary [`InsiderError`] type.
//! - Numeric, date and display conversions shared by the parsers and the report.

/// The client (`InsiderClient`), builder, and configuration.
pub mod client;
/// Coercions for loosely typed source fields, date formats and digit grouping.
pub mod conversions;
/// The primary error type (`InsiderError`) for the crate.
pub mod error;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::InsiderClient`
pub use client::{InsiderClient, InsiderClientBuilder};
pub use conversions::FallbackPolicy;
pub use error::InsiderError;
