//! Page and sitemap retrieval for the SEO audit pipeline.
//!
//! Wraps `reqwest` with the configured timeout and user agent, maps non-2xx
//! responses to typed errors, and parses sitemap `<loc>` entries. There is
//! deliberately no retry layer: a transient fetch failure is treated exactly
//! like a permanent one, and the page is skipped by the pipeline.

pub mod client;
pub mod error;
pub mod sitemap;

pub use client::{FetchedPage, PageClient};
pub use error::FetchError;
pub use sitemap::{fetch_sitemap_urls, parse_sitemap};
