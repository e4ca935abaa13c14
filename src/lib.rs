//! Client and row normalizer for the Foursquare Places API.
//!
//! [`client::PlacesClient`] fetches raw JSON payloads, and the functions in
//! [`normalize`] flatten them into [`models::row`] records ready for tabular output.

pub mod client;
pub mod config;
pub mod error;
pub mod helpers;
pub mod models;
pub mod normalize;

pub use client::{ClientConfig, PlacesClient, SearchParams};
pub use error::PlacesError;
pub use normalize::{normalize_detail, normalize_search_results};
