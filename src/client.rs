use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{StatusCode, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{truncate_body, PlacesError, Result, API_KEY_ENV};

pub const DEFAULT_BASE_URL: &str = "https://places-api.foursquare.com";
pub const DEFAULT_API_VERSION: &str = "2025-06-17";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 50;

/// Fields asked for on every detail lookup. The API may still leave any of them out.
pub const DETAIL_FIELDS: [&str; 10] = [
    "fsq_place_id",
    "name",
    "categories",
    "location",
    "geocodes",
    "rating",
    "price",
    "hours",
    "tel",
    "website",
];

const API_VERSION_HEADER: &str = "x-places-api-version";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Falls back to `FOURSQUARE_API_KEY` when `None`.
    pub api_key: Option<String>,
    pub base_url: String,
    pub api_version: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Query parameters of `/places/search`.
#[derive(Clone, Serialize, Debug)]
pub struct SearchParams {
    pub query: String,
    pub near: String,
    pub limit: u32,
    /// Meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
    /// Comma separated category ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
}

impl SearchParams {
    pub fn new(query: impl Into<String>, near: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            near: near.into(),
            limit: DEFAULT_LIMIT,
            radius: None,
            categories: None,
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn categories(mut self, categories: impl Into<String>) -> Self {
        self.categories = Some(categories.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.query.trim().is_empty() {
            return Err(PlacesError::invalid("`query` must be a non-empty string"));
        }
        if self.near.trim().is_empty() {
            return Err(PlacesError::invalid(
                "`near` must be a non-empty string, e.g. 'Atlanta, GA'",
            ));
        }
        if self.limit == 0 || self.limit > MAX_LIMIT {
            return Err(PlacesError::invalid(format!(
                "`limit` must be between 1 and {}",
                MAX_LIMIT
            )));
        }
        if self.radius == Some(0) {
            return Err(PlacesError::invalid(
                "`radius` must be a positive integer (meters)",
            ));
        }
        Ok(())
    }
}

/// Blocking client for the Foursquare Places API.
///
/// Each call is exactly one GET request bounded by the configured timeout.
/// Nothing is retried and pagination is left to the caller.
pub struct PlacesClient {
    http: Client,
    base_url: Url,
}

impl PlacesClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let api_key = resolve_api_key(config.api_key)?;

        let base_url = Url::parse(config.base_url.trim_end_matches('/')).map_err(|e| {
            PlacesError::invalid(format!("base url {:?} is not valid: {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(PlacesError::invalid(format!(
                "base url {:?} cannot carry a path",
                config.base_url
            )));
        }

        let http = Client::builder()
            .default_headers(default_headers(&api_key, &config.api_version)?)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Builds a client with the default endpoint, taking the key from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /places/search`, returning the raw payload.
    pub fn search(&self, params: &SearchParams) -> Result<Value> {
        params.validate()?;
        let url = self.endpoint(&["places", "search"])?;
        self.get(url, params)
    }

    /// `GET /places/{id}` asking for [`DETAIL_FIELDS`], returning the raw payload.
    pub fn get_details(&self, place_id: &str) -> Result<Value> {
        if place_id.trim().is_empty() {
            return Err(PlacesError::invalid(
                "`fsq_place_id` must be a non-empty string",
            ));
        }
        let url = self.endpoint(&["places", place_id])?;
        self.get(url, &[("fields", DETAIL_FIELDS.join(","))])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PlacesError::invalid("base url cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get<Q: Serialize + ?Sized>(&self, url: Url, query: &Q) -> Result<Value> {
        debug!(%url, "calling places api");
        let response = self.http.get(url).query(query).send().map_err(|e| {
            warn!("Places API request failed due to: {}", e);
            PlacesError::Transport(e)
        })?;
        parse_json_response(response)
    }
}

fn resolve_api_key(explicit: Option<String>) -> Result<String> {
    let api_key = match explicit {
        Some(key) => key,
        None => std::env::var(API_KEY_ENV).unwrap_or_default(),
    };
    if api_key.trim().is_empty() {
        return Err(PlacesError::AuthenticationMissing);
    }
    Ok(api_key)
}

fn default_headers(api_key: &str, api_version: &str) -> Result<HeaderMap> {
    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key.trim()))
        .map_err(|_| PlacesError::invalid("API key contains characters not allowed in a header"))?;
    bearer.set_sensitive(true);

    let version = HeaderValue::from_str(api_version)
        .map_err(|_| PlacesError::invalid(format!("API version {:?} is not valid", api_version)))?;

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(HeaderName::from_static(API_VERSION_HEADER), version);
    Ok(headers)
}

fn parse_json_response(response: Response) -> Result<Value> {
    let status = response.status();
    let body = response.text()?;
    debug!(status = status.as_u16(), bytes = body.len(), "places api responded");

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        warn!("Places API rejected the credentials with status {}", status);
        return Err(PlacesError::Authentication {
            status,
            body: truncate_body(&body),
        });
    }
    if status.as_u16() >= 400 {
        warn!("Places API returned error status {}", status);
        return Err(PlacesError::Request {
            status,
            reason: "API error".to_string(),
            body: truncate_body(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| {
        warn!("Places API returned a body that is not JSON: {}", e);
        PlacesError::Request {
            status,
            reason: format!("invalid JSON response: {}", e),
            body: truncate_body(&body),
        }
    })
}
