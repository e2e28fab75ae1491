// client.rs
use crate::domain::property::{Property, SearchParams};
use crate::domain::query::MAX_LIMIT;
use crate::rentcast::models::{extract_records, map_record};
use crate::rentcast::RentCastError;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("homesearch/", env!("CARGO_PKG_VERSION"));

/// Thin blocking client for the RentCast `/properties` endpoint.
pub struct RentCastClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RentCastClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RentCastError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| RentCastError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// One call to `/properties`. The provider paginates; we don't re-slice.
    pub fn search_properties(&self, params: &SearchParams) -> Result<Vec<Property>, RentCastError> {
        let url = format!("{}/properties", self.base_url);
        let query = provider_query(params);

        debug!(%url, ?query, "calling RentCast");

        let resp = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header("X-Api-Key", &self.api_key)
            .query(&query)
            .send()
            .map_err(|e| RentCastError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| RentCastError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(RentCastError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let body: Value =
            serde_json::from_str(&text).map_err(|e| RentCastError::JsonParse(e.to_string()))?;

        Ok(extract_records(&body)
            .iter()
            .enumerate()
            .map(|(i, record)| map_record(record, i))
            .collect())
    }
}

/// Query pairs in RentCast's parameter names. Unset filters are left out.
pub fn provider_query(params: &SearchParams) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();

    if let Some(city) = params.city.as_deref().filter(|v| !v.is_empty()) {
        query.push(("city", city.to_string()));
    }
    if let Some(state) = params.state.as_deref().filter(|v| !v.is_empty()) {
        query.push(("state", state.to_string()));
    }
    if let Some(zip) = params.zip_code.as_deref().filter(|v| !v.is_empty()) {
        query.push(("zipCode", zip.to_string()));
    }

    query.push(("limit", params.limit.min(MAX_LIMIT).to_string()));

    if params.offset > 0 {
        query.push(("offset", params.offset.to_string()));
    }
    if let Some(kind) = params.property_type.as_deref().filter(|v| !v.is_empty()) {
        query.push(("propertyType", kind.to_string()));
    }

    query
}
