// src/search/provider.rs

use crate::config::AppConfig;
use crate::domain::property::{Property, SearchParams, SearchResult};
use crate::rentcast::RentCastClient;
use crate::search::mock_data::MOCK_LISTINGS;
use tracing::{info, warn};

/// Picks the data source for a search: RentCast when a key is configured and
/// a location filter was given, the bundled sample listings otherwise or
/// whenever the live call fails.
pub struct PropertySearch {
    rentcast: Option<RentCastClient>,
}

impl PropertySearch {
    pub fn new(rentcast: Option<RentCastClient>) -> Self {
        Self { rentcast }
    }

    /// A client that can't be built is logged and treated like a missing key.
    pub fn from_config(cfg: &AppConfig) -> Self {
        let Some(key) = cfg.rentcast_api_key.as_ref() else {
            info!("RENTCAST_API_KEY not set, serving sample listings");
            return Self::new(None);
        };

        match RentCastClient::new(&cfg.rentcast_base_url, key, cfg.http_timeout) {
            Ok(client) => Self::new(Some(client)),
            Err(e) => {
                warn!(error = %e, "RentCast client init failed, serving sample listings");
                Self::new(None)
            }
        }
    }

    pub fn has_live_source(&self) -> bool {
        self.rentcast.is_some()
    }

    pub fn search(&self, params: &SearchParams) -> SearchResult {
        if let Some(client) = self.rentcast.as_ref().filter(|_| params.has_location_filter()) {
            match client.search_properties(params) {
                Ok(properties) => {
                    info!(count = properties.len(), "live search");
                    return SearchResult {
                        total: properties.len(),
                        properties,
                        using_mock_data: false,
                    };
                }
                Err(e) => {
                    warn!(error = %e, "RentCast search failed, falling back to sample data");
                }
            }
        }

        let result = search_mock(params);
        info!(total = result.total, page = result.properties.len(), "mock search");
        result
    }
}

/// Filters the sample listings and returns the requested page.
pub fn search_mock(params: &SearchParams) -> SearchResult {
    let filtered = filter_mock(
        params.city.as_deref(),
        params.state.as_deref(),
        params.zip_code.as_deref(),
    );

    let total = filtered.len();
    let properties = filtered
        .into_iter()
        .skip(params.offset)
        .take(params.limit)
        .collect();

    SearchResult {
        properties,
        total,
        using_mock_data: true,
    }
}

/// City is a case-insensitive substring match, state a case-insensitive
/// exact match, ZIP an exact match. Unset or empty filters are skipped.
pub fn filter_mock(city: Option<&str>, state: Option<&str>, zip_code: Option<&str>) -> Vec<Property> {
    let city = city.filter(|c| !c.is_empty()).map(str::to_lowercase);
    let state = state.filter(|s| !s.is_empty()).map(str::to_uppercase);
    let zip_code = zip_code.filter(|z| !z.is_empty());

    MOCK_LISTINGS
        .iter()
        .filter(|m| {
            city.as_ref()
                .map_or(true, |c| m.city.to_lowercase().contains(c.as_str()))
        })
        .filter(|m| {
            state
                .as_ref()
                .map_or(true, |s| m.state.to_uppercase() == *s)
        })
        .filter(|m| zip_code.map_or(true, |z| m.zip_code == z))
        .map(|m| m.to_property())
        .collect()
}
