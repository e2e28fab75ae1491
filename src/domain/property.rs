// src/domain/property.rs

use serde::Serialize;

/// A single listing as shown on a result card.
///
/// Everything past the address is optional: a missing value means
/// "don't display", never zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent_estimate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub square_footage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_built: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
}

impl Property {
    /// Address line for display: the precomputed one when we have it,
    /// otherwise the non-empty parts joined with ", ".
    pub fn display_address(&self) -> String {
        match self.formatted_address.as_deref() {
            Some(addr) if !addr.is_empty() => addr.to_string(),
            _ => join_address(&[&self.address, &self.city, &self.state, &self.zip_code]),
        }
    }
}

pub fn join_address(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Canonical search parameters shared by the live and mock paths.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub limit: usize,
    pub offset: usize,

    // Only forwarded to the provider.
    pub property_type: Option<String>,

    // Reserved: neither data path filters on these yet.
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_beds: Option<f64>,
    pub min_baths: Option<f64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            city: None,
            state: None,
            zip_code: None,
            limit: super::query::DEFAULT_LIMIT,
            offset: 0,
            property_type: None,
            min_price: None,
            max_price: None,
            min_beds: None,
            min_baths: None,
        }
    }
}

impl SearchParams {
    /// True when at least one location filter is set.
    pub fn has_location_filter(&self) -> bool {
        [&self.city, &self.state, &self.zip_code]
            .iter()
            .any(|f| f.as_deref().is_some_and(|v| !v.is_empty()))
    }
}

/// What one search produced, and which data source produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub properties: Vec<Property>,
    /// Matches before pagination (mock) or rows returned (live).
    pub total: usize,
    pub using_mock_data: bool,
}
