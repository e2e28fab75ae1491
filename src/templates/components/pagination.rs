use crate::domain::{SearchParams, SearchResult};
use maud::{html, Markup};
use url::form_urlencoded;

/// Previous/Next links that keep the current filters.
///
/// The live provider only reports what it returned, so there a full page is
/// the hint that more rows exist.
pub fn pagination(params: &SearchParams, result: &SearchResult) -> Markup {
    let has_prev = params.offset > 0;
    let has_next = if result.using_mock_data {
        params.offset.saturating_add(params.limit) < result.total
    } else {
        result.properties.len() >= params.limit
    };

    html! {
        @if has_prev || has_next {
            nav class="pagination" aria-label="Pagination" {
                @if has_prev {
                    a rel="prev" href=(page_href(params, params.offset.saturating_sub(params.limit))) { "← Previous" }
                }
                @if has_next {
                    a rel="next" href=(page_href(params, params.offset.saturating_add(params.limit))) { "Next →" }
                }
            }
        }
    }
}

pub fn page_href(params: &SearchParams, offset: usize) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    if let Some(city) = &params.city {
        query.append_pair("city", city);
    }
    if let Some(state) = &params.state {
        query.append_pair("state", state);
    }
    if let Some(zip) = &params.zip_code {
        query.append_pair("zipCode", zip);
    }
    if let Some(kind) = &params.property_type {
        query.append_pair("propertyType", kind);
    }
    query.append_pair("limit", &params.limit.to_string());
    if offset > 0 {
        query.append_pair("offset", &offset.to_string());
    }

    format!("/?{}", query.finish())
}
