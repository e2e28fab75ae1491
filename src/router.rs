use crate::domain::normalize_query;
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, text_response, ResultResp};
use crate::search::PropertySearch;
use crate::templates;
use astra::Request;
use serde_json::json;
use std::collections::HashMap;
use tracing::debug;

const MAIN_CSS: &str = include_str!("../static/main.css");

/// Shared, read-only state handed to every worker.
pub struct AppState {
    pub search: PropertySearch,
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    debug!(method, path, "request");

    match (method, path) {
        ("GET", "/") => {
            let params = normalize_query(&parse_query(&req));
            let result = state.search.search(&params);
            html_response(templates::pages::home_page(&params, &result))
        }
        ("GET", "/api/properties") => {
            let params = normalize_query(&parse_query(&req));
            json_response(&state.search.search(&params))
        }
        ("GET", "/health") => json_response(&json!({
            "status": "ok",
            "liveData": state.search.has_live_source(),
        })),
        ("GET", "/static/main.css") => text_response("text/css; charset=utf-8", MAIN_CSS),
        _ => Err(ServerError::NotFound),
    }
}

/// Decoded query pairs. A repeated key keeps its first value.
fn parse_query(req: &Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = req.uri().query() {
        for (k, v) in url::form_urlencoded::parse(q.as_bytes()) {
            map.entry(k.into_owned()).or_insert_with(|| v.into_owned());
        }
    }

    map
}
