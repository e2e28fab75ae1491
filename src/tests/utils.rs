use crate::rentcast::RentCastClient;
use crate::router::AppState;
use crate::search::PropertySearch;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::time::Duration;

/// State with no RentCast key: every search is served from sample data.
pub fn offline_state() -> AppState {
    AppState {
        search: PropertySearch::new(None),
    }
}

/// State pointed at a mock RentCast server.
pub fn live_state(base_url: &str) -> AppState {
    let client = RentCastClient::new(base_url, "test-key", Duration::from_secs(5))
        .unwrap_or_else(|e| panic!("client init failed: {e}"));
    AppState {
        search: PropertySearch::new(Some(client)),
    }
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body = String::new();
    resp.body_mut()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}

pub fn body_json(resp: &mut Response) -> serde_json::Value {
    serde_json::from_str(&body_string(resp)).unwrap()
}
