// src/tests/router_tests/api_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_json, get, live_state, offline_state};
use mockito::Matcher;

#[test]
fn api_returns_mock_envelope() {
    let state = offline_state();

    let mut resp = handle(get("/api/properties?state=ca&limit=2"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("Content-Type").unwrap(), "application/json");

    let json = body_json(&mut resp);
    assert_eq!(json["usingMockData"], true);
    assert_eq!(json["total"], 5);
    assert_eq!(json["properties"].as_array().unwrap().len(), 2);
    assert_eq!(json["properties"][0]["state"], "CA");
}

#[test]
fn api_clamps_limit_to_fifty() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/properties")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("zipCode".into(), "94110".into()),
            Matcher::UrlEncoded("limit".into(), "50".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create();

    let state = live_state(&server.url());
    let mut resp = handle(get("/api/properties?zipCode=94110&limit=500"), &state).unwrap();

    mock.assert();
    let json = body_json(&mut resp);
    assert_eq!(json["usingMockData"], false);
    assert_eq!(json["total"], 0);
}

#[test]
fn api_with_key_but_no_filter_stays_on_mock() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/properties")
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    let state = live_state(&server.url());
    let mut resp = handle(get("/api/properties?limit=3"), &state).unwrap();

    mock.assert();
    let json = body_json(&mut resp);
    assert_eq!(json["usingMockData"], true);
    assert_eq!(json["properties"].as_array().unwrap().len(), 3);
}

#[test]
fn api_omits_missing_price() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/properties")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"[{"addressLine1":"9 Oak Ave","city":"Boise","state":"ID","zipCode":"83702","price":"n/a"}]"#)
        .create();

    let state = live_state(&server.url());
    let mut resp = handle(get("/api/properties?city=Boise"), &state).unwrap();

    let json = body_json(&mut resp);
    let first = &json["properties"][0];
    assert_eq!(first["id"], "rc-0");
    assert_eq!(first["formattedAddress"], "9 Oak Ave, Boise, ID, 83702");
    assert!(first.get("price").is_none());
}

#[test]
fn health_reports_data_source() {
    let mut resp = handle(get("/health"), &offline_state()).unwrap();
    let json = body_json(&mut resp);

    assert_eq!(json["status"], "ok");
    assert_eq!(json["liveData"], false);
}
