// src/tests/router_tests/home_tests.rs
use crate::router::handle;
use crate::templates::html_error_response;
use crate::tests::utils::{body_string, get, live_state, offline_state};
use mockito::Matcher;

#[test]
fn home_without_key_shows_sample_listings() {
    let state = offline_state();

    let mut resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = body_string(&mut resp);
    assert!(body.contains("Demo mode."));
    assert!(body.contains("RENTCAST_API_KEY"));
    assert!(body.contains("14 properties found"));
    assert!(body.contains("1450 Valencia St, San Francisco, CA, 94110"));
}

#[test]
fn home_filters_by_city_case_insensitively() {
    let state = offline_state();

    let mut resp = handle(get("/?city=san+francisco"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("2 properties found"));
    assert!(body.contains("88 King St Apt 1204"));
    assert!(!body.contains("Austin"));
    // form keeps what the user typed
    assert!(body.contains("value=\"san francisco\""));
}

#[test]
fn home_reports_empty_results() {
    let state = offline_state();

    let mut resp = handle(get("/?zipCode=00000"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("0 properties found"));
    assert!(body.contains("No properties match your search."));
}

#[test]
fn home_pages_through_sample_listings() {
    let state = offline_state();

    let mut resp = handle(get("/?limit=5&offset=10"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("14 properties found"));
    assert_eq!(body.matches("class=\"card property-card\"").count(), 4);
    assert!(body.contains("rel=\"prev\""));
    assert!(!body.contains("rel=\"next\""));
}

#[test]
fn home_with_huge_offset_is_past_the_end() {
    let state = offline_state();

    let mut resp = handle(get("/?offset=99999999999999999999&limit=99999999999999999999"), &state)
        .unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("14 properties found"));
    assert!(body.contains("No properties match your search."));
    assert!(body.contains("rel=\"prev\""));
    assert!(!body.contains("rel=\"next\""));
}

#[test]
fn home_falls_back_when_provider_fails() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/properties")
        .match_query(Matcher::UrlEncoded("city".into(), "Austin".into()))
        .with_status(500)
        .with_body("internal error")
        .create();

    let state = live_state(&server.url());
    let mut resp = handle(get("/?city=Austin"), &state).unwrap();

    mock.assert();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Demo mode."));
    assert!(body.contains("2 properties found"));
    assert!(!body.contains("internal error"));
}

#[test]
fn home_renders_live_listings() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/properties")
        .match_header("x-api-key", "test-key")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("state".into(), "TX".into()),
            Matcher::UrlEncoded("limit".into(), "24".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"properties":[{
                "id":"5500-Grand-Lake-Dr",
                "formattedAddress":"5500 Grand Lake Dr, San Antonio, TX 78244",
                "addressLine1":"5500 Grand Lake Dr",
                "city":"San Antonio",
                "state":"TX",
                "zipCode":"78244",
                "bedrooms":3,
                "bathrooms":2,
                "squareFootage":1878,
                "propertyType":"Single Family"
            }]}"#,
        )
        .create();

    let state = live_state(&server.url());
    let mut resp = handle(get("/?state=TX"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(!body.contains("Demo mode."));
    assert!(body.contains("1 property found"));
    assert!(body.contains("5500 Grand Lake Dr, San Antonio, TX 78244"));
    assert!(body.contains("1,878 sq ft"));
    assert!(!body.contains("class=\"price\""));
}

#[test]
fn unknown_path_is_404_page() {
    let state = offline_state();

    let err = match handle(get("/nope"), &state) {
        Err(err) => err,
        Ok(_) => panic!("expected /nope to be unrouted"),
    };
    let mut resp = html_error_response(err);

    assert_eq!(resp.status(), 404);
    assert!(body_string(&mut resp).contains("Error 404"));
}

#[test]
fn serves_stylesheet() {
    let state = offline_state();

    let mut resp = handle(get("/static/main.css"), &state).unwrap();
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(&mut resp).contains(".property-card"));
}
