use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    body_response("text/html; charset=utf-8", markup.into_string())
}

pub fn text_response(content_type: &str, body: impl Into<String>) -> ResultResp {
    body_response(content_type, body.into())
}

fn body_response(content_type: &str, body: String) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .body(Body::from(body))
        .map_err(|e| ServerError::Internal(format!("response build failed: {e}")))
}
