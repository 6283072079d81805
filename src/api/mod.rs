//! Server API
//!
//! Fetch wrappers for the planner endpoints, organized by domain.

mod calendar;
mod habits;
mod pending;
mod secret;
mod submit;
mod tasks;
mod timeline;

use gloo_net::http::{Request, RequestBuilder, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::dom;
use crate::error::ApiError;

// Re-export all public items
pub use calendar::*;
pub use habits::*;
pub use pending::{InFlight, PendingGuard};
pub use secret::*;
pub use submit::{submit_or_revert, FailureNotice};
pub use tasks::*;
pub use timeline::*;

const CSRF_HEADER: &str = "X-CSRFToken";

/// Characters left alone by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encode one URL path segment or query value
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

fn with_csrf(builder: RequestBuilder) -> RequestBuilder {
    match dom::csrf_token() {
        Some(token) => builder.header(CSRF_HEADER, &token),
        None => builder,
    }
}

fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await?;
    Ok(ensure_ok(response)?.json::<T>().await?)
}

async fn post_json<B: Serialize + ?Sized>(url: &str, body: &B) -> Result<Response, ApiError> {
    let response = with_csrf(Request::post(url)).json(body)?.send().await?;
    ensure_ok(response)
}

async fn post_empty(url: &str) -> Result<Response, ApiError> {
    let response = with_csrf(Request::post(url)).send().await?;
    ensure_ok(response)
}

async fn post_form<B: Serialize + ?Sized>(url: &str, body: &B) -> Result<Response, ApiError> {
    let encoded = serde_urlencoded::to_string(body)?;
    let response = with_csrf(Request::post(url))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(encoded)?
        .send()
        .await?;
    ensure_ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component_matches_uri_component() {
        assert_eq!(encode_component("Einkauf"), "Einkauf");
        assert_eq!(encode_component("My List/2"), "My%20List%2F2");
        assert_eq!(encode_component("Über & co"), "%C3%9Cber%20%26%20co");
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
    }
}
