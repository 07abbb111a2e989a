//! # REST API HTTP Server
//!
//! Axum routes for the customer endpoints.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};

use crate::storage::Customer;

use super::errors::{RestError, RestResult};
use super::handler::CustomerHandler;
use super::parser::{parse_id, QueryParams};
use super::validator::NewCustomer;

/// REST API server state
pub struct RestServer<H: CustomerHandler> {
    handler: Arc<H>,
}

impl<H: CustomerHandler + 'static> RestServer<H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        let state = Arc::new(self);

        Router::new()
            .route(
                "/api/customers",
                get(list_handler::<H>).post(create_handler::<H>),
            )
            .route("/api/customers/:id", get(get_handler::<H>))
            .route("/api/cities", get(cities_handler::<H>))
            .with_state(state)
    }
}

/// Shared state type
type ServerState<H> = Arc<RestServer<H>>;

/// List / search handler
async fn list_handler<H: CustomerHandler + 'static>(
    State(server): State<ServerState<H>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> RestResult<Json<Vec<Customer>>> {
    let params = QueryParams::from_pairs(pairs);
    let records = server.handler.search(&params)?;
    Ok(Json(records))
}

/// Get single customer handler
async fn get_handler<H: CustomerHandler + 'static>(
    State(server): State<ServerState<H>>,
    Path(id): Path<String>,
) -> RestResult<Json<Customer>> {
    let id = parse_id(&id).ok_or(RestError::NotFound)?;
    let customer = server.handler.get(id)?;
    Ok(Json(customer))
}

/// City counts handler
async fn cities_handler<H: CustomerHandler + 'static>(
    State(server): State<ServerState<H>>,
) -> RestResult<Json<BTreeMap<String, usize>>> {
    let counts = server.handler.city_counts()?;
    Ok(Json(counts))
}

/// Create customer handler
async fn create_handler<H: CustomerHandler + 'static>(
    State(server): State<ServerState<H>>,
    headers: HeaderMap,
    body: Bytes,
) -> RestResult<(StatusCode, Json<Customer>)> {
    let candidate = decode_candidate(&headers, &body)?;
    let customer = server.handler.create(candidate)?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// Decode a creation body.
///
/// A request without a JSON content type, or with an empty body, carries no
/// fields and decodes to an empty candidate. JSON that is present but not a
/// well-typed customer object is rejected.
pub fn decode_candidate(headers: &HeaderMap, body: &[u8]) -> RestResult<NewCustomer> {
    if !is_json_content(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(NewCustomer::default());
    }

    serde_json::from_slice(body).map_err(|e| RestError::InvalidBody(e.to_string()))
}

fn is_json_content(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::super::handler::StoreHandler;
    use super::*;
    use crate::storage::CustomerStore;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, "application/json; charset=utf-8".parse().unwrap());
        headers
    }

    #[test]
    fn test_decode_without_json_content_is_empty() {
        let candidate = decode_candidate(&HeaderMap::new(), br#"{"id": 1}"#).unwrap();
        assert_eq!(candidate, NewCustomer::default());

        let mut text = HeaderMap::new();
        text.insert(CONTENT_TYPE, "text/plain".parse().unwrap());
        assert_eq!(decode_candidate(&text, b"id=1").unwrap(), NewCustomer::default());
    }

    #[test]
    fn test_decode_empty_json_body_is_empty() {
        assert_eq!(decode_candidate(&json_headers(), b"").unwrap(), NewCustomer::default());
        assert_eq!(decode_candidate(&json_headers(), b" \n").unwrap(), NewCustomer::default());
    }

    #[test]
    fn test_decode_json_body() {
        let candidate = decode_candidate(&json_headers(), br#"{"id": 3, "city": "Reno"}"#).unwrap();
        assert_eq!(candidate.id, Some(3));
        assert_eq!(candidate.city.as_deref(), Some("Reno"));

        assert!(matches!(
            decode_candidate(&json_headers(), br#"{"id": "three"}"#),
            Err(RestError::InvalidBody(_))
        ));
        assert!(matches!(
            decode_candidate(&json_headers(), b"{not json"),
            Err(RestError::InvalidBody(_))
        ));
    }

    #[test]
    fn test_router_builds() {
        let store = Arc::new(CustomerStore::default());
        let server = RestServer::new(StoreHandler::new(store));
        let _router = server.router();
    }
}
