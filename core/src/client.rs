//! Stateless request builder, response parser and executor for the coffee
//! API.
//!
//! # Design
//! `CoffeeClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. `fetch_by_id`, `create` and `fetch_raw` join the two
//! through a caller-supplied `HttpTransport`.

use tracing::{debug, instrument};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, TypedResponse};
use crate::transport::HttpTransport;
use crate::types::{Coffee, NewCoffee};

/// Synchronous, stateless client for a single coffee resource endpoint.
#[derive(Debug, Clone)]
pub struct CoffeeClient {
    base_url: String,
}

impl CoffeeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/{id}`, decoded, with status and headers kept.
    #[instrument(skip(self, http), fields(base = %self.base_url))]
    pub fn fetch_by_id(
        &self,
        http: &impl HttpTransport,
        id: i64,
    ) -> Result<TypedResponse<Coffee>, ApiError> {
        let response = http.execute(&self.build_get_coffee(id))?;
        self.parse_get_coffee(response)
    }

    /// `POST {base}/` with the payload as JSON; returns the stored record.
    #[instrument(skip(self, http), fields(base = %self.base_url))]
    pub fn create(&self, http: &impl HttpTransport, input: &NewCoffee) -> Result<Coffee, ApiError> {
        let request = self.build_create_coffee(input)?;
        let response = http.execute(&request)?;
        self.parse_create_coffee(response)
    }

    /// `GET {base}/` with the body returned untouched, whatever the status.
    #[instrument(skip(self, http), fields(base = %self.base_url))]
    pub fn fetch_raw(&self, http: &impl HttpTransport) -> Result<String, ApiError> {
        let response = http.execute(&self.build_fetch_raw())?;
        Ok(self.parse_fetch_raw(response))
    }

    pub fn build_get_coffee(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/{id}", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    pub fn build_create_coffee(&self, input: &NewCoffee) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/", self.base_url),
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                ("accept".to_string(), "application/json".to_string()),
            ],
            body: Some(body),
        })
    }

    pub fn build_fetch_raw(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_get_coffee(&self, response: HttpResponse) -> Result<TypedResponse<Coffee>, ApiError> {
        check_status(&response)?;
        let body = decode(&response.body)?;
        Ok(TypedResponse {
            status: response.status,
            headers: response.headers,
            body,
        })
    }

    pub fn parse_create_coffee(&self, response: HttpResponse) -> Result<Coffee, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_fetch_raw(&self, response: HttpResponse) -> String {
        if !response.is_success() {
            debug!(status = response.status, "raw fetch returned non-2xx status");
        }
        response.body
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode(body: &str) -> Result<Coffee, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use rust_decimal::Decimal;

    use super::*;

    const RECORD: &str = r#"{"id":7,"name":"Americano","price":125.00,"createTime":"2024-05-01T10:00:00Z","updateTime":"2024-05-01T10:00:00Z"}"#;

    fn client() -> CoffeeClient {
        CoffeeClient::new("http://localhost:8080/coffee")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    /// Answers every request with the same canned response and remembers
    /// what it was asked.
    struct CannedTransport {
        response: HttpResponse,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: &str) -> Self {
            Self {
                response: response(status, body),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl HttpTransport for CannedTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.borrow_mut().push(request.clone());
            Ok(self.response.clone())
        }
    }

    struct Unreachable;

    impl HttpTransport for Unreachable {
        fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            Err(ApiError::Transport("connection refused".to_string()))
        }
    }

    fn americano() -> NewCoffee {
        NewCoffee::builder()
            .name("Americano")
            .price(Decimal::new(12500, 2))
            .build()
            .unwrap()
    }

    #[test]
    fn build_get_coffee_substitutes_id() {
        let req = client().build_get_coffee(1);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/coffee/1");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_coffee_posts_to_collection() {
        let req = client().build_create_coffee(&americano()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8080/coffee/");
        assert!(req
            .headers
            .contains(&("content-type".to_string(), "application/json".to_string())));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Americano");
        assert_eq!(body["price"].as_f64(), Some(125.0));
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_fetch_raw_targets_collection() {
        let req = client().build_fetch_raw();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/coffee/");
        assert!(req.headers.is_empty());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = CoffeeClient::new("http://localhost:8080/coffee/");
        assert_eq!(client.base_url(), "http://localhost:8080/coffee");
        assert_eq!(client.build_get_coffee(3).path, "http://localhost:8080/coffee/3");
    }

    #[test]
    fn parse_get_coffee_keeps_status_and_headers() {
        let mut resp = response(200, RECORD);
        resp.headers.push(("content-type".to_string(), "application/json".to_string()));
        let fetched = client().parse_get_coffee(resp).unwrap();
        assert_eq!(fetched.status, 200);
        assert_eq!(fetched.headers.len(), 1);
        assert_eq!(fetched.body.id, 7);
        assert_eq!(fetched.body.name, "Americano");
    }

    #[test]
    fn parse_get_coffee_not_found() {
        let err = client().parse_get_coffee(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_create_coffee_server_error() {
        let err = client().parse_create_coffee(response(500, "boom")).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
        assert!(err.is_request_error());
    }

    #[test]
    fn parse_create_coffee_accepts_created() {
        let coffee = client().parse_create_coffee(response(201, RECORD)).unwrap();
        assert_eq!(coffee.id, 7);
        assert_eq!(coffee.price, Decimal::new(125, 0));
    }

    #[test]
    fn parse_get_coffee_unexpected_shape() {
        let err = client().parse_get_coffee(response(200, r#"{"unexpected":1}"#)).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn parse_fetch_raw_ignores_status() {
        assert_eq!(client().parse_fetch_raw(response(200, "hello")), "hello");
        assert_eq!(client().parse_fetch_raw(response(503, "down")), "down");
    }

    #[test]
    fn fetch_by_id_runs_through_transport() {
        let http = CannedTransport::new(200, RECORD);
        let fetched = client().fetch_by_id(&http, 7).unwrap();
        assert_eq!(fetched.body.id, 7);
        let seen = http.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].path, "http://localhost:8080/coffee/7");
    }

    #[test]
    fn create_runs_through_transport() {
        let http = CannedTransport::new(201, RECORD);
        let created = client().create(&http, &americano()).unwrap();
        assert_eq!(created.name, "Americano");
        assert_eq!(http.seen.borrow()[0].method, HttpMethod::Post);
    }

    #[test]
    fn transport_failure_surfaces_unchanged() {
        let c = client();
        assert!(matches!(c.fetch_by_id(&Unreachable, 1), Err(ApiError::Transport(_))));
        assert!(matches!(c.create(&Unreachable, &americano()), Err(ApiError::Transport(_))));
        assert!(matches!(c.fetch_raw(&Unreachable), Err(ApiError::Transport(_))));
    }
}
