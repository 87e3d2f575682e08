//! HTTP plumbing shared by every endpoint function.
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] with the backend base URL and the
//! logged-in admin's Basic credentials. Endpoint modules stay declarative:
//! `client.get("/api/brands").await`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::Credentials;

/// REST client for the QuoteDesk backend.
///
/// Cheap to clone; the inner `reqwest::Client` is reference-counted.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
            credentials: None,
        }
    }

    /// Client that signs every request with HTTP Basic credentials.
    /// Used for the whole admin surface.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Absolute URL for a backend path, e.g. for PDF downloads handed to the
    /// browser instead of fetched through this client.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.credentials {
            Some(creds) => builder.basic_auth(&creds.username, Some(&creds.password)),
            None => builder,
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = Self::check(builder.send().await?).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Like [`Self::execute`] but discards the response body.
    async fn execute_unit(&self, builder: reqwest::RequestBuilder) -> Result<(), ApiError> {
        Self::check(builder.send().await?).await?;
        Ok(())
    }

    /// Map non-2xx responses to [`ApiError::Status`], pulling the backend's
    /// `{"detail": ...}` message out of the body when it is there.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        tracing::debug!(code = status.as_u16(), %detail, "backend returned an error");
        Err(ApiError::Status {
            code: status.as_u16(),
            detail,
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.request(reqwest::Method::GET, path)).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        self.execute(self.request(reqwest::Method::GET, path).query(query))
            .await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.request(reqwest::Method::POST, path).json(body))
            .await
    }

    pub async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.execute_unit(self.request(reqwest::Method::POST, path).json(body))
            .await
    }

    /// POST with an empty body (action endpoints like send-email).
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.execute_unit(self.request(reqwest::Method::POST, path))
            .await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        self.execute(self.request(reqwest::Method::POST, path).multipart(form))
            .await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.request(reqwest::Method::PUT, path).json(body))
            .await
    }

    pub async fn put_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.execute_unit(self.request(reqwest::Method::PUT, path).json(body))
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute_unit(self.request(reqwest::Method::DELETE, path))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(ApiConfig::new(server.uri()))
    }

    #[tokio::test]
    async fn test_basic_auth_header_is_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/customers"))
            .and(header("Authorization", "Basic YWRtaW46c2VjcmV0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).with_credentials(Credentials {
            username: "admin".into(),
            password: "secret".into(),
        });
        let customers = crate::customers::list_customers(&client).await.unwrap();
        assert!(customers.is_empty());
    }

    #[tokio::test]
    async fn test_error_detail_is_extracted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products/missing"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"detail": "Product not found"})),
            )
            .mount(&server)
            .await;

        let err = crate::catalog::get_product(&client_for(&server), "missing")
            .await
            .unwrap_err();
        match err {
            ApiError::Status { code, detail } => {
                assert_eq!(code, 404);
                assert_eq!(detail, "Product not found");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_without_detail_falls_back_to_status_text() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/brands/b1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = crate::catalog::delete_brand(&client_for(&server), "b1")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Internal Server Error");
    }

    #[tokio::test]
    async fn test_list_products_with_category_filter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .and(query_param("category", "filters"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": "p1",
                "name": "Oil filter",
                "description": "OEM oil filter",
                "images": [],
                "category": "filters",
                "variants": [],
                "is_active": true,
                "is_featured": false,
                "created_at": "2026-01-10T08:30:00Z"
            }])))
            .mount(&server)
            .await;

        let products = crate::catalog::list_products(&client_for(&server), Some("filters"))
            .await
            .unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Oil filter");
        assert!(products[0].price_range.is_none());
    }

    #[tokio::test]
    async fn test_submit_quote_round_trip() {
        use crate::models::{QuoteItem, QuoteRequest, QuoteStatus};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/quotes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "q1",
                "customer_name": "Acme Ltd",
                "email": "buyer@acme.test",
                "items": [{"product_id": "p1", "product_name": "Oil filter", "quantity": 40}],
                "pricing": [],
                "status": "pending",
                "created_at": "2026-02-01T12:00:00Z"
            })))
            .mount(&server)
            .await;

        let request = QuoteRequest {
            customer_name: "Acme Ltd".into(),
            company: None,
            email: "buyer@acme.test".into(),
            phone: None,
            message: None,
            items: vec![QuoteItem {
                product_id: "p1".into(),
                product_name: "Oil filter".into(),
                quantity: 40,
            }],
            file_url: None,
        };
        let quote = crate::quotes::submit_quote(&client_for(&server), &request)
            .await
            .unwrap();
        assert_eq!(quote.status, QuoteStatus::Pending);
        assert_eq!(quote.items[0].quantity, 40);
    }

    #[tokio::test]
    async fn test_url_joins_base_and_path() {
        let client = ApiClient::new(ApiConfig::new("https://api.example.com/"));
        assert_eq!(
            client.url("/api/quotes/q1/pdf"),
            "https://api.example.com/api/quotes/q1/pdf"
        );
    }
}
