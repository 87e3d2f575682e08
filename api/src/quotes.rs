//! Quote submission (storefront) and the admin quote workflow.

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{Quote, QuoteRequest, QuoteStatus, QuoteUpdate};

/// Submit a new quote request from the storefront. No auth.
pub async fn submit_quote(client: &ApiClient, request: &QuoteRequest) -> Result<Quote, ApiError> {
    client.post("/api/quotes", request).await
}

/// List quotes for the admin panel, newest first, optionally filtered by
/// status.
pub async fn list_quotes(
    client: &ApiClient,
    status: Option<QuoteStatus>,
) -> Result<Vec<Quote>, ApiError> {
    match status {
        Some(status) => {
            client
                .get_with_query("/api/quotes", &[("status_filter", status.as_str())])
                .await
        }
        None => client.get("/api/quotes").await,
    }
}

pub async fn get_quote(client: &ApiClient, id: &str) -> Result<Quote, ApiError> {
    client.get(&format!("/api/quotes/{id}")).await
}

pub async fn update_quote(
    client: &ApiClient,
    id: &str,
    update: &QuoteUpdate,
) -> Result<Quote, ApiError> {
    client.put(&format!("/api/quotes/{id}"), update).await
}

pub async fn delete_quote(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/api/quotes/{id}")).await
}

/// Ask the backend to email the quote (with its PDF) to the customer.
pub async fn send_quote_email(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.post_empty(&format!("/api/quotes/{id}/send-email")).await
}

/// URL of the rendered PDF; handed to the browser for download rather than
/// fetched through this client.
pub fn quote_pdf_url(client: &ApiClient, id: &str) -> String {
    client.url(&format!("/api/quotes/{id}/pdf"))
}

/// A customer's own quote history, keyed by their email.
pub async fn customer_quotes(client: &ApiClient, email: &str) -> Result<Vec<Quote>, ApiError> {
    client.get(&format!("/api/customer/quotes/{email}")).await
}
