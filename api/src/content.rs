//! Campaigns, FAQs, contact messages, site settings, and visit tracking.

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{
    Campaign, CampaignInput, ContactMessage, ContactRequest, Faq, FaqInput, MessageStatus,
    SiteSettings, VisitRequest,
};

pub async fn list_campaigns(client: &ApiClient) -> Result<Vec<Campaign>, ApiError> {
    client.get("/api/campaigns").await
}

/// The campaign the storefront popup should show right now, if any.
pub async fn active_campaign(client: &ApiClient) -> Result<Option<Campaign>, ApiError> {
    client.get("/api/campaigns/active").await
}

pub async fn create_campaign(
    client: &ApiClient,
    input: &CampaignInput,
) -> Result<Campaign, ApiError> {
    client.post("/api/campaigns", input).await
}

pub async fn update_campaign(
    client: &ApiClient,
    id: &str,
    input: &CampaignInput,
) -> Result<Campaign, ApiError> {
    client.put(&format!("/api/campaigns/{id}"), input).await
}

pub async fn delete_campaign(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/api/campaigns/{id}")).await
}

/// Active FAQ entries for the storefront, already ordered.
pub async fn list_faqs(client: &ApiClient) -> Result<Vec<Faq>, ApiError> {
    client.get("/api/faqs").await
}

/// Every FAQ entry, including inactive ones, for the admin panel.
pub async fn list_all_faqs(client: &ApiClient) -> Result<Vec<Faq>, ApiError> {
    client.get("/api/admin/faqs").await
}

pub async fn create_faq(client: &ApiClient, input: &FaqInput) -> Result<Faq, ApiError> {
    client.post("/api/admin/faqs", input).await
}

pub async fn update_faq(client: &ApiClient, id: &str, input: &FaqInput) -> Result<Faq, ApiError> {
    client.put(&format!("/api/admin/faqs/{id}"), input).await
}

pub async fn delete_faq(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/api/admin/faqs/{id}")).await
}

/// Submit the public contact form. No auth.
pub async fn submit_contact(client: &ApiClient, request: &ContactRequest) -> Result<(), ApiError> {
    client.post_unit("/api/contact", request).await
}

pub async fn list_messages(
    client: &ApiClient,
    status: Option<MessageStatus>,
) -> Result<Vec<ContactMessage>, ApiError> {
    match status {
        Some(status) => {
            client
                .get_with_query("/api/contact-messages", &[("status_filter", status.as_str())])
                .await
        }
        None => client.get("/api/contact-messages").await,
    }
}

pub async fn set_message_status(
    client: &ApiClient,
    id: &str,
    status: MessageStatus,
) -> Result<(), ApiError> {
    client
        .put_unit(
            &format!("/api/contact-messages/{id}"),
            &serde_json::json!({ "status": status }),
        )
        .await
}

pub async fn delete_message(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/api/contact-messages/{id}")).await
}

pub async fn get_settings(client: &ApiClient) -> Result<SiteSettings, ApiError> {
    client.get("/api/settings").await
}

pub async fn save_settings(client: &ApiClient, settings: &SiteSettings) -> Result<(), ApiError> {
    client.post_unit("/api/settings", settings).await
}

/// Record a page view. Failures are logged and swallowed; tracking must never
/// disturb the visitor.
pub async fn track_visit(client: &ApiClient, page: &str) {
    let request = VisitRequest {
        page: page.to_string(),
    };
    if let Err(e) = client.post_unit("/api/track-visit", &request).await {
        tracing::debug!("visit tracking skipped: {e}");
    }
}
