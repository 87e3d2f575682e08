//! Customer accounts: the admin archive plus the storefront's own
//! register/login flows.

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{
    BalanceEntry, Customer, CustomerLoginRequest, CustomerQuotes, CustomerRegisterRequest,
    CustomerSession, CustomerUpdate, ForgotPasswordRequest, ResetPasswordRequest,
};

pub async fn list_customers(client: &ApiClient) -> Result<Vec<Customer>, ApiError> {
    client.get("/api/admin/customers").await
}

/// Write a customer's new balance. Always paired with [`log_balance_change`].
pub async fn update_customer(
    client: &ApiClient,
    id: &str,
    update: &CustomerUpdate,
) -> Result<(), ApiError> {
    client
        .put_unit(&format!("/api/admin/customers/{id}"), update)
        .await
}

pub async fn customer_quote_history(
    client: &ApiClient,
    id: &str,
) -> Result<CustomerQuotes, ApiError> {
    client
        .get(&format!("/api/admin/customers/{id}/quotes"))
        .await
}

/// Record a balance change in the audit log.
pub async fn log_balance_change(client: &ApiClient, entry: &BalanceEntry) -> Result<(), ApiError> {
    client.post_unit("/api/admin/balance-log", entry).await
}

pub async fn register_customer(
    client: &ApiClient,
    request: &CustomerRegisterRequest,
) -> Result<CustomerSession, ApiError> {
    client.post("/api/customer/register", request).await
}

pub async fn login_customer(
    client: &ApiClient,
    request: &CustomerLoginRequest,
) -> Result<CustomerSession, ApiError> {
    client.post("/api/customer/login", request).await
}

pub async fn forgot_customer_password(client: &ApiClient, email: &str) -> Result<(), ApiError> {
    client
        .post_unit(
            "/api/customer/forgot-password",
            &ForgotPasswordRequest {
                email: email.to_string(),
            },
        )
        .await
}

pub async fn reset_customer_password(
    client: &ApiClient,
    request: &ResetPasswordRequest,
) -> Result<(), ApiError> {
    client.post_unit("/api/customer/reset-password", request).await
}
