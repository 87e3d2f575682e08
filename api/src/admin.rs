//! Admin authentication, staff accounts, and the visitor log.

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{
    AdminUser, AdminUserInput, ChangePasswordRequest, Credentials, ForgotPasswordRequest, Visitor,
};

/// Check a username/password pair. The backend keeps no session; on success
/// the caller persists the credentials and signs every later admin request
/// with them.
pub async fn login(client: &ApiClient, credentials: &Credentials) -> Result<(), ApiError> {
    client.post_unit("/api/admin/login", credentials).await
}

pub async fn change_password(
    client: &ApiClient,
    request: &ChangePasswordRequest,
) -> Result<(), ApiError> {
    client.post_unit("/api/admin/change-password", request).await
}

pub async fn forgot_password(client: &ApiClient, email: &str) -> Result<(), ApiError> {
    client
        .post_unit(
            "/api/admin/forgot-password",
            &ForgotPasswordRequest {
                email: email.to_string(),
            },
        )
        .await
}

pub async fn list_users(client: &ApiClient) -> Result<Vec<AdminUser>, ApiError> {
    client.get("/api/admin/users").await
}

pub async fn create_user(client: &ApiClient, input: &AdminUserInput) -> Result<AdminUser, ApiError> {
    client.post("/api/admin/users", input).await
}

pub async fn update_user(
    client: &ApiClient,
    id: &str,
    input: &AdminUserInput,
) -> Result<AdminUser, ApiError> {
    client.put(&format!("/api/admin/users/{id}"), input).await
}

pub async fn delete_user(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/api/admin/users/{id}")).await
}

/// Raw visit log; the visitors view aggregates it client-side.
pub async fn list_visitors(client: &ApiClient) -> Result<Vec<Visitor>, ApiError> {
    client.get("/api/admin/visitors").await
}
