use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Username/password pair for the admin surface.
///
/// Doubles as the login payload and as the Basic-auth material the client
/// replays on every admin request. Persisted verbatim in browser storage,
/// matching the backend's auth model (no tokens).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// A staff account able to log into the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Create/update payload for [`AdminUser`]. `password` is only sent when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUserInput {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: String,
    pub permissions: Vec<String>,
}
