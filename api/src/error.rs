use thiserror::Error;

/// Errors surfaced by [`crate::ApiClient`] calls.
///
/// Views render `to_string()` in a toast; nothing upstream matches on the
/// variants except auth forms, which care about [`ApiError::Status`] 401.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (network down, CORS, DNS, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status. `detail` is the backend's
    /// `{"detail": ...}` message when present, otherwise the status text.
    #[error("{detail}")]
    Status { code: u16, detail: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether this is an authentication failure (wrong or missing credentials).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { code: 401, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_displays_detail() {
        let err = ApiError::Status {
            code: 404,
            detail: "Product not found".into(),
        };
        assert_eq!(err.to_string(), "Product not found");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_unauthorized_detection() {
        let err = ApiError::Status {
            code: 401,
            detail: "Invalid username or password".into(),
        };
        assert!(err.is_unauthorized());
    }
}
