use serde::Serialize;
use utoipa::ToSchema;

/// Body returned by `POST /api/order-confirmation` on success.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusMessage {
    pub status: String,
    pub message: String,
}

impl StatusMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}

/// Error body, `{"detail": "..."}` on every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}
