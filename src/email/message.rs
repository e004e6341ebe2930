use serde::{Deserialize, Serialize};

/// A sender or recipient address in the provider's wire format.
#[derive(Debug, Clone, Serialize)]
pub struct Address {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Request body for the Mailtrap send API.
#[derive(Debug, Clone, Serialize)]
pub struct Mail {
    pub from: Address,
    pub to: Vec<Address>,
    pub subject: String,
    pub text: String,
    pub html: String,
    pub category: String,
}

/// Response body returned by the Mailtrap send API.
#[derive(Debug, Clone, Deserialize)]
pub struct SendResponse {
    pub success: bool,
    #[serde(default)]
    pub message_ids: Vec<String>,
}
