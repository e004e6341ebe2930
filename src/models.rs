use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    pub quantity: i32,
    #[schema(value_type = f64)]
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CustomerInfo {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Order {
    #[validate(length(min = 1, message = "order_id must not be empty"))]
    pub order_id: String,
    #[validate(nested)]
    pub customer: CustomerInfo,
    pub items: Vec<OrderItem>,
    #[schema(value_type = f64)]
    pub total: Decimal,
    #[serde(default = "Utc::now")]
    pub order_date: DateTime<Utc>,
    pub shipping_method: Option<String>,
    pub estimated_delivery: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl Order {
    /// Order total rendered with two decimal places, e.g. `19.5` -> `"19.50"`.
    pub fn total_display(&self) -> String {
        format!("{:.2}", self.total)
    }
}
