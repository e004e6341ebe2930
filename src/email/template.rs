use askama::Template;

use crate::models::Order;

/// HTML body for the confirmation email, rendered from
/// `templates/order_confirmation.html`.
#[derive(Template)]
#[template(path = "order_confirmation.html")]
pub struct OrderConfirmationHtml<'a> {
    pub order: &'a Order,
    pub company_name: &'a str,
    pub support_email: &'a str,
}

/// Plain-text body. The total is always formatted with two decimal places.
pub fn confirmation_text(order: &Order) -> String {
    format!(
        "Thank you for your order #{}!\n\n\
         Order Total: ${}\n\n\
         Visit our website for more details.\n",
        order.order_id,
        order.total_display(),
    )
}
