//! Order-confirmation email pipeline.
//!
//! Rendering (askama HTML template plus a plain-text body), provider message
//! construction, and delivery through the Mailtrap send API sit behind the
//! [`EmailSender`] trait so tests can substitute a recording sender.

mod client;
mod message;
mod template;

pub use client::{EmailSender, MailtrapClient};
pub use message::{Address, Mail, SendResponse};
pub use template::{OrderConfirmationHtml, confirmation_text};

use askama::Template;
use thiserror::Error;

use crate::{config::AppConfig, models::Order};

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider rejected message ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Static sender-side identity baked into every confirmation email.
#[derive(Debug, Clone)]
pub struct SenderIdentity {
    pub email: String,
    pub company_name: String,
    pub support_email: String,
}

impl SenderIdentity {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            email: config.email_sender.clone(),
            company_name: config.company_name.clone(),
            support_email: config.support_email.clone(),
        }
    }
}

/// Render both bodies for an order and assemble the provider message.
pub fn confirmation_mail(order: &Order, identity: &SenderIdentity) -> Result<Mail, EmailError> {
    let html = OrderConfirmationHtml {
        order,
        company_name: &identity.company_name,
        support_email: &identity.support_email,
    }
    .render()?;

    let text = confirmation_text(order);

    Ok(Mail {
        from: Address {
            email: identity.email.clone(),
            name: Some(identity.company_name.clone()),
        },
        to: vec![Address {
            email: order.customer.email.clone(),
            name: Some(order.customer.name.clone()),
        }],
        subject: format!("Your Order Confirmation #{}", order.order_id),
        text,
        html,
        category: "Order Confirmation".to_string(),
    })
}
