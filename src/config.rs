use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub mailtrap_api_token: String,
    pub mailtrap_api_url: String,
    pub email_sender: String,
    pub company_name: String,
    pub support_email: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let mailtrap_api_token = env::var("MAILTRAP_API_TOKEN")?;
        let mailtrap_api_url = env::var("MAILTRAP_API_URL")
            .unwrap_or_else(|_| "https://send.api.mailtrap.io".to_string());
        let app_name =
            env::var("APP_NAME").unwrap_or_else(|_| "Order Confirmation Service".to_string());
        let email_sender =
            env::var("EMAIL_SENDER").unwrap_or_else(|_| "no-reply@example.com".to_string());
        let company_name = env::var("COMPANY_NAME").unwrap_or_else(|_| "Example Store".to_string());
        let support_email =
            env::var("SUPPORT_EMAIL").unwrap_or_else(|_| "support@example.com".to_string());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        Ok(Self {
            app_name,
            mailtrap_api_token,
            mailtrap_api_url,
            email_sender,
            company_name,
            support_email,
            host,
            port,
        })
    }
}
