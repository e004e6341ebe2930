use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    Json, Router,
    extract::State,
    http::HeaderMap,
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::sync::mpsc;
use tokio::time::timeout;

use order_confirmation_service::{
    config::AppConfig,
    dispatch::{DispatchHandle, Dispatcher},
    email::{MailtrapClient, SenderIdentity},
    routes::{create_api_router, health},
    state::AppState,
};

/// One request captured by the stub provider.
#[derive(Debug)]
struct CapturedSend {
    authorization: String,
    body: Value,
}

async fn stub_send(
    State(tx): State<mpsc::Sender<CapturedSend>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let _ = tx
        .send(CapturedSend {
            authorization,
            body,
        })
        .await;
    Json(json!({ "success": true, "message_ids": ["stub-1"] }))
}

/// Bind a stub Mailtrap API on an ephemeral port; returns its address and
/// the channel of captured send requests.
async fn spawn_stub_provider() -> (SocketAddr, mpsc::Receiver<CapturedSend>) {
    let (tx, rx) = mpsc::channel(8);
    let app = Router::new()
        .route("/api/send", post(stub_send))
        .with_state(tx);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, rx)
}

/// Bind the service itself against the given provider URL; returns its base
/// URL and a dispatch handle for observing outcomes.
async fn spawn_app(provider_url: &str) -> (String, DispatchHandle) {
    let config = Arc::new(AppConfig {
        app_name: "Order Confirmation Service".to_string(),
        mailtrap_api_token: "test-token".to_string(),
        mailtrap_api_url: provider_url.to_string(),
        email_sender: "no-reply@example.com".to_string(),
        company_name: "Example Store".to_string(),
        support_email: "support@example.com".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
    });

    let mailer = MailtrapClient::new(&config.mailtrap_api_url, &config.mailtrap_api_token).unwrap();
    let (dispatcher, dispatch) = Dispatcher::new(
        Arc::new(mailer),
        SenderIdentity::from_config(&config),
        8,
    );
    tokio::spawn(dispatcher.run());

    let state = AppState {
        config,
        dispatch: dispatch.clone(),
    };

    let app = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), dispatch)
}

fn valid_order() -> Value {
    json!({
        "order_id": "A1",
        "customer": { "name": "Jane", "email": "jane@x.com" },
        "items": [],
        "total": 0.0
    })
}

#[tokio::test]
async fn order_confirmation_end_to_end() {
    let (provider_addr, mut captured) = spawn_stub_provider().await;
    let (base_url, dispatch) = spawn_app(&format!("http://{provider_addr}")).await;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap();

    // Health endpoint is up regardless of provider state.
    let health: Value = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health, json!({ "status": "healthy" }));

    // Structurally invalid payloads are rejected before dispatch.
    let mut missing_email = valid_order();
    missing_email["customer"].as_object_mut().unwrap().remove("email");
    let resp = client
        .post(format!("{base_url}/api/order-confirmation"))
        .json(&missing_email)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);

    let mut missing_order_id = valid_order();
    missing_order_id.as_object_mut().unwrap().remove("order_id");
    let resp = client
        .post(format!("{base_url}/api/order-confirmation"))
        .json(&missing_order_id)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);

    let mut bad_email = valid_order();
    bad_email["customer"]["email"] = json!("not-an-email");
    let resp = client
        .post(format!("{base_url}/api/order-confirmation"))
        .json(&bad_email)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);

    // A valid order is accepted immediately; delivery happens on the worker.
    let mut outcomes = dispatch.subscribe();
    let resp = client
        .post(format!("{base_url}/api/order-confirmation"))
        .json(&valid_order())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "status": "success", "message": "Order confirmation email sent" })
    );

    let outcome = timeout(Duration::from_secs(5), outcomes.recv())
        .await
        .expect("outcome within deadline")
        .expect("outcome event");
    assert_eq!(outcome.order_id, "A1");
    assert!(outcome.result.is_ok());

    // Exactly one send reached the provider, and it was the valid order.
    let send = timeout(Duration::from_secs(5), captured.recv())
        .await
        .expect("provider call within deadline")
        .expect("captured send");
    assert_eq!(send.authorization, "Bearer test-token");
    assert_eq!(send.body["to"][0]["email"], json!("jane@x.com"));
    assert_eq!(send.body["to"][0]["name"], json!("Jane"));
    assert_eq!(send.body["from"]["email"], json!("no-reply@example.com"));
    assert_eq!(send.body["subject"], json!("Your Order Confirmation #A1"));
    assert_eq!(send.body["category"], json!("Order Confirmation"));
    let text = send.body["text"].as_str().unwrap();
    assert!(text.contains("order #A1"));
    assert!(text.contains("$0.00"));

    assert!(
        captured.try_recv().is_err(),
        "rejected payloads must not reach the provider"
    );
}
