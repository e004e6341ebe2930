//! Deferred execution of confirmation emails.
//!
//! Request handlers never render or send mail themselves; they enqueue the
//! order on a bounded channel and return. A single worker task owns the
//! pipeline (render, build message, send) and processes jobs sequentially,
//! so no locking is needed. Every finished job is published as a
//! [`DispatchOutcome`] on a broadcast channel. That channel is the only
//! place delivery failures are observable; the HTTP caller was answered
//! before the job ran.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{broadcast, mpsc};
use tracing::{error, info};

use crate::{
    email::{self, EmailError, EmailSender, SendResponse, SenderIdentity},
    models::Order,
};

const EVENT_CAPACITY: usize = 16;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("dispatch queue is closed")]
    QueueClosed,
}

/// Completion event for one dispatch job. The broadcast channel requires
/// `Clone`, so errors are carried as rendered strings.
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    pub order_id: String,
    pub recipient: String,
    pub result: Result<SendResponse, String>,
}

/// The worker half: owns the job receiver and runs until every handle drops.
pub struct Dispatcher {
    jobs: mpsc::Receiver<Order>,
    mailer: Arc<dyn EmailSender>,
    identity: SenderIdentity,
    events: broadcast::Sender<DispatchOutcome>,
}

/// Cloneable handle held in application state: enqueue jobs, subscribe to
/// outcomes.
#[derive(Clone)]
pub struct DispatchHandle {
    jobs: mpsc::Sender<Order>,
    events: broadcast::Sender<DispatchOutcome>,
}

impl Dispatcher {
    pub fn new(
        mailer: Arc<dyn EmailSender>,
        identity: SenderIdentity,
        buffer: usize,
    ) -> (Self, DispatchHandle) {
        let (jobs_tx, jobs_rx) = mpsc::channel(buffer);
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        let dispatcher = Self {
            jobs: jobs_rx,
            mailer,
            identity,
            events: events.clone(),
        };
        let handle = DispatchHandle {
            jobs: jobs_tx,
            events,
        };

        (dispatcher, handle)
    }

    /// Worker loop. Spawn this at startup; it exits once all handles are gone.
    pub async fn run(mut self) {
        while let Some(order) = self.jobs.recv().await {
            let order_id = order.order_id.clone();
            let recipient = order.customer.email.clone();

            let result = self.dispatch(order).await;
            match &result {
                Ok(response) => info!(
                    order_id = %order_id,
                    recipient = %recipient,
                    message_ids = ?response.message_ids,
                    "confirmation email sent"
                ),
                Err(err) => error!(
                    order_id = %order_id,
                    recipient = %recipient,
                    error = %err,
                    "confirmation email failed"
                ),
            }

            // send fails when nobody subscribes; the event is dropped.
            let _ = self.events.send(DispatchOutcome {
                order_id,
                recipient,
                result: result.map_err(|e| e.to_string()),
            });
        }
    }

    async fn dispatch(&self, order: Order) -> Result<SendResponse, EmailError> {
        let mail = email::confirmation_mail(&order, &self.identity)?;
        self.mailer.send(mail).await
    }
}

impl DispatchHandle {
    /// Queue an order for confirmation. Waits when the queue is full; fails
    /// only if the worker is gone.
    pub async fn enqueue(&self, order: Order) -> Result<(), DispatchError> {
        self.jobs
            .send(order)
            .await
            .map_err(|_| DispatchError::QueueClosed)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DispatchOutcome> {
        self.events.subscribe()
    }
}
