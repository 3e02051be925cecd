//! Order submission.

use crate::cart::CartStore;
use crate::checkout::OrderPayload;
use crate::error::CommerceError;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tracing::{info, warn};

/// Receiver of submitted orders, e.g. the order service's HTTP client.
#[async_trait]
pub trait OrderSink: Send + Sync {
    /// Submit one order. The payload is a snapshot; the sink never sees the cart.
    async fn submit(&self, order: &OrderPayload) -> Result<(), CommerceError>;
}

/// When checkout clears the cart relative to submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClearPolicy {
    /// Clear before awaiting the sink. The cart stays empty even if
    /// submission fails.
    #[default]
    Optimistic,
    /// Clear only once the sink acknowledged the order.
    AfterAcknowledgement,
}

impl ClearPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClearPolicy::Optimistic => "optimistic",
            ClearPolicy::AfterAcknowledgement => "after_acknowledgement",
        }
    }
}

/// Snapshot the cart, submit it, and clear the cart according to `policy`.
///
/// Returns the submitted payload.
pub async fn place_order(
    store: &mut CartStore,
    sink: &dyn OrderSink,
    date: NaiveDate,
    policy: ClearPolicy,
) -> Result<OrderPayload, CommerceError> {
    if store.is_empty() {
        return Err(CommerceError::EmptyCart);
    }

    let payload = OrderPayload::from_cart(store.state(), date);
    if policy == ClearPolicy::Optimistic {
        store.clear();
    }

    if let Err(e) = sink.submit(&payload).await {
        warn!(error = %e, policy = policy.as_str(), "order submission failed");
        return Err(e);
    }

    if policy == ClearPolicy::AfterAcknowledgement {
        store.clear();
    }
    info!(
        date = payload.date,
        items = payload.items.len(),
        total_amount = payload.total_amount,
        "order placed"
    );
    Ok(payload)
}

/// In-memory sink that records every order it accepts.
#[derive(Debug, Default)]
pub struct RecordingOrderSink {
    orders: Mutex<Vec<OrderPayload>>,
    failure: Option<String>,
}

impl RecordingOrderSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that rejects every order with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            orders: Mutex::new(Vec::new()),
            failure: Some(reason.into()),
        }
    }

    /// Orders accepted so far.
    pub fn orders(&self) -> Vec<OrderPayload> {
        self.orders
            .lock()
            .map(|orders| orders.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl OrderSink for RecordingOrderSink {
    async fn submit(&self, order: &OrderPayload) -> Result<(), CommerceError> {
        if let Some(reason) = &self.failure {
            return Err(CommerceError::SubmissionFailed(reason.clone()));
        }
        self.orders
            .lock()
            .map_err(|e| CommerceError::SubmissionFailed(e.to_string()))?
            .push(order.clone());
        Ok(())
    }
}
