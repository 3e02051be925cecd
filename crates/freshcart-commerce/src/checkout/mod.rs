//! Checkout module.
//!
//! Turns a cart snapshot into an order payload and hands it to an order
//! sink.

mod order;
mod submit;

pub use order::{CheckoutSummary, OrderItem, OrderPayload};
pub use submit::{place_order, ClearPolicy, OrderSink, RecordingOrderSink};
