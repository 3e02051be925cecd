//! Checkout dry run.

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use freshcart_commerce::checkout::{place_order, RecordingOrderSink};
use serde_json::json;

use super::cart::replay_script;
use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let date = match args.date.as_deref() {
        Some(date) => parse_date(date)?,
        None => chrono::Local::now().date_naive(),
    };

    let (mut store, _) = replay_script(&args.script, ctx)?;
    let store_config = &ctx.config.store;

    let summary = store_config.checkout_summary(store.state())?;

    ctx.output.debug(&format!(
        "Submitting to in-memory sink ({} clear policy)",
        store_config.clear_policy.as_str()
    ));
    let sink = RecordingOrderSink::new();
    let payload = place_order(&mut store, &sink, date, store_config.clear_policy).await?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "summary": summary,
            "order": payload,
        }));
        return Ok(());
    }

    ctx.output.header("Checkout");
    ctx.output.kv("Items", &summary.item_count.to_string());
    ctx.output.kv("Subtotal", &summary.subtotal.display());
    ctx.output.kv("Delivery", &summary.delivery_fee.display());
    ctx.output.kv("Total", &summary.grand_total.display());
    if summary.qualifies_for_free_delivery() {
        ctx.output.kv("Free delivery", "reached");
    } else {
        ctx.output.kv(
            "Free delivery",
            &format!("{} to go", summary.remaining_for_free_delivery.display()),
        );
    }

    ctx.output.header("Order payload");
    ctx.output.info(&payload.to_json()?);
    ctx.output.success(&format!(
        "Dry run: order for {} accepted ({} order(s) recorded)",
        payload.date,
        sink.orders().len()
    ));

    Ok(())
}

/// Parse a `YYYY-MM-DD` order date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}
