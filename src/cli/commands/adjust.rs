//! Inc/dec commands - change the quantity of a cart item

use super::{ensure_persisted, open_cart};
use crate::cli::args::ItemArgs;
use crate::config::Config;
use crate::error::CartResult;
use crate::ui::{self, UiContext};

/// Execute the inc command
pub async fn increment(args: ItemArgs, config: &Config) -> CartResult<()> {
    let mut store = open_cart(config).await;
    let matched = store.increment(&args.id).await;
    ensure_persisted(&mut store).await?;

    let ctx = UiContext::detect();
    match store.state().get(&args.id) {
        Some(item) if matched => ui::step_ok(
            &ctx,
            &format!("{} quantity is now {}", args.id, item.quantity),
        ),
        _ => ui::step_warn(&ctx, &format!("No item {} in cart", args.id)),
    }

    Ok(())
}

/// Execute the dec command
pub async fn decrement(args: ItemArgs, config: &Config) -> CartResult<()> {
    let mut store = open_cart(config).await;
    let matched = store.decrement(&args.id).await;
    ensure_persisted(&mut store).await?;

    let ctx = UiContext::detect();
    match (matched, store.state().get(&args.id)) {
        (false, _) => ui::step_warn(&ctx, &format!("No item {} in cart", args.id)),
        (true, Some(item)) => ui::step_ok(
            &ctx,
            &format!("{} quantity is now {}", args.id, item.quantity),
        ),
        (true, None) => ui::step_ok(&ctx, &format!("Removed {} from cart", args.id)),
    }

    Ok(())
}
