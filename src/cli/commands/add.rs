//! Add command - put one unit of a product in the cart

use super::{ensure_persisted, open_cart};
use crate::cart::{AddOutcome, NewCartItem};
use crate::cli::args::AddArgs;
use crate::config::Config;
use crate::error::{CartError, CartResult};
use crate::ui::{self, UiContext};

/// Execute the add command
pub async fn execute(args: AddArgs, config: &Config) -> CartResult<()> {
    if args.price < 0.0 {
        return Err(CartError::User(format!("Invalid price: {}", args.price)));
    }

    let item = NewCartItem::new(args.id, args.title, args.image_url, args.price);
    // Restoring clears the snapshot, so reject bad input before opening
    item.validate()?;

    let mut store = open_cart(config).await;
    let id = item.id.clone();

    let outcome = store.add_to_cart(item).await?;
    ensure_persisted(&mut store).await?;

    let quantity = store
        .state()
        .get(&id)
        .map(|item| item.quantity)
        .unwrap_or_default();

    let ctx = UiContext::detect();
    match outcome {
        AddOutcome::Inserted => ui::step_ok(&ctx, &format!("Added {}", id)),
        AddOutcome::Incremented => {
            ui::step_ok(&ctx, &format!("Added {} (quantity {})", id, quantity))
        }
    }

    Ok(())
}
