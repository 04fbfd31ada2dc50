//! Clear command - empty the cart

use super::{ensure_persisted, open_cart};
use crate::config::Config;
use crate::error::CartResult;
use crate::ui::{self, UiContext};

/// Execute the clear command
pub async fn execute(config: &Config) -> CartResult<()> {
    let mut store = open_cart(config).await;
    let removed = store.state().len();

    store.clear().await;
    ensure_persisted(&mut store).await?;

    let ctx = UiContext::detect();
    ui::step_ok(&ctx, &format!("Cleared cart ({} item(s) removed)", removed));
    Ok(())
}
