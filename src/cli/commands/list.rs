//! List command - show the cart contents

use super::{format_price, open_cart};
use crate::cart::CartState;
use crate::cli::args::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::CartResult;
use crate::ui::{self, UiContext};
use console::style;

/// Execute the list command
pub async fn execute(args: ListArgs, config: &Config) -> CartResult<()> {
    let mut store = open_cart(config).await;

    // Restoring cleared the snapshot; write it back before reporting
    store.flush().await?;
    let state = store.state();

    if state.is_empty() {
        match args.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => {
                let ctx = UiContext::detect();
                ui::step_info(&ctx, "Cart is empty");
            }
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(state, config),
        OutputFormat::Json => print_json(state)?,
        OutputFormat::Plain => print_plain(state),
    }

    Ok(())
}

fn print_table(state: &CartState, config: &Config) {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "Cart");

    println!(
        "{:<16} {:<30} {:>6} {:>12} {:>12}",
        style("ID").bold(),
        style("TITLE").bold(),
        style("QTY").bold(),
        style("PRICE").bold(),
        style("SUBTOTAL").bold()
    );
    println!("{}", "-".repeat(80));

    for item in state.items() {
        println!(
            "{:<16} {:<30} {:>6} {:>12} {:>12}",
            item.id,
            item.title,
            item.quantity,
            format_price(config, item.price),
            format_price(config, item.subtotal())
        );
    }

    println!();
    ui::key_value(&ctx, "Items", &state.total_quantity().to_string());
    ui::key_value(&ctx, "Total", &format_price(config, state.total_price()));
}

fn print_json(state: &CartState) -> CartResult<()> {
    let json = serde_json::to_string_pretty(state)?;
    println!("{}", json);
    Ok(())
}

fn print_plain(state: &CartState) {
    for item in state.items() {
        println!("{}\t{}", item.id, item.quantity);
    }
}
