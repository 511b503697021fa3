//! Checkout command.

use std::io::{self, BufRead, Write};

use stonefruit_core::price::display_amount;
use stonefruit_shop::api::ApiClient;
use stonefruit_shop::cart::{CartManager, CartStore};
use stonefruit_shop::checkout::Checkout;
use stonefruit_shop::config::ShopConfig;
use stonefruit_shop::error::Result;

/// Review the order, ask for confirmation, and submit it.
///
/// Declining the confirmation aborts without any network call. With `yes`
/// set the prompt is skipped and the charge is confirmed up front.
#[allow(clippy::print_stdout)]
pub async fn run(config: &ShopConfig, name: &str, address: &str, yes: bool) -> Result<()> {
    let client = ApiClient::new(&config.api_base_url)?;
    let mut manager = CartManager::open(CartStore::new(&config.storage_dir));
    let mut checkout = Checkout::new();

    let preview = checkout.begin(name, address, manager.cart())?;

    println!("Order for {name}, delivered to {address}:");
    for item in manager.items() {
        println!(
            "  {:>3} x {:<32} {:>10}",
            item.quantity,
            item.product.name,
            display_amount(item.line_total())
        );
    }
    println!(
        "{} item(s), total {}",
        preview.item_count,
        display_amount(preview.total)
    );

    if !yes && !confirm_on_stdin(&display_amount(preview.total))? {
        checkout.decline();
        println!("Order cancelled; your cart is untouched.");
        return Ok(());
    }

    checkout.submit(&client, &mut manager).await?;
    println!("Order placed. Thank you!");
    Ok(())
}

/// Synchronous yes/no gate before any network call is made.
#[allow(clippy::print_stdout)]
fn confirm_on_stdin(total: &str) -> Result<bool> {
    print!("Charge {total} and place the order? [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
