//! Catalog listing command.

use stonefruit_core::price::display_amount;
use stonefruit_shop::api::ApiClient;
use stonefruit_shop::catalog::Catalog;
use stonefruit_shop::config::ShopConfig;
use stonefruit_shop::error::Result;

/// Fetch and print the product catalog.
#[allow(clippy::print_stdout)]
pub async fn list(config: &ShopConfig) -> Result<()> {
    let client = ApiClient::new(&config.api_base_url)?;
    let catalog = Catalog::load(&client).await;

    if catalog.is_empty() {
        println!("No products available.");
        return Ok(());
    }

    for product in catalog.products() {
        println!(
            "{:>5}  {:<32} {:>10}  ({} in stock)",
            product.id.as_i64(),
            product.name,
            display_amount(product.price),
            product.stock
        );
        if !product.description.is_empty() {
            println!("       {}", product.description);
        }
    }

    Ok(())
}
