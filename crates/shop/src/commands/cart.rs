//! Cart commands.

use stonefruit_core::ProductId;
use stonefruit_core::price::display_amount;
use stonefruit_shop::api::ApiClient;
use stonefruit_shop::cart::{CartManager, CartStore};
use stonefruit_shop::catalog::Catalog;
use stonefruit_shop::config::ShopConfig;
use stonefruit_shop::error::{Result, ShopError};

fn open_manager(config: &ShopConfig) -> CartManager {
    CartManager::open(CartStore::new(&config.storage_dir))
}

/// Print the cart contents, line totals, and grand total.
#[allow(clippy::print_stdout)]
pub fn show(config: &ShopConfig) -> Result<()> {
    let manager = open_manager(config);

    if manager.is_empty() {
        println!("Your cart is empty.");
        return Ok(());
    }

    for item in manager.items() {
        println!(
            "{:>5}  {:<32} {:>3} x {:>9} = {:>10}",
            item.product.id.as_i64(),
            item.product.name,
            item.quantity,
            display_amount(item.product.price),
            display_amount(item.line_total())
        );
    }
    println!(
        "\n{} item(s), total {}",
        manager.cart().item_count(),
        display_amount(manager.total())
    );

    Ok(())
}

/// Add one unit of a catalog product to the cart.
#[allow(clippy::print_stdout)]
pub async fn add(config: &ShopConfig, product_id: i64) -> Result<()> {
    let id = ProductId::new(product_id);

    let client = ApiClient::new(&config.api_base_url)?;
    let catalog = Catalog::load(&client).await;
    let product = catalog
        .find(id)
        .ok_or_else(|| ShopError::NotFound(format!("product {id} is not in the catalog")))?;

    let mut manager = open_manager(config);
    manager.add(product.clone())?;

    println!("Added {} to the cart.", product.name);
    Ok(())
}

/// Set the quantity of a cart line.
#[allow(clippy::print_stdout)]
pub fn update(config: &ShopConfig, product_id: i64, quantity: u32) -> Result<()> {
    let id = ProductId::new(product_id);
    let mut manager = open_manager(config);

    if quantity < 1 {
        println!("Quantity must be at least 1; cart left unchanged.");
        return Ok(());
    }

    if !manager.items().iter().any(|i| i.product.id == id) {
        println!("Product {id} is not in the cart.");
        return Ok(());
    }

    manager.update_quantity(id, quantity)?;
    println!("Updated product {id} to quantity {quantity}.");
    Ok(())
}

/// Remove a product from the cart.
#[allow(clippy::print_stdout)]
pub fn remove(config: &ShopConfig, product_id: i64) -> Result<()> {
    let id = ProductId::new(product_id);
    let mut manager = open_manager(config);

    if manager.remove(id)? {
        println!("Removed product {id} from the cart.");
    } else {
        println!("Product {id} was not in the cart.");
    }
    Ok(())
}
