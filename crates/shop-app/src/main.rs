//! # Storefront RS
//!
//! Headless product-page engine demo.
//!
//! ## Usage
//!
//! ```bash
//! # Point at a live backend (optional; the bundled catalog is the fallback)
//! export STOREFRONT_API_URL=https://shop.example.com/api
//!
//! # Walk one product through the pricing and cart flow
//! storefront hoodie-block
//! ```

use std::sync::Arc;

use shop_app::session::ProductPage;
use shop_app::state::AppContext;
use shop_core::{format_price, SharedStore, CART_LAST_UPDATED_KEY};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    // Live backend when configured, bundled catalog otherwise
    let context = match AppContext::from_env() {
        Ok(context) => context,
        Err(e) => {
            info!("No live backend ({}), using the bundled catalog", e);
            AppContext::with_fixtures()?
        }
    };

    let product_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "hoodie-block".to_string());

    run_demo(&context, &product_id).await
}

async fn run_demo(context: &AppContext, product_id: &str) -> anyhow::Result<()> {
    let mut page = ProductPage::load(
        Arc::clone(&context.products),
        Arc::clone(&context.cart),
        Arc::clone(&context.notifier),
        product_id,
    )
    .await?;

    let product = page.product().clone();
    println!("{} [{}]", product.name, product.id);
    println!("  {}", product.stock_status().message(product.stock));
    if product.is_on_sale() {
        println!(
            "  {} (was {}, save {}%)",
            format_price(product.price),
            format_price(product.old_price.unwrap_or(product.price)),
            page.quote().discount_percentage
        );
    } else {
        println!("  {}", format_price(product.price));
    }
    println!();

    // Walk the quantity up to the wholesale threshold, quoting as we go
    loop {
        let quote = page.quote();
        let tier = if quote.is_wholesale {
            "wholesale"
        } else {
            "retail"
        };
        println!(
            "  qty {:>3}  unit {}  total {}  [{}]",
            page.quantity(),
            format_price(quote.unit_price),
            format_price(quote.total_price),
            tier
        );
        if let Some(prompt) = page.wholesale_prompt() {
            println!("          {}", prompt);
        }

        if quote.is_wholesale || !product.wholesale_enabled {
            break;
        }
        let before = page.quantity();
        if page.increment_quantity() == before {
            // Stock ceiling reached below the tier threshold
            break;
        }
    }

    println!();
    println!("Final quote:");
    println!("{}", serde_json::to_string_pretty(&page.quote())?);
    println!();

    // Add to cart, then give the delayed resync time to fire
    if page.add_to_cart().await {
        tokio::time::sleep(std::time::Duration::from_millis(1200)).await;
    }

    for notice in page.take_notices() {
        println!("[{:?}] {}", notice.level, notice.message);
    }

    println!("Cart badge: {} items", context.badge.count());
    if let Some(updated) = context.store.get(CART_LAST_UPDATED_KEY)? {
        println!("Cart last updated at epoch ms {}", updated);
    }

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  🛍  Storefront RS
  ━━━━━━━━━━━━━━━━━━━━━━━
  Headless product-page engine
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
