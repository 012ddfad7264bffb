// iiko-client/examples/price_order.rs
// Sets the price of one dish in one department, effective tomorrow.
//
// Connection settings come from the environment or a .env file:
//   IIKO_BASE_URL, IIKO_LOGIN, IIKO_PASSWORD (or IIKO_PASSWORD_HASH)

use anyhow::Context;
use chrono::{Duration, Local};
use iiko_client::models::MenuChangeItem;
use iiko_client::{ClientConfig, IikoApi, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();
    logger::init_logger("info")?;

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        println!("Usage: {} <department_id> <product_id> <price>", args[0]);
        println!("  Example: {} 3f1e... 9a2b... 350", args[0]);
        return Ok(());
    }

    let department_id = &args[1];
    let product_id = &args[2];
    let price: i64 = args[3].parse().context("price must be an integer")?;

    let config = ClientConfig::from_env()?;
    let api = IikoApi::new(&config)?;
    tracing::info!("Connecting to {}", config.base_url);

    let order_date = Local::now().date_naive() + Duration::days(1);
    let items = vec![MenuChangeItem::new(department_id, product_id, price)];

    let document = api
        .with_session(|| async { api.price_orders().set_price(items, order_date).await })
        .await
        .context("failed to submit price order")?;

    tracing::info!("Menu change document created: {}", document);
    Ok(())
}
