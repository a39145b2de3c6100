/*
[INPUT]:  YUNBI_ACCESS_KEY / YUNBI_SECRET_KEY environment variables
[OUTPUT]: Account info, order creation and cancellation responses
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use rust_decimal::Decimal;
use std::str::FromStr;
use yunbi_adapter::*;

/// Example: Trading operations (requires access key + secret key)
#[tokio::main]
async fn main() {
    println!("=== Yunbi Trading Example ===\n");

    let client = match YunbiClient::from_keys(
        std::env::var("YUNBI_ACCESS_KEY").ok(),
        std::env::var("YUNBI_SECRET_KEY").ok(),
    ) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    if !client.is_authenticated() {
        println!("Set YUNBI_ACCESS_KEY and YUNBI_SECRET_KEY to run private calls.");
        match client.get_members_me().await {
            Err(e) => println!("✗ As expected: {}", e),
            Ok(v) => println!("? Unexpected success: {}", v),
        }
        return;
    }
    println!("✓ Authenticated HTTP client created");

    match client.get_currency_me("cny").await {
        Ok(Some(account)) => println!("✓ CNY account: {}", account),
        Ok(None) => println!("✓ No CNY account"),
        Err(e) => println!("✗ Error: {}", e),
    }

    let options = OrderOptions {
        price: Some(Decimal::from_str("100").unwrap_or_default()),
        ord_type: Some(OrderType::Limit),
    };
    let volume = Decimal::from_str("0.01").unwrap_or_default();
    let order = match client.post_orders("btccny", Side::Buy, volume, options).await {
        Ok(order) => {
            println!("✓ Order placed: {}", order);
            order
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };

    if let Some(id) = order.get("id").and_then(|id| id.as_u64()) {
        match client.post_order_delete(id).await {
            Ok(cancelled) => println!("✓ Order cancelled: {}", cancelled),
            Err(e) => println!("✗ Error: {}", e),
        }
    } else {
        println!("✗ Server did not return an order id (API error payload?)");
    }

    println!("\n✓ Trading example complete");
}
