/*
[INPUT]:  Market identifier (e.g., "btccny")
[OUTPUT]: Market data (markets, ticker, depth, recent trades)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use yunbi_adapter::*;

/// Example: Query market data (no authentication required)
#[tokio::main]
async fn main() {
    println!("=== Yunbi Market Data Example ===\n");

    let client = match YunbiClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created (no auth required for public endpoints)\n");

    let market = "btccny";

    println!("Querying markets...");
    match client.get_markets().await {
        Ok(markets) => println!("✓ Markets: {}", markets),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying ticker for {}...", market);
    match client.get_tickers_market(market).await {
        Ok(ticker) => println!("✓ Ticker: {}", ticker),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying depth for {}...", market);
    match client.get_depth(market, DepthQuery { limit: Some(5) }).await {
        Ok(depth) => println!("✓ Depth: {}", depth),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying recent trades for {}...", market);
    let query = TradesQuery {
        limit: Some(10),
        order_by: Some(OrderBy::Desc),
        ..TradesQuery::default()
    };
    match client.get_trades(market, query).await {
        Ok(trades) => println!("✓ Trades: {}", trades),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
