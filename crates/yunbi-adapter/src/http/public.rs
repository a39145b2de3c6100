/*
[INPUT]:  Market identifiers and optional query parameters
[OUTPUT]: Market data (markets, tickers, order book, depth, trades, k lines)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing query parameters
*/

use reqwest::Method;
use serde_json::Value;

use crate::http::{Params, Result, YunbiClient};
use crate::types::{DepthQuery, KLineQuery, OrderBookQuery, ToParams, TradesQuery};

impl YunbiClient {
    /// Get all available markets
    ///
    /// GET /api/v2/markets.json
    pub async fn get_markets(&self) -> Result<Value> {
        self.public_request(Method::GET, "markets", Params::new()).await
    }

    /// Get ticker of all markets
    ///
    /// GET /api/v2/tickers.json
    pub async fn get_tickers(&self) -> Result<Value> {
        self.public_request(Method::GET, "tickers", Params::new()).await
    }

    /// Get ticker of a specific market
    ///
    /// GET /api/v2/tickers/{market}.json
    pub async fn get_tickers_market(&self, market: &str) -> Result<Value> {
        let endpoint = format!("tickers/{}", urlencoding::encode(market));
        self.public_request(Method::GET, &endpoint, Params::new()).await
    }

    /// Get the order book of a market
    ///
    /// GET /api/v2/order_book.json?market={market}
    pub async fn get_order_book(&self, market: &str, query: OrderBookQuery) -> Result<Value> {
        let params = market_params(market, &query);
        self.public_request(Method::GET, "order_book", params).await
    }

    /// Get depth of a market. Both asks and bids are sorted from highest price to lowest.
    ///
    /// GET /api/v2/depth.json?market={market}
    pub async fn get_depth(&self, market: &str, query: DepthQuery) -> Result<Value> {
        let params = market_params(market, &query);
        self.public_request(Method::GET, "depth", params).await
    }

    /// Get recent trades on a market; each trade is included only once.
    ///
    /// GET /api/v2/trades.json?market={market}
    pub async fn get_trades(&self, market: &str, query: TradesQuery) -> Result<Value> {
        let params = market_params(market, &query);
        self.public_request(Method::GET, "trades", params).await
    }

    /// Get server time in seconds since Unix epoch
    ///
    /// GET /api/v2/timestamp.json
    pub async fn get_timestamp(&self) -> Result<Value> {
        self.public_request(Method::GET, "timestamp", Params::new()).await
    }

    /// Get OHLC (k line) of a market
    ///
    /// GET /api/v2/k.json?market={market}
    pub async fn get_k(&self, market: &str, query: KLineQuery) -> Result<Value> {
        let params = market_params(market, &query);
        self.public_request(Method::GET, "k", params).await
    }

    /// Get k line data together with trades not yet folded into it
    ///
    /// GET /api/v2/k_with_pending_trades.json?market={market}&trade_id={trade_id}
    pub async fn get_k_with_pending_trades(
        &self,
        market: &str,
        trade_id: u64,
        query: KLineQuery,
    ) -> Result<Value> {
        let mut params = market_params(market, &query);
        params.insert("trade_id", trade_id);
        self.public_request(Method::GET, "k_with_pending_trades", params).await
    }

    /// Check a deposit address
    ///
    /// GET /api/v2/addresses/{address}.json
    pub async fn get_addresses_address(&self, address: &str) -> Result<Value> {
        let endpoint = format!("addresses/{}", urlencoding::encode(address));
        self.public_request(Method::GET, &endpoint, Params::new()).await
    }

    /// Get trades of a partner order
    ///
    /// GET /api/v2/partners/orders/{id}trades.json?access_key_hash={hash}
    pub async fn get_partners_orders_id_trades(
        &self,
        id: &str,
        access_key_hash: &str,
    ) -> Result<Value> {
        // No separator between id and "trades"; the server route is spelled this way.
        let endpoint = format!("partners/orders/{}trades", urlencoding::encode(id));
        let mut params = Params::new();
        params.insert("access_key_hash", access_key_hash);
        self.public_request(Method::GET, &endpoint, params).await
    }
}

/// `market` plus whatever optional fields `query` carries
pub(crate) fn market_params(market: &str, query: &impl ToParams) -> Params {
    let mut params = Params::new();
    query.write_params(&mut params);
    params.insert("market", market);
    params
}
