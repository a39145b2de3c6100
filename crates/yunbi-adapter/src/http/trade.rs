/*
[INPUT]:  Order parameters and signed credentials
[OUTPUT]: Order responses, order lists and executed trades
[POS]:    HTTP layer - trading endpoints (require access/secret key)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use reqwest::Method;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::http::public::market_params;
use crate::http::{ParamValue, Params, Result, YunbiClient};
use crate::types::{MultiOrder, OrderOptions, OrdersQuery, Side, ToParams, TradesQuery};

impl YunbiClient {
    /// Get your orders; results are paginated
    ///
    /// GET /api/v2/orders.json?market={market}
    pub async fn get_orders(&self, market: &str, query: OrdersQuery) -> Result<Value> {
        let params = market_params(market, &query);
        self.private_request(Method::GET, "orders", params).await
    }

    /// Create a sell/buy order
    ///
    /// POST /api/v2/orders.json
    pub async fn post_orders(
        &self,
        market: &str,
        side: Side,
        volume: Decimal,
        options: OrderOptions,
    ) -> Result<Value> {
        let mut params = market_params(market, &options);
        params.insert("side", side);
        params.insert("volume", volume);
        self.private_request(Method::POST, "orders", params).await
    }

    /// Create multiple sell/buy orders at once
    ///
    /// POST /api/v2/orders/multi.json
    pub async fn post_orders_multi(&self, market: &str, orders: &[MultiOrder]) -> Result<Value> {
        let mut params = Params::new();
        params.insert("market", market);
        params.insert(
            "orders",
            ParamValue::List(orders.iter().map(MultiOrder::to_param_value).collect()),
        );
        self.private_request(Method::POST, "orders/multi", params).await
    }

    /// Cancel all your orders, or only one side when `side` is given
    ///
    /// POST /api/v2/orders/clear.json
    pub async fn post_orders_clear(&self, side: Option<Side>) -> Result<Value> {
        let mut params = Params::new();
        params.insert_opt("side", side);
        self.private_request(Method::POST, "orders/clear", params).await
    }

    /// Get information of a specific order
    ///
    /// GET /api/v2/order.json?id={id}
    pub async fn get_order(&self, id: u64) -> Result<Value> {
        let mut params = Params::new();
        params.insert("id", id);
        self.private_request(Method::GET, "order", params).await
    }

    /// Cancel an order
    ///
    /// POST /api/v2/order/delete.json
    pub async fn post_order_delete(&self, id: u64) -> Result<Value> {
        let mut params = Params::new();
        params.insert("id", id);
        self.private_request(Method::POST, "order/delete", params).await
    }

    /// Get your executed trades, sorted in reverse creation order
    ///
    /// GET /api/v2/trades/my.json?market={market}
    pub async fn get_trades_my(&self, market: &str, query: TradesQuery) -> Result<Value> {
        let params = market_params(market, &query);
        self.private_request(Method::GET, "trades/my", params).await
    }
}
