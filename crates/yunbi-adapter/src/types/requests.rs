/*
[INPUT]:  Optional endpoint arguments
[OUTPUT]: Typed option structs that write only the fields that are set
[POS]:    Data layer - request parameter definitions for API communication
[UPDATE]: When API schema changes or new optional parameters are added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderBy, OrderState, OrderType, Side};
use crate::http::{ParamValue, Params};

/// Something that contributes optional fields to a request
pub trait ToParams {
    fn write_params(&self, params: &mut Params);
}

/// Optional filters for `GET deposits`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepositsQuery {
    pub currency: Option<String>,
    pub limit: Option<u32>,
    pub state: Option<String>,
}

impl ToParams for DepositsQuery {
    fn write_params(&self, params: &mut Params) {
        params.insert_opt("currency", self.currency.as_ref());
        params.insert_opt("limit", self.limit);
        params.insert_opt("state", self.state.as_ref());
    }
}

/// Optional filters for `GET orders`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrdersQuery {
    pub state: Option<OrderState>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub order_by: Option<OrderBy>,
}

impl ToParams for OrdersQuery {
    fn write_params(&self, params: &mut Params) {
        params.insert_opt("state", self.state);
        params.insert_opt("limit", self.limit);
        params.insert_opt("page", self.page);
        params.insert_opt("order_by", self.order_by);
    }
}

/// Optional fields for `POST orders`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderOptions {
    #[serde(default)]
    pub price: Option<Decimal>,
    pub ord_type: Option<OrderType>,
}

impl ToParams for OrderOptions {
    fn write_params(&self, params: &mut Params) {
        params.insert_opt("price", self.price);
        params.insert_opt("ord_type", self.ord_type);
    }
}

/// One entry of a `POST orders/multi` batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiOrder {
    pub side: Side,
    pub volume: Decimal,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub ord_type: Option<OrderType>,
}

impl MultiOrder {
    pub fn new(side: Side, volume: Decimal) -> Self {
        Self {
            side,
            volume,
            price: None,
            ord_type: None,
        }
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Fields in wire order. `side` leads so each order opens a new element.
    pub(crate) fn to_param_value(&self) -> ParamValue {
        let mut fields = vec![
            ("side".to_string(), ParamValue::from(self.side)),
            ("volume".to_string(), ParamValue::from(self.volume)),
        ];
        if let Some(price) = self.price {
            fields.push(("price".to_string(), price.into()));
        }
        if let Some(ord_type) = self.ord_type {
            fields.push(("ord_type".to_string(), ord_type.into()));
        }
        ParamValue::Map(fields)
    }
}

/// Optional filters for `GET order_book`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderBookQuery {
    pub asks_limit: Option<u32>,
    pub bids_limit: Option<u32>,
}

impl ToParams for OrderBookQuery {
    fn write_params(&self, params: &mut Params) {
        params.insert_opt("asks_limit", self.asks_limit);
        params.insert_opt("bids_limit", self.bids_limit);
    }
}

/// Optional filters for `GET depth`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepthQuery {
    pub limit: Option<u32>,
}

impl ToParams for DepthQuery {
    fn write_params(&self, params: &mut Params) {
        params.insert_opt("limit", self.limit);
    }
}

/// Optional filters for `GET trades` and `GET trades/my`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradesQuery {
    pub limit: Option<u32>,
    /// Seconds since Unix epoch
    pub timestamp: Option<u64>,
    /// Sent to the server as `from`
    pub from_id: Option<u64>,
    pub to: Option<u64>,
    pub order_by: Option<OrderBy>,
}

impl ToParams for TradesQuery {
    fn write_params(&self, params: &mut Params) {
        params.insert_opt("limit", self.limit);
        params.insert_opt("timestamp", self.timestamp);
        params.insert_opt("from", self.from_id);
        params.insert_opt("to", self.to);
        params.insert_opt("order_by", self.order_by);
    }
}

/// Optional filters for `GET k` and `GET k_with_pending_trades`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KLineQuery {
    pub limit: Option<u32>,
    /// K line period in minutes
    pub period: Option<u32>,
    /// Seconds since Unix epoch
    pub timestamp: Option<u64>,
}

impl ToParams for KLineQuery {
    fn write_params(&self, params: &mut Params) {
        params.insert_opt("limit", self.limit);
        params.insert_opt("period", self.period);
        params.insert_opt("timestamp", self.timestamp);
    }
}
