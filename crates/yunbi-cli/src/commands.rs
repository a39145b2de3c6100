/*
[INPUT]:  Parsed subcommand and a configured YunbiClient
[OUTPUT]: Raw JSON response of the matching endpoint
[POS]:    CLI layer - subcommand to endpoint mapping
[UPDATE]: When endpoints are added to the adapter
*/

use anyhow::{Context, Result};
use clap::Subcommand;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use yunbi_adapter::{
    DepositsQuery, DepthQuery, KLineQuery, MultiOrder, OrderBookQuery, OrderBy, OrderOptions,
    OrderState, OrderType, OrdersQuery, Side, TradesQuery, YunbiClient,
};

/// Parse a lowercase wire name (`buy`, `desc`, ...) into an adapter enum
fn parse_wire<T: DeserializeOwned>(raw: &str) -> std::result::Result<T, String> {
    serde_json::from_value(Value::String(raw.to_string())).map_err(|e| e.to_string())
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all available markets
    Markets,
    /// Ticker of all markets, or of one market
    Tickers {
        market: Option<String>,
    },
    /// Order book of a market
    OrderBook {
        market: String,
        #[arg(long)]
        asks_limit: Option<u32>,
        #[arg(long)]
        bids_limit: Option<u32>,
    },
    /// Depth of a market
    Depth {
        market: String,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Recent public trades
    Trades {
        market: String,
        #[command(flatten)]
        filter: TradeFilter,
    },
    /// Server time
    Timestamp,
    /// K line of a market
    K {
        market: String,
        #[command(flatten)]
        filter: KLineFilter,
    },
    /// K line with trades not yet folded in
    KPending {
        market: String,
        trade_id: u64,
        #[command(flatten)]
        filter: KLineFilter,
    },
    /// Check a deposit address
    Address {
        address: String,
    },
    /// Trades of a partner order
    PartnerTrades {
        id: String,
        access_key_hash: String,
    },
    /// Your profile and accounts
    Me,
    /// Your account in one currency
    Currency {
        currency: String,
    },
    /// Your deposit history
    Deposits {
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        state: Option<String>,
    },
    /// One deposit by transaction id
    Deposit {
        txid: String,
    },
    /// Where to deposit a currency
    DepositAddress {
        currency: String,
    },
    /// Your orders on a market
    Orders {
        market: String,
        #[arg(long, value_parser = parse_wire::<OrderState>)]
        state: Option<OrderState>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long, value_parser = parse_wire::<OrderBy>)]
        order_by: Option<OrderBy>,
    },
    /// Place an order
    PlaceOrder {
        market: String,
        #[arg(value_parser = parse_wire::<Side>)]
        side: Side,
        volume: Decimal,
        #[arg(long)]
        price: Option<Decimal>,
        #[arg(long, value_parser = parse_wire::<OrderType>)]
        ord_type: Option<OrderType>,
    },
    /// Place several orders from a JSON array of {side, volume, price?, ord_type?}
    PlaceOrders {
        market: String,
        orders: String,
    },
    /// Cancel all your orders, or one side
    ClearOrders {
        #[arg(long, value_parser = parse_wire::<Side>)]
        side: Option<Side>,
    },
    /// One of your orders
    Order {
        id: u64,
    },
    /// Cancel an order
    CancelOrder {
        id: u64,
    },
    /// Your executed trades
    MyTrades {
        market: String,
        #[command(flatten)]
        filter: TradeFilter,
    },
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct TradeFilter {
    #[arg(long)]
    limit: Option<u32>,
    #[arg(long)]
    timestamp: Option<u64>,
    #[arg(long = "from")]
    from_id: Option<u64>,
    #[arg(long)]
    to: Option<u64>,
    #[arg(long, value_parser = parse_wire::<OrderBy>)]
    order_by: Option<OrderBy>,
}

impl From<TradeFilter> for TradesQuery {
    fn from(filter: TradeFilter) -> Self {
        TradesQuery {
            limit: filter.limit,
            timestamp: filter.timestamp,
            from_id: filter.from_id,
            to: filter.to,
            order_by: filter.order_by,
        }
    }
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct KLineFilter {
    #[arg(long)]
    limit: Option<u32>,
    #[arg(long)]
    period: Option<u32>,
    #[arg(long)]
    timestamp: Option<u64>,
}

impl From<KLineFilter> for KLineQuery {
    fn from(filter: KLineFilter) -> Self {
        KLineQuery {
            limit: filter.limit,
            period: filter.period,
            timestamp: filter.timestamp,
        }
    }
}

/// Run one subcommand against the API
pub async fn run(client: &YunbiClient, command: Command) -> Result<Value> {
    debug!(?command, "running command");
    let value = match command {
        Command::Markets => client.get_markets().await?,
        Command::Tickers { market: None } => client.get_tickers().await?,
        Command::Tickers {
            market: Some(market),
        } => client.get_tickers_market(&market).await?,
        Command::OrderBook {
            market,
            asks_limit,
            bids_limit,
        } => {
            let query = OrderBookQuery {
                asks_limit,
                bids_limit,
            };
            client.get_order_book(&market, query).await?
        }
        Command::Depth { market, limit } => client.get_depth(&market, DepthQuery { limit }).await?,
        Command::Trades { market, filter } => client.get_trades(&market, filter.into()).await?,
        Command::Timestamp => client.get_timestamp().await?,
        Command::K { market, filter } => client.get_k(&market, filter.into()).await?,
        Command::KPending {
            market,
            trade_id,
            filter,
        } => {
            client
                .get_k_with_pending_trades(&market, trade_id, filter.into())
                .await?
        }
        Command::Address { address } => client.get_addresses_address(&address).await?,
        Command::PartnerTrades {
            id,
            access_key_hash,
        } => {
            client
                .get_partners_orders_id_trades(&id, &access_key_hash)
                .await?
        }
        Command::Me => client.get_members_me().await?,
        Command::Currency { currency } => client
            .get_currency_me(&currency)
            .await?
            .unwrap_or(Value::Null),
        Command::Deposits {
            currency,
            limit,
            state,
        } => {
            let query = DepositsQuery {
                currency,
                limit,
                state,
            };
            client.get_deposits(query).await?
        }
        Command::Deposit { txid } => client.get_deposit(&txid).await?,
        Command::DepositAddress { currency } => client.get_deposit_address(&currency).await?,
        Command::Orders {
            market,
            state,
            limit,
            page,
            order_by,
        } => {
            let query = OrdersQuery {
                state,
                limit,
                page,
                order_by,
            };
            client.get_orders(&market, query).await?
        }
        Command::PlaceOrder {
            market,
            side,
            volume,
            price,
            ord_type,
        } => {
            let options = OrderOptions { price, ord_type };
            client.post_orders(&market, side, volume, options).await?
        }
        Command::PlaceOrders { market, orders } => {
            let orders: Vec<MultiOrder> =
                serde_json::from_str(&orders).context("parse orders JSON")?;
            client.post_orders_multi(&market, &orders).await?
        }
        Command::ClearOrders { side } => client.post_orders_clear(side).await?,
        Command::Order { id } => client.get_order(id).await?,
        Command::CancelOrder { id } => client.post_order_delete(id).await?,
        Command::MyTrades { market, filter } => {
            client.get_trades_my(&market, filter.into()).await?
        }
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use yunbi_adapter::{ClientConfig, YunbiError};

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    fn parse(args: &[&str]) -> Command {
        let mut argv = vec!["yunbi"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).expect("parse args").command
    }

    fn client_for(server: &MockServer) -> YunbiClient {
        let config = ClientConfig {
            base_url: format!("{}/api/v2/", server.uri()),
            ..ClientConfig::default()
        };
        YunbiClient::with_config(config, None).expect("client init")
    }

    #[test]
    fn test_parse_place_order() {
        let command = parse(&["place-order", "btccny", "buy", "1.0", "--price", "100"]);
        match command {
            Command::PlaceOrder {
                market,
                side,
                volume,
                price,
                ord_type,
            } => {
                assert_eq!(market, "btccny");
                assert_eq!(side, Side::Buy);
                assert_eq!(volume.to_string(), "1.0");
                assert_eq!(price.map(|p| p.to_string()), Some("100".to_string()));
                assert!(ord_type.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_side() {
        let mut argv = vec!["yunbi"];
        argv.extend_from_slice(&["place-order", "btccny", "hold", "1"]);
        assert!(TestCli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_trade_filter_from_flag() {
        let command = parse(&["trades", "btccny", "--from", "123"]);
        match command {
            Command::Trades { filter, .. } => {
                let query: TradesQuery = filter.into();
                assert_eq!(query.from_id, Some(123));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_run_tickers_market() {
        let server = MockServer::start().await;
        let payload = serde_json::json!({"at": 1, "ticker": {"last": "7000.0"}});
        Mock::given(method("GET"))
            .and(path("/api/v2/tickers/btccny.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let value = run(&client_for(&server), parse(&["tickers", "btccny"]))
            .await
            .expect("run tickers");
        assert_eq!(value, payload);
    }

    #[tokio::test]
    async fn test_run_trades_sends_from() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/trades.json"))
            .and(query_param("from", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        run(&client_for(&server), parse(&["trades", "btccny", "--from", "5"]))
            .await
            .expect("run trades");
    }

    #[tokio::test]
    async fn test_run_private_without_credentials() {
        let server = MockServer::start().await;
        let err = run(&client_for(&server), parse(&["me"]))
            .await
            .unwrap_err();
        let yunbi_err = err.downcast_ref::<YunbiError>().expect("adapter error");
        assert!(yunbi_err.is_auth_error());
    }

    #[tokio::test]
    async fn test_run_place_orders_rejects_bad_json() {
        let server = MockServer::start().await;
        let client = YunbiClient::with_config(
            ClientConfig {
                base_url: format!("{}/api/v2/", server.uri()),
                ..ClientConfig::default()
            },
            Some(yunbi_adapter::Credentials::new("a", "s")),
        )
        .expect("client init");
        let err = run(&client, parse(&["place-orders", "btccny", "not json"]))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("parse orders JSON"));
    }
}
