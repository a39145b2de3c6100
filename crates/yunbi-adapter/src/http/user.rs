/*
[INPUT]:  Account query parameters and signed credentials
[OUTPUT]: Member profile, balances, deposits and deposit addresses
[POS]:    HTTP layer - account endpoints (require access/secret key)
[UPDATE]: When adding new account endpoints or changing query parameters
*/

use reqwest::Method;
use serde_json::Value;

use crate::http::{Params, Result, YunbiClient};
use crate::types::{DepositsQuery, ToParams};

impl YunbiClient {
    /// Get your profile and accounts info
    ///
    /// GET /api/v2/members/me.json
    pub async fn get_members_me(&self) -> Result<Value> {
        self.private_request(Method::GET, "members/me", Params::new()).await
    }

    /// Get the account entry for one currency from `members/me`.
    ///
    /// Returns `None` when the profile has no account in that currency, or
    /// when the server answered with something other than a profile.
    pub async fn get_currency_me(&self, currency: &str) -> Result<Option<Value>> {
        let profile = self.get_members_me().await?;
        let account = profile
            .get("accounts")
            .and_then(Value::as_array)
            .and_then(|accounts| {
                accounts
                    .iter()
                    .find(|account| account.get("currency").and_then(Value::as_str) == Some(currency))
            })
            .cloned();
        Ok(account)
    }

    /// Get your deposits history
    ///
    /// GET /api/v2/deposits.json
    pub async fn get_deposits(&self, query: DepositsQuery) -> Result<Value> {
        let mut params = Params::new();
        query.write_params(&mut params);
        self.private_request(Method::GET, "deposits", params).await
    }

    /// Get details of a specific deposit
    ///
    /// GET /api/v2/deposit.json?txid={txid}
    pub async fn get_deposit(&self, txid: &str) -> Result<Value> {
        let mut params = Params::new();
        params.insert("txid", txid);
        self.private_request(Method::GET, "deposit", params).await
    }

    /// Where to deposit a currency
    ///
    /// GET /api/v2/deposit_address.json?currency={currency}
    pub async fn get_deposit_address(&self, currency: &str) -> Result<Value> {
        let mut params = Params::new();
        params.insert("currency", currency);
        self.private_request(Method::GET, "deposit_address", params).await
    }
}
