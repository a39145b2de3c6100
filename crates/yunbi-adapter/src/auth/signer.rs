/*
[INPUT]:  HTTP method, endpoint path, full parameter mapping, secret key
[OUTPUT]: Canonical message and lowercase hex HMAC-SHA256 signature
[POS]:    Auth layer - request signing for private endpoints
[UPDATE]: When changing signing algorithm or canonical message format
*/

use hmac::{Hmac, Mac};
use reqwest::Method;
use sha2::Sha256;

use crate::auth::Credentials;
use crate::http::Params;

type HmacSha256 = Hmac<Sha256>;

/// Path prefix the server sees in front of every endpoint
pub const API_PATH_PREFIX: &str = "/api/v2/";

/// Build the string the server signs: `METHOD|/api/v2/<path>.json|k1=v1&...&kn=vn`.
///
/// Pairs come from [`Params::to_pairs`], so keys are ascending and there is no
/// trailing `&`.
pub fn canonical_message(method: &Method, path: &str, params: &Params) -> String {
    let query = params
        .to_pairs()
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}|{API_PATH_PREFIX}{path}.json|{query}", method.as_str())
}

/// Signs private requests with the client's secret key
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
}

impl<'a> RequestSigner<'a> {
    pub fn new(credentials: &'a Credentials) -> Self {
        Self { credentials }
    }

    /// HMAC-SHA256 of `message` keyed by the secret, as lowercase hex
    pub fn sign(&self, message: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.credentials.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(message.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Sign a request. `params` must already carry `access_key` and `tonce`.
    pub fn sign_request(&self, method: &Method, path: &str, params: &Params) -> String {
        self.sign(&canonical_message(method, path, params))
    }
}
