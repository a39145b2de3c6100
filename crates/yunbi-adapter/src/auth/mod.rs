/*
[INPUT]:  Access key / secret key pair
[OUTPUT]: Credentials and HMAC request signatures
[POS]:    Auth layer - handles Yunbi API authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod credentials;
pub mod signer;

pub use credentials::Credentials;
pub use signer::{API_PATH_PREFIX, RequestSigner, canonical_message};
