/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Yunbi adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Credentials, RequestSigner, canonical_message};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    DEFAULT_BASE_URL,
    ParamValue,
    Params,
    Result,
    YunbiClient,
    YunbiError,
};

// Re-export all types
pub use types::*;
