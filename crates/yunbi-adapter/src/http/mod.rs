/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: Decoded JSON responses for every Yunbi endpoint
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod params;
pub mod public;
pub mod trade;
pub mod user;

pub use error::{Result, YunbiError};
pub use params::{ParamValue, Params};

pub use client::{ClientConfig, DEFAULT_BASE_URL, YunbiClient};
