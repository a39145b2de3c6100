/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums and request option structs
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod requests;

pub use enums::*;
pub use requests::*;
