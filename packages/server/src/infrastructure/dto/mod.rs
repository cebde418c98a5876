//! Data Transfer Objects (DTOs) for the HTTP API.
//!
//! - `http`: HTTP API request/response DTOs
//! - `conversion`: conversions from domain entities

pub mod conversion;
pub mod http;
