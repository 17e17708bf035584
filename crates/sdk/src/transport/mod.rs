//! Transport layer for the musclesworked SDK.

pub mod http;

pub use http::{ApiRequest, HttpTransport, API_KEY_HEADER};
