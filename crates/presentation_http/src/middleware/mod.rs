//! HTTP middleware components
//!
//! Request correlation and request body extraction.

pub mod json_body;
pub mod request_id;

pub use json_body::JsonBody;
pub use request_id::{REQUEST_ID_HEADER, RequestId, propagate_request_id};
