//! HTTP middleware components

pub mod query;
pub mod request_id;

pub use query::LenientQuery;
pub use request_id::{REQUEST_ID_HEADER, RequestId, RequestIdLayer};
