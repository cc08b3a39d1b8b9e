//! Cross-cutting HTTP middleware, kept out of the lookup logic.

pub mod metrics;
pub mod request_id;

pub use metrics::{track_metrics, HttpMetrics};
pub use request_id::{propagate_request_id, RequestId, REQUEST_ID_HEADER};
