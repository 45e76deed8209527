//! HTTP handlers for endoreels-api.

pub mod health;
pub mod metrics;
pub mod root;
pub mod v1;

pub use health::health_check;
pub use metrics::metrics;
pub use root::root;
pub use v1::test_endpoint;
