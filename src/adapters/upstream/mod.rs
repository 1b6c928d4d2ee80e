//! Upstream Client Adapters.
//!
//! - `ReqwestUpstreamClient` - HTTP client for the assistant backend
//! - `MockUpstreamClient` - Configurable mock for testing

mod mock_upstream;
mod reqwest_upstream;

pub use mock_upstream::{MockUpstreamClient, RecordedCall};
pub use reqwest_upstream::ReqwestUpstreamClient;
