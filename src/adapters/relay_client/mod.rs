//! Relay Client Adapters.
//!
//! - `ReqwestRelayClient` - HTTP client for `POST /api/chat`
//! - `MockRelayClient` - Configurable mock for testing

mod mock_relay_client;
mod reqwest_relay_client;

pub use mock_relay_client::MockRelayClient;
pub use reqwest_relay_client::ReqwestRelayClient;
