//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum router exposing the relay endpoint
//! - `upstream` - Clients for the assistant backend
//! - `relay_client` - Clients the conversation side uses to reach the relay
//! - `terminal` - Text rendering of the transcript

pub mod http;
pub mod relay_client;
pub mod terminal;
pub mod upstream;

pub use relay_client::{MockRelayClient, ReqwestRelayClient};
pub use terminal::TerminalRenderer;
pub use upstream::{MockUpstreamClient, ReqwestUpstreamClient};
