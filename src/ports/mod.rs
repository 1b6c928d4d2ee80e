//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `UpstreamClient` - Relay to assistant backend
//! - `RelayClient` - Conversation controller to relay
//! - `TranscriptObserver` - Presentation layers subscribing to conversation state

mod relay_client;
mod transcript_observer;
mod upstream_client;

pub use relay_client::{RelayAnswer, RelayClient, RelayClientError};
pub use transcript_observer::TranscriptObserver;
pub use upstream_client::{UpstreamClient, UpstreamError};
