//! Relay domain module.
//!
//! Upstream URL construction, the typed upstream body and the mapping of
//! upstream outcomes onto the relay's normalized responses.

mod error;
mod upstream;

pub use error::RelayError;
pub use upstream::{
    is_json_content_type, upstream_chat_url, UpstreamBody, UpstreamReply, CHAT_PATH,
};
