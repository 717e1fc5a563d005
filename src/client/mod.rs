//! HTTP client functionality

pub mod http;

// Re-exports
pub use http::{build_client, check_status, map_send_error, USER_AGENT_STRING};
