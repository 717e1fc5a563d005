//! Blocking HTTP client shared by the service lookups
//!
//! Every invocation sends exactly one request, so the client is built per
//! call with the requested timeout and no retry policy.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use tracing::warn;

use crate::errors::SsoError;

pub const USER_AGENT_STRING: &str = concat!("ssoquery/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client with a total request timeout in seconds
pub fn build_client(timeout_secs: f64) -> Result<Client, SsoError> {
    if !(timeout_secs > 0.0) || !timeout_secs.is_finite() {
        return Err(SsoError::Argument(format!(
            "timeout must be a positive number of seconds, got {}",
            timeout_secs
        )));
    }

    let timeout = Duration::try_from_secs_f64(timeout_secs).map_err(|e| {
        SsoError::Argument(format!("timeout of {} seconds is too large: {}", timeout_secs, e))
    })?;

    let client = Client::builder()
        .user_agent(USER_AGENT_STRING)
        .timeout(timeout)
        .build()?;

    Ok(client)
}

/// Turn a transport failure into an error, singling out timeouts
pub fn map_send_error(err: reqwest::Error, timeout_secs: f64) -> SsoError {
    if err.is_timeout() {
        warn!(timeout = timeout_secs, "Time out");
        SsoError::Timeout(timeout_secs)
    } else {
        SsoError::Request(err)
    }
}

/// Reject non-2xx answers
pub fn check_status(response: Response) -> Result<Response, SsoError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        warn!(status = status.as_u16(), url = %response.url(), "Service returned an error status");
        Err(SsoError::Status(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent() {
        assert!(USER_AGENT_STRING.starts_with("ssoquery/"));
    }

    #[test]
    fn test_invalid_timeout() {
        assert!(matches!(build_client(0.0), Err(SsoError::Argument(_))));
        assert!(matches!(build_client(-1.0), Err(SsoError::Argument(_))));
        assert!(matches!(build_client(f64::NAN), Err(SsoError::Argument(_))));
        assert!(matches!(build_client(f64::INFINITY), Err(SsoError::Argument(_))));
    }

    #[test]
    fn test_timeout_beyond_duration_range() {
        let err = build_client(1e20).unwrap_err();
        assert!(matches!(err, SsoError::Argument(_)));
        assert!(err.to_string().contains("too large"));
        assert!(build_client(2000.0).is_ok());
    }
}
