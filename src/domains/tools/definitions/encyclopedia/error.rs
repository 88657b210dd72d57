//! Errors raised by the Naver search client.

use std::fmt;

use thiserror::Error;

/// HTTP status reported for failures that never reached (or never heard back
/// from) the upstream.
pub const INTERNAL_STATUS: u16 = 500;

/// Classification of a failed search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// Credentials are missing; no request was sent.
    Config,

    /// The request could not be completed (connect, timeout, DNS, decode).
    Network,

    /// The upstream answered with an error status and a body that is not a
    /// recognizable error object.
    Parse,

    /// Error code reported by the upstream itself (e.g. `SE01`).
    Upstream(String),
}

impl ErrorCode {
    /// Wire representation of the code.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Config => "CONFIG_ERROR",
            Self::Network => "NETWORK_ERROR",
            Self::Parse => "PARSE_ERROR",
            Self::Upstream(code) => code,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed call to the upstream search API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    pub status_code: u16,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            code,
            message: message.into(),
            status_code,
        }
    }

    /// Credentials are not configured.
    pub fn missing_credentials() -> Self {
        Self::new(
            ErrorCode::Config,
            "Naver API credentials are not configured (set NAVER_CLIENT_ID and NAVER_CLIENT_SECRET)",
            INTERNAL_STATUS,
        )
    }

    /// Transport-level failure.
    pub fn network(err: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::Network,
            format!("network error: {err}"),
            INTERNAL_STATUS,
        )
    }

    /// Error status whose body could not be parsed.
    pub fn parse(status_code: u16) -> Self {
        Self::new(ErrorCode::Parse, "response parse error", status_code)
    }

    /// Error reported by the upstream.
    pub fn upstream(code: impl Into<String>, message: impl Into<String>, status_code: u16) -> Self {
        Self::new(ErrorCode::Upstream(code.into()), message, status_code)
    }
}
