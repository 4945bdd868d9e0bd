//! Error handling types for modelgate.
//!
//! Every pipeline stage and normalizer fails with a [`LangException`]; the
//! exception-handling contract in [`crate::exception`] is the only place
//! that turns one into a client-facing response.

use serde::Serialize;
use thiserror::Error;

/// Coarse failure classification, used by the exception-handling contract
/// to pick a client-facing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExceptionKind {
    NotImplemented,
    Validation,
    Network,
    Provider,
}

/// Uniform internal failure representation.
///
/// Carries a kind, a message, and optional upstream detail — enough for the
/// exception handler to render a client error without provider-specific
/// knowledge.
#[derive(Debug, Error)]
pub enum LangException {
    /// A base-pipeline default stage was invoked without being overridden.
    /// Always an integration defect, never a runtime condition to recover
    /// from.
    #[error("method not implemented: {0}")]
    NotImplemented(String),

    /// The inbound request could not be converted into valid typed
    /// parameters.
    #[error("invalid request: {0}")]
    Validation(String),

    /// A remote fetch (resource retrieval, provider call) did not succeed.
    #[error("network failure: {message}")]
    Network {
        message: String,
        /// Upstream transport detail; logged, never forwarded to clients.
        detail: Option<String>,
    },

    /// The provider call succeeded at the transport level but reported an
    /// application-level failure.
    #[error("provider failure: {message}")]
    Provider {
        message: String,
        detail: Option<String>,
    },
}

impl LangException {
    pub fn not_implemented(method: impl Into<String>) -> Self {
        Self::NotImplemented(method.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            detail: None,
        }
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            detail: None,
        }
    }

    /// Attach upstream detail to a network or provider failure.
    /// No-op for kinds that carry none.
    pub fn with_detail(mut self, upstream: impl Into<String>) -> Self {
        match &mut self {
            Self::Network { detail, .. } | Self::Provider { detail, .. } => {
                *detail = Some(upstream.into());
            }
            Self::NotImplemented(_) | Self::Validation(_) => {}
        }
        self
    }

    pub fn kind(&self) -> ExceptionKind {
        match self {
            Self::NotImplemented(_) => ExceptionKind::NotImplemented,
            Self::Validation(_) => ExceptionKind::Validation,
            Self::Network { .. } => ExceptionKind::Network,
            Self::Provider { .. } => ExceptionKind::Provider,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Network { detail, .. } | Self::Provider { detail, .. } => detail.as_deref(),
            Self::NotImplemented(_) | Self::Validation(_) => None,
        }
    }
}

impl From<reqwest::Error> for LangException {
    fn from(err: reqwest::Error) -> Self {
        LangException::network("request failed").with_detail(err.to_string())
    }
}
