//! Domain error types for structbench.
//!
//! Typed errors at module boundaries replace string-encoded errors and
//! enable structured error handling via pattern matching. Every failed
//! trial ultimately maps onto a [`FailureKind`] bucket for the summary.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Failure classification
// ---------------------------------------------------------------------------

/// Classification buckets for failed trials.
///
/// Declaration order matches the lexicographic order of the display labels,
/// so deriving `Ord` keeps the summary breakdown in stable alphabetical
/// order without sorting at print time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FailureKind {
    ConnectionError,
    HttpError,
    IncompleteResponse,
    InvalidJson,
    NonsensicalExplanation,
    SchemaViolation,
    TimeoutError,
    UnexpectedError,
}

impl FailureKind {
    /// Human-readable label used in per-trial lines and the summary.
    pub fn label(&self) -> &'static str {
        match self {
            FailureKind::ConnectionError => "Connection Error",
            FailureKind::HttpError => "HTTP Error",
            FailureKind::IncompleteResponse => "Incomplete Response",
            FailureKind::InvalidJson => "Invalid JSON",
            FailureKind::NonsensicalExplanation => "Nonsensical Explanation",
            FailureKind::SchemaViolation => "Schema Violation",
            FailureKind::TimeoutError => "Timeout Error",
            FailureKind::UnexpectedError => "Unexpected Error",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Transport errors
// ---------------------------------------------------------------------------

/// Errors from the chat-completions transport.
///
/// Produced by [`ChatBackend::complete`](crate::providers::ChatBackend)
/// implementations before any content validation happens.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP Error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Timeout Error: no response within {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Connection Error: {0}")]
    Connection(String),

    #[error("Unexpected response envelope: {0}")]
    Envelope(String),
}

impl ProviderError {
    /// Map a transport failure onto its summary bucket.
    ///
    /// A malformed envelope (status 200 but no usable content field) is not
    /// a transport-taxonomy failure, so it lands in the catch-all bucket.
    pub fn kind(&self) -> FailureKind {
        match self {
            ProviderError::Http { .. } => FailureKind::HttpError,
            ProviderError::Timeout { .. } => FailureKind::TimeoutError,
            ProviderError::Connection(_) => FailureKind::ConnectionError,
            ProviderError::Envelope(_) => FailureKind::UnexpectedError,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation failures
// ---------------------------------------------------------------------------

/// First failing check of the per-reply validation pipeline.
///
/// The four checks run in strict order (parse, schema, completeness,
/// sanity); whichever fails first carries its detail message here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationFailure {
    #[error("{0}")]
    InvalidJson(String),

    #[error("{0}")]
    SchemaViolation(String),

    #[error("expected {expected} jokes, received {received}")]
    Incomplete { expected: usize, received: usize },

    #[error("explanation for joke {id} contains no readable text")]
    Nonsensical { id: i64 },
}

impl ValidationFailure {
    /// Map a validation failure onto its summary bucket.
    pub fn kind(&self) -> FailureKind {
        match self {
            ValidationFailure::InvalidJson(_) => FailureKind::InvalidJson,
            ValidationFailure::SchemaViolation(_) => FailureKind::SchemaViolation,
            ValidationFailure::Incomplete { .. } => FailureKind::IncompleteResponse,
            ValidationFailure::Nonsensical { .. } => FailureKind::NonsensicalExplanation,
        }
    }
}
