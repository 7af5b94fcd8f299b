//! Provider error types.

/// Kinds of provider errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProviderErrorKind {
    /// HTTP transport failure
    #[display("HTTP error: {}", _0)]
    Http(String),
    /// Provider API returned a non-success status
    #[display("API error ({}): {}", status, message)]
    Api {
        /// HTTP status code returned by the provider
        status: u16,
        /// Error body returned by the provider
        message: String,
    },
    /// Provider response could not be parsed
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),
    /// Required credentials are not configured
    #[display("Missing credentials: {}", _0)]
    MissingCredentials(String),
    /// Prediction reached a terminal failure state
    #[display("Prediction failed: {}", _0)]
    PredictionFailed(String),
    /// Prediction did not reach a terminal state in time
    #[display("Prediction timed out after {} polls", _0)]
    PredictionTimeout(usize),
}

/// Provider error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new provider error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether a retry could plausibly succeed.
    ///
    /// Transport failures and rate-limit or server-side statuses are
    /// transient; parsing failures and missing credentials are not.
    pub fn is_transient(&self) -> bool {
        match &self.kind {
            ProviderErrorKind::Http(_) => true,
            ProviderErrorKind::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
