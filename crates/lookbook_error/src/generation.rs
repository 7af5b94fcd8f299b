//! Generation error types.

/// Kinds of generation errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Request failed validation before any provider call
    #[display("Invalid request: {}", _0)]
    Validation(String),
    /// Batch exceeds the per-request garment cap
    #[display("Batch too large: {} garments exceeds the maximum of {}", count, max)]
    BatchTooLarge {
        /// Number of garments in the request
        count: usize,
        /// Maximum garments allowed per batch
        max: usize,
    },
    /// Provider identifier does not resolve to a registered capability
    #[display("Unknown provider: {}", _0)]
    UnknownProvider(String),
    /// Provider resolved but reported itself unavailable
    #[display("Provider unavailable: {}", _0)]
    ProviderUnavailable(String),
    /// Zero units succeeded for a garment or request
    #[display("Generation failed: {}", _0)]
    GenerationFailed(String),
    /// Referenced LoRA model is missing or not finished training
    #[display("Model {} is not ready: status {}", id, status)]
    ModelNotReady {
        /// The referenced LoRA model id
        id: String,
        /// The model's current status
        status: String,
    },
}

/// Generation error with location tracking.
///
/// # Examples
///
/// ```
/// use lookbook_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::UnknownProvider("flux-9000".to_string()));
/// assert!(format!("{}", err).contains("Unknown provider"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new generation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether this error should be reported to the caller as a bad request
    /// rather than a server-side failure.
    pub fn is_user_error(&self) -> bool {
        !matches!(self.kind, GenerationErrorKind::GenerationFailed(_))
    }
}
