//! Image reference types.

use serde::{Deserialize, Serialize};

/// Where image content lives.
///
/// Providers accept either form; base64 payloads are passed through
/// without transcoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageRef {
    /// URL to fetch the content from
    Url(String),
    /// Base64-encoded content
    Base64(String),
}

impl ImageRef {
    /// The raw string payload, whichever form it takes.
    pub fn as_str(&self) -> &str {
        match self {
            ImageRef::Url(s) | ImageRef::Base64(s) => s,
        }
    }

    /// Shortened reference suitable for a batch-result thumbnail field.
    ///
    /// URLs are kept whole; base64 payloads are truncated so the result
    /// record stays small.
    pub fn thumbnail(&self) -> ImageRef {
        match self {
            ImageRef::Url(s) => ImageRef::Url(s.clone()),
            ImageRef::Base64(s) => {
                let mut short: String = s.chars().take(100).collect();
                if s.len() > 100 {
                    short.push_str("...");
                }
                ImageRef::Base64(short)
            }
        }
    }
}
