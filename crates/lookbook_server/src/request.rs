//! Wire request types.
//!
//! Generation bodies deserialize directly into the core request types; the
//! only server-specific input is the history query.

use serde::Deserialize;

/// Query parameters for history listing.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct HistoryQuery {
    /// Maximum items to return, newest first.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    50
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}
