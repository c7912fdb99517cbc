//! Wire types for the HTTP search backend

use serde::{Deserialize, Serialize};

/// Body of `POST /search`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
}
