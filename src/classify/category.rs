//! Category definitions
//!
//! The four-way routing classification for request verbs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Routing category of a request verb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Handled locally by the proxy (keep-alive commands like PING)
    Control,

    /// Safe to serve from any read-only replica
    Read,

    /// Must be routed to the write-capable primary
    Write,

    /// Refused by the proxy before any backend I/O
    Unsupported,
}

impl Category {
    /// Lower-case name as used in routing logs and JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Control => "control",
            Category::Read => "read",
            Category::Write => "write",
            Category::Unsupported => "unsupported",
        }
    }

    /// Whether the proxy may forward a verb of this category to a backend
    pub fn is_forwardable(&self) -> bool {
        matches!(self, Category::Read | Category::Write)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
