//! Classification Module
//!
//! Maps a request verb to its routing category.
//!
//! ## Routing Contract
//!
//! ```text
//! ┌────────────┬──────────────────────────────────────────────┐
//! │ Category   │ Destination                                  │
//! ├────────────┼──────────────────────────────────────────────┤
//! │ Control    │ handled locally by the proxy (keep-alive)    │
//! │ Read       │ any healthy read-only replica                │
//! │ Write      │ the write-capable primary                    │
//! │ Unsupported│ rejected with an error reply, no backend I/O │
//! └────────────┴──────────────────────────────────────────────┘
//! ```
//!
//! ## Matching Rules
//!
//! - Verbs are case-insensitive; lookup upper-cases the input.
//! - Membership is exact whole-token equality. A verb is never matched
//!   as a substring or prefix of another vocabulary entry.
//! - Any verb not present in a vocabulary is `Unsupported`. Unknown
//!   commands are refused, never guessed onto a backend.
//!
//! The vocabulary is fixed at compile time; the lookup table is built
//! once per process and is immutable afterwards, so [`classify`] is
//! safe to call from any number of request-handling threads without
//! synchronization.

mod category;
mod table;
mod vocab;

pub use category::Category;
pub use table::{classify, CommandTable};

pub use vocab::{BLOCKED_COMMANDS, CONTROL_COMMANDS, READ_COMMANDS, WRITE_COMMANDS};
