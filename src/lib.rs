//! # RelayKV
//!
//! The command-classification core of a Redis-compatible key-value
//! proxy:
//! - Closed four-way classification (control / read / write / unsupported)
//! - Exact whole-token matching over a fixed verb vocabulary
//! - Case-insensitive, allocation-free query path
//! - Immutable process-wide lookup table, lock-free after construction
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Connection Layer                         │
//! │                (frame parsing, reply relay)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ verb
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Command Classifier                          │
//! │           classify(verb) -> Category (this crate)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!      ┌──────────┬─────┴──────┬─────────────┐
//!      ▼          ▼            ▼             ▼
//! ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────────────┐
//! │  Local  │ │ Replica │ │ Primary  │ │   Reject    │
//! │  (ctl)  │ │ (read)  │ │ (write)  │ │(unsupported)│
//! └─────────┘ └─────────┘ └──────────┘ └─────────────┘
//! ```
//!
//! The connection and routing layers are external collaborators: they
//! parse the verb token out of the request frame, call [`classify`]
//! once per request, and pick a destination from the returned
//! [`Category`]. A write misrouted to a replica silently diverges the
//! keyspace, so classification is fail-closed: any verb not in the
//! vocabulary is [`Category::Unsupported`] and must be rejected before
//! any backend I/O.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod classify;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use classify::{classify, Category, CommandTable};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of RelayKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
