//! Command lookup table
//!
//! Exact-match table from verb to [`Category`], built once per process
//! and immutable afterwards.
//!
//! ## Matching
//!
//! Membership is whole-token equality over the upper-cased verb. A
//! verb that is a substring or superstring of a vocabulary entry
//! (`"ET"`, `"GETX"`) does not match; the map is keyed on complete
//! tokens only.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;

use super::category::Category;
use super::vocab::{
    BLOCKED_COMMANDS, CONTROL_COMMANDS, MAX_VERB_LEN, READ_COMMANDS, WRITE_COMMANDS,
};

/// Process-wide table, built on first use and shared by all threads.
static TABLE: LazyLock<CommandTable> = LazyLock::new(CommandTable::new);

// =============================================================================
// Classification entry point
// =============================================================================

/// Classify a request verb into its routing category.
///
/// The verb is matched case-insensitively against the builtin
/// vocabulary. Any verb that is empty, longer than the longest known
/// command, or simply absent from the vocabulary is
/// [`Category::Unsupported`].
///
/// Total and infallible: every input yields exactly one category, with
/// no allocation and no locking on the query path.
pub fn classify(verb: &[u8]) -> Category {
    TABLE.lookup(verb)
}

// =============================================================================
// CommandTable
// =============================================================================

/// Exact-match verb table
///
/// Most callers want the free function [`classify`], which queries the
/// shared process-wide instance. Constructing a table directly is
/// useful for tests and for embedders that want a non-global handle.
pub struct CommandTable {
    map: HashMap<&'static [u8], Category>,
}

impl CommandTable {
    /// Build the table from the builtin vocabularies.
    ///
    /// The vocabularies must be pairwise disjoint; the debug assertion
    /// makes any overlap loud during construction.
    pub fn new() -> Self {
        let mut map = HashMap::new();

        let vocabularies: &[(&[&str], Category)] = &[
            (BLOCKED_COMMANDS, Category::Unsupported),
            (READ_COMMANDS, Category::Read),
            (WRITE_COMMANDS, Category::Write),
            (CONTROL_COMMANDS, Category::Control),
        ];

        for (verbs, category) in vocabularies {
            for verb in *verbs {
                debug_assert!(
                    verb.len() <= MAX_VERB_LEN,
                    "verb {verb} exceeds MAX_VERB_LEN"
                );
                let previous = map.insert(verb.as_bytes(), *category);
                debug_assert!(
                    previous.is_none(),
                    "verb {verb} appears in more than one vocabulary"
                );
            }
        }

        debug!(verbs = map.len(), "command table built");

        Self { map }
    }

    /// Look up the category for a verb (case-insensitive, exact match)
    pub fn lookup(&self, verb: &[u8]) -> Category {
        if verb.is_empty() || verb.len() > MAX_VERB_LEN {
            return Category::Unsupported;
        }

        // Upper-case into a fixed stack buffer; no heap allocation.
        let mut upper = [0u8; MAX_VERB_LEN];
        for (dst, src) in upper.iter_mut().zip(verb) {
            *dst = src.to_ascii_uppercase();
        }

        self.map
            .get(&upper[..verb.len()])
            .copied()
            .unwrap_or(Category::Unsupported)
    }

    /// Number of verbs in the table
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table is empty (never true for the builtin table)
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}
