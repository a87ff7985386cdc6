//! Term catalog: the fixed list of (term, definition) pairs rounds draw from.
//!
//! ## Key Types
//!
//! - `TermEntry`: One immutable term and its definition
//! - `TermCatalog`: Validated, ordered, read-only list of entries
//!
//! Order matters: positional distractor selection walks the catalog from
//! the front.

mod builtin;
pub mod entry;
pub mod terms;

pub use entry::TermEntry;
pub use terms::TermCatalog;
