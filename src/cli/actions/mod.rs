//! Actions that modify catalogs on disk.
//!
//! ```text
//! UnusedReport (entries no source file uses)
//!     ↓
//! prune_unused (delete keys → delete namespaces → drop empty containers)
//!     ↓
//! Catalog::save (only when not a dry run)
//! ```

mod prune;

pub use prune::{PruneOutcome, PruneStats, prune_unused};
