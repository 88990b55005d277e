//! Sorted command dispatch table.
//!
//! `CmdTable` is a registry mapping command names to a caller-defined pair of
//! payloads: an action and an extended-command value. The host registers
//! names up front, then resolves user input by exact name (`search`) or by
//! unique leading substring (`subsearch`). The table keeps its entries in
//! strictly ascending name order at all times, so every lookup is a binary
//! search; it never interprets the payloads -- invoking them is the host's
//! job.
//!
//! The table has no internal synchronization. A host sharing one across
//! threads must serialize access externally.

mod entry;
mod table;

/// A single name-to-payload-pair record owned by the table.
pub use entry::CmdEntry;
/// Sorted table of command entries with exact and unique-prefix lookup.
pub use table::CmdTable;
