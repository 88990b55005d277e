//! The ordered table: storage, binary-search insert, exact and prefix lookup.

use std::cmp::Ordering;

use cmdtab_types::config::TableConfig;
use cmdtab_types::error::{CmdtabError, Result};

use crate::entry::CmdEntry;

/// Sorted table of command entries.
///
/// Entries are kept in strictly ascending byte-lexicographic name order with
/// no duplicates, so exact and prefix lookups are binary searches. Capacity
/// is allocated one fixed chunk at a time (linear growth, not doubling), and
/// every allocation point reports failure through `Result` instead of
/// aborting -- a failed operation leaves the table in its previous state.
#[derive(Debug)]
pub struct CmdTable<A, X> {
    entries: Vec<CmdEntry<A, X>>,
    config: TableConfig,
}

impl<A, X> CmdTable<A, X> {
    /// Create a table with the default tuning (32-byte name cap, 32-slot
    /// growth chunk).
    pub fn new() -> Result<Self> {
        Self::with_config(TableConfig::default())
    }

    /// Create a table with explicit tuning. The initial chunk is allocated
    /// here; construction is the only way to obtain a table, so a `CmdTable`
    /// is always in a usable state.
    pub fn with_config(config: TableConfig) -> Result<Self> {
        config.validate()?;
        let mut entries = Vec::new();
        entries.try_reserve_exact(config.alloc_chunk)?;
        Ok(Self { entries, config })
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Allocated slot count. Always at least `len()`.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// The tuning this table was built with.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Insert or replace the entry for `name`.
    ///
    /// A duplicate name replaces the existing entry in place (both payloads
    /// overwritten, size unchanged); a new name is spliced into its sorted
    /// position. Empty names are not insertable and names longer than the
    /// configured cap are rejected rather than truncated. Any failure leaves
    /// the table exactly as it was.
    pub fn add(&mut self, name: &str, action: A, extcmd: X) -> Result<()> {
        if name.is_empty() {
            return Err(CmdtabError::InvalidArgument(
                "empty command name".to_string(),
            ));
        }
        if name.len() > self.config.name_max {
            return Err(CmdtabError::NameTooLong(format!(
                "{name:?} is {} bytes, cap is {}",
                name.len(),
                self.config.name_max
            )));
        }

        // Make sure there is room before anything moves.
        if self.entries.len() == self.entries.capacity() {
            self.entries.try_reserve_exact(self.config.alloc_chunk)?;
            log::debug!("cmdtab: grew capacity to {}", self.entries.capacity());
        }

        // Copy the name up front so no allocation can fail after the slot
        // sequence has been reordered.
        let mut stored = String::new();
        stored.try_reserve_exact(name.len())?;
        stored.push_str(name);

        match self.locate(name) {
            (idx, Ordering::Equal) => {
                // Duplicate name: replace in place, no shift.
                let slot = &mut self.entries[idx];
                slot.name = stored;
                slot.action = action;
                slot.extcmd = extcmd;
                log::trace!("cmdtab: replaced {name:?} at index {idx}");
            },
            (idx, last) => {
                // The insertion point is the final midpoint, one to the
                // right when the last probe ordered the new name after it.
                let at = idx + usize::from(last == Ordering::Less);
                self.entries.insert(
                    at,
                    CmdEntry {
                        name: stored,
                        action,
                        extcmd,
                    },
                );
                log::trace!("cmdtab: inserted {name:?} at index {at}");
            },
        }
        Ok(())
    }

    /// Look up an entry by exact name. O(log n), case-sensitive byte
    /// comparison. Empty names match nothing.
    pub fn search(&self, name: &str) -> Option<&CmdEntry<A, X>> {
        if name.is_empty() {
            return None;
        }
        match self.locate(name) {
            (idx, Ordering::Equal) => Some(&self.entries[idx]),
            _ => None,
        }
    }

    /// Look up the single entry whose name begins with `prefix`.
    ///
    /// Returns `None` when no entry matches, when more than one does, or
    /// when the prefix is empty. After the limited binary search lands on a
    /// matching index, only the two immediate neighbors need checking:
    /// entries sharing a prefix are contiguous in a sorted table, so any
    /// additional match anywhere implies a matching neighbor.
    pub fn subsearch(&self, prefix: &str) -> Option<&CmdEntry<A, X>> {
        if prefix.is_empty() {
            return None;
        }
        let mut low = 0isize;
        let mut high = self.entries.len() as isize - 1;
        while low <= high {
            let mid = ((low + high) >> 1) as usize;
            match prefix_cmp(&self.entries[mid].name, prefix) {
                Ordering::Greater => high = mid as isize - 1,
                Ordering::Less => low = mid as isize + 1,
                Ordering::Equal => {
                    let left_dup = mid > 0
                        && prefix_cmp(&self.entries[mid - 1].name, prefix) == Ordering::Equal;
                    let right_dup = mid + 1 < self.entries.len()
                        && prefix_cmp(&self.entries[mid + 1].name, prefix) == Ordering::Equal;
                    if left_dup || right_dup {
                        return None;
                    }
                    return Some(&self.entries[mid]);
                },
            }
        }
        None
    }

    /// Append every name, each followed by `\n`, to `dst` in ascending
    /// order, writing whole names only.
    ///
    /// Once an entry would push the running total past `max`, that entry and
    /// everything after it is skipped. The return value is the length the
    /// complete listing requires, so a caller detects truncation by
    /// comparing it against `max`.
    pub fn list(&self, dst: &mut String, max: usize) -> usize {
        let mut required = 0;
        let mut written = 0;
        let mut full = false;
        for entry in &self.entries {
            let need = entry.name.len() + 1;
            required += need;
            if !full && written + need <= max {
                dst.push_str(&entry.name);
                dst.push('\n');
                written += need;
            } else {
                full = true;
            }
        }
        required
    }

    /// Drop every entry and release the slot storage.
    ///
    /// Size and capacity both return to zero. Idempotent; the table stays
    /// usable, and the next `add` grows from empty again.
    pub fn free(&mut self) {
        if !self.entries.is_empty() {
            log::trace!("cmdtab: releasing {} entries", self.entries.len());
        }
        self.entries = Vec::new();
    }

    /// Iterate entries in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = &CmdEntry<A, X>> {
        self.entries.iter()
    }

    /// Binary search for `name` over the sorted sequence.
    ///
    /// Returns the final midpoint together with the final comparison result:
    /// `Equal` means the midpoint is an exact hit; otherwise the pair pins
    /// down the insertion index (midpoint, plus one when the last probe
    /// ordered `name` after it). An empty table never enters the loop, and
    /// the initial `Greater` makes the insertion index come out as 0.
    fn locate(&self, name: &str) -> (usize, Ordering) {
        let mut low = 0isize;
        let mut high = self.entries.len() as isize - 1;
        let mut mid = 0usize;
        let mut last = Ordering::Greater;
        while low <= high {
            mid = ((low + high) >> 1) as usize;
            last = self.entries[mid].name.as_str().cmp(name);
            match last {
                Ordering::Greater => high = mid as isize - 1,
                Ordering::Less => low = mid as isize + 1,
                Ordering::Equal => break,
            }
        }
        (mid, last)
    }
}

/// Compare a stored name against a prefix, looking at no more than
/// `prefix.len()` bytes. Bytes beyond the limit count as equal; a name
/// shorter than the prefix orders before it.
fn prefix_cmp(name: &str, prefix: &str) -> Ordering {
    let limit = prefix.len().min(name.len());
    match name.as_bytes()[..limit].cmp(&prefix.as_bytes()[..limit]) {
        Ordering::Equal if name.len() < prefix.len() => Ordering::Less,
        other => other,
    }
}
