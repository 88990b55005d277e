//! Table tuning configuration.
//!
//! Two knobs, both fixed per table instance at construction time: the cap on
//! stored name length and the allocation growth chunk. Hosts that keep their
//! settings in a TOML file can deserialize a `[table]` section straight into
//! `TableConfig`.

use serde::{Deserialize, Serialize};

use crate::error::{CmdtabError, Result};

/// Default cap on stored command-name length, in bytes.
pub const NAME_MAX: usize = 32;

/// Default growth chunk: slots allocated up front and added on each grow.
///
/// Growth is linear by a fixed chunk, not doubling. Dispatch tables sit at a
/// few dozen entries, so one chunk usually covers the whole lifetime.
pub const ALLOC_CHUNK: usize = 32;

/// Tuning parameters for a dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Longest accepted command name, in bytes.
    pub name_max: usize,
    /// Slots added whenever the table runs out of room.
    pub alloc_chunk: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            name_max: NAME_MAX,
            alloc_chunk: ALLOC_CHUNK,
        }
    }
}

impl TableConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Check that the knobs are usable.
    ///
    /// A zero chunk can never make room and a zero name cap can never store a
    /// name, so both are rejected up front.
    pub fn validate(&self) -> Result<()> {
        if self.alloc_chunk == 0 {
            return Err(CmdtabError::InvalidArgument(
                "alloc_chunk must be nonzero".to_string(),
            ));
        }
        if self.name_max == 0 {
            return Err(CmdtabError::InvalidArgument(
                "name_max must be nonzero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let cfg = TableConfig::default();
        assert_eq!(cfg.name_max, NAME_MAX);
        assert_eq!(cfg.alloc_chunk, ALLOC_CHUNK);
        cfg.validate().unwrap();
    }

    #[test]
    fn from_toml_full() {
        let cfg = TableConfig::from_toml("name_max = 64\nalloc_chunk = 8\n").unwrap();
        assert_eq!(cfg.name_max, 64);
        assert_eq!(cfg.alloc_chunk, 8);
    }

    #[test]
    fn from_toml_partial_uses_defaults() {
        let cfg = TableConfig::from_toml("alloc_chunk = 4\n").unwrap();
        assert_eq!(cfg.name_max, NAME_MAX);
        assert_eq!(cfg.alloc_chunk, 4);
    }

    #[test]
    fn from_toml_empty_is_default() {
        let cfg = TableConfig::from_toml("").unwrap();
        assert_eq!(cfg, TableConfig::default());
    }

    #[test]
    fn from_toml_invalid_fails() {
        assert!(TableConfig::from_toml("alloc_chunk = [[[").is_err());
    }

    #[test]
    fn validate_rejects_zero_chunk() {
        let cfg = TableConfig {
            alloc_chunk: 0,
            ..TableConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_name_max() {
        let cfg = TableConfig {
            name_max: 0,
            ..TableConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
