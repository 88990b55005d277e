//! Error types for cmdtab.

use std::collections::TryReserveError;

/// Errors produced by the cmdtab table.
#[derive(Debug, thiserror::Error)]
pub enum CmdtabError {
    /// An argument the operation requires was missing or unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A command name exceeded the configured length cap.
    ///
    /// The classic implementation silently truncated over-length names to the
    /// cap, which lets two distinct long names collide after truncation and
    /// the second one overwrite the first. Rejecting the name keeps the
    /// one-entry-per-name contract honest.
    #[error("name too long: {0}")]
    NameTooLong(String),

    /// Storage for the slot sequence or a name copy could not be obtained.
    #[error("allocation failed: {0}")]
    Alloc(#[from] TryReserveError),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CmdtabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display() {
        let e = CmdtabError::InvalidArgument("empty command name".into());
        assert_eq!(format!("{e}"), "invalid argument: empty command name");
    }

    #[test]
    fn name_too_long_display() {
        let e = CmdtabError::NameTooLong("40 bytes, cap is 32".into());
        assert_eq!(format!("{e}"), "name too long: 40 bytes, cap is 32");
    }

    #[test]
    fn alloc_error_from_conversion() {
        let reserve_err = Vec::<u8>::new().try_reserve_exact(usize::MAX).unwrap_err();
        let e: CmdtabError = reserve_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("allocation failed"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let bad_toml = "this is [[[not valid toml";
        let toml_err = toml::from_str::<toml::Value>(bad_toml).unwrap_err();
        let e: CmdtabError = toml_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("TOML parse error"));
    }

    #[test]
    fn error_is_debug() {
        let e = CmdtabError::InvalidArgument("test".into());
        let dbg = format!("{e:?}");
        assert!(dbg.contains("InvalidArgument"));
    }

    #[test]
    fn result_alias_ok() {
        let r: Result<i32> = Ok(42);
        assert_eq!(r.unwrap(), 42);
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(CmdtabError::InvalidArgument("oops".into()));
        assert!(r.is_err());
    }
}
