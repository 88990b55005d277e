//! Table entry record.

/// A single name-to-payload-pair record owned by the table.
///
/// The payload types are the host's choice -- handler identifiers, function
/// pointers, context handles. The table stores and returns them but never
/// reads or clones them; a payload lives exactly as long as its entry, and an
/// entry lives until the table is freed or its name is re-registered.
#[derive(Debug)]
pub struct CmdEntry<A, X> {
    pub(crate) name: String,
    pub(crate) action: A,
    pub(crate) extcmd: X,
}

impl<A, X> CmdEntry<A, X> {
    /// The command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The host-defined action payload.
    pub fn action(&self) -> &A {
        &self.action
    }

    /// The host-defined extended-command payload.
    pub fn extcmd(&self) -> &X {
        &self.extcmd
    }
}
