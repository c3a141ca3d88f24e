mod command;
#[cfg(test)]
pub(crate) mod mock;

pub use self::command::{VBoxManageCommand, VBoxManageConfig};

use crate::error::Result;

/// Runs `VBoxManage` sub-commands.
///
/// Implemented by [`VBoxManageCommand`] for the real binary. Resolution only
/// needs the standard output of a command; how it is run is up to the
/// implementor.
pub trait VBoxManager: Send + Sync {
    /// Run `VBoxManage` with `args` and return its standard output.
    fn vbm_out(&self, args: &[&str]) -> Result<String>;
}
