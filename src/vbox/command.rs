use std::env;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, trace};

use super::VBoxManager;
use crate::error::{Error, Result};

#[cfg(target_os = "windows")]
const VBOXMANAGE_BIN: &str = "VBoxManage.exe";
#[cfg(not(target_os = "windows"))]
const VBOXMANAGE_BIN: &str = "VBoxManage";

/// Environment variables set by the VirtualBox installers, in lookup order
const INSTALL_PATH_VARS: [&str; 2] = ["VBOX_INSTALL_PATH", "VBOX_MSI_INSTALL_PATH"];

/// Location of the `VBoxManage` binary
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VBoxManageConfig {
    pub path: PathBuf,
}

impl VBoxManageConfig {
    /// Use the binary at `path`
    pub fn with_path(path: impl Into<PathBuf>) -> VBoxManageConfig {
        VBoxManageConfig { path: path.into() }
    }

    /// Look the binary up from the installer environment variables, falling
    /// back to `VBoxManage` on `PATH`.
    pub fn from_env() -> VBoxManageConfig {
        Self::from_vars(|key| env::var_os(key))
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<OsString>) -> VBoxManageConfig {
        for key in INSTALL_PATH_VARS {
            let Some(value) = lookup(key) else {
                continue;
            };
            // the installer may set a list of directories
            for dir in env::split_paths(&value) {
                if dir.as_os_str().is_empty() {
                    continue;
                }
                trace!(var = key, dir = %dir.display(), "using VirtualBox install path");
                return VBoxManageConfig::with_path(dir.join(VBOXMANAGE_BIN));
            }
        }
        VBoxManageConfig::with_path(VBOXMANAGE_BIN)
    }
}

impl Default for VBoxManageConfig {
    fn default() -> Self {
        VBoxManageConfig::from_env()
    }
}

/// [`VBoxManager`] running the real `VBoxManage` binary
#[derive(Clone, Debug, Default)]
pub struct VBoxManageCommand {
    config: VBoxManageConfig,
}

impl VBoxManageCommand {
    pub fn new(config: VBoxManageConfig) -> VBoxManageCommand {
        VBoxManageCommand { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }
}

impl VBoxManager for VBoxManageCommand {
    fn vbm_out(&self, args: &[&str]) -> Result<String> {
        debug!(cmd = %self.config.path.display(), ?args, "running VBoxManage");
        let output = match Command::new(&self.config.path).args(args).output() {
            Ok(output) => output,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::ToolNotFound(self.config.path.display().to_string()));
            }
            Err(e) => return Err(Error::Io(e)),
        };

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
        if !output.status.success() {
            return Err(Error::Command {
                args: args.iter().map(|s| s.to_string()).collect(),
                status: output.status,
                stderr,
            });
        }
        if !stderr.is_empty() {
            trace!(%stderr, "VBoxManage wrote to stderr");
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
