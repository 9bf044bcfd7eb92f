//! Typed errors for hosts file operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostsError {
    #[error("不能打开 hosts 文件 {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("不能写入 hosts 文件 {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Replacing the hosts file with the rewritten copy failed.
    #[error("不能替换 hosts 文件 {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl HostsError {
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } | Self::Persist { source, .. } => {
                source
            }
        }
    }

    /// True when the underlying failure is a privilege problem.
    pub fn is_permission_denied(&self) -> bool {
        let io_err = self.io_error();
        io_err.kind() == io::ErrorKind::PermissionDenied
            || crate::alert::is_permission_error(&io_err.to_string())
    }
}

pub type HostsResult<T> = Result<T, HostsError>;
