//! Windows platform details.

use std::path::PathBuf;

/// Local administrators group, as shown to the user.
pub const PRIVILEGED_ACCOUNT: &str = "管理员";

/// `%SystemRoot%\System32\drivers\etc\hosts`.
pub fn hosts_path() -> PathBuf {
    let root = std::env::var("SystemRoot").ok();
    super::hosts_path_from_system_root(root.as_deref())
}
