//! Elevation hint for permission failures.

use std::fmt::Display;

use crate::platform;

/// Does this error text look like a privilege failure?
pub fn is_permission_error(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("permission") || lower.contains("access is denied")
}

/// Instruction naming the account needed to edit the hosts file.
pub fn permission_hint() -> String {
    format!(
        "提示：请以 {} 权限运行本程序，以使用 hosts 文件自动编辑功能。",
        platform::privileged_account()
    )
}

/// Log the elevation hint if `err` is a permission failure. Returns whether it fired.
pub fn permission_alert(err: &dyn Display) -> bool {
    if is_permission_error(&err.to_string()) {
        tracing::warn!("{}", permission_hint());
        true
    } else {
        false
    }
}
