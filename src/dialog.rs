//! Browser Dialogs
//!
//! Blocking alert/confirm wrappers; every user-facing error funnels through
//! [`alert`].

/// Show a blocking browser alert
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Ask for confirmation; treats a missing window as "no"
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
