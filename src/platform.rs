//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier that turns Enter into "send" anywhere in the form
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SEND_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SEND_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Send shortcut display for form help text.
/// Ctrl+S works on all platforms.
pub const SEND_SHORTCUT: &str = "Ctrl+S";

/// Modified-Enter send shortcut display
#[cfg(target_os = "macos")]
pub const SEND_ENTER_SHORTCUT: &str = "Cmd+Enter";

#[cfg(not(target_os = "macos"))]
pub const SEND_ENTER_SHORTCUT: &str = "Ctrl+Enter";
