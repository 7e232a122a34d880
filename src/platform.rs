//! Platform-specific key hints

use crossterm::event::KeyModifiers;

/// Modifier for the form shortcuts
/// - macOS terminals often swallow Cmd, so Ctrl is used everywhere
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Next step shortcut display
/// - macOS: "^N"
/// - Linux/Windows: "Ctrl+N"
#[cfg(target_os = "macos")]
pub const NEXT_SHORTCUT: &str = "^N";

#[cfg(not(target_os = "macos"))]
pub const NEXT_SHORTCUT: &str = "Ctrl+N";

/// Previous step shortcut display
#[cfg(target_os = "macos")]
pub const BACK_SHORTCUT: &str = "^B";

#[cfg(not(target_os = "macos"))]
pub const BACK_SHORTCUT: &str = "Ctrl+B";
