//! Platform-specific configuration

/// Submit shortcut display for help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Reset shortcut display for help text
pub const RESET_SHORTCUT: &str = "Ctrl+N";

/// Quit shortcut display
/// - macOS: "Esc" (Ctrl+C is often bound by the terminal)
/// - Linux/Windows: "Esc/Ctrl+C"
#[cfg(target_os = "macos")]
pub const QUIT_SHORTCUT: &str = "Esc";

#[cfg(not(target_os = "macos"))]
pub const QUIT_SHORTCUT: &str = "Esc/Ctrl+C";
