//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier that turns `c` into a copy chord
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: none, Ctrl+C is the global quit
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: Option<KeyModifiers> = Some(KeyModifiers::SUPER);

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: Option<KeyModifiers> = None;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "^S:submit";

/// Copy shortcut display
#[cfg(target_os = "macos")]
pub const COPY_SHORTCUT: &str = "c/Cmd+C:copy";

#[cfg(not(target_os = "macos"))]
pub const COPY_SHORTCUT: &str = "c:copy";
