//! Keyboard shortcut configuration

use crossterm::event::KeyModifiers;

/// Modifier for wizard navigation shortcuts.
/// Cmd is swallowed by most macOS terminals, so Ctrl is used everywhere.
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Next section shortcut display
pub const NEXT_SHORTCUT: &str = "Ctrl+N";

/// Previous section shortcut display
pub const PREV_SHORTCUT: &str = "Ctrl+P";

/// Submit shortcut display (last section only)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
