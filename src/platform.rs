//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Submit shortcut modifier (Ctrl on all platforms)
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
