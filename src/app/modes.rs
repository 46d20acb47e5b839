//! Input mode state machine.
//!
//! The mode decides which keybindings are active and which footer hints are
//! shown:
//! - **Normal**: navigation and commands over the user table
//! - **Search**: keystrokes edit the search term
//! - **Overlay**: the posts overlay is open and owns the keyboard

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), / (search), s/o (sort),
    /// enter (view posts), r (reload), t (theme), esc (dismiss error), q (quit).
    #[default]
    Normal,

    /// Typing into the search field. Every keystroke updates the table.
    Search,

    /// Posts overlay open for the selected user.
    Overlay,
}
