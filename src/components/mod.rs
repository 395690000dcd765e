//! Reusable UI components.

pub mod help_overlay;
pub mod keybindings;
pub mod nav_bar;

pub use help_overlay::HelpOverlay;
pub use keybindings::{KeyAction, Keybinding, KeybindingContext, NavBarItem};
