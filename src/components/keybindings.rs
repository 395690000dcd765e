//! Keybinding system for context-aware keyboard shortcuts
//!
//! A registry of keybindings per application mode. The same table resolves
//! key events to actions, feeds the hint bar and builds the help overlay.

use crate::app::AppMode;
use crate::routes::NavTab;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    PrevTab,
    NextTab,
    Select,
    Toggle,
    Back,
    Quit,
    ForceQuit,
    Help,
    ToggleGender,
    Jump(NavTab),
    OpenOffers,
    AddToCart,
    RemoveFromCart,
    Continue,
    CycleServiceTab,
    CycleFilter,
    Confirm,
    ClearSearch,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether a key event triggers this binding.
    ///
    /// Plain bindings ignore Shift (so `+` and `?` match on any layout) but
    /// never match Ctrl/Alt chords.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if event.code != self.key {
            return false;
        }
        let chord = KeyModifiers::CONTROL | KeyModifiers::ALT;
        if self.modifiers.is_empty() {
            !event.modifiers.intersects(chord)
        } else {
            event.modifiers.contains(self.modifiers)
        }
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Bindings available in every mode
    global_bindings: Vec<Keybinding>,
    /// Bottom navigation jumps, available where the nav bar is shown
    jump_bindings: Vec<Keybinding>,
    /// Bindings of modes without text input
    single_key_globals: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
            jump_bindings: Vec::new(),
            single_key_globals: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![Keybinding::with_modifiers(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyAction::ForceQuit,
            "Ctrl+C",
            "Quit",
        )];

        // Single-character globals are withheld from the explore screen,
        // where typing goes to the search box.
        self.single_key_globals = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('g'), KeyAction::ToggleGender, "G", "Men / Women"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
        ];

        self.jump_bindings = vec![
            Keybinding::new(KeyCode::Char('1'), KeyAction::Jump(NavTab::Home), "1", "Home"),
            Keybinding::new(KeyCode::Char('2'), KeyAction::Jump(NavTab::AtHome), "2", "At Home"),
            Keybinding::new(KeyCode::Char('3'), KeyAction::Jump(NavTab::Explore), "3", "Explore"),
            Keybinding::new(KeyCode::Char('4'), KeyAction::Jump(NavTab::Bookings), "4", "Bookings"),
            Keybinding::new(KeyCode::Char('5'), KeyAction::Jump(NavTab::Profile), "5", "Profile"),
        ];

        let list_nav = || {
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
            ]
        };
        let back = || Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back");
        let esc_back = || Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back");

        // Home
        let mut home = list_nav();
        home.extend([
            Keybinding::new(KeyCode::Left, KeyAction::PrevTab, "Left", "Previous category"),
            Keybinding::new(KeyCode::Right, KeyAction::NextTab, "Right", "Next category"),
            Keybinding::new(KeyCode::Char(' '), KeyAction::Toggle, "Space", "Filter by category"),
            Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Open salon"),
            Keybinding::new(KeyCode::Char('o'), KeyAction::OpenOffers, "O", "Offers"),
        ]);
        self.mode_bindings.insert(AppMode::Home, home);

        // At Home
        let mut at_home = list_nav();
        at_home.push(Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "View artist"));
        self.mode_bindings.insert(AppMode::AtHome, at_home);

        // Explore (text input)
        let mut explore = list_nav();
        explore.extend([
            Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Open salon"),
            Keybinding::new(KeyCode::Esc, KeyAction::ClearSearch, "Esc", "Clear / back"),
        ]);
        self.mode_bindings.insert(AppMode::Explore, explore);

        // Static lists
        self.mode_bindings.insert(AppMode::Bookings, list_nav());
        let mut offers = list_nav();
        offers.push(back());
        self.mode_bindings.insert(AppMode::Offers, offers);
        self.mode_bindings.insert(AppMode::Profile, Vec::new());

        // Salon detail
        let mut salon = list_nav();
        salon.extend([
            Keybinding::new(KeyCode::Left, KeyAction::PrevTab, "Left", "Previous tab"),
            Keybinding::new(KeyCode::Right, KeyAction::NextTab, "Right", "Next tab"),
            Keybinding::new(KeyCode::Char('t'), KeyAction::CycleServiceTab, "T", "Men / Women / Packages"),
            Keybinding::new(KeyCode::Char('+'), KeyAction::AddToCart, "+", "Add service"),
            Keybinding::new(KeyCode::Char('='), KeyAction::AddToCart, "=", "Add service"),
            Keybinding::new(KeyCode::Char('-'), KeyAction::RemoveFromCart, "-", "Remove service"),
            Keybinding::new(KeyCode::Char('s'), KeyAction::CycleFilter, "S", "Filter by stylist"),
            Keybinding::new(KeyCode::Char('c'), KeyAction::Continue, "C", "Book now"),
            back(),
            esc_back(),
        ]);
        self.mode_bindings.insert(AppMode::SalonDetail, salon);

        // Salon booking recap
        self.mode_bindings.insert(
            AppMode::SalonBooking,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::Confirm, "Enter", "Confirm booking"),
                back(),
                esc_back(),
            ],
        );

        // Artist profile
        let mut artist = list_nav();
        artist.extend([
            Keybinding::new(KeyCode::Left, KeyAction::PrevTab, "Left", "Previous tab"),
            Keybinding::new(KeyCode::Right, KeyAction::NextTab, "Right", "Next tab"),
            Keybinding::new(KeyCode::Char('f'), KeyAction::CycleFilter, "F", "Filter by category"),
            Keybinding::new(KeyCode::Char('+'), KeyAction::AddToCart, "+", "Add service"),
            Keybinding::new(KeyCode::Char('='), KeyAction::AddToCart, "=", "Add service"),
            Keybinding::new(KeyCode::Char('-'), KeyAction::RemoveFromCart, "-", "Remove service"),
            Keybinding::new(KeyCode::Char('c'), KeyAction::Continue, "C", "Continue to booking"),
            back(),
            esc_back(),
        ]);
        self.mode_bindings.insert(AppMode::ArtistProfile, artist);

        // At-home booking wizard
        let mut wizard = list_nav();
        wizard.extend([
            Keybinding::new(KeyCode::Left, KeyAction::PrevTab, "Left", "Previous date"),
            Keybinding::new(KeyCode::Right, KeyAction::NextTab, "Right", "Next date"),
            Keybinding::new(KeyCode::Char(' '), KeyAction::Toggle, "Space", "Select / check"),
            Keybinding::new(KeyCode::Enter, KeyAction::Continue, "Enter", "Continue / confirm"),
            back(),
            esc_back(),
        ]);
        self.mode_bindings.insert(AppMode::AtHomeBooking, wizard);

        // Not found
        self.mode_bindings.insert(
            AppMode::NotFound,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::Jump(NavTab::Home), "Enter", "Go home"),
                back(),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }

        if !mode.captures_text() {
            bindings.extend(self.single_key_globals.iter());
            if mode.shows_bottom_nav() {
                bindings.extend(self.jump_bindings.iter());
            }
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key event to an action in the given mode
    pub fn resolve(&self, mode: &AppMode, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);

        let priority_actions: &[KeyAction] = match mode {
            AppMode::Home => &[
                KeyAction::NavigateUp,
                KeyAction::Select,
                KeyAction::Toggle,
                KeyAction::ToggleGender,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::AtHome | AppMode::Bookings => &[
                KeyAction::NavigateUp,
                KeyAction::Select,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::Explore => &[
                KeyAction::NavigateUp,
                KeyAction::Select,
                KeyAction::ClearSearch,
                KeyAction::ForceQuit,
            ],
            AppMode::Offers => &[KeyAction::NavigateUp, KeyAction::Back, KeyAction::Quit],
            AppMode::Profile => &[KeyAction::ToggleGender, KeyAction::Help, KeyAction::Quit],
            AppMode::SalonDetail => &[
                KeyAction::NextTab,
                KeyAction::NavigateUp,
                KeyAction::AddToCart,
                KeyAction::RemoveFromCart,
                KeyAction::Continue,
                KeyAction::Back,
            ],
            AppMode::SalonBooking => &[KeyAction::Confirm, KeyAction::Back, KeyAction::Quit],
            AppMode::ArtistProfile => &[
                KeyAction::NextTab,
                KeyAction::NavigateUp,
                KeyAction::AddToCart,
                KeyAction::RemoveFromCart,
                KeyAction::CycleFilter,
                KeyAction::Continue,
                KeyAction::Back,
            ],
            AppMode::AtHomeBooking => &[
                KeyAction::NextTab,
                KeyAction::NavigateUp,
                KeyAction::Toggle,
                KeyAction::Continue,
                KeyAction::Back,
            ],
            AppMode::NotFound => &[KeyAction::Jump(NavTab::Home), KeyAction::Quit],
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        for action in priority_actions {
            let Some(binding) = bindings.iter().find(|b| b.action == *action) else {
                continue;
            };
            // Combine paired keys into a single item
            let item = match action {
                KeyAction::NavigateUp => NavBarItem::new("Up/Dn", "Navigate"),
                KeyAction::NextTab => NavBarItem::new("Left/Right", "Switch"),
                _ => NavBarItem::new(&binding.display, &binding.description),
            };
            items.push(item);
        }

        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let groups: [(&str, fn(&KeyAction) -> bool); 4] = [
            ("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::NavigateUp
                        | KeyAction::NavigateDown
                        | KeyAction::PrevTab
                        | KeyAction::NextTab
                )
            }),
            ("Actions", |a| {
                matches!(
                    a,
                    KeyAction::Select
                        | KeyAction::Toggle
                        | KeyAction::AddToCart
                        | KeyAction::RemoveFromCart
                        | KeyAction::Continue
                        | KeyAction::CycleServiceTab
                        | KeyAction::CycleFilter
                        | KeyAction::Confirm
                        | KeyAction::ClearSearch
                        | KeyAction::OpenOffers
                )
            }),
            ("Go to", |a| matches!(a, KeyAction::Jump(_))),
            ("General", |a| {
                matches!(
                    a,
                    KeyAction::Back
                        | KeyAction::Help
                        | KeyAction::ToggleGender
                        | KeyAction::Quit
                        | KeyAction::ForceQuit
                )
            }),
        ];

        let bindings = self.get_bindings(mode);
        groups
            .iter()
            .filter_map(|(title, belongs)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| belongs(&b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

impl NavBarItem {
    fn new(key_display: &str, action_label: &str) -> Self {
        Self {
            key_display: key_display.to_string(),
            action_label: action_label.to_string(),
        }
    }
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_every_mode_has_bindings() {
        let ctx = KeybindingContext::new();
        for mode in AppMode::ALL {
            assert!(!ctx.get_bindings(mode).is_empty(), "{:?}", mode);
            assert!(!ctx.get_nav_items(mode).is_empty(), "{:?}", mode);
        }
    }

    #[test]
    fn test_resolve_plain_keys() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(&AppMode::Home, &key(KeyCode::Char('q'))),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            ctx.resolve(&AppMode::Home, &key(KeyCode::Char('3'))),
            Some(KeyAction::Jump(NavTab::Explore))
        );
        assert_eq!(
            ctx.resolve(&AppMode::SalonDetail, &key(KeyCode::Char('+'))),
            Some(KeyAction::AddToCart)
        );
    }

    #[test]
    fn test_shifted_symbol_matches() {
        let ctx = KeybindingContext::new();
        let event = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(ctx.resolve(&AppMode::Home, &event), Some(KeyAction::Help));
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctx = KeybindingContext::new();
        let mut event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        event.kind = KeyEventKind::Press;
        for mode in AppMode::ALL {
            assert_eq!(ctx.resolve(mode, &event), Some(KeyAction::ForceQuit));
        }
    }

    #[test]
    fn test_explore_does_not_steal_letters() {
        let ctx = KeybindingContext::new();
        assert_eq!(ctx.resolve(&AppMode::Explore, &key(KeyCode::Char('q'))), None);
        assert_eq!(ctx.resolve(&AppMode::Explore, &key(KeyCode::Char('1'))), None);
    }

    #[test]
    fn test_jumps_hidden_on_detail_screens() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(&AppMode::ArtistProfile, &key(KeyCode::Char('1'))),
            None
        );
    }

    #[test]
    fn test_help_content_sections() {
        let ctx = KeybindingContext::new();
        let sections = ctx.get_help_content(&AppMode::AtHomeBooking);
        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Navigation", "Actions", "General"]);
    }
}
