//! Centralized theme and styling for the TUI
//!
//! Single source of truth for colors, styles and visual constants. The accent
//! color follows the gender tab: teal for the men's tab, rose for the women's.
//!
//! # Usage
//! ```rust
//! use salontui::theme::{Colors, Styles, Theme};
//! use salontui::types::Gender;
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::FG_PRIMARY);
//! let title = Styles::title(Gender::Female);
//! let accent = Theme::accent(Gender::Male);
//! ```

use crate::booking_state::StepStatus;
use crate::types::Gender;
use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Primary dark background
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Card / overlay background
    pub const BG_SECONDARY: Color = Color::Rgb(30, 30, 40);

    pub const FG_PRIMARY: Color = Color::White;
    pub const FG_SECONDARY: Color = Color::Gray;
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors (per gender tab)
    // -------------------------------------------------------------------------

    /// Men's tab accent
    pub const ACCENT_MALE: Color = Color::Rgb(45, 190, 170);

    /// Women's tab accent
    pub const ACCENT_FEMALE: Color = Color::Rgb(235, 100, 150);

    /// Highlight for ratings and offers
    pub const GOLD: Color = Color::Rgb(240, 190, 60);

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected item text (for contrast on the accent)
    pub const SELECTED_FG: Color = Color::Black;

    pub const NAV_HINT: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Step indicator
    // -------------------------------------------------------------------------

    pub const STEP_COMPLETE: Color = Color::Green;
    pub const STEP_PENDING: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted text (hints, disabled entries)
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Secondary text (descriptions, addresses)
    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    pub fn text_bold() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Screen title in the accent color
    pub fn title(gender: Gender) -> Style {
        Style::default()
            .fg(Theme::accent(gender))
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_active(gender: Gender) -> Style {
        Style::default().fg(Theme::accent(gender))
    }

    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::BG_PRIMARY)
    }

    pub fn panel_bg_alt() -> Style {
        Style::default().bg(Colors::BG_SECONDARY)
    }

    /// Row under the cursor
    pub fn selected(gender: Gender) -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Theme::accent(gender))
            .add_modifier(Modifier::BOLD)
    }

    /// Prices, ratings, offers
    pub fn highlight() -> Style {
        Style::default().fg(Colors::GOLD)
    }

    /// Original price shown next to a discounted one
    pub fn strikethrough() -> Style {
        Style::default()
            .fg(Colors::FG_MUTED)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    /// Enabled primary action button
    pub fn button_active(gender: Gender) -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Theme::accent(gender))
            .add_modifier(Modifier::BOLD)
    }

    /// Disabled primary action button
    pub fn button_disabled() -> Style {
        Style::default()
            .fg(Colors::FG_MUTED)
            .bg(Colors::BG_SECONDARY)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Semantic style lookups
pub struct Theme;

impl Theme {
    /// Accent color for a gender tab
    pub fn accent(gender: Gender) -> Color {
        match gender {
            Gender::Male => Colors::ACCENT_MALE,
            Gender::Female => Colors::ACCENT_FEMALE,
        }
    }

    /// Style for a booking step in the step indicator
    pub fn step_style(status: StepStatus, gender: Gender) -> Style {
        match status {
            StepStatus::Completed => Style::default().fg(Colors::STEP_COMPLETE),
            StepStatus::Active => Style::default()
                .fg(Self::accent(gender))
                .add_modifier(Modifier::BOLD),
            StepStatus::Pending => Style::default().fg(Colors::STEP_PENDING),
        }
    }

    /// Glyph for a booking step in the step indicator
    pub fn step_icon(status: StepStatus) -> &'static str {
        match status {
            StepStatus::Completed => "✓",
            StepStatus::Active => "●",
            StepStatus::Pending => "○",
        }
    }

    /// Filled and empty stars for a 1-5 rating
    pub fn stars(rating: u8) -> String {
        let filled = usize::from(rating.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }

    /// Open/closed badge style
    pub fn open_style(is_open: bool) -> Style {
        if is_open {
            Styles::success()
        } else {
            Styles::error()
        }
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Help overlay width percentage
    pub const DIALOG_WIDTH_PCT: u16 = 60;

    /// Help overlay height percentage
    pub const DIALOG_HEIGHT_PCT: u16 = 70;

    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Title bar with gender toggle
    pub const HEADER_HEIGHT: u16 = 3;

    /// Sticky action/cart bar
    pub const ACTION_BAR_HEIGHT: u16 = 3;

    /// Event poll and timer tick interval, in milliseconds
    pub const TICK_MS: u64 = 50;
}

// =============================================================================
// TEXT CONSTANTS
// =============================================================================

/// Common UI text strings
pub struct UiText;

impl UiText {
    pub const APP_NAME: &'static str = "SalonTUI";
    pub const LOADING: &'static str = "Loading...";
    pub const NO_ARTISTS: &'static str = "No Artists in Your Area Yet";
    pub const NO_ARTISTS_HINT: &'static str = "We're expanding fast. Check back soon!";
    pub const NO_REVIEWS: &'static str = "No reviews yet";
    pub const NOT_FOUND: &'static str = "Oops! Page not found";
    pub const AT_HOME_CONFIRMED: &'static str = "At-home booking confirmed!";
    pub const SALON_CONFIRMED: &'static str = "Booking confirmed!";
    pub const PRESS_HELP: &'static str = "Press ? for help";
}
