//! Application module
//!
//! Contains the main application logic, navigation and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, per-screen state)
//! - Main module - App struct and event loop
//!
//! Key handling and timers take the current `Instant` as a parameter, so the
//! whole app can be driven from tests without a terminal.

mod state;

pub use state::{
    home_salons, offer_salons, AppMode, AppState, ArtistScreen, Cursor, ExploreState, HomeState,
    SalonBookingScreen, SalonScreen, Toast, WizardScreen, HOME_LOADING_DURATION,
    STYLIST_PULSE_DURATION,
};

use crate::booking_state::{BackOutcome, BookingStep, BookingWizard, CONFIRMATION_REDIRECT_DELAY};
use crate::cart::CartStore;
use crate::catalog::{artist_or_default, salon_or_default, BOOKINGS, STYLISTS};
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::discovery::{
    artist_categories, available_artists, categories_for, search_salons, toggle_selection,
};
use crate::pricing::format_rupees;
use crate::preferences::Preferences;
use crate::routes::{NavTab, Route};
use crate::theme::{UiConstants, UiText};
use crate::types::{cycle_next, cycle_previous, ArtistTab, Gender, SalonTab};
use crate::ui::UiRenderer;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Main application struct
pub struct App {
    state: AppState,
    preferences: Preferences,
    ui_renderer: UiRenderer,
    /// Keybinding context for key resolution and navigation hints
    keybinding_context: KeybindingContext,
    /// First bookable day for at-home bookings
    today: NaiveDate,
}

impl App {
    /// Create a new application instance on the home screen
    pub fn new(preferences: Preferences) -> Self {
        Self::with_clock(
            preferences,
            chrono::Local::now().date_naive(),
            Instant::now(),
        )
    }

    /// Create an application with an explicit calendar day and start instant
    pub fn with_clock(preferences: Preferences, today: NaiveDate, now: Instant) -> Self {
        info!(gender = %preferences.gender(), %today, "Creating new App instance");
        let mut app = Self {
            state: AppState::default(),
            preferences,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            today,
        };
        app.enter(Route::Home, now);
        app
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    #[inline]
    pub fn gender(&self) -> Gender {
        self.preferences.gender()
    }

    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    // =========================================================================
    // Main loop
    // =========================================================================

    /// Run the main application loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");
        let tick = Duration::from_millis(UiConstants::TICK_MS);

        loop {
            if crossterm::event::poll(tick).context("Failed to poll terminal events")? {
                if let Event::Key(key_event) =
                    crossterm::event::read().context("Failed to read terminal event")?
                {
                    if self.handle_key(key_event, Instant::now()) {
                        break;
                    }
                }
            }

            self.tick(Instant::now());

            let now = Instant::now();
            terminal
                .draw(|f| {
                    self.ui_renderer.render(
                        f,
                        &self.state,
                        &self.preferences,
                        &self.keybinding_context,
                        now,
                    )
                })
                .context("Failed to draw frame")?;
        }

        info!("Main loop finished");
        Ok(())
    }

    /// Fire timers that are due at `now`
    pub fn tick(&mut self, now: Instant) {
        if self.state.toast.as_ref().is_some_and(|t| now >= t.until) {
            self.state.toast = None;
        }

        let redirect_due = self
            .state
            .redirect
            .as_ref()
            .is_some_and(|(deadline, _)| now >= *deadline);
        if redirect_due {
            if let Some((_, route)) = self.state.redirect.take() {
                info!(to = %route, "Automatic navigation");
                self.replace(route, now);
            }
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Go to `route`, remembering the current one for back navigation.
    ///
    /// Bottom-nav tabs are roots: entering one clears the history, so back
    /// from a tab returns home.
    pub fn navigate(&mut self, route: Route, now: Instant) {
        if route == self.state.route {
            return;
        }
        if route.nav_tab().is_some() {
            self.state.history.clear();
        } else {
            self.state.history.push(self.state.route.clone());
        }
        self.enter(route, now);
    }

    /// Go to `route` without a history entry
    fn replace(&mut self, route: Route, now: Instant) {
        if route.nav_tab().is_some() {
            self.state.history.clear();
        }
        self.enter(route, now);
    }

    /// Return to the previous route (home when there is none)
    pub fn back(&mut self, now: Instant) {
        let previous = self.state.history.pop().unwrap_or_default();
        self.enter(previous, now);
    }

    /// Mount the screen for `route`
    fn enter(&mut self, route: Route, now: Instant) {
        debug!(from = %self.state.route, to = %route, "Entering route");
        self.state.status_message.clear();
        self.state.redirect = None;

        match &route {
            Route::Home => {
                if !self.state.home.mounted_once {
                    self.state.home.mounted_once = true;
                    self.state.home.loading_until = Some(now + HOME_LOADING_DURATION);
                }
            }
            Route::Salon(id) => {
                self.state.salon = Some(SalonScreen::new(salon_or_default(id)));
            }
            Route::SalonBooking(id) => {
                let salon = salon_or_default(id);
                let cart = self
                    .state
                    .salon
                    .as_ref()
                    .filter(|s| s.salon.id == salon.id)
                    .map(|s| s.cart.clone())
                    .unwrap_or_else(|| SalonScreen::new(salon).cart);
                self.state.salon_booking = Some(SalonBookingScreen {
                    salon,
                    cart,
                    confirmed: false,
                });
            }
            Route::Artist(id) => {
                self.state.artist = Some(ArtistScreen::new(artist_or_default(id)));
            }
            Route::AtHomeBooking(id) => {
                let artist = artist_or_default(id);
                let cart = self
                    .state
                    .artist
                    .as_ref()
                    .filter(|a| a.artist.id == artist.id)
                    .map(|a| a.cart.clone())
                    .unwrap_or_else(|| CartStore::new(artist.services));
                self.state.wizard = Some(WizardScreen {
                    wizard: BookingWizard::new(artist, cart, self.today),
                    slot_cursor: Cursor::default(),
                    check_cursor: Cursor::default(),
                    confirmation: None,
                });
            }
            Route::Bookings
            | Route::Offers
            | Route::Explore
            | Route::Profile
            | Route::AtHome
            | Route::NotFound(_) => {}
        }

        // Booking sessions do not outlive their screen
        if !matches!(route, Route::AtHomeBooking(_)) {
            self.state.wizard = None;
        }
        if !matches!(route, Route::SalonBooking(_)) {
            self.state.salon_booking = None;
        }

        if let Route::NotFound(path) = &route {
            warn!("No route for {:?}", path);
        }
        self.state.route = route;
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle a key event. Returns true when the app should exit.
    pub fn handle_key(&mut self, key_event: KeyEvent, now: Instant) -> bool {
        if key_event.kind != KeyEventKind::Press {
            return false;
        }

        let ctrl_c = key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c');

        // Help overlay swallows everything but its own close keys
        if self.state.help_visible {
            match key_event.code {
                _ if ctrl_c => return true,
                KeyCode::Char('?') | KeyCode::Esc => self.toggle_help(),
                _ => {}
            }
            return false;
        }

        let mode = self.state.mode();
        match self.keybinding_context.resolve(&mode, &key_event) {
            Some(action) => self.dispatch(action, now),
            None => {
                if mode.captures_text() {
                    self.handle_text_input(key_event);
                }
                false
            }
        }
    }

    /// Apply a resolved action. Returns true when the app should exit.
    fn dispatch(&mut self, action: KeyAction, now: Instant) -> bool {
        debug!(?action, mode = ?self.state.mode(), "Key action");
        match action {
            KeyAction::Quit | KeyAction::ForceQuit => {
                info!("Quit requested");
                return true;
            }
            KeyAction::Help => self.toggle_help(),
            KeyAction::ToggleGender => self.toggle_gender(),
            KeyAction::Jump(tab) => self.jump(tab, now),
            KeyAction::OpenOffers => self.navigate(Route::Offers, now),
            KeyAction::NavigateUp => self.move_cursor(false),
            KeyAction::NavigateDown => self.move_cursor(true),
            KeyAction::PrevTab => self.switch_tab(false),
            KeyAction::NextTab => self.switch_tab(true),
            KeyAction::Select => self.handle_select(now),
            KeyAction::Toggle => self.handle_toggle(),
            KeyAction::AddToCart => self.change_quantity(true),
            KeyAction::RemoveFromCart => self.change_quantity(false),
            KeyAction::CycleServiceTab => {
                if let Some(screen) = self.state.salon.as_mut() {
                    screen.service_tab = cycle_next(screen.service_tab);
                    screen.cursor = Cursor::default();
                }
            }
            KeyAction::CycleFilter => self.cycle_filter(now),
            KeyAction::Continue => self.handle_continue(now),
            KeyAction::Confirm => self.confirm_salon_booking(now),
            KeyAction::ClearSearch => {
                if self.state.explore.query.is_empty() {
                    self.back(now);
                } else {
                    self.state.explore.query.clear();
                    self.state.explore.cursor = Cursor::default();
                }
            }
            KeyAction::Back => self.handle_back(now),
        }
        false
    }

    /// Typing in the explore search box
    fn handle_text_input(&mut self, key_event: KeyEvent) {
        let explore = &mut self.state.explore;
        match key_event.code {
            KeyCode::Char(c) => explore.query.push(c),
            KeyCode::Backspace => {
                explore.query.pop();
            }
            _ => return,
        }
        let len = search_salons(&explore.query).salons().len();
        explore.cursor.clamp(len);
    }

    fn toggle_gender(&mut self) {
        let next = self.gender().toggled();
        if let Err(e) = self.preferences.set_gender(next) {
            warn!("Failed to save display preference: {:#}", e);
            self.state.status_message = format!("Could not save preference: {}", e);
        }
        // Category chips are per gender
        self.state.home.selected_category = None;
        self.state.home.chip_cursor = Cursor::default();
    }

    fn jump(&mut self, tab: NavTab, now: Instant) {
        self.navigate(tab.route(), now);
    }

    fn move_cursor(&mut self, down: bool) {
        let step = |cursor: &mut Cursor, len: usize| {
            if down {
                cursor.down(len);
            } else {
                cursor.up();
            }
        };

        match self.state.mode() {
            AppMode::Home => step(&mut self.state.home.salon_cursor, home_salons().len()),
            AppMode::AtHome => step(&mut self.state.at_home_cursor, available_artists().len()),
            AppMode::Explore => {
                let len = search_salons(&self.state.explore.query).salons().len();
                step(&mut self.state.explore.cursor, len);
            }
            AppMode::Bookings => step(&mut self.state.bookings_cursor, BOOKINGS.len()),
            AppMode::Offers => step(&mut self.state.offers_cursor, offer_salons().len()),
            AppMode::SalonDetail => {
                if let Some(screen) = self.state.salon.as_mut() {
                    let len = screen.row_count();
                    step(&mut screen.cursor, len);
                }
            }
            AppMode::ArtistProfile => {
                if let Some(screen) = self.state.artist.as_mut() {
                    let len = screen.row_count();
                    step(&mut screen.cursor, len);
                }
            }
            AppMode::AtHomeBooking => {
                if let Some(screen) = self.state.wizard.as_mut() {
                    match screen.wizard.step() {
                        BookingStep::DateTime => {
                            let len = screen.wizard.time_slots().len();
                            step(&mut screen.slot_cursor, len);
                        }
                        BookingStep::Checklist => {
                            let len = screen.wizard.checklist().len();
                            step(&mut screen.check_cursor, len);
                        }
                        BookingStep::Summary => {}
                    }
                }
            }
            AppMode::Profile | AppMode::SalonBooking | AppMode::NotFound => {}
        }
    }

    fn switch_tab(&mut self, forward: bool) {
        match self.state.mode() {
            AppMode::Home => {
                let len = categories_for(self.gender()).len();
                let cursor = &mut self.state.home.chip_cursor;
                if forward {
                    cursor.down(len);
                } else {
                    cursor.up();
                }
            }
            AppMode::SalonDetail => {
                if let Some(screen) = self.state.salon.as_mut() {
                    screen.tab = if forward {
                        cycle_next(screen.tab)
                    } else {
                        cycle_previous(screen.tab)
                    };
                    screen.cursor = Cursor::default();
                }
            }
            AppMode::ArtistProfile => {
                if let Some(screen) = self.state.artist.as_mut() {
                    screen.tab = if forward {
                        cycle_next(screen.tab)
                    } else {
                        cycle_previous(screen.tab)
                    };
                    screen.cursor = Cursor::default();
                }
            }
            AppMode::AtHomeBooking => {
                if let Some(screen) = self.state.wizard.as_mut() {
                    if screen.wizard.step() == BookingStep::DateTime {
                        let offset = if forward { 1 } else { -1 };
                        if let Err(e) = screen.wizard.shift_date(offset) {
                            self.state.status_message = e.to_string();
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_select(&mut self, now: Instant) {
        let target = match self.state.mode() {
            AppMode::Home if !self.state.home.is_loading(now) => home_salons()
                .get(self.state.home.salon_cursor.index)
                .map(|s| Route::Salon(s.id.to_string())),
            AppMode::AtHome => available_artists()
                .get(self.state.at_home_cursor.index)
                .map(|a| Route::Artist(a.id.to_string())),
            AppMode::Explore => search_salons(&self.state.explore.query)
                .salons()
                .get(self.state.explore.cursor.index)
                .map(|s| Route::Salon(s.id.to_string())),
            _ => None,
        };
        if let Some(route) = target {
            self.navigate(route, now);
        }
    }

    fn handle_toggle(&mut self) {
        match self.state.mode() {
            AppMode::Home => {
                let chips = categories_for(self.gender());
                if let Some(chip) = chips.get(self.state.home.chip_cursor.index) {
                    self.state.home.selected_category =
                        toggle_selection(self.state.home.selected_category, chip.id);
                }
            }
            AppMode::AtHomeBooking => {
                let Some(screen) = self.state.wizard.as_mut() else {
                    return;
                };
                let result = match screen.wizard.step() {
                    BookingStep::DateTime => {
                        let slot = screen.wizard.time_slots().get(screen.slot_cursor.index);
                        match slot {
                            Some(slot) => screen.wizard.select_time(slot.label).map(|_| ()),
                            None => Ok(()),
                        }
                    }
                    BookingStep::Checklist => {
                        let item = screen.wizard.checklist().get(screen.check_cursor.index);
                        match item {
                            Some(item) => screen.wizard.toggle_check(item.id).map(|_| ()),
                            None => Ok(()),
                        }
                    }
                    BookingStep::Summary => Ok(()),
                };
                self.state.status_message = match result {
                    Ok(()) => String::new(),
                    Err(e) => e.to_string(),
                };
            }
            _ => {}
        }
    }

    fn change_quantity(&mut self, add: bool) {
        let apply = |cart: &mut CartStore<'static>, id: &str| {
            if add {
                cart.add(id);
            } else {
                cart.remove(id);
            }
        };

        match self.state.mode() {
            AppMode::SalonDetail => {
                if let Some(screen) = self.state.salon.as_mut() {
                    if screen.tab != SalonTab::Services {
                        return;
                    }
                    if let Some(service) = screen.visible_services().get(screen.cursor.index) {
                        apply(&mut screen.cart, service.id);
                    }
                }
            }
            AppMode::ArtistProfile => {
                if let Some(screen) = self.state.artist.as_mut() {
                    if screen.tab != ArtistTab::Services {
                        return;
                    }
                    if let Some(service) = screen.visible_services().get(screen.cursor.index) {
                        apply(&mut screen.cart, service.id);
                    }
                }
            }
            _ => {}
        }
    }

    fn cycle_filter(&mut self, now: Instant) {
        match self.state.mode() {
            AppMode::SalonDetail => {
                if let Some(screen) = self.state.salon.as_mut() {
                    screen.stylist_filter = next_in_cycle(
                        screen.stylist_filter,
                        &STYLISTS.iter().map(|s| s.id).collect::<Vec<_>>(),
                    );
                    screen.tab = SalonTab::Reviews;
                    screen.cursor = Cursor::default();
                    screen.pulse_until = Some(now + STYLIST_PULSE_DURATION);
                }
            }
            AppMode::ArtistProfile => {
                if let Some(screen) = self.state.artist.as_mut() {
                    screen.category_filter = next_in_cycle(
                        screen.category_filter,
                        &artist_categories(screen.artist),
                    );
                    screen.cursor = Cursor::default();
                }
            }
            _ => {}
        }
    }

    fn handle_continue(&mut self, now: Instant) {
        match self.state.mode() {
            AppMode::SalonDetail => {
                let Some(screen) = self.state.salon.as_ref() else {
                    return;
                };
                if screen.cart.is_empty() {
                    self.state.status_message = "Add a service to continue".to_string();
                    return;
                }
                let route = Route::SalonBooking(screen.salon.id.to_string());
                self.navigate(route, now);
            }
            AppMode::ArtistProfile => {
                let Some(screen) = self.state.artist.as_ref() else {
                    return;
                };
                if let Some(missing) = screen.cart.shortfall(screen.artist.minimum_booking) {
                    self.state.status_message =
                        format!("Add {} more to continue", format_rupees(missing));
                    return;
                }
                let route = Route::AtHomeBooking(screen.artist.id.to_string());
                self.navigate(route, now);
            }
            AppMode::AtHomeBooking => self.advance_wizard(now),
            _ => {}
        }
    }

    fn advance_wizard(&mut self, now: Instant) {
        let Some(screen) = self.state.wizard.as_mut() else {
            return;
        };

        if screen.wizard.step() == BookingStep::Summary {
            match screen.wizard.confirm() {
                Ok(confirmation) => {
                    let until = now + confirmation.redirect_after;
                    screen.confirmation = Some(confirmation);
                    self.state.toast = Some(Toast {
                        message: UiText::AT_HOME_CONFIRMED.to_string(),
                        until,
                    });
                    self.state.redirect = Some((until, Route::Bookings));
                }
                Err(e) => self.state.status_message = e.to_string(),
            }
            return;
        }

        self.state.status_message = match screen.wizard.advance() {
            Ok(_) => String::new(),
            Err(e) => e.to_string(),
        };
    }

    fn confirm_salon_booking(&mut self, now: Instant) {
        let Some(screen) = self.state.salon_booking.as_mut() else {
            return;
        };
        if screen.confirmed {
            return;
        }
        if screen.cart.is_empty() {
            self.state.status_message = "Add a service to continue".to_string();
            return;
        }
        screen.confirmed = true;
        info!(
            salon = screen.salon.id,
            total = screen.cart.total(),
            "Salon booking confirmed"
        );
        let until = now + CONFIRMATION_REDIRECT_DELAY;
        self.state.toast = Some(Toast {
            message: UiText::SALON_CONFIRMED.to_string(),
            until,
        });
        self.state.redirect = Some((until, Route::Bookings));
    }

    fn handle_back(&mut self, now: Instant) {
        if self
            .state
            .salon_booking
            .as_ref()
            .is_some_and(|s| s.confirmed)
        {
            return;
        }

        if let Some(screen) = self.state.wizard.as_mut() {
            match screen.wizard.back() {
                Ok(BackOutcome::Step(_)) => {
                    self.state.status_message.clear();
                    return;
                }
                Ok(BackOutcome::ExitFlow) => {}
                Err(e) => {
                    self.state.status_message = e.to_string();
                    return;
                }
            }
        }

        self.back(now);
    }
}

/// Step a single-choice filter through `None`, then each option, then `None`
fn next_in_cycle<T: Copy + PartialEq>(current: Option<T>, options: &[T]) -> Option<T> {
    match current {
        None => options.first().copied(),
        Some(value) => options
            .iter()
            .position(|o| *o == value)
            .and_then(|i| options.get(i + 1))
            .copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_in_cycle() {
        let opts = ["a", "b"];
        assert_eq!(next_in_cycle(None, &opts), Some("a"));
        assert_eq!(next_in_cycle(Some("a"), &opts), Some("b"));
        assert_eq!(next_in_cycle(Some("b"), &opts), None);
        assert_eq!(next_in_cycle::<&str>(None, &[]), None);
    }
}
