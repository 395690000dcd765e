//! Tests for Application State Management
//!
//! Drives the App through key events and explicit instants, without a
//! terminal.
//!
//! These tests verify:
//! - Home loading placeholder timing
//! - Navigation, back and the bottom-nav jumps
//! - Gender toggle persistence and category reset
//! - Salon and at-home booking flows with the timed redirect
//! - Help overlay key capture

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use salontui::app::{App, AppMode, HOME_LOADING_DURATION, STYLIST_PULSE_DURATION};
use salontui::booking_state::{BookingStep, CONFIRMATION_REDIRECT_DELAY};
use salontui::preferences::Preferences;
use salontui::routes::Route;
use salontui::types::{Gender, SalonTab};
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn new_app(now: Instant) -> App {
    App::with_clock(Preferences::in_memory(Gender::Male), today(), now)
}

fn key(app: &mut App, code: KeyCode, now: Instant) -> bool {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now)
}

fn chars(app: &mut App, text: &str, now: Instant) {
    for c in text.chars() {
        key(app, KeyCode::Char(c), now);
    }
}

// =============================================================================
// Startup and Home
// =============================================================================

#[test]
fn test_app_starts_on_home_with_loading() {
    let now = Instant::now();
    let app = new_app(now);
    assert_eq!(app.state().mode(), AppMode::Home);
    assert!(app.state().home.is_loading(now));
    assert!(!app.state().home.is_loading(now + HOME_LOADING_DURATION));
}

#[test]
fn test_home_select_ignored_while_loading() {
    let now = Instant::now();
    let mut app = new_app(now);
    key(&mut app, KeyCode::Enter, now);
    assert_eq!(app.state().route, Route::Home);

    let later = now + HOME_LOADING_DURATION;
    key(&mut app, KeyCode::Enter, later);
    assert_eq!(app.state().route, Route::Salon("s1".into()));
}

#[test]
fn test_loading_only_on_first_home_mount() {
    let now = Instant::now();
    let mut app = new_app(now);
    let later = now + HOME_LOADING_DURATION;
    key(&mut app, KeyCode::Char('3'), later);
    key(&mut app, KeyCode::Esc, later);
    assert_eq!(app.state().route, Route::Home);
    assert!(!app.state().home.is_loading(later));
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn test_bottom_nav_jumps_and_back() {
    let now = Instant::now();
    let mut app = new_app(now);
    key(&mut app, KeyCode::Char('2'), now);
    assert_eq!(app.state().route, Route::AtHome);
    key(&mut app, KeyCode::Char('4'), now);
    assert_eq!(app.state().route, Route::Bookings);
    key(&mut app, KeyCode::Char('1'), now);
    key(&mut app, KeyCode::Char('o'), now);
    assert_eq!(app.state().route, Route::Offers);
    key(&mut app, KeyCode::Char('b'), now);
    assert_eq!(app.state().route, Route::Home);
    assert!(app.state().history.is_empty());
}

#[test]
fn test_tab_jumps_do_not_grow_history() {
    let now = Instant::now();
    let mut app = new_app(now);
    for _ in 0..20 {
        key(&mut app, KeyCode::Char('2'), now);
        key(&mut app, KeyCode::Char('1'), now);
    }
    assert!(app.state().history.is_empty());

    key(&mut app, KeyCode::Char('o'), now);
    assert_eq!(app.state().history, vec![Route::Home]);
    key(&mut app, KeyCode::Char('b'), now);
    assert_eq!(app.state().route, Route::Home);
}

#[test]
fn test_unknown_route_renders_not_found_and_enter_goes_home() {
    let now = Instant::now();
    let mut app = new_app(now);
    app.navigate(Route::parse("/nowhere"), now);
    assert_eq!(app.state().mode(), AppMode::NotFound);
    key(&mut app, KeyCode::Enter, now);
    assert_eq!(app.state().route, Route::Home);
}

#[test]
fn test_quit_key() {
    let now = Instant::now();
    let mut app = new_app(now);
    assert!(key(&mut app, KeyCode::Char('q'), now));
    assert!(app.handle_key(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        now
    ));
}

#[test]
fn test_key_release_is_ignored() {
    let now = Instant::now();
    let mut app = new_app(now);
    let mut event = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE);
    event.kind = KeyEventKind::Release;
    app.handle_key(event, now);
    assert_eq!(app.state().route, Route::Home);
}

// =============================================================================
// Gender Preference
// =============================================================================

#[test]
fn test_gender_toggle_persists_and_clears_category() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    let now = Instant::now();
    let mut app = App::with_clock(Preferences::load(&path), today(), now);
    assert_eq!(app.gender(), Gender::Male);

    key(&mut app, KeyCode::Right, now);
    key(&mut app, KeyCode::Char(' '), now);
    assert_eq!(app.state().home.selected_category, Some("mc2"));

    key(&mut app, KeyCode::Char('g'), now);
    assert_eq!(app.gender(), Gender::Female);
    assert_eq!(app.state().home.selected_category, None);
    assert_eq!(app.state().home.chip_cursor.index, 0);

    assert_eq!(Preferences::load(&path).gender(), Gender::Female);
}

#[test]
fn test_category_chip_toggles_off() {
    let now = Instant::now();
    let mut app = new_app(now);
    key(&mut app, KeyCode::Char(' '), now);
    assert_eq!(app.state().home.selected_category, Some("mc1"));
    key(&mut app, KeyCode::Char(' '), now);
    assert_eq!(app.state().home.selected_category, None);
}

// =============================================================================
// Explore
// =============================================================================

#[test]
fn test_explore_typing_captures_shortcuts() {
    let now = Instant::now();
    let mut app = new_app(now);
    key(&mut app, KeyCode::Char('3'), now);
    assert_eq!(app.state().mode(), AppMode::Explore);

    // q and g are text here, not quit / gender toggle
    chars(&mut app, "qg", now);
    assert_eq!(app.state().explore.query, "qg");
    assert_eq!(app.gender(), Gender::Male);

    key(&mut app, KeyCode::Backspace, now);
    key(&mut app, KeyCode::Backspace, now);
    chars(&mut app, "glow", now);
    key(&mut app, KeyCode::Enter, now);
    assert_eq!(app.state().route, Route::Salon("s2".into()));
}

#[test]
fn test_explore_escape_clears_then_leaves() {
    let now = Instant::now();
    let mut app = new_app(now);
    key(&mut app, KeyCode::Char('3'), now);
    chars(&mut app, "zzz", now);
    key(&mut app, KeyCode::Esc, now);
    assert!(app.state().explore.query.is_empty());
    assert_eq!(app.state().mode(), AppMode::Explore);
    key(&mut app, KeyCode::Esc, now);
    assert_eq!(app.state().route, Route::Home);
}

// =============================================================================
// Salon Flow
// =============================================================================

#[test]
fn test_salon_continue_requires_service() {
    let now = Instant::now();
    let mut app = new_app(now);
    app.navigate(Route::parse("/salon/s1"), now);
    key(&mut app, KeyCode::Char('c'), now);
    assert_eq!(app.state().mode(), AppMode::SalonDetail);
    assert_eq!(app.state().status_message, "Add a service to continue");
}

#[test]
fn test_salon_booking_confirms_and_redirects() {
    let now = Instant::now();
    let mut app = new_app(now);
    app.navigate(Route::parse("/salon/s1"), now);
    key(&mut app, KeyCode::Char('+'), now);
    key(&mut app, KeyCode::Char('+'), now);
    key(&mut app, KeyCode::Down, now);
    key(&mut app, KeyCode::Char('+'), now);
    assert_eq!(app.state().salon.as_ref().unwrap().cart.count(), 3);

    key(&mut app, KeyCode::Char('c'), now);
    assert_eq!(app.state().mode(), AppMode::SalonBooking);
    assert_eq!(app.state().salon_booking.as_ref().unwrap().cart.count(), 3);

    key(&mut app, KeyCode::Enter, now);
    assert_eq!(app.state().active_toast(now), Some("Booking confirmed!"));

    // Back is blocked once confirmed
    key(&mut app, KeyCode::Esc, now);
    assert_eq!(app.state().mode(), AppMode::SalonBooking);

    app.tick(now + CONFIRMATION_REDIRECT_DELAY - Duration::from_millis(1));
    assert_eq!(app.state().mode(), AppMode::SalonBooking);
    app.tick(now + CONFIRMATION_REDIRECT_DELAY);
    assert_eq!(app.state().route, Route::Bookings);
    assert!(app.state().history.is_empty());
}

#[test]
fn test_stylist_filter_switches_to_reviews_and_pulses() {
    let now = Instant::now();
    let mut app = new_app(now);
    app.navigate(Route::parse("/salon/s3"), now);
    key(&mut app, KeyCode::Char('s'), now);

    let screen = app.state().salon.as_ref().unwrap();
    assert_eq!(screen.tab, SalonTab::Reviews);
    assert_eq!(screen.stylist_filter, Some("a1"));
    assert_eq!(screen.visible_reviews().len(), 2);
    assert!(screen.is_pulsing(now));
    assert!(!screen.is_pulsing(now + STYLIST_PULSE_DURATION));
}

#[test]
fn test_salon_cart_resets_on_reentry() {
    let now = Instant::now();
    let mut app = new_app(now);
    app.navigate(Route::parse("/salon/s1"), now);
    key(&mut app, KeyCode::Char('+'), now);
    key(&mut app, KeyCode::Esc, now);
    app.navigate(Route::parse("/salon/s1"), now);
    assert!(app.state().salon.as_ref().unwrap().cart.is_empty());
}

// =============================================================================
// At-Home Flow
// =============================================================================

/// Artist profile for Nisha with Hair (h3) and Skin (h4) services in the cart
fn artist_with_cart(app: &mut App, now: Instant) {
    app.navigate(Route::parse("/artist/ah1"), now);
    let screen = app.state().artist.as_ref().unwrap();
    let services = screen.visible_services();
    let h3 = services.iter().position(|s| s.id == "h3").unwrap();
    let h4 = services.iter().position(|s| s.id == "h4").unwrap();

    for _ in 0..h3 {
        key(app, KeyCode::Down, now);
    }
    key(app, KeyCode::Char('+'), now);
    for _ in h3..h4 {
        key(app, KeyCode::Down, now);
    }
    key(app, KeyCode::Char('+'), now);
}

#[test]
fn test_artist_minimum_booking_blocks_continue() {
    let now = Instant::now();
    let mut app = new_app(now);
    app.navigate(Route::parse("/artist/ah1"), now);
    key(&mut app, KeyCode::Char('c'), now);
    assert_eq!(app.state().mode(), AppMode::ArtistProfile);
    assert_eq!(app.state().status_message, "Add ₹999 more to continue");
}

#[test]
fn test_at_home_booking_end_to_end() {
    let now = Instant::now();
    let mut app = new_app(now);
    artist_with_cart(&mut app, now);
    assert_eq!(app.state().artist.as_ref().unwrap().cart.total(), 2298);

    key(&mut app, KeyCode::Char('c'), now);
    assert_eq!(app.state().mode(), AppMode::AtHomeBooking);

    // Continue is gated on a time slot
    key(&mut app, KeyCode::Enter, now);
    let wizard = &app.state().wizard.as_ref().unwrap().wizard;
    assert_eq!(wizard.step(), BookingStep::DateTime);

    // Pick 9:00 AM (first slot)
    key(&mut app, KeyCode::Char(' '), now);
    key(&mut app, KeyCode::Enter, now);
    assert_eq!(
        app.state().wizard.as_ref().unwrap().wizard.step(),
        BookingStep::Checklist
    );

    // Check every item
    for _ in 0..5 {
        key(&mut app, KeyCode::Char(' '), now);
        key(&mut app, KeyCode::Down, now);
    }
    key(&mut app, KeyCode::Enter, now);
    let wizard = &app.state().wizard.as_ref().unwrap().wizard;
    assert_eq!(wizard.step(), BookingStep::Summary);
    assert_eq!(wizard.price_breakdown().total, 2887);

    key(&mut app, KeyCode::Enter, now);
    let screen = app.state().wizard.as_ref().unwrap();
    assert!(screen.confirmation.is_some());
    assert_eq!(
        app.state().active_toast(now),
        Some("At-home booking confirmed!")
    );

    app.tick(now + CONFIRMATION_REDIRECT_DELAY);
    assert_eq!(app.state().route, Route::Bookings);
    assert!(app.state().wizard.is_none());
    assert!(app.state().active_toast(now + CONFIRMATION_REDIRECT_DELAY).is_none());
}

#[test]
fn test_unavailable_slot_reports_status() {
    let now = Instant::now();
    let mut app = new_app(now);
    artist_with_cart(&mut app, now);
    key(&mut app, KeyCode::Char('c'), now);

    // 12:30 PM is the eighth slot
    for _ in 0..7 {
        key(&mut app, KeyCode::Down, now);
    }
    key(&mut app, KeyCode::Char(' '), now);
    let wizard = &app.state().wizard.as_ref().unwrap().wizard;
    assert_eq!(wizard.selected_time(), None);
    assert!(app.state().status_message.contains("unavailable"));
}

#[test]
fn test_wizard_back_steps_then_exits() {
    let now = Instant::now();
    let mut app = new_app(now);
    artist_with_cart(&mut app, now);
    key(&mut app, KeyCode::Char('c'), now);
    key(&mut app, KeyCode::Char(' '), now);
    key(&mut app, KeyCode::Enter, now);

    key(&mut app, KeyCode::Esc, now);
    assert_eq!(
        app.state().wizard.as_ref().unwrap().wizard.step(),
        BookingStep::DateTime
    );
    key(&mut app, KeyCode::Esc, now);
    assert_eq!(app.state().route, Route::Artist("ah1".into()));
}

// =============================================================================
// Help Overlay
// =============================================================================

#[test]
fn test_help_overlay_swallows_keys() {
    let now = Instant::now();
    let mut app = new_app(now);
    key(&mut app, KeyCode::Char('?'), now);
    assert!(app.state().help_visible);

    assert!(!key(&mut app, KeyCode::Char('q'), now));
    key(&mut app, KeyCode::Char('2'), now);
    assert_eq!(app.state().route, Route::Home);

    key(&mut app, KeyCode::Esc, now);
    assert!(!app.state().help_visible);
}
