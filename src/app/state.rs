//! Application state definitions
//!
//! Contains the per-screen state types, the AppMode derived from the current
//! route, and the deadlines the main loop polls.

use crate::booking_state::{BookingWizard, Confirmation};
use crate::cart::CartStore;
use crate::catalog::{
    artist_reviews, featured_salons, nearby_salons, Artist, ArtistReview, Salon, SalonReview,
    Service, SALONS, SALON_REVIEWS, SALON_SERVICES,
};
use crate::discovery::{filter_reviews, filter_services_by_category};
use crate::routes::Route;
use crate::types::{ArtistTab, SalonServiceTab, SalonTab, ServiceCategory};
use std::time::{Duration, Instant};

/// How long the home screen shows its loading placeholder on first mount
pub const HOME_LOADING_DURATION: Duration = Duration::from_millis(800);

/// How long the selected stylist chip pulses after the filter changes
pub const STYLIST_PULSE_DURATION: Duration = Duration::from_millis(600);

/// Application operating modes, one per screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    Home,
    AtHome,
    Explore,
    Bookings,
    Offers,
    Profile,
    SalonDetail,
    SalonBooking,
    ArtistProfile,
    AtHomeBooking,
    NotFound,
}

impl AppMode {
    /// Every mode, for exhaustive checks
    pub const ALL: &'static [AppMode] = &[
        AppMode::Home,
        AppMode::AtHome,
        AppMode::Explore,
        AppMode::Bookings,
        AppMode::Offers,
        AppMode::Profile,
        AppMode::SalonDetail,
        AppMode::SalonBooking,
        AppMode::ArtistProfile,
        AppMode::AtHomeBooking,
        AppMode::NotFound,
    ];

    /// Mode that renders a route
    pub fn for_route(route: &Route) -> Self {
        match route {
            Route::Home => Self::Home,
            Route::Salon(_) => Self::SalonDetail,
            Route::SalonBooking(_) => Self::SalonBooking,
            Route::Bookings => Self::Bookings,
            Route::Offers => Self::Offers,
            Route::Explore => Self::Explore,
            Route::Profile => Self::Profile,
            Route::AtHome => Self::AtHome,
            Route::Artist(_) => Self::ArtistProfile,
            Route::AtHomeBooking(_) => Self::AtHomeBooking,
            Route::NotFound(_) => Self::NotFound,
        }
    }

    /// Whether plain character keys are text input in this mode
    pub fn captures_text(&self) -> bool {
        matches!(self, Self::Explore)
    }

    /// Whether the bottom navigation bar is visible in this mode
    pub fn shows_bottom_nav(&self) -> bool {
        !matches!(
            self,
            Self::SalonDetail | Self::SalonBooking | Self::ArtistProfile | Self::AtHomeBooking
        )
    }

    /// Human-readable name (help overlay)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::AtHome => "At Home",
            Self::Explore => "Explore",
            Self::Bookings => "My Bookings",
            Self::Offers => "Offers",
            Self::Profile => "Profile",
            Self::SalonDetail => "Salon Detail",
            Self::SalonBooking => "Salon Booking",
            Self::ArtistProfile => "Artist Profile",
            Self::AtHomeBooking => "At-Home Booking",
            Self::NotFound => "Not Found",
        }
    }
}

/// Bounded list cursor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub index: usize,
}

impl Cursor {
    pub fn up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn down(&mut self, len: usize) {
        if self.index + 1 < len {
            self.index += 1;
        }
    }

    /// Keep the cursor inside a list that may have shrunk
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }
}

/// Home screen state
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    /// Loading placeholder deadline (set on the first home mount only)
    pub loading_until: Option<Instant>,
    pub mounted_once: bool,
    /// Category chip under the cursor
    pub chip_cursor: Cursor,
    /// Active category filter (chip id)
    pub selected_category: Option<&'static str>,
    /// Salon list cursor
    pub salon_cursor: Cursor,
}

impl HomeState {
    pub fn is_loading(&self, now: Instant) -> bool {
        self.loading_until.is_some_and(|deadline| now < deadline)
    }
}

/// Explore screen state
#[derive(Debug, Clone, Default)]
pub struct ExploreState {
    pub query: String,
    pub cursor: Cursor,
}

/// Salon detail screen state
#[derive(Debug, Clone)]
pub struct SalonScreen {
    pub salon: &'static Salon,
    pub tab: SalonTab,
    pub service_tab: SalonServiceTab,
    pub cursor: Cursor,
    /// Stylist filter on the reviews tab
    pub stylist_filter: Option<&'static str>,
    pub pulse_until: Option<Instant>,
    pub cart: CartStore<'static>,
}

impl SalonScreen {
    pub fn new(salon: &'static Salon) -> Self {
        Self {
            salon,
            tab: SalonTab::default(),
            service_tab: SalonServiceTab::default(),
            cursor: Cursor::default(),
            stylist_filter: None,
            pulse_until: None,
            cart: CartStore::new(SALON_SERVICES),
        }
    }

    /// Services listed under the current service tab
    pub fn visible_services(&self) -> Vec<&'static Service> {
        filter_services_by_category(SALON_SERVICES, Some(self.service_tab.category()))
    }

    /// Reviews matching the stylist filter
    pub fn visible_reviews(&self) -> Vec<&'static SalonReview> {
        filter_reviews(SALON_REVIEWS, self.stylist_filter)
    }

    /// Number of rows the cursor moves over on the current tab
    pub fn row_count(&self) -> usize {
        match self.tab {
            SalonTab::Services => self.visible_services().len(),
            SalonTab::Reviews => self.visible_reviews().len(),
            SalonTab::About | SalonTab::Gallery => 0,
        }
    }

    pub fn is_pulsing(&self, now: Instant) -> bool {
        self.pulse_until.is_some_and(|deadline| now < deadline)
    }
}

/// Salon booking recap state
#[derive(Debug, Clone)]
pub struct SalonBookingScreen {
    pub salon: &'static Salon,
    pub cart: CartStore<'static>,
    pub confirmed: bool,
}

/// Artist profile screen state
#[derive(Debug, Clone)]
pub struct ArtistScreen {
    pub artist: &'static Artist,
    pub tab: ArtistTab,
    pub category_filter: Option<ServiceCategory>,
    pub cursor: Cursor,
    pub cart: CartStore<'static>,
}

impl ArtistScreen {
    pub fn new(artist: &'static Artist) -> Self {
        Self {
            artist,
            tab: ArtistTab::default(),
            category_filter: None,
            cursor: Cursor::default(),
            cart: CartStore::new(artist.services),
        }
    }

    /// Services matching the category filter
    pub fn visible_services(&self) -> Vec<&'static Service> {
        filter_services_by_category(self.artist.services, self.category_filter)
    }

    pub fn reviews(&self) -> Vec<&'static ArtistReview> {
        artist_reviews(self.artist.id)
    }

    /// Number of rows the cursor moves over on the current tab
    pub fn row_count(&self) -> usize {
        match self.tab {
            ArtistTab::Services => self.visible_services().len(),
            ArtistTab::Reviews => self.reviews().len(),
            ArtistTab::Portfolio => self.artist.before_after.len(),
        }
    }
}

/// At-home booking screen state
#[derive(Debug, Clone)]
pub struct WizardScreen {
    pub wizard: BookingWizard<'static>,
    /// Time slot cursor on the date/time step
    pub slot_cursor: Cursor,
    /// Item cursor on the checklist step
    pub check_cursor: Cursor,
    pub confirmation: Option<Confirmation>,
}

/// Transient acknowledgment shown over the current screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub until: Instant,
}

/// Salons listed on the home screen: featured first, then nearby
pub fn home_salons() -> Vec<&'static Salon> {
    featured_salons().chain(nearby_salons()).collect()
}

/// Salons running an offer
pub fn offer_salons() -> Vec<&'static Salon> {
    SALONS.iter().filter(|s| s.offer.is_some()).collect()
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current location
    pub route: Route,
    /// Previously visited routes, most recent last
    pub history: Vec<Route>,
    pub home: HomeState,
    pub explore: ExploreState,
    pub at_home_cursor: Cursor,
    pub bookings_cursor: Cursor,
    pub offers_cursor: Cursor,
    pub salon: Option<SalonScreen>,
    pub salon_booking: Option<SalonBookingScreen>,
    pub artist: Option<ArtistScreen>,
    pub wizard: Option<WizardScreen>,
    pub toast: Option<Toast>,
    /// Pending automatic navigation
    pub redirect: Option<(Instant, Route)>,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Status message for user feedback
    pub status_message: String,
}

impl AppState {
    /// Mode for the current route
    pub fn mode(&self) -> AppMode {
        AppMode::for_route(&self.route)
    }

    /// Toast text if still visible at `now`
    pub fn active_toast(&self, now: Instant) -> Option<&str> {
        self.toast
            .as_ref()
            .filter(|t| now < t.until)
            .map(|t| t.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_for_every_route() {
        assert_eq!(AppMode::for_route(&Route::parse("/")), AppMode::Home);
        assert_eq!(
            AppMode::for_route(&Route::parse("/at-home-booking/ah1")),
            AppMode::AtHomeBooking
        );
        assert_eq!(AppMode::for_route(&Route::parse("/nope")), AppMode::NotFound);
    }

    #[test]
    fn test_bottom_nav_agrees_with_routes() {
        for path in ["/", "/salon/s1", "/booking/s1", "/artist/ah1", "/at-home-booking/ah1", "/x"] {
            let route = Route::parse(path);
            assert_eq!(
                AppMode::for_route(&route).shows_bottom_nav(),
                route.shows_bottom_nav(),
                "{path}"
            );
        }
    }

    #[test]
    fn test_cursor_bounds() {
        let mut c = Cursor::default();
        c.up();
        assert_eq!(c.index, 0);
        c.down(2);
        c.down(2);
        assert_eq!(c.index, 1);
        c.clamp(0);
        assert_eq!(c.index, 0);
    }

    #[test]
    fn test_home_salons_featured_first() {
        let salons = home_salons();
        assert_eq!(salons.len(), SALONS.len());
        let first_nearby = salons.iter().position(|s| !s.featured).unwrap();
        assert!(salons[first_nearby..].iter().all(|s| !s.featured));
    }

    #[test]
    fn test_salon_screen_service_tabs() {
        let mut screen = SalonScreen::new(&SALONS[0]);
        assert!(screen
            .visible_services()
            .iter()
            .all(|s| s.category == ServiceCategory::Men));
        screen.service_tab = SalonServiceTab::Packages;
        assert!(screen
            .visible_services()
            .iter()
            .all(|s| s.category == ServiceCategory::Packages));
        screen.tab = SalonTab::About;
        assert_eq!(screen.row_count(), 0);
    }

    #[test]
    fn test_toast_expires() {
        let now = Instant::now();
        let state = AppState {
            toast: Some(Toast {
                message: "hi".into(),
                until: now + Duration::from_millis(10),
            }),
            ..Default::default()
        };
        assert_eq!(state.active_toast(now), Some("hi"));
        assert_eq!(state.active_toast(now + Duration::from_millis(10)), None);
    }
}
