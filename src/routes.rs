//! In-app route table
//!
//! Screens are addressed by path, the way the app's deep links look:
//! `/salon/s1`, `/at-home-booking/ah2`, and so on. Anything that does not
//! match a known route resolves to [`Route::NotFound`].

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A resolved in-app location
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Salon(String),
    SalonBooking(String),
    Bookings,
    Offers,
    Explore,
    Profile,
    AtHome,
    Artist(String),
    AtHomeBooking(String),
    NotFound(String),
}

impl Route {
    /// Parse a path into a route.
    ///
    /// A single trailing slash is tolerated. Detail routes take exactly one
    /// non-empty id segment.
    pub fn parse(path: &str) -> Self {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        let mut segments = trimmed.split('/');
        // Paths are absolute; the first segment is empty
        if segments.next() != Some("") {
            return Self::NotFound(path.to_string());
        }
        let parts: Vec<&str> = segments.collect();

        match parts.as_slice() {
            [""] => Self::Home,
            ["bookings"] => Self::Bookings,
            ["offers"] => Self::Offers,
            ["explore"] => Self::Explore,
            ["profile"] => Self::Profile,
            ["at-home"] => Self::AtHome,
            ["salon", id] if !id.is_empty() => Self::Salon(id.to_string()),
            ["booking", id] if !id.is_empty() => Self::SalonBooking(id.to_string()),
            ["artist", id] if !id.is_empty() => Self::Artist(id.to_string()),
            ["at-home-booking", id] if !id.is_empty() => Self::AtHomeBooking(id.to_string()),
            _ => Self::NotFound(path.to_string()),
        }
    }

    /// Canonical path of this route
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Salon(id) => format!("/salon/{}", id),
            Self::SalonBooking(id) => format!("/booking/{}", id),
            Self::Bookings => "/bookings".to_string(),
            Self::Offers => "/offers".to_string(),
            Self::Explore => "/explore".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::AtHome => "/at-home".to_string(),
            Self::Artist(id) => format!("/artist/{}", id),
            Self::AtHomeBooking(id) => format!("/at-home-booking/{}", id),
            Self::NotFound(path) => path.clone(),
        }
    }

    /// Whether the bottom navigation bar is shown on this route.
    ///
    /// Detail and booking screens hide it; the not-found view keeps it so
    /// the user can get back.
    pub fn shows_bottom_nav(&self) -> bool {
        !matches!(
            self,
            Self::Salon(_) | Self::SalonBooking(_) | Self::Artist(_) | Self::AtHomeBooking(_)
        )
    }

    /// Short screen title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Salon(_) => "Salon",
            Self::SalonBooking(_) => "Book Appointment",
            Self::Bookings => "My Bookings",
            Self::Offers => "Offers",
            Self::Explore => "Explore",
            Self::Profile => "Profile",
            Self::AtHome => "At Home",
            Self::Artist(_) => "Artist",
            Self::AtHomeBooking(_) => "At-Home Booking",
            Self::NotFound(_) => "Not Found",
        }
    }

    /// Bottom navigation tab highlighted on this route, if any
    pub fn nav_tab(&self) -> Option<NavTab> {
        match self {
            Self::Home => Some(NavTab::Home),
            Self::AtHome => Some(NavTab::AtHome),
            Self::Explore => Some(NavTab::Explore),
            Self::Bookings => Some(NavTab::Bookings),
            Self::Profile => Some(NavTab::Profile),
            _ => None,
        }
    }
}

impl FromStr for Route {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Bottom navigation entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTab {
    Home,
    AtHome,
    Explore,
    Bookings,
    Profile,
}

/// Bottom navigation tabs in display order
pub const BOTTOM_NAV_TABS: &[NavTab] = &[
    NavTab::Home,
    NavTab::AtHome,
    NavTab::Explore,
    NavTab::Bookings,
    NavTab::Profile,
];

impl NavTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::AtHome => "At Home",
            Self::Explore => "Explore",
            Self::Bookings => "Bookings",
            Self::Profile => "Profile",
        }
    }

    pub fn route(self) -> Route {
        match self {
            Self::Home => Route::Home,
            Self::AtHome => Route::AtHome,
            Self::Explore => Route::Explore,
            Self::Bookings => Route::Bookings,
            Self::Profile => Route::Profile,
        }
    }
}
