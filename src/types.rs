//! Type-safe catalog and UI selection types for SalonTUI
//!
//! Every fixed set of tokens the app deals with (gender tab, service
//! categories, booking status, detail tabs) is an enum here rather than a
//! string, so parsing and display stay in one place.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Display preference for the gender tab.
///
/// Serialized as the lowercase tokens `male` / `female`, which are also the
/// values written to the preference file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// The other tab
    pub fn toggled(self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Male,
        }
    }

    /// Label shown on the gender toggle
    pub fn tab_label(self) -> &'static str {
        match self {
            Self::Male => "Men",
            Self::Female => "Women",
        }
    }

    /// Home screen heading for this tab
    pub fn heading(self) -> &'static str {
        match self {
            Self::Male => "Grooming & Style",
            Self::Female => "Beauty & Wellness",
        }
    }
}

/// Service category tag.
///
/// Salon services use `men`, `women` and `packages`; at-home services use
/// `bridal`, `hair`, `skin`, `nails` and `packages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ServiceCategory {
    Men,
    Women,
    Packages,
    Bridal,
    Hair,
    Skin,
    Nails,
}

/// Status of a past or upcoming booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BookingStatus {
    Upcoming,
    Completed,
    Cancelled,
}

/// Tabs on the salon detail screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SalonTab {
    #[default]
    Services,
    About,
    Reviews,
    Gallery,
}

/// Service list tabs inside the salon services tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SalonServiceTab {
    #[default]
    Men,
    Women,
    Packages,
}

impl SalonServiceTab {
    /// Category of the services listed under this tab
    pub fn category(self) -> ServiceCategory {
        match self {
            Self::Men => ServiceCategory::Men,
            Self::Women => ServiceCategory::Women,
            Self::Packages => ServiceCategory::Packages,
        }
    }
}

/// Tabs on the at-home artist profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum ArtistTab {
    #[default]
    #[strum(serialize = "services")]
    Services,
    #[strum(serialize = "reviews")]
    Reviews,
    #[strum(serialize = "Before & After")]
    Portfolio,
}

/// Move to the next variant of an iterable enum, wrapping around.
pub fn cycle_next<T>(current: T) -> T
where
    T: strum::IntoEnumIterator + PartialEq + Copy,
{
    let all: Vec<T> = T::iter().collect();
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(idx + 1) % all.len()]
}

/// Move to the previous variant of an iterable enum, wrapping around.
pub fn cycle_previous<T>(current: T) -> T
where
    T: strum::IntoEnumIterator + PartialEq + Copy,
{
    let all: Vec<T> = T::iter().collect();
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(idx + all.len() - 1) % all.len()]
}
