//! SalonTUI Library
//!
//! Salon discovery, at-home artist booking and the terminal UI that drives
//! them. The catalog is static demo data; nothing is sent anywhere.

pub mod app;
pub mod booking_state;
pub mod cart;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod preferences;
pub mod pricing;
pub mod routes;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use booking_state::{
    BackOutcome, BookingStep, BookingTransitionError, BookingWizard, Confirmation, StepStatus,
};
pub use cart::{CartLine, CartStore};
pub use discovery::SearchResults;
pub use error::SalonTuiError;
pub use preferences::Preferences;
pub use pricing::{PriceBreakdown, Quote};
pub use routes::{NavTab, Route};
pub use types::{ArtistTab, BookingStatus, Gender, SalonServiceTab, SalonTab, ServiceCategory};
