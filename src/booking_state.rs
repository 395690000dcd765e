//! At-home booking state machine
//!
//! This module is the single source of truth for the at-home booking flow.
//! It owns the current step, the date/time selection, the checklist and the
//! cart handed over from the artist profile, and it refuses transitions whose
//! preconditions are not met.
//!
//! # Step Flow
//!
//! ```text
//! DateTime  --(time slot chosen)-->  Checklist  --(all items checked)-->  Summary
//!    |                                   |                                   |
//!    +-- back: exit flow                 +-- back: DateTime                  +-- back: Checklist
//!                                                                            |
//!                                                              confirm: Confirmed (terminal)
//! ```
//!
//! Backward navigation is always allowed until the booking is confirmed.
//! Confirmation is simulated and cannot fail.

use crate::cart::{CartLine, CartStore};
use crate::catalog::{
    time_slot, Artist, ChecklistItem, TimeSlot, BOOKING_WINDOW_DAYS, ENVIRONMENT_CHECKLIST,
    TIME_SLOTS,
};
use crate::pricing::PriceBreakdown;
use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Delay before the confirmed booking screen hands over to the bookings list
pub const CONFIRMATION_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// Steps of the at-home booking flow in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BookingStep {
    /// Pick a date and an available time slot
    DateTime = 0,
    /// Acknowledge every environment requirement
    Checklist = 1,
    /// Review and confirm
    Summary = 2,
}

impl BookingStep {
    /// Numeric order of this step (0-2)
    #[inline]
    pub const fn order(self) -> u8 {
        self as u8
    }

    /// 1-indexed step number for display
    #[inline]
    pub const fn step_number(self) -> usize {
        self as usize + 1
    }

    /// Next step, or None at the summary
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::DateTime => Some(Self::Checklist),
            Self::Checklist => Some(Self::Summary),
            Self::Summary => None,
        }
    }

    /// Previous step, or None at the first step (back exits the flow)
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::DateTime => None,
            Self::Checklist => Some(Self::DateTime),
            Self::Summary => Some(Self::Checklist),
        }
    }

    /// Header title for this step
    pub const fn title(self) -> &'static str {
        match self {
            Self::DateTime => "Select Date & Time",
            Self::Checklist => "Home Checklist",
            Self::Summary => "Booking Summary",
        }
    }

    /// All steps in order
    pub const fn all_steps() -> &'static [Self] {
        &[Self::DateTime, Self::Checklist, Self::Summary]
    }

    /// Total number of steps
    pub const TOTAL_STEPS: usize = 3;
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// How a step relates to the current one, for the step indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

/// Reasons a booking action is refused.
///
/// None of these are user-facing failures: the UI renders them as disabled
/// actions and leaves state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingTransitionError {
    /// Continue pressed on the date/time step with no slot chosen
    #[error("Select a time slot to continue")]
    MissingTimeSlot,

    /// The chosen slot is listed but not bookable
    #[error("Time slot {slot} is unavailable")]
    SlotUnavailable { slot: String },

    /// The slot label is not one of the candidate slots
    #[error("Unknown time slot {slot}")]
    UnknownSlot { slot: String },

    /// The date lies outside the booking window
    #[error("Date {date} is outside the {BOOKING_WINDOW_DAYS}-day booking window")]
    DateOutOfRange { date: NaiveDate },

    /// Continue pressed on the checklist step before every item is checked
    #[error("Complete the checklist to continue ({checked}/{total} checked)")]
    ChecklistIncomplete { checked: usize, total: usize },

    /// Checklist id not present in the checklist
    #[error("Unknown checklist item {id}")]
    UnknownChecklistItem { id: String },

    /// Action belongs to a different step
    #[error("Action belongs to step {expected}, current step is {actual}")]
    WrongStep {
        expected: BookingStep,
        actual: BookingStep,
    },

    /// Continue pressed on the summary (use confirm instead)
    #[error("Already at the final step")]
    AtFinalStep,

    /// Any edit after confirmation
    #[error("Booking is already confirmed")]
    AlreadyConfirmed,
}

/// Result of pressing back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// Moved to an earlier step
    Step(BookingStep),
    /// Back on the first step leaves the booking flow
    ExitFlow,
}

/// Acknowledgment produced by a successful confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub artist_name: &'static str,
    pub date: NaiveDate,
    pub time: &'static str,
    pub breakdown: PriceBreakdown,
    /// How long to show the acknowledgment before moving to the bookings list
    pub redirect_after: Duration,
}

impl Confirmation {
    /// One-line recap, e.g. `Nisha Kapoor • Oct 18, 2026 • 10:00 AM`
    pub fn recap(&self) -> String {
        format!(
            "{} • {} • {}",
            self.artist_name,
            self.date.format("%b %-d, %Y"),
            self.time
        )
    }
}

/// State of one at-home booking session.
///
/// Created when the booking screen is entered and dropped when the user
/// navigates away.
///
/// # Example
///
/// ```
/// use salontui::booking_state::{BookingStep, BookingWizard};
/// use salontui::cart::CartStore;
/// use salontui::catalog::ARTISTS;
/// use chrono::NaiveDate;
///
/// let artist = &ARTISTS[0];
/// let mut cart = CartStore::new(artist.services);
/// cart.add("h3");
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// let mut wizard = BookingWizard::new(artist, cart, today);
///
/// // Cannot continue without a time slot
/// assert!(wizard.advance().is_err());
///
/// wizard.select_time("10:00 AM").unwrap();
/// assert_eq!(wizard.advance().unwrap(), BookingStep::Checklist);
/// ```
#[derive(Debug, Clone)]
pub struct BookingWizard<'a> {
    artist: &'a Artist,
    cart: CartStore<'a>,
    today: NaiveDate,
    step: BookingStep,
    selected_date: NaiveDate,
    selected_time: Option<&'static str>,
    /// Checked state keyed by checklist id
    checked: BTreeMap<&'static str, bool>,
    confirmed: bool,
}

impl<'a> BookingWizard<'a> {
    /// Start a booking session for `artist` with the cart from the profile.
    ///
    /// The selected date defaults to `today`.
    pub fn new(artist: &'a Artist, cart: CartStore<'a>, today: NaiveDate) -> Self {
        info!(artist = artist.id, services = cart.count(), "booking session started");
        Self {
            artist,
            cart,
            today,
            step: BookingStep::DateTime,
            selected_date: today,
            selected_time: None,
            checked: BTreeMap::new(),
            confirmed: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn artist(&self) -> &'a Artist {
        self.artist
    }

    #[inline]
    pub fn cart(&self) -> &CartStore<'a> {
        &self.cart
    }

    #[inline]
    pub fn step(&self) -> BookingStep {
        self.step
    }

    #[inline]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    #[inline]
    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    #[inline]
    pub fn selected_time(&self) -> Option<&'static str> {
        self.selected_time
    }

    #[inline]
    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Services in the cart resolved against the artist's catalog
    pub fn lines(&self) -> Vec<CartLine<'a>> {
        self.cart.lines()
    }

    /// Candidate time slots
    pub fn time_slots(&self) -> &'static [TimeSlot] {
        TIME_SLOTS
    }

    /// Checklist items to acknowledge
    pub fn checklist(&self) -> &'static [ChecklistItem] {
        ENVIRONMENT_CHECKLIST
    }

    /// The bookable dates: today and the following days of the window
    pub fn booking_dates(&self) -> Vec<NaiveDate> {
        (0..u64::from(BOOKING_WINDOW_DAYS))
            .filter_map(|offset| self.today.checked_add_days(Days::new(offset)))
            .collect()
    }

    /// Status of `step` relative to the current step
    pub fn step_status(&self, step: BookingStep) -> StepStatus {
        if self.confirmed || step < self.step {
            StepStatus::Completed
        } else if step == self.step {
            StepStatus::Active
        } else {
            StepStatus::Pending
        }
    }

    // =========================================================================
    // Date & time step
    // =========================================================================

    /// Choose a date within the booking window.
    ///
    /// # Errors
    ///
    /// - `DateOutOfRange` if the date is before today or past the window
    /// - `WrongStep` / `AlreadyConfirmed` outside the date/time step
    pub fn select_date(&mut self, date: NaiveDate) -> Result<NaiveDate, BookingTransitionError> {
        self.ensure_step(BookingStep::DateTime)?;
        if !self.booking_dates().contains(&date) {
            return Err(BookingTransitionError::DateOutOfRange { date });
        }
        self.selected_date = date;
        Ok(date)
    }

    /// Move the date selection by `offset` days, clamped to the window.
    pub fn shift_date(&mut self, offset: i64) -> Result<NaiveDate, BookingTransitionError> {
        self.ensure_step(BookingStep::DateTime)?;
        let dates = self.booking_dates();
        let current = dates
            .iter()
            .position(|d| *d == self.selected_date)
            .unwrap_or(0) as i64;
        let last = dates.len().saturating_sub(1) as i64;
        let target = (current + offset).clamp(0, last) as usize;
        match dates.get(target) {
            Some(date) => self.select_date(*date),
            None => Ok(self.selected_date),
        }
    }

    /// Choose a time slot by label.
    ///
    /// Selecting an unavailable slot leaves the current selection unchanged.
    ///
    /// # Errors
    ///
    /// - `SlotUnavailable` for a listed but disabled slot
    /// - `UnknownSlot` for a label that is not a candidate slot
    /// - `WrongStep` / `AlreadyConfirmed` outside the date/time step
    pub fn select_time(&mut self, label: &str) -> Result<&'static str, BookingTransitionError> {
        self.ensure_step(BookingStep::DateTime)?;
        let slot = time_slot(label).ok_or_else(|| BookingTransitionError::UnknownSlot {
            slot: label.to_string(),
        })?;
        if !slot.available {
            return Err(BookingTransitionError::SlotUnavailable {
                slot: label.to_string(),
            });
        }
        self.selected_time = Some(slot.label);
        Ok(slot.label)
    }

    // =========================================================================
    // Checklist step
    // =========================================================================

    /// Flip the checked state of one checklist item, returning the new state.
    pub fn toggle_check(&mut self, id: &str) -> Result<bool, BookingTransitionError> {
        self.ensure_step(BookingStep::Checklist)?;
        let item = ENVIRONMENT_CHECKLIST
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| BookingTransitionError::UnknownChecklistItem { id: id.to_string() })?;
        let state = self.checked.entry(item.id).or_insert(false);
        *state = !*state;
        Ok(*state)
    }

    /// Whether an item is currently checked
    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.get(id).copied().unwrap_or(false)
    }

    /// Number of checked items
    pub fn checked_count(&self) -> usize {
        ENVIRONMENT_CHECKLIST
            .iter()
            .filter(|i| self.is_checked(i.id))
            .count()
    }

    /// Number of items still to check
    pub fn remaining(&self) -> usize {
        ENVIRONMENT_CHECKLIST.len() - self.checked_count()
    }

    /// Whether every checklist item is checked
    pub fn all_checked(&self) -> bool {
        ENVIRONMENT_CHECKLIST.iter().all(|i| self.is_checked(i.id))
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Whether the continue action of the current step is enabled
    pub fn can_continue(&self) -> bool {
        if self.confirmed {
            return false;
        }
        match self.step {
            BookingStep::DateTime => self.selected_time.is_some(),
            BookingStep::Checklist => self.all_checked(),
            BookingStep::Summary => true,
        }
    }

    /// Label of the sticky action button for the current step
    pub fn continue_label(&self) -> String {
        match self.step {
            BookingStep::DateTime => "Continue".to_string(),
            BookingStep::Checklist if self.all_checked() => "Continue to Summary".to_string(),
            BookingStep::Checklist => format!(
                "Complete Checklist ({}/{})",
                self.checked_count(),
                ENVIRONMENT_CHECKLIST.len()
            ),
            BookingStep::Summary => {
                format!("Confirm Booking • ₹{}", self.price_breakdown().total)
            }
        }
    }

    /// Advance to the next step if the current step is complete.
    ///
    /// # Errors
    ///
    /// - `MissingTimeSlot` on the date/time step without a slot
    /// - `ChecklistIncomplete` on the checklist step with unchecked items
    /// - `AtFinalStep` on the summary (use `confirm`)
    /// - `AlreadyConfirmed` after confirmation
    pub fn advance(&mut self) -> Result<BookingStep, BookingTransitionError> {
        if self.confirmed {
            return Err(BookingTransitionError::AlreadyConfirmed);
        }
        match self.step {
            BookingStep::DateTime if self.selected_time.is_none() => {
                return Err(BookingTransitionError::MissingTimeSlot);
            }
            BookingStep::Checklist if !self.all_checked() => {
                return Err(BookingTransitionError::ChecklistIncomplete {
                    checked: self.checked_count(),
                    total: ENVIRONMENT_CHECKLIST.len(),
                });
            }
            _ => {}
        }
        let next = self.step.next().ok_or(BookingTransitionError::AtFinalStep)?;
        self.enter(next);
        Ok(next)
    }

    /// Go back one step, or signal that the flow should be left.
    pub fn back(&mut self) -> Result<BackOutcome, BookingTransitionError> {
        if self.confirmed {
            return Err(BookingTransitionError::AlreadyConfirmed);
        }
        match self.step.previous() {
            Some(previous) => {
                self.enter(previous);
                Ok(BackOutcome::Step(previous))
            }
            None => {
                info!(artist = self.artist.id, "booking flow exited");
                Ok(BackOutcome::ExitFlow)
            }
        }
    }

    /// Price breakdown for the current cart and the artist's travel fee
    pub fn price_breakdown(&self) -> PriceBreakdown {
        PriceBreakdown::for_cart(&self.cart, self.artist.travel_fee)
    }

    /// Confirm the booking from the summary step.
    ///
    /// Confirmation is simulated: it always succeeds from the summary and
    /// freezes the session.
    pub fn confirm(&mut self) -> Result<Confirmation, BookingTransitionError> {
        self.ensure_step(BookingStep::Summary)?;
        // ensure_step already rules out a missing slot on the summary step,
        // since the summary is only reachable through the date/time gate.
        let time = self
            .selected_time
            .ok_or(BookingTransitionError::MissingTimeSlot)?;
        self.confirmed = true;
        let confirmation = Confirmation {
            artist_name: self.artist.name,
            date: self.selected_date,
            time,
            breakdown: self.price_breakdown(),
            redirect_after: CONFIRMATION_REDIRECT_DELAY,
        };
        info!(
            artist = self.artist.id,
            date = %confirmation.date,
            time = confirmation.time,
            total = confirmation.breakdown.total,
            "at-home booking confirmed"
        );
        Ok(confirmation)
    }

    fn ensure_step(&self, expected: BookingStep) -> Result<(), BookingTransitionError> {
        if self.confirmed {
            return Err(BookingTransitionError::AlreadyConfirmed);
        }
        if self.step != expected {
            return Err(BookingTransitionError::WrongStep {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }

    fn enter(&mut self, step: BookingStep) {
        info!(from = %self.step, to = %step, "booking step transition");
        self.step = step;
    }
}

impl From<BookingTransitionError> for crate::error::SalonTuiError {
    fn from(err: BookingTransitionError) -> Self {
        crate::error::SalonTuiError::BookingTransition(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ARTISTS;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn wizard() -> BookingWizard<'static> {
        let artist = &ARTISTS[0];
        let mut cart = CartStore::new(artist.services);
        cart.add("h3");
        cart.add("h4");
        BookingWizard::new(artist, cart, today())
    }

    fn check_all(w: &mut BookingWizard<'_>) {
        for item in ENVIRONMENT_CHECKLIST {
            if !w.is_checked(item.id) {
                w.toggle_check(item.id).unwrap();
            }
        }
    }

    // =========================================================================
    // BookingStep Tests
    // =========================================================================

    #[test]
    fn test_step_order_is_sequential() {
        for (i, step) in BookingStep::all_steps().iter().enumerate() {
            assert_eq!(step.order() as usize, i);
            assert_eq!(step.step_number(), i + 1);
        }
        assert_eq!(BookingStep::all_steps().len(), BookingStep::TOTAL_STEPS);
    }

    #[test]
    fn test_step_chain() {
        assert_eq!(BookingStep::DateTime.next(), Some(BookingStep::Checklist));
        assert_eq!(BookingStep::Summary.next(), None);
        assert_eq!(BookingStep::Summary.previous(), Some(BookingStep::Checklist));
        assert_eq!(BookingStep::DateTime.previous(), None);
    }

    #[test]
    fn test_step_display() {
        assert_eq!(BookingStep::Checklist.to_string(), "Home Checklist");
    }

    // =========================================================================
    // Date & time
    // =========================================================================

    #[test]
    fn test_defaults() {
        let w = wizard();
        assert_eq!(w.step(), BookingStep::DateTime);
        assert_eq!(w.selected_date(), today());
        assert!(w.selected_time().is_none());
        assert!(!w.can_continue());
    }

    #[test]
    fn test_booking_window_is_fourteen_days() {
        let w = wizard();
        let dates = w.booking_dates();
        assert_eq!(dates.len(), 14);
        assert_eq!(dates[0], today());
        assert_eq!(dates[13], NaiveDate::from_ymd_opt(2026, 10, 31).unwrap());
    }

    #[test]
    fn test_select_date_outside_window_rejected() {
        let mut w = wizard();
        let past = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let far = NaiveDate::from_ymd_opt(2026, 11, 1).unwrap();
        assert!(matches!(
            w.select_date(past),
            Err(BookingTransitionError::DateOutOfRange { .. })
        ));
        assert!(w.select_date(far).is_err());
        assert_eq!(w.selected_date(), today());
    }

    #[test]
    fn test_shift_date_clamps() {
        let mut w = wizard();
        assert_eq!(w.shift_date(-1).unwrap(), today());
        assert_eq!(
            w.shift_date(3).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 21).unwrap()
        );
        assert_eq!(
            w.shift_date(100).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 31).unwrap()
        );
    }

    #[test]
    fn test_unavailable_slot_keeps_selection() {
        let mut w = wizard();
        w.select_time("10:00 AM").unwrap();
        let err = w.select_time("12:30 PM").unwrap_err();
        assert_eq!(
            err,
            BookingTransitionError::SlotUnavailable {
                slot: "12:30 PM".to_string()
            }
        );
        assert_eq!(w.selected_time(), Some("10:00 AM"));
    }

    #[test]
    fn test_unknown_slot_rejected() {
        let mut w = wizard();
        assert!(matches!(
            w.select_time("1:00 PM"),
            Err(BookingTransitionError::UnknownSlot { .. })
        ));
        assert!(w.selected_time().is_none());
    }

    #[test]
    fn test_cannot_advance_without_slot() {
        let mut w = wizard();
        assert_eq!(w.advance(), Err(BookingTransitionError::MissingTimeSlot));
        assert_eq!(w.step(), BookingStep::DateTime);
    }

    #[test]
    fn test_back_from_first_step_exits() {
        let mut w = wizard();
        assert_eq!(w.back().unwrap(), BackOutcome::ExitFlow);
        assert_eq!(w.step(), BookingStep::DateTime);
    }

    // =========================================================================
    // Checklist
    // =========================================================================

    #[test]
    fn test_checklist_gate() {
        let mut w = wizard();
        w.select_time("9:00 AM").unwrap();
        w.advance().unwrap();

        assert_eq!(w.continue_label(), "Complete Checklist (0/5)");
        let err = w.advance().unwrap_err();
        assert_eq!(
            err,
            BookingTransitionError::ChecklistIncomplete {
                checked: 0,
                total: 5
            }
        );

        check_all(&mut w);
        assert!(w.can_continue());
        assert_eq!(w.continue_label(), "Continue to Summary");

        // Unchecking one item disables continue again
        assert!(!w.toggle_check("power").unwrap());
        assert!(!w.can_continue());
        assert_eq!(w.remaining(), 1);
        assert_eq!(w.continue_label(), "Complete Checklist (4/5)");
    }

    #[test]
    fn test_checklist_toggle_only_on_checklist_step() {
        let mut w = wizard();
        assert!(matches!(
            w.toggle_check("space"),
            Err(BookingTransitionError::WrongStep { .. })
        ));
    }

    #[test]
    fn test_slot_cannot_change_outside_datetime_step() {
        let mut w = wizard();
        w.select_time("9:00 AM").unwrap();
        w.advance().unwrap();
        assert!(w.select_time("10:00 AM").is_err());
        assert_eq!(w.selected_time(), Some("9:00 AM"));
    }

    #[test]
    fn test_checked_state_survives_back_navigation() {
        let mut w = wizard();
        w.select_time("9:00 AM").unwrap();
        w.advance().unwrap();
        w.toggle_check("space").unwrap();
        assert_eq!(w.back().unwrap(), BackOutcome::Step(BookingStep::DateTime));
        w.advance().unwrap();
        assert!(w.is_checked("space"));
    }

    // =========================================================================
    // Summary & confirmation
    // =========================================================================

    #[test]
    fn test_full_flow_and_confirm() {
        let mut w = wizard();
        w.select_time("11:00 AM").unwrap();
        w.advance().unwrap();
        check_all(&mut w);
        assert_eq!(w.advance().unwrap(), BookingStep::Summary);
        assert_eq!(w.advance(), Err(BookingTransitionError::AtFinalStep));

        // h3 (799) + h4 (1499) = 2298, travel 149, tax round(0.18 * 2447) = 440
        let breakdown = w.price_breakdown();
        assert_eq!(breakdown.subtotal, 2298);
        assert_eq!(breakdown.travel_fee, 149);
        assert_eq!(breakdown.tax, 440);
        assert_eq!(breakdown.total, 2887);
        assert_eq!(w.continue_label(), "Confirm Booking • ₹2887");

        let confirmation = w.confirm().unwrap();
        assert!(w.is_confirmed());
        assert_eq!(confirmation.time, "11:00 AM");
        assert_eq!(confirmation.redirect_after, CONFIRMATION_REDIRECT_DELAY);
        assert_eq!(confirmation.recap(), "Nisha Kapoor • Oct 18, 2026 • 11:00 AM");
    }

    #[test]
    fn test_no_edits_after_confirmation() {
        let mut w = wizard();
        w.select_time("11:00 AM").unwrap();
        w.advance().unwrap();
        check_all(&mut w);
        w.advance().unwrap();
        w.confirm().unwrap();

        assert_eq!(w.back(), Err(BookingTransitionError::AlreadyConfirmed));
        assert_eq!(w.advance(), Err(BookingTransitionError::AlreadyConfirmed));
        assert_eq!(w.confirm(), Err(BookingTransitionError::AlreadyConfirmed));
        assert!(!w.can_continue());
        for step in BookingStep::all_steps() {
            assert_eq!(w.step_status(*step), StepStatus::Completed);
        }
    }

    #[test]
    fn test_confirm_only_from_summary() {
        let mut w = wizard();
        assert!(matches!(
            w.confirm(),
            Err(BookingTransitionError::WrongStep { .. })
        ));
        assert!(!w.is_confirmed());
    }

    #[test]
    fn test_step_status_indicator() {
        let mut w = wizard();
        w.select_time("9:00 AM").unwrap();
        w.advance().unwrap();
        assert_eq!(w.step_status(BookingStep::DateTime), StepStatus::Completed);
        assert_eq!(w.step_status(BookingStep::Checklist), StepStatus::Active);
        assert_eq!(w.step_status(BookingStep::Summary), StepStatus::Pending);
    }

    #[test]
    fn test_back_then_advance_keeps_selection() {
        let mut w = wizard();
        w.select_time("9:00 AM").unwrap();
        w.advance().unwrap();
        w.back().unwrap();
        assert_eq!(w.step(), BookingStep::DateTime);
        assert_eq!(w.selected_time(), Some("9:00 AM"));
        w.advance().unwrap();
        assert_eq!(w.step(), BookingStep::Checklist);
    }

    #[test]
    fn test_error_display() {
        let err = BookingTransitionError::ChecklistIncomplete {
            checked: 2,
            total: 5,
        };
        assert_eq!(
            err.to_string(),
            "Complete the checklist to continue (2/5 checked)"
        );
        let err = BookingTransitionError::SlotUnavailable {
            slot: "3:30 PM".to_string(),
        };
        assert!(err.to_string().contains("3:30 PM"));
    }
}
