//! # Application State
//!
//! The single source of truth for the booking journey. This module contains
//! domain state only - no rendering concerns. Presentation layers hold a
//! read-only `&App` and dispatch Actions; nothing else may mutate the
//! snapshot.
//!
//! ```text
//! App
//! ├── screen (stored)              // where the journey last transitioned to
//! ├── search_criteria: Option      // set by SubmitSearch
//! ├── hotel_results: Vec<Hotel>    // set by SearchCompleted
//! ├── selected_hotel: Option       // set by SelectHotel / BookNow
//! ├── booking_details: Option      // draft created when Booking mounts
//! ├── confirmation: Option         // set by BookingConfirmed
//! ├── form_errors                  // last rejected submission, if any
//! ├── is_loading                   // an async operation is outstanding
//! └── request_seq                  // stale-continuation guard
//! ```
//!
//! Fields populate in strict dependency order: a confirmation requires
//! booking details and a selected hotel; the booking screen requires a
//! selection and criteria. `screen()` enforces this at render time.
//!
//! State changes only happen through `update(app, action)` in action.rs.

use log::warn;
use serde::Serialize;

use crate::core::booking::{
    BookingDetails, BookingQuote, ConfirmationDetails, SearchCriteria, ValidationErrors,
};
use crate::core::catalog::Hotel;

/// The eight mutually exclusive application screens. `Home` is initial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Screen {
    Home,
    Results,
    Details,
    Booking,
    Confirmation,
    Destinations,
    About,
    Contact,
}

/// Monotonic identity stamped on each async effect. A completion whose token
/// no longer matches the latest issued one is stale and must be discarded.
pub type RequestToken = u64;

pub struct App {
    screen: Screen,
    pub search_criteria: Option<SearchCriteria>,
    pub hotel_results: Vec<Hotel>,
    pub selected_hotel: Option<Hotel>,
    pub booking_details: Option<BookingDetails>,
    pub confirmation: Option<ConfirmationDetails>,
    pub form_errors: ValidationErrors,
    pub is_loading: bool,
    request_seq: RequestToken,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            screen: Screen::Home,
            search_criteria: None,
            hotel_results: Vec::new(),
            selected_hotel: None,
            booking_details: None,
            confirmation: None,
            form_errors: ValidationErrors::default(),
            is_loading: false,
            request_seq: 0,
        }
    }

    /// The screen a presentation layer should render.
    ///
    /// Falls back to `Home` when the stored screen requires data the snapshot
    /// does not hold; a defensive invariant, not a reachable path under
    /// normal transitions.
    pub fn screen(&self) -> Screen {
        let missing = match self.screen {
            Screen::Details => self.selected_hotel.is_none(),
            Screen::Booking => self.selected_hotel.is_none() || self.search_criteria.is_none(),
            Screen::Confirmation => self.confirmation.is_none(),
            _ => false,
        };
        if missing {
            warn!("{:?} entered without its required data, redirecting home", self.screen);
            return Screen::Home;
        }
        self.screen
    }

    pub(crate) fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    /// Nights and total cost for the current selection, when both the
    /// criteria and a selected hotel are present.
    pub fn quote(&self) -> Option<BookingQuote> {
        match (&self.search_criteria, &self.selected_hotel) {
            (Some(criteria), Some(hotel)) => Some(BookingQuote::new(criteria, hotel)),
            _ => None,
        }
    }

    /// The token a newly issued effect must carry.
    pub(crate) fn next_token(&mut self) -> RequestToken {
        self.request_seq += 1;
        self.request_seq
    }

    /// True when `token` is still the latest issued one.
    pub(crate) fn token_is_current(&self, token: RequestToken) -> bool {
        self.request_seq == token
    }

    /// Invalidates any outstanding continuation without issuing new work.
    pub(crate) fn invalidate_inflight(&mut self) {
        self.request_seq += 1;
    }

    /// Clears every piece of derived journey state. Used by `GoHome`.
    pub(crate) fn reset_journey(&mut self) {
        self.search_criteria = None;
        self.hotel_results.clear();
        self.selected_hotel = None;
        self.booking_details = None;
        self.confirmation = None;
        self.form_errors = ValidationErrors::default();
        self.is_loading = false;
    }
}
