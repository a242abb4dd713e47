//! # Actions
//!
//! Everything that can happen in the booking journey becomes an `Action`.
//! The guest submits the search form? That's `Action::SubmitSearch`.
//! The reservation call resolves? That's `Action::SearchCompleted`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the snapshot, and returns the async work to start as data, not as a
//! side effect. I/O happens elsewhere (the engine executes effects against
//! a provider and feeds the completion actions back in).
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! This makes every transition testable without constructing any view, and
//! debuggable: log every action, replay the exact journey.
//!
//! Completion actions carry the request token that was current when their
//! effect was issued. `update()` drops a completion whose token has been
//! superseded, the only way a dangling continuation could otherwise write
//! into a snapshot the guest has since reset.

use log::{debug, info, warn};

use crate::core::booking::{
    BookingDetails, ConfirmationDetails, SearchCriteria, validate_submission,
};
use crate::core::catalog::Hotel;
use crate::core::state::{App, RequestToken, Screen};

/// A journey operation or a completion of one.
#[derive(Debug, Clone)]
pub enum Action {
    /// Guest submitted the search form (or a destination shortcut).
    SubmitSearch(SearchCriteria),
    /// The search call resolved.
    SearchCompleted {
        token: RequestToken,
        hotels: Vec<Hotel>,
    },
    /// Guest opened a hotel from the results list.
    SelectHotel(Hotel),
    /// Guest hit "Book now", possibly on a different hotel than the one
    /// currently selected.
    BookNow(Hotel),
    /// Guest submitted the booking form.
    SubmitBooking(BookingDetails),
    /// The booking call resolved.
    BookingConfirmed {
        token: RequestToken,
        confirmation: ConfirmationDetails,
    },
    GoHome,
    GoToDestinations,
    GoToAbout,
    GoToContact,
    GoBackToResults,
    GoBackToDetails,
}

/// Async work for the engine to start. Each effect is stamped with the token
/// its completion must present.
#[derive(Debug, Clone)]
pub enum Effect {
    Search {
        token: RequestToken,
        criteria: SearchCriteria,
    },
    ConfirmBooking {
        token: RequestToken,
        hotel: Hotel,
        details: BookingDetails,
    },
}

/// Applies one action to the snapshot. Returns the effect to start, if any.
pub fn update(app: &mut App, action: Action) -> Option<Effect> {
    match action {
        Action::SubmitSearch(criteria) => {
            info!("Search submitted: city={:?}, guests={}", criteria.city, criteria.guests);
            app.search_criteria = Some(criteria.clone());
            app.is_loading = true;
            let token = app.next_token();
            Some(Effect::Search { token, criteria })
        }

        Action::SearchCompleted { token, hotels } => {
            if !app.token_is_current(token) {
                debug!("Dropping stale search completion (token {token})");
                return None;
            }
            info!("Search completed: {} result(s)", hotels.len());
            app.hotel_results = hotels;
            app.is_loading = false;
            app.set_screen(Screen::Results);
            None
        }

        Action::SelectHotel(hotel) => {
            debug!("Hotel selected: {}", hotel.id);
            app.selected_hotel = Some(hotel);
            app.set_screen(Screen::Details);
            None
        }

        Action::BookNow(hotel) => {
            debug!("Book now: {}", hotel.id);
            app.selected_hotel = Some(hotel);
            // The booking form starts empty every time the screen mounts.
            app.booking_details = Some(BookingDetails::default());
            app.form_errors = Default::default();
            app.set_screen(Screen::Booking);
            None
        }

        Action::SubmitBooking(details) => {
            // A quote exists only when both the criteria and a selection do.
            let Some(quote) = app.quote() else {
                // Unreachable through normal navigation. Not an error;
                // recover the same way the render guard does.
                warn!("Booking submitted without a selection and criteria, redirecting home");
                app.set_screen(Screen::Home);
                return None;
            };

            let errors = validate_submission(&details, &quote);
            if !errors.is_empty() {
                info!("Booking submission rejected: {} field error(s)", errors.len());
                app.form_errors = errors;
                return None;
            }

            info!("Booking submitted for {} night(s), total {:.2}", quote.nights, quote.total_cost);
            let hotel = app.selected_hotel.clone().expect("quote implies a selection");
            app.booking_details = Some(details.clone());
            app.form_errors = Default::default();
            app.is_loading = true;
            let token = app.next_token();
            Some(Effect::ConfirmBooking { token, hotel, details })
        }

        Action::BookingConfirmed { token, confirmation } => {
            if !app.token_is_current(token) {
                debug!("Dropping stale booking confirmation (token {token})");
                return None;
            }
            info!("Booking confirmed: {}", confirmation.booking_id);
            app.confirmation = Some(confirmation);
            app.is_loading = false;
            app.set_screen(Screen::Confirmation);
            None
        }

        Action::GoHome => {
            app.reset_journey();
            app.invalidate_inflight();
            app.set_screen(Screen::Home);
            None
        }

        Action::GoToDestinations => {
            app.set_screen(Screen::Destinations);
            None
        }

        Action::GoToAbout => {
            app.set_screen(Screen::About);
            None
        }

        Action::GoToContact => {
            app.set_screen(Screen::Contact);
            None
        }

        Action::GoBackToResults => {
            app.selected_hotel = None;
            app.set_screen(Screen::Results);
            None
        }

        Action::GoBackToDetails => {
            app.set_screen(Screen::Details);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::booking::FormField;
    use crate::core::catalog::Catalog;
    use crate::test_support::{paris_criteria, valid_booking_details};

    fn paris_hotel() -> Hotel {
        Catalog::demo().filter_by_city("Paris").remove(0)
    }

    /// Drives the app to Results with the demo Paris hotels, applying the
    /// search completion by hand the way the engine would.
    fn app_at_results() -> App {
        let mut app = App::new();
        let effect = update(&mut app, Action::SubmitSearch(paris_criteria()));
        let Some(Effect::Search { token, criteria }) = effect else {
            panic!("search must issue an effect");
        };
        let hotels = Catalog::demo().filter_by_city(&criteria.city);
        update(&mut app, Action::SearchCompleted { token, hotels });
        app
    }

    #[test]
    fn test_search_issues_effect_and_stays_put() {
        let mut app = App::new();
        let effect = update(&mut app, Action::SubmitSearch(paris_criteria()));
        assert!(matches!(effect, Some(Effect::Search { .. })));
        assert!(app.is_loading);
        // The transition happens in the continuation, never speculatively.
        assert_eq!(app.screen(), Screen::Home);
    }

    #[test]
    fn test_search_completion_lands_on_results() {
        let app = app_at_results();
        assert_eq!(app.screen(), Screen::Results);
        assert_eq!(app.hotel_results.len(), 2);
        assert!(!app.is_loading);
    }

    #[test]
    fn test_empty_search_still_lands_on_results() {
        let mut app = App::new();
        let mut criteria = paris_criteria();
        criteria.city = "Atlantis".to_string();
        let Some(Effect::Search { token, .. }) = update(&mut app, Action::SubmitSearch(criteria))
        else {
            panic!("search must issue an effect");
        };
        update(&mut app, Action::SearchCompleted { token, hotels: vec![] });
        assert_eq!(app.screen(), Screen::Results);
        assert!(app.hotel_results.is_empty());
    }

    #[test]
    fn test_select_hotel_opens_details() {
        let mut app = app_at_results();
        update(&mut app, Action::SelectHotel(paris_hotel()));
        assert_eq!(app.screen(), Screen::Details);
        assert_eq!(app.selected_hotel.as_ref().unwrap().city, "Paris");
    }

    #[test]
    fn test_book_now_opens_booking_with_empty_draft() {
        let mut app = app_at_results();
        update(&mut app, Action::BookNow(paris_hotel()));
        assert_eq!(app.screen(), Screen::Booking);
        assert_eq!(app.booking_details, Some(BookingDetails::default()));
    }

    #[test]
    fn test_book_now_may_replace_selection() {
        let mut app = app_at_results();
        let first = app.hotel_results[0].clone();
        update(&mut app, Action::SelectHotel(first));
        let other = app.hotel_results[1].clone();
        update(&mut app, Action::BookNow(other.clone()));
        assert_eq!(app.selected_hotel.as_ref().unwrap().id, other.id);
    }

    #[test]
    fn test_invalid_submission_stays_in_booking() {
        let mut app = app_at_results();
        update(&mut app, Action::BookNow(paris_hotel()));
        let effect = update(&mut app, Action::SubmitBooking(BookingDetails::default()));
        assert!(effect.is_none(), "no effect may run before validation passes");
        assert_eq!(app.screen(), Screen::Booking);
        assert!(!app.form_errors.is_empty());
        assert!(!app.is_loading);
    }

    #[test]
    fn test_single_bad_field_blocks_submission() {
        let mut app = app_at_results();
        update(&mut app, Action::BookNow(paris_hotel()));
        let mut details = valid_booking_details();
        details.payment.cvv = "12".to_string();
        let effect = update(&mut app, Action::SubmitBooking(details));
        assert!(effect.is_none());
        assert!(app.form_errors.message(FormField::Cvv).is_some());
        assert_eq!(app.form_errors.len(), 1);
    }

    #[test]
    fn test_valid_submission_confirms() {
        let mut app = app_at_results();
        update(&mut app, Action::BookNow(paris_hotel()));
        let Some(Effect::ConfirmBooking { token, hotel, details }) =
            update(&mut app, Action::SubmitBooking(valid_booking_details()))
        else {
            panic!("valid submission must issue an effect");
        };
        assert!(app.is_loading);

        let confirmation = ConfirmationDetails {
            booking_id: crate::core::booking::generate_booking_id(),
            hotel,
            booking_details: details,
        };
        update(&mut app, Action::BookingConfirmed { token, confirmation });
        assert_eq!(app.screen(), Screen::Confirmation);
        let record = app.confirmation.as_ref().unwrap();
        assert!(record.booking_id.starts_with("GS"));
        assert!(!app.is_loading);
    }

    #[test]
    fn test_submission_without_preconditions_redirects_home() {
        let mut app = App::new();
        let effect = update(&mut app, Action::SubmitBooking(valid_booking_details()));
        assert!(effect.is_none());
        assert_eq!(app.screen(), Screen::Home);
    }

    #[test]
    fn test_go_home_resets_from_any_state() {
        let mut app = app_at_results();
        update(&mut app, Action::BookNow(paris_hotel()));
        update(&mut app, Action::GoHome);
        assert_eq!(app.screen(), Screen::Home);
        assert!(app.search_criteria.is_none());
        assert!(app.hotel_results.is_empty());
        assert!(app.selected_hotel.is_none());
        assert!(app.booking_details.is_none());
        assert!(app.confirmation.is_none());

        // Idempotent: a second GoHome changes nothing.
        update(&mut app, Action::GoHome);
        assert_eq!(app.screen(), Screen::Home);
        assert!(app.search_criteria.is_none());
    }

    #[test]
    fn test_stale_search_completion_is_dropped() {
        let mut app = App::new();
        let Some(Effect::Search { token, .. }) =
            update(&mut app, Action::SubmitSearch(paris_criteria()))
        else {
            panic!("search must issue an effect");
        };

        // Guest resets mid-flight; the dangling continuation must not land.
        update(&mut app, Action::GoHome);
        update(
            &mut app,
            Action::SearchCompleted { token, hotels: Catalog::demo().hotels().to_vec() },
        );

        assert_eq!(app.screen(), Screen::Home);
        assert!(app.hotel_results.is_empty());
        assert!(!app.is_loading);
    }

    #[test]
    fn test_newer_search_supersedes_older() {
        let mut app = App::new();
        let Some(Effect::Search { token: first, .. }) =
            update(&mut app, Action::SubmitSearch(paris_criteria()))
        else {
            panic!();
        };
        let mut tokyo = paris_criteria();
        tokyo.city = "Tokyo".to_string();
        let Some(Effect::Search { token: second, criteria }) =
            update(&mut app, Action::SubmitSearch(tokyo))
        else {
            panic!();
        };

        // First completion arrives late; only the second may land.
        update(
            &mut app,
            Action::SearchCompleted { token: first, hotels: Catalog::demo().hotels().to_vec() },
        );
        assert!(app.hotel_results.is_empty());

        let hotels = Catalog::demo().filter_by_city(&criteria.city);
        update(&mut app, Action::SearchCompleted { token: second, hotels });
        assert_eq!(app.hotel_results.len(), 1);
        assert_eq!(app.hotel_results[0].city, "Tokyo");
    }

    #[test]
    fn test_static_navigation() {
        let mut app = App::new();
        update(&mut app, Action::GoToDestinations);
        assert_eq!(app.screen(), Screen::Destinations);
        update(&mut app, Action::GoToAbout);
        assert_eq!(app.screen(), Screen::About);
        update(&mut app, Action::GoToContact);
        assert_eq!(app.screen(), Screen::Contact);
    }

    #[test]
    fn test_back_to_results_clears_selection() {
        let mut app = app_at_results();
        update(&mut app, Action::SelectHotel(paris_hotel()));
        update(&mut app, Action::GoBackToResults);
        assert_eq!(app.screen(), Screen::Results);
        assert!(app.selected_hotel.is_none());
    }

    #[test]
    fn test_back_to_details_keeps_selection() {
        let mut app = app_at_results();
        update(&mut app, Action::BookNow(paris_hotel()));
        update(&mut app, Action::GoBackToDetails);
        assert_eq!(app.screen(), Screen::Details);
        assert!(app.selected_hotel.is_some());
    }
}
