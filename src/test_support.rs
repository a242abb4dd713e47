//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::time::Duration;

use crate::core::booking::{BookingDetails, PaymentDetails, SearchCriteria};
use crate::core::catalog::Catalog;
use crate::core::engine::Engine;
use crate::reservations::SimulatedProvider;

/// Three nights in Paris for two, against the demo catalog.
pub fn paris_criteria() -> SearchCriteria {
    SearchCriteria {
        city: "Paris".to_string(),
        check_in_date: "2024-01-01".parse().unwrap(),
        check_out_date: "2024-01-04".parse().unwrap(),
        guests: 2,
    }
}

/// A booking form that passes every validation rule.
pub fn valid_booking_details() -> BookingDetails {
    BookingDetails {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+44 20 7946 0000".to_string(),
        special_requests: String::new(),
        payment: PaymentDetails {
            card_number: "4242 4242 4242 4242".to_string(),
            expiry_date: "12/28".to_string(),
            cvv: "123".to_string(),
            card_holder: "Ada Lovelace".to_string(),
        },
    }
}

/// A demo-catalog provider with zero latency, for tests that don't care
/// about the loading delay.
pub fn instant_provider() -> Arc<SimulatedProvider> {
    Arc::new(SimulatedProvider::with_latencies(
        Catalog::demo(),
        Duration::ZERO,
        Duration::ZERO,
    ))
}

/// An engine over [`instant_provider`].
pub fn instant_engine() -> Engine {
    Engine::new(instant_provider())
}
