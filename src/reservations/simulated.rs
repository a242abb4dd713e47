//! The bundled reservation backend: a pure filter over the static catalog,
//! held behind fixed delays so callers exercise the same loading-state
//! contract a network backend would impose.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use crate::core::booking::{
    BookingDetails, ConfirmationDetails, SearchCriteria, generate_booking_id,
};
use crate::core::catalog::{Catalog, Hotel};
use crate::reservations::provider::ReservationProvider;

/// Latency of a simulated search call.
pub const DEFAULT_SEARCH_LATENCY: Duration = Duration::from_secs(1);
/// Latency of a simulated booking-and-payment call.
pub const DEFAULT_BOOKING_LATENCY: Duration = Duration::from_secs(2);

pub struct SimulatedProvider {
    catalog: Catalog,
    search_latency: Duration,
    booking_latency: Duration,
}

impl SimulatedProvider {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_latencies(catalog, DEFAULT_SEARCH_LATENCY, DEFAULT_BOOKING_LATENCY)
    }

    /// Latencies are injectable so tests can run at `Duration::ZERO`.
    pub fn with_latencies(
        catalog: Catalog,
        search_latency: Duration,
        booking_latency: Duration,
    ) -> Self {
        Self { catalog, search_latency, booking_latency }
    }
}

#[async_trait]
impl ReservationProvider for SimulatedProvider {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn search(&self, criteria: &SearchCriteria) -> Vec<Hotel> {
        tokio::time::sleep(self.search_latency).await;
        let hotels = self.catalog.filter_by_city(&criteria.city);
        debug!(
            "Simulated search for {:?}: {} of {} hotel(s)",
            criteria.city,
            hotels.len(),
            self.catalog.len()
        );
        hotels
    }

    async fn confirm_booking(&self, hotel: Hotel, details: BookingDetails) -> ConfirmationDetails {
        tokio::time::sleep(self.booking_latency).await;
        let booking_id = generate_booking_id();
        debug!("Simulated booking confirmed: {} at {}", booking_id, hotel.id);
        ConfirmationDetails { booking_id, hotel, booking_details: details }
    }
}
