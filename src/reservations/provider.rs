//! The seam between the state machine and whatever fulfils reservations.
//!
//! The engine only ever talks to this trait, so swapping the bundled
//! simulation for a real inventory service is a constructor change. Both
//! operations are infallible: the demo contract is that search always
//! resolves (possibly empty) and confirmation always succeeds; there is no
//! simulated payment failure.

use async_trait::async_trait;

use crate::core::booking::{BookingDetails, ConfirmationDetails, SearchCriteria};
use crate::core::catalog::Hotel;

#[async_trait]
pub trait ReservationProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Resolves to the hotels matching `criteria`. May suspend; never fails.
    async fn search(&self, criteria: &SearchCriteria) -> Vec<Hotel>;

    /// Books `hotel` for the guest described by `details`, yielding the
    /// confirmation record with a freshly generated booking reference.
    async fn confirm_booking(&self, hotel: Hotel, details: BookingDetails) -> ConfirmationDetails;
}
