//! # Booking Data
//!
//! The data threaded through the booking journey: search criteria, the
//! guest/payment form, the stay quote, and the confirmation record produced
//! when a booking is accepted.
//!
//! Form input arrives as untrusted strings and is validated here before any
//! async effect runs. Validation surfaces an ordered field→message map, never
//! an error type; a failed submission simply does not proceed.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::catalog::Hotel;

/// Prefix of every generated booking reference.
pub const BOOKING_ID_PREFIX: &str = "GS";

/// What the guest asked for. Immutable once submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub city: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guests: u32,
}

/// Card fields of the booking form. Simulation only; nothing is charged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub card_holder: String,
}

/// The guest-facing booking form. Created empty when the booking screen
/// mounts; only a validated copy ever reaches the reservation provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: String,
    pub payment: PaymentDetails,
}

/// Record of an accepted booking. Created exactly once per confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationDetails {
    pub booking_id: String,
    pub hotel: Hotel,
    pub booking_details: BookingDetails,
}

/// Generates a fresh booking reference: `GS` plus a 6-digit suffix.
///
/// Unique with high probability but not guaranteed: there is no registry to
/// check against and no persistence, so collisions are accepted as-is.
pub fn generate_booking_id() -> String {
    let suffix: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
    format!("{BOOKING_ID_PREFIX}{suffix}")
}

// ============================================================================
// Stay quote
// ============================================================================

/// Nights and total cost for a stay, derived from criteria + hotel.
///
/// `nights` is the signed day difference, zero or negative when check-out is
/// not after check-in. No floor is applied; submission rejects a non-positive
/// stay before anything is charged (see [`validate_submission`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BookingQuote {
    pub nights: i64,
    pub total_cost: f64,
}

impl BookingQuote {
    pub fn new(criteria: &SearchCriteria, hotel: &Hotel) -> Self {
        let nights = (criteria.check_out_date - criteria.check_in_date).num_days();
        Self {
            nights,
            total_cost: hotel.price_per_night * nights as f64,
        }
    }
}

// ============================================================================
// Form validation
// ============================================================================

/// The booking-form fields an error can attach to, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    CardHolder,
    CardNumber,
    ExpiryDate,
    Cvv,
    CheckOutDate,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::CardHolder => "cardHolder",
            FormField::CardNumber => "cardNumber",
            FormField::ExpiryDate => "expiryDate",
            FormField::Cvv => "cvv",
            FormField::CheckOutDate => "checkOutDate",
        };
        write!(f, "{name}")
    }
}

/// Field→message map surfaced to the booking screen on a rejected submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationErrors {
    errors: BTreeMap<FormField, &'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn message(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.errors.iter().map(|(field, msg)| (*field, *msg))
    }

    fn insert(&mut self, field: FormField, message: &'static str) {
        self.errors.insert(field, message);
    }
}

/// Validates a booking submission. Runs entirely before any async effect.
///
/// The form rules mirror the booking screen exactly: names and card holder
/// must be non-empty, the email must have a `local@domain.tld` shape, the
/// card number must be 16 digits once whitespace is stripped, the expiry
/// must be `MM/YY` (format only, no calendar check), and the CVV must be
/// 3–4 digits. On top of the form rules, a stay of zero or negative nights
/// is rejected so it can never reach confirmation.
pub fn validate_submission(details: &BookingDetails, quote: &BookingQuote) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if details.first_name.is_empty() {
        errors.insert(FormField::FirstName, "First name is required.");
    }
    if details.last_name.is_empty() {
        errors.insert(FormField::LastName, "Last name is required.");
    }
    if !is_valid_email(&details.email) {
        errors.insert(FormField::Email, "A valid email is required.");
    }
    if details.payment.card_holder.is_empty() {
        errors.insert(FormField::CardHolder, "Card holder name is required.");
    }
    if !is_valid_card_number(&details.payment.card_number) {
        errors.insert(FormField::CardNumber, "A valid 16-digit card number is required.");
    }
    if !is_valid_expiry(&details.payment.expiry_date) {
        errors.insert(FormField::ExpiryDate, "Expiry date must be in MM/YY format.");
    }
    if !is_valid_cvv(&details.payment.cvv) {
        errors.insert(FormField::Cvv, "A valid CVV is required.");
    }
    if quote.nights <= 0 {
        errors.insert(FormField::CheckOutDate, "Check-out must be after check-in.");
    }

    errors
}

/// Simple `local@domain.tld` shape: no whitespace, something before the `@`,
/// and a `.` in the domain with characters on both sides.
fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some(at) = email.find('@') else {
        return false;
    };
    if at == 0 {
        return false;
    }
    let domain = &email[at + 1..];
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot < domain.len() - 1,
        None => false,
    }
}

/// Exactly 16 ASCII digits after stripping whitespace.
fn is_valid_card_number(card_number: &str) -> bool {
    let digits: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();
    digits.len() == 16 && digits.chars().all(|c| c.is_ascii_digit())
}

/// `MM/YY`: two digits, a slash, two digits. No calendar validity check.
fn is_valid_expiry(expiry: &str) -> bool {
    let bytes = expiry.as_bytes();
    bytes.len() == 5
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b'/'
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit()
}

/// 3–4 ASCII digits.
fn is_valid_cvv(cvv: &str) -> bool {
    (3..=4).contains(&cvv.len()) && cvv.chars().all(|c| c.is_ascii_digit())
}
