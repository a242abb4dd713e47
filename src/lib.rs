//! Globestay library exports.
//!
//! A hotel-booking demonstration engine: a headless screen/booking state
//! machine (`core`), a simulated async reservation backend
//! (`reservations`), and a real text-generation call for a local travel
//! guide (`guide`). Presentation layers depend on `core::engine::Engine`
//! and read the `core::state::App` snapshot; everything else is plumbing
//! behind provider traits.

pub mod core;
pub mod guide;
pub mod reservations;

#[cfg(test)]
pub mod test_support;
