//! # Hotel Catalog
//!
//! The static, read-only set of hotel records that mock search runs against.
//! There is no load/parse step; the catalog is built in memory once and
//! never mutated afterwards. The state machine depends only on the record
//! shape and on case-insensitive substring matching over `city`.

use serde::{Deserialize, Serialize};

/// A guest review attached to a hotel record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub date: String,
    pub rating: f32,
    pub text: String,
}

/// Check-in/check-out/cancellation policy strings shown on the details screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policies {
    pub check_in: String,
    pub check_out: String,
    pub cancellation: String,
}

/// An immutable hotel record. Sourced entirely from the catalog; the rest of
/// the system only ever holds clones or references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub price_per_night: f64,
    /// Star rating in 0.0..=5.0.
    pub rating: f32,
    pub reviews_count: u32,
    pub main_image: String,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub description: String,
    pub policies: Policies,
    pub reviews: Vec<Review>,
}

/// Read-only collection of hotels with the one query search needs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    hotels: Vec<Hotel>,
}

impl Catalog {
    pub fn new(hotels: Vec<Hotel>) -> Self {
        Self { hotels }
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }

    /// Returns every hotel whose `city` contains `query` as a
    /// case-insensitive substring. An empty query matches everything.
    pub fn filter_by_city(&self, query: &str) -> Vec<Hotel> {
        let needle = query.to_lowercase();
        self.hotels
            .iter()
            .filter(|hotel| hotel.city.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// The built-in demo catalog used by the CLI walkthrough. Contents are
    /// illustrative; only the shape matters to the engine.
    pub fn demo() -> Self {
        Self::new(vec![
            demo_hotel(
                "h-001",
                "Hotel Lumière",
                "Paris",
                "France",
                245.0,
                4.7,
                1284,
                "A restored Haussmann townhouse a short walk from the Louvre, \
                 with a courtyard garden and a celebrated breakfast room.",
                &["Free WiFi", "Spa", "Bar", "Concierge"],
            ),
            demo_hotel(
                "h-002",
                "The Marais Loft",
                "Paris",
                "France",
                189.0,
                4.4,
                672,
                "Industrial-chic rooms above a bakery in the heart of the \
                 Marais, minutes from the Place des Vosges.",
                &["Free WiFi", "Breakfast", "Bicycle rental"],
            ),
            demo_hotel(
                "h-003",
                "Shinjuku Garden Tower",
                "Tokyo",
                "Japan",
                310.0,
                4.8,
                2041,
                "A high-rise stay overlooking Shinjuku Gyoen, with an onsen \
                 floor and skyline views from every room.",
                &["Free WiFi", "Onsen", "Restaurant", "Gym"],
            ),
            demo_hotel(
                "h-004",
                "Casa del Sol",
                "Barcelona",
                "Spain",
                164.0,
                4.3,
                958,
                "A sun-drenched modernist building off the Passeig de Gràcia \
                 with a rooftop pool and tapas bar.",
                &["Rooftop pool", "Free WiFi", "Bar"],
            ),
            demo_hotel(
                "h-005",
                "Harbourlight Inn",
                "Sydney",
                "Australia",
                221.0,
                4.5,
                1417,
                "Boutique rooms on the Rocks with harbour views and a walk-up \
                 to the Opera House.",
                &["Free WiFi", "Harbour view", "Breakfast"],
            ),
        ])
    }
}

fn demo_hotel(
    id: &str,
    name: &str,
    city: &str,
    country: &str,
    price_per_night: f64,
    rating: f32,
    reviews_count: u32,
    description: &str,
    amenities: &[&str],
) -> Hotel {
    Hotel {
        id: id.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        country: country.to_string(),
        price_per_night,
        rating,
        reviews_count,
        main_image: format!("https://images.globestay.example/{id}/main.jpg"),
        images: (1..=3)
            .map(|n| format!("https://images.globestay.example/{id}/{n}.jpg"))
            .collect(),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        description: description.to_string(),
        policies: Policies {
            check_in: "From 15:00".to_string(),
            check_out: "Until 11:00".to_string(),
            cancellation: "Free cancellation up to 48 hours before check-in".to_string(),
        },
        reviews: vec![Review {
            author: "Verified guest".to_string(),
            date: "2024-05-12".to_string(),
            rating,
            text: "Would stay again.".to_string(),
        }],
    }
}
