use std::fs::File;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use globestay::core::action::Action;
use globestay::core::booking::{BookingDetails, PaymentDetails, SearchCriteria};
use globestay::core::catalog::Catalog;
use globestay::core::config;
use globestay::core::engine::Engine;
use globestay::core::state::Screen;
use globestay::guide::{GeminiProvider, GuideProvider};
use globestay::reservations::SimulatedProvider;

#[derive(Parser)]
#[command(name = "globestay", about = "Hotel-booking demo walkthrough")]
struct Args {
    /// City to search in
    #[arg(short, long, default_value = "Paris")]
    city: String,

    /// Check-in date (YYYY-MM-DD)
    #[arg(long, default_value = "2026-09-01")]
    check_in: NaiveDate,

    /// Check-out date (YYYY-MM-DD)
    #[arg(long, default_value = "2026-09-04")]
    check_out: NaiveDate,

    /// Number of guests
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    guests: u32,

    /// Also fetch the AI local guide for the booked hotel
    #[arg(long)]
    guide: bool,
}

/// The scripted guest used for the demo booking.
fn demo_booking_details() -> BookingDetails {
    BookingDetails {
        first_name: "Alex".to_string(),
        last_name: "Morgan".to_string(),
        email: "alex.morgan@example.com".to_string(),
        phone: "+1 555 0100".to_string(),
        special_requests: "Late arrival, around 22:00.".to_string(),
        payment: PaymentDetails {
            card_number: "4242 4242 4242 4242".to_string(),
            expiry_date: "12/28".to_string(),
            cvv: "123".to_string(),
            card_holder: "Alex Morgan".to_string(),
        },
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to globestay.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("globestay.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Globestay starting up");

    let resolved = match config::load_config() {
        Ok(file_config) => config::resolve(&file_config),
        Err(e) => {
            eprintln!("Ignoring malformed config: {e}");
            config::resolve(&Default::default())
        }
    };

    let provider = Arc::new(SimulatedProvider::with_latencies(
        Catalog::demo(),
        resolved.search_latency,
        resolved.booking_latency,
    ));
    let mut engine = Engine::new(provider);

    // Search
    let criteria = SearchCriteria {
        city: args.city.clone(),
        check_in_date: args.check_in,
        check_out_date: args.check_out,
        guests: args.guests,
    };
    println!(
        "Searching {} for {} guest(s), {} → {} ...",
        criteria.city, criteria.guests, criteria.check_in_date, criteria.check_out_date
    );
    engine.apply(Action::SubmitSearch(criteria));
    engine.settle().await;

    let results = &engine.app().hotel_results;
    println!("{} hotel(s) found:", results.len());
    for hotel in results {
        println!(
            "  {} — {}, {} · {:.1}★ ({} reviews) · ${:.2}/night",
            hotel.name, hotel.city, hotel.country, hotel.rating, hotel.reviews_count,
            hotel.price_per_night
        );
    }
    let Some(hotel) = results.first().cloned() else {
        println!("Nothing to book, try another city.");
        return;
    };

    // Details → Booking
    engine.apply(Action::SelectHotel(hotel.clone()));
    println!("\nViewing {}: {}", hotel.name, hotel.description);
    engine.apply(Action::BookNow(hotel.clone()));
    if let Some(quote) = engine.app().quote() {
        println!(
            "Booking {} night(s) x ${:.2} = ${:.2}",
            quote.nights, hotel.price_per_night, quote.total_cost
        );
    }

    // Confirm
    engine.apply(Action::SubmitBooking(demo_booking_details()));
    if !engine.app().form_errors.is_empty() {
        println!("Booking rejected:");
        for (field, message) in engine.app().form_errors.iter() {
            println!("  {field}: {message}");
        }
        return;
    }
    println!("Processing payment ...");
    engine.settle().await;

    if engine.app().screen() == Screen::Confirmation {
        let confirmation = engine.app().confirmation.as_ref().expect("confirmed screen");
        println!(
            "Booking confirmed! Reference {} for {} at {}.",
            confirmation.booking_id,
            confirmation.booking_details.first_name,
            confirmation.hotel.name
        );
    }

    if args.guide {
        println!("\nGenerating local guide for {} ...\n", hotel.city);
        let guide = GeminiProvider::from_config(&resolved);
        let text = guide.generate_local_guide(&hotel.name, &hotel.city).await;
        println!("{text}");
    }
}
