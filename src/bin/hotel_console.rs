// Interactive console for the reservation core. Pure I/O glue: every rule
// lives in the library; this loop only parses lines and prints results.
use anyhow::{Context, Result};
use chrono::NaiveDate;
use grand_stay::{
    hotel_from_inventory, load_inventory, Hotel, HotelConfig, RoomType, SAMPLE_INVENTORY_PATH,
};
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let inventory = load_inventory(SAMPLE_INVENTORY_PATH)
        .with_context(|| format!("failed to load {}", SAMPLE_INVENTORY_PATH))?;
    let mut hotel = hotel_from_inventory(&inventory, HotelConfig::default())?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("=== Hotel Booking System ===");
        println!("1. Book a Room");
        println!("2. Cancel a Booking");
        println!("3. View Booking Summary");
        println!("4. View Room Availability");
        println!("5. View Customer Details");
        println!("6. View All Room Features");
        println!("7. Exit");

        let choice = match prompt(&mut lines, "Enter your choice: ")? {
            Some(line) => line,
            None => break,
        };

        match choice.as_str() {
            "1" => {
                if let Err(e) = book_room(&mut hotel, &mut lines) {
                    println!("{}", e);
                }
            }
            "2" => {
                let name = match prompt(&mut lines, "Enter customer name to cancel booking: ")? {
                    Some(line) => line,
                    None => break,
                };
                match hotel.cancel_booking(&name) {
                    Ok(receipt) => println!("{}", receipt),
                    Err(e) => println!("{}", e),
                }
            }
            "3" => {
                let summary = hotel.booking_summary();
                if summary.is_empty() {
                    println!("No active bookings found.");
                } else {
                    for row in summary {
                        println!("{}", row);
                    }
                }
            }
            "4" => {
                let available = hotel.room_availability();
                if available.is_empty() {
                    println!("No rooms available.");
                } else {
                    for room in available {
                        println!(
                            "Room {} ({}): {}",
                            room.number(),
                            room.feature_list(),
                            room.room_type()
                        );
                    }
                }
            }
            "5" => {
                let name = match prompt(&mut lines, "Enter customer name: ")? {
                    Some(line) => line,
                    None => break,
                };
                match hotel.customer_details(&name) {
                    Ok(details) => println!("{}", details),
                    Err(e) => println!("{}", e),
                }
            }
            "6" => {
                for line in hotel.list_all_features() {
                    println!("{}", line);
                }
            }
            "7" => {
                println!("Exiting the system.");
                break;
            }
            _ => println!("Invalid choice, please try again."),
        }
    }

    Ok(())
}

// Runs the whole booking dialogue; any parse or booking failure is reported
// as a single printed message and the menu re-prompts.
fn book_room(
    hotel: &mut Hotel,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    let name = read_line(lines, "Enter customer name: ")?;
    let type_prompt = format!(
        "Enter room type ({}): ",
        RoomType::ALL.map(|t| t.as_str()).join(", ")
    );
    let room_type: RoomType = match read_line(lines, &type_prompt)?.parse() {
        Ok(t) => t,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };
    let check_in = read_date(lines, "Enter check-in date (YYYY-MM-DD): ")?;
    let check_out = read_date(lines, "Enter check-out date (YYYY-MM-DD): ")?;

    match hotel.book_room(&name, room_type, check_in, check_out) {
        Ok(receipt) => println!("{}", receipt),
        Err(e) => println!("{}", e),
    }
    Ok(())
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn read_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<String> {
    prompt(lines, message)?.context("unexpected end of input")
}

fn read_date(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<NaiveDate> {
    let line = read_line(lines, message)?;
    NaiveDate::parse_from_str(&line, "%Y-%m-%d")
        .with_context(|| format!("invalid date: {}", line))
}
