use std::fmt::Write;

use hbs::domain::{booking::Booking, Entity};

const WIDTH: usize = 62;

pub fn header() -> String {
    let stars = format!("  {}", "*   ".repeat(15));
    [
        border('╔', '╗'),
        boxed(&stars),
        boxed(""),
        boxed_center("HOLIDAY BOOKING SYSTEM"),
        boxed(""),
        boxed(&stars),
        border('╚', '╝'),
    ]
    .join("\n")
}

pub fn banner(title: &str) -> String {
    [border('╔', '╗'), boxed_center(title), border('╚', '╝')].join("\n")
}

pub fn farewell() -> String {
    [
        border('╔', '╗'),
        boxed(""),
        boxed_center("Thank you for using"),
        boxed_center("Holiday Booking System"),
        boxed(""),
        boxed_center("Have a great day!"),
        boxed(""),
        border('╚', '╝'),
    ]
    .join("\n")
}

pub fn error(message: impl std::fmt::Display) -> String {
    format!("Error: {}", message)
}

/// 顧客・種別・期間を表示する
pub fn details(booking: &Booking, format: &str) -> String {
    format!(
        "Customer: {}\nType: {}\nDates: {} to {}",
        booking.customer_name(),
        booking.booking_type(),
        booking.start_date().format(format),
        booking.end_date().format(format),
    )
}

pub fn created(booking: &Booking, format: &str) -> String {
    format!("Booking ID: {}\n{}", booking.id(), details(booking, format))
}

pub fn table(bookings: &[Booking], format: &str) -> String {
    if bookings.is_empty() {
        return "  No bookings found.".to_owned();
    }
    let mut out = format!(
        "{:<36} {:<15} {:<12} {:<12} {:<12}\n",
        "ID", "Customer", "Type", "Start Date", "End Date"
    );
    for b in bookings {
        let _ = writeln!(
            out,
            "{:<36} {:<15} {:<12} {:<12} {:<12}",
            b.id(),
            b.customer_name(),
            b.booking_type(),
            b.start_date().format(format).to_string(),
            b.end_date().format(format).to_string(),
        );
    }
    out.trim_end().to_owned()
}

fn border(left: char, right: char) -> String {
    format!("{}{}{}", left, "═".repeat(WIDTH), right)
}

fn boxed(text: &str) -> String {
    format!("║{:<width$}║", text, width = WIDTH)
}

fn boxed_center(text: &str) -> String {
    format!("║{:^width$}║", text, width = WIDTH)
}
