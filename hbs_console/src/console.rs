use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};
use hbs::{
    application::BookingService,
    domain::{
        booking::{Booking, BookingRepository},
        Clock, Entity, SystemClock,
    },
};

use crate::input::{self, BookingDetails, InputError};
use crate::view;

const MENU: [&str; 5] = [
    "1. Create a new booking",
    "2. View all bookings",
    "3. Update an existing booking",
    "4. Delete a booking",
    "5. Exit application",
];

/// 対話式の予約メニュー
pub struct Console<'a, R> {
    service: &'a BookingService<R>,
    date_format: &'a str,
}

impl<'a, R: BookingRepository> Console<'a, R> {
    pub fn new(service: &'a BookingService<R>, date_format: &'a str) -> Self {
        Self {
            service,
            date_format,
        }
    }

    /// 終了が選ばれるまでメニューを繰り返す
    pub fn run(&self) -> Result<(), dialoguer::Error> {
        println!("{}\n", view::header());
        loop {
            let selection = Select::new()
                .with_prompt("MAIN MENU")
                .items(&MENU)
                .default(0)
                .interact()?;

            match selection {
                0 => self.create_booking()?,
                1 => self.view_bookings(),
                2 => self.update_booking()?,
                3 => self.delete_booking()?,
                _ => {
                    println!("{}\n", view::farewell());
                    return Ok(());
                }
            }
            println!();
        }
    }

    fn create_booking(&self) -> Result<(), dialoguer::Error> {
        println!("{}\n", view::banner("CREATE NEW BOOKING"));
        let details = self.read_details()?;
        match self.service.create_booking(
            details.customer_name,
            details.booking_type,
            details.start_date,
            details.end_date,
        ) {
            Ok(created) => {
                println!("\n{}\n", view::banner("BOOKING CREATED SUCCESSFULLY"));
                println!("{}", view::created(&created, self.date_format));
            }
            Err(e) => println!("{}", view::error(format!("Error creating booking: {}", e))),
        }
        Ok(())
    }

    fn view_bookings(&self) {
        println!("{}\n", view::banner("ALL BOOKINGS"));
        println!(
            "{}",
            view::table(&self.service.get_all_bookings(), self.date_format)
        );
    }

    fn update_booking(&self) -> Result<(), dialoguer::Error> {
        println!("{}\n", view::banner("UPDATE BOOKING"));
        let Some(mut booking) = self.read_existing("Enter booking ID to update")? else {
            return Ok(());
        };
        println!("\nCurrent booking details:");
        println!("{}\n", view::details(&booking, self.date_format));

        let details = self.read_details()?;
        booking.change_customer_name(details.customer_name);
        booking.change_booking_type(details.booking_type);
        booking.change_dates(details.start_date, details.end_date);

        match self.service.update_booking(booking) {
            Ok(()) => println!("\n{}", view::banner("BOOKING UPDATED SUCCESSFULLY")),
            Err(e) => println!("{}", view::error(format!("Error updating booking: {}", e))),
        }
        Ok(())
    }

    fn delete_booking(&self) -> Result<(), dialoguer::Error> {
        println!("{}\n", view::banner("DELETE BOOKING"));
        let Some(booking) = self.read_existing("Enter booking ID to delete")? else {
            return Ok(());
        };
        println!("\nBooking to be deleted:");
        println!("{}\n", view::details(&booking, self.date_format));

        let confirmed = Confirm::new()
            .with_prompt("Are you sure you want to delete this booking?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("\nDeletion cancelled.");
            return Ok(());
        }

        self.service.delete_booking(booking.id());
        println!("\n{}", view::banner("BOOKING DELETED SUCCESSFULLY"));
        Ok(())
    }

    /// IDを読み取り、存在する予約のコピーを返す
    fn read_existing(&self, prompt: &str) -> Result<Option<Booking>, dialoguer::Error> {
        let raw: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        let id = match input::booking_id(&raw) {
            Ok(id) => id,
            Err(e) => {
                println!("{}", view::error(e));
                return Ok(None);
            }
        };
        match self.service.get_booking(id) {
            Some(booking) => Ok(Some(booking)),
            None => {
                println!("{}", view::error("Booking not found"));
                Ok(None)
            }
        }
    }

    fn read_details(&self) -> Result<BookingDetails, dialoguer::Error> {
        let today = SystemClock.today();
        let hint = input::format_hint(self.date_format);
        let customer_name =
            self.read_until("Customer Name", |raw| input::required("Customer name", raw))?;
        let booking_type = self.read_until("Booking Type (apartment, vehicle, show, etc.)", |raw| {
            input::required("Booking type", raw)
        })?;
        let start_date: NaiveDate = self.read_until(&format!("Start Date ({})", hint), |raw| {
            input::start_date(raw, self.date_format, today)
        })?;
        let end_date = self.read_until(&format!("End Date ({})", hint), |raw| {
            input::end_date(raw, self.date_format, start_date)
        })?;
        Ok(BookingDetails {
            customer_name,
            booking_type,
            start_date,
            end_date,
        })
    }

    /// 正しい値が入力されるまで聞き直す
    fn read_until<T>(
        &self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, dialoguer::Error> {
        loop {
            let raw: String = Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(e) => println!("{}", view::error(e)),
            }
        }
    }
}
