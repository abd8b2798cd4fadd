mod console;
mod input;
mod view;

use std::error::Error;

use hbs::{
    application::BookingService, infrastructure::InMemoryBookingRepository, HbsConfig,
};
use tracing::{error, info, Level};

use crate::console::Console;

fn main() {
    match HbsConfig::load() {
        Ok(config) => {
            tracing_subscriber::fmt()
                .with_max_level(Level::from(&config.logger.level))
                .with_writer(std::io::stderr)
                .init();
            if let Err(error) = run(&config) {
                error!("アプリケーションエラー: {}", error);
            }
        }
        Err(error) => {
            tracing_subscriber::fmt().with_writer(std::io::stderr).init();
            error!("アプリケーションエラー: {}", error)
        }
    }
}

fn run(config: &HbsConfig) -> Result<(), Box<dyn Error>> {
    let service = BookingService::new(InMemoryBookingRepository::new());
    info!("予約コンソールを起動します");
    Console::new(&service, &config.date.format).run()?;
    Ok(())
}
