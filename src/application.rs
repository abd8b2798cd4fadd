mod booking_service;

pub use self::booking_service::*;
