mod booking;

pub use self::booking::*;
