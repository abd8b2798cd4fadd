use chrono::NaiveDate;
use derive_more::Display;
use hbs::domain::booking::{BookingId, BookingPeriodError};

/// 入力エラー
#[derive(Debug, Display, PartialEq, Eq)]
pub enum InputError {
    #[display(fmt = "{} is required", field)]
    Required { field: &'static str },
    #[display(fmt = "Invalid date format. Please use {} format.", hint)]
    InvalidDate { hint: String },
    #[display(fmt = "Invalid ID format")]
    InvalidId,
    #[display(fmt = "{}", _0)]
    Period(BookingPeriodError),
}

/// 画面から読み取った予約内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDetails {
    pub customer_name: String,
    pub booking_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// 前後の空白を除き、空なら拒否する
pub fn required(field: &'static str, raw: &str) -> Result<String, InputError> {
    match raw.trim() {
        "" => Err(InputError::Required { field }),
        text => Ok(text.to_owned()),
    }
}

pub fn booking_id(raw: &str) -> Result<BookingId, InputError> {
    raw.parse().map_err(|_| InputError::InvalidId)
}

pub fn date(raw: &str, format: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(raw.trim(), format).map_err(|_| InputError::InvalidDate {
        hint: format_hint(format),
    })
}

pub fn start_date(raw: &str, format: &str, today: NaiveDate) -> Result<NaiveDate, InputError> {
    let start = date(raw, format)?;
    if start < today {
        return Err(InputError::Period(BookingPeriodError::StartInPast));
    }
    Ok(start)
}

pub fn end_date(raw: &str, format: &str, start: NaiveDate) -> Result<NaiveDate, InputError> {
    let end = date(raw, format)?;
    if end <= start {
        return Err(InputError::Period(BookingPeriodError::EndNotAfterStart));
    }
    Ok(end)
}

/// strftime 書式を `yyyy-mm-dd` のような表記にする
pub fn format_hint(format: &str) -> String {
    format
        .replace("%Y", "yyyy")
        .replace("%m", "mm")
        .replace("%d", "dd")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMAT: &str = "%Y-%m-%d";

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_required() {
        assert_eq!(
            required("Customer name", "  Ridwaan Maharaj \n"),
            Ok("Ridwaan Maharaj".to_owned())
        );
        assert_eq!(
            required("Booking type", "   "),
            Err(InputError::Required {
                field: "Booking type"
            })
        );
        assert_eq!(
            InputError::Required {
                field: "Customer name"
            }
            .to_string(),
            "Customer name is required"
        );
    }

    #[test]
    fn test_booking_id() {
        let id = BookingId::generate();
        assert_eq!(booking_id(&id.to_string()), Ok(id));
        assert_eq!(booking_id("12345"), Err(InputError::InvalidId));
    }

    #[test]
    fn test_date() {
        assert_eq!(date(" 2024-03-11 ", FORMAT), Ok(ymd(2024, 3, 11)));
        assert_eq!(date("11/03/2024", "%d/%m/%Y"), Ok(ymd(2024, 3, 11)));

        let err = date("2024-13-01", FORMAT).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date format. Please use yyyy-mm-dd format."
        );
    }

    #[test]
    fn test_start_date() {
        let today = ymd(2024, 3, 10);
        assert_eq!(start_date("2024-03-10", FORMAT, today), Ok(today));
        assert_eq!(
            start_date("2024-03-09", FORMAT, today),
            Err(InputError::Period(BookingPeriodError::StartInPast))
        );
    }

    #[test]
    fn test_end_date() {
        let start = ymd(2024, 3, 10);
        assert_eq!(end_date("2024-03-17", FORMAT, start), Ok(ymd(2024, 3, 17)));
        assert_eq!(
            end_date("2024-03-10", FORMAT, start),
            Err(InputError::Period(BookingPeriodError::EndNotAfterStart))
        );
    }
}
