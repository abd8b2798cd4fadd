use std::{str::FromStr, sync::Arc};

use chrono::NaiveDate;
use derive_more::{Deref, Display, Error, From};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{DataAccessError, Entity, Id};

/// 予約リポジトリ
///
/// 全ての操作は個別にアトミックで、外部でロックせずに複数スレッドから呼び出せる。
pub trait BookingRepository: Send + Sync {
    /// IDで予約を検索する
    fn find_by_id(&self, id: BookingId) -> Option<Booking>;
    /// 全ての予約を取得する (順序は不定)
    fn find_all(&self) -> Vec<Booking>;
    /// 予約を追加する
    fn add(&self, entity: Booking) -> Result<(), DataAccessError>;
    /// 予約を丸ごと置き換える
    fn update(&self, entity: Booking) -> Result<(), DataAccessError>;
    /// 予約を削除する (存在しなければ何もしない)
    fn delete(&self, id: BookingId);
}

impl<R: BookingRepository + ?Sized> BookingRepository for Arc<R> {
    fn find_by_id(&self, id: BookingId) -> Option<Booking> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> Vec<Booking> {
        (**self).find_all()
    }

    fn add(&self, entity: Booking) -> Result<(), DataAccessError> {
        (**self).add(entity)
    }

    fn update(&self, entity: Booking) -> Result<(), DataAccessError> {
        (**self).update(entity)
    }

    fn delete(&self, id: BookingId) {
        (**self).delete(id)
    }
}

/// 予約ID
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Deref, Default,
)]
pub struct BookingId(Uuid);

impl BookingId {
    /// ランダムな新しいIDを生成する
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Id for BookingId {
    type Inner = Uuid;
}

impl FromStr for BookingId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::from_str(s.trim()).map(BookingId::from)
    }
}

/// 予約エンティティ
///
/// 日付の検証は `BookingService` が行うため、ここでは値をそのまま保持する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    id: BookingId,
    customer_name: String,
    booking_type: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl Booking {
    pub fn new(
        id: BookingId,
        customer_name: String,
        booking_type: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            customer_name,
            booking_type,
            start_date,
            end_date,
        }
    }

    pub fn change_customer_name(&mut self, customer_name: String) {
        self.customer_name = customer_name;
    }

    pub fn change_booking_type(&mut self, booking_type: String) {
        self.booking_type = booking_type;
    }

    pub fn change_dates(&mut self, start_date: NaiveDate, end_date: NaiveDate) {
        self.start_date = start_date;
        self.end_date = end_date;
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn booking_type(&self) -> &str {
        &self.booking_type
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// 予約期間を検証する
    ///
    /// 終了日は開始日より後、開始日は `today` 以降でなければならない。
    pub fn validate_period(
        start_date: NaiveDate,
        end_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<(), BookingPeriodError> {
        if start_date >= end_date {
            return Err(BookingPeriodError::EndNotAfterStart);
        }
        if start_date < today {
            return Err(BookingPeriodError::StartInPast);
        }
        Ok(())
    }
}

impl Entity for Booking {
    type Id = BookingId;

    const ENTITY_NAME: &'static str = "booking";

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// 予約期間エラー
#[derive(Error, Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingPeriodError {
    /// 終了日が開始日以前です
    #[display(fmt = "End date must be after start date")]
    EndNotAfterStart,
    /// 過去の日付は予約できません
    #[display(fmt = "Cannot book in the past")]
    StartInPast,
}

/// 予約エラー
#[derive(Error, Display, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// 引数が不正です
    #[display(fmt = "{}", _0)]
    InvalidArgument(#[error(source)] BookingPeriodError),
    /// 予約が見つかりません
    #[display(fmt = "Booking not found: {}", id)]
    BookingNotFound { id: BookingId },
    /// リポジトリのエラー
    #[display(fmt = "{}", _0)]
    DataAccess(#[error(source)] DataAccessError),
}

impl From<BookingPeriodError> for BookingError {
    fn from(value: BookingPeriodError) -> Self {
        Self::InvalidArgument(value)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn booking() -> Booking {
        Booking::new(
            BookingId::generate(),
            "Ridwaan Maharaj".to_owned(),
            "Flat".to_owned(),
            today() + Duration::days(1),
            today() + Duration::days(7),
        )
    }

    #[test]
    fn test_validate_period() {
        let t = today();
        let cases = [
            (t + Duration::days(1), t + Duration::days(7), Ok(())),
            (t, t + Duration::days(1), Ok(())),
            (
                t + Duration::days(7),
                t + Duration::days(1),
                Err(BookingPeriodError::EndNotAfterStart),
            ),
            (
                t + Duration::days(3),
                t + Duration::days(3),
                Err(BookingPeriodError::EndNotAfterStart),
            ),
            (
                t - Duration::days(1),
                t + Duration::days(5),
                Err(BookingPeriodError::StartInPast),
            ),
        ];
        for (start, end, expected) in cases {
            assert_eq!(Booking::validate_period(start, end, t), expected);
        }
    }

    #[test]
    fn test_period_error_display() {
        assert_eq!(
            BookingError::from(BookingPeriodError::EndNotAfterStart).to_string(),
            "End date must be after start date"
        );
        assert_eq!(
            BookingError::from(BookingPeriodError::StartInPast).to_string(),
            "Cannot book in the past"
        );
    }

    #[test]
    fn test_booking_id_round_trip() {
        let id = BookingId::generate();
        assert_eq!(id.to_string().parse::<BookingId>().unwrap(), id);
        assert_eq!(
            format!(" {} ", id).parse::<BookingId>().unwrap(),
            id,
            "surrounding whitespace is ignored"
        );
        assert!("not-an-id".parse::<BookingId>().is_err());
    }

    #[test]
    fn test_booking_id_serialize() {
        let id: BookingId = "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap();
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"67e55044-10b1-426f-9247-bb680e5fe0c8\""
        );
    }

    #[test]
    fn test_booking_serialize() {
        let entity = booking();
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json["customer_name"], "Ridwaan Maharaj");
        assert_eq!(json["start_date"], "2024-03-11");
        assert_eq!(
            serde_json::from_value::<Booking>(json).unwrap(),
            entity
        );
    }

    #[test]
    fn test_booking_change() {
        let before = booking();
        let mut entity = before.clone();
        entity.change_customer_name("Angelique Maharaj".to_owned());
        entity.change_booking_type("Vehicle".to_owned());
        entity.change_dates(today() + Duration::days(2), today() + Duration::days(5));

        assert_eq!(entity.id(), before.id());
        assert_eq!(entity.customer_name(), "Angelique Maharaj");
        assert_eq!(entity.booking_type(), "Vehicle");
        assert_eq!(entity.start_date(), today() + Duration::days(2));
        assert_eq!(entity.end_date(), today() + Duration::days(5));
        assert_eq!(before.customer_name(), "Ridwaan Maharaj");
    }
}
