use chrono::NaiveDate;
use tracing::{info, warn};

use crate::domain::booking::{
    Booking, BookingError, BookingId, BookingPeriodError, BookingRepository,
};
use crate::domain::{Clock, DataAccessError, Entity, SystemClock};

/// 予約サービス
///
/// 日付の検証とIDの採番を行い、永続化はリポジトリに委ねる。
/// 同一IDへの同時更新に順序付けは行わず、リポジトリに後から届いた書き込みが残る。
pub struct BookingService<R, C = SystemClock> {
    repository: R,
    clock: C,
}

impl<R: BookingRepository> BookingService<R> {
    pub fn new(repository: R) -> Self {
        Self::with_clock(repository, SystemClock)
    }
}

impl<R: BookingRepository, C: Clock> BookingService<R, C> {
    pub fn with_clock(repository: R, clock: C) -> Self {
        Self { repository, clock }
    }

    /// 予約を作成する
    pub fn create_booking(
        &self,
        customer_name: String,
        booking_type: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Booking, BookingError> {
        self.validate_period(start_date, end_date)?;
        let entity = Booking::new(
            BookingId::generate(),
            customer_name,
            booking_type,
            start_date,
            end_date,
        );
        self.repository
            .add(entity.clone())
            .map_err(BookingError::DataAccess)?;
        info!("予約を作成しました: {}", entity.id());
        Ok(entity)
    }

    /// IDで予約を取得する
    pub fn get_booking(&self, id: BookingId) -> Option<Booking> {
        self.repository.find_by_id(id)
    }

    /// 全ての予約を取得する
    pub fn get_all_bookings(&self) -> Vec<Booking> {
        self.repository.find_all()
    }

    /// 予約を丸ごと置き換える
    pub fn update_booking(&self, entity: Booking) -> Result<(), BookingError> {
        self.validate_period(entity.start_date(), entity.end_date())?;
        let id = entity.id();
        match self.repository.update(entity) {
            Ok(()) => {
                info!("予約を更新しました: {}", id);
                Ok(())
            }
            Err(DataAccessError::NotFound { .. }) => {
                warn!("更新対象の予約が存在しません: {}", id);
                Err(BookingError::BookingNotFound { id })
            }
            Err(e) => Err(BookingError::DataAccess(e)),
        }
    }

    /// 予約を削除する
    pub fn delete_booking(&self, id: BookingId) {
        self.repository.delete(id);
        info!("予約を削除しました: {}", id);
    }

    fn validate_period(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<(), BookingPeriodError> {
        Booking::validate_period(start_date, end_date, self.clock.today()).map_err(|e| {
            warn!("予約期間が不正です ({} - {}): {}", start_date, end_date, e);
            e
        })
    }
}
